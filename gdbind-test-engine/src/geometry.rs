// Planar helpers behind the Geometry2D singleton.

type P = [f32; 2];

/// Shoelace sign test: true when the winding is clockwise in a y-down plane.
pub fn is_polygon_clockwise(poly: &[P]) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let sum: f32 = (0..poly.len())
        .map(|i| {
            let a = poly[i];
            let b = poly[(i + 1) % poly.len()];
            (b[0] - a[0]) * (b[1] + a[1])
        })
        .sum();
    sum > 0.0
}

pub fn is_point_in_circle(p: P, center: P, radius: f32) -> bool {
    let dx = p[0] - center[0];
    let dy = p[1] - center[1];
    dx * dx + dy * dy <= radius * radius
}

/// Even-odd ray cast.
pub fn is_point_in_polygon(p: P, poly: &[P]) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (a, b) = (poly[i], poly[j]);
        let crosses = (a[1] > p[1]) != (b[1] > p[1]);
        if crosses && p[0] < (b[0] - a[0]) * (p[1] - a[1]) / (b[1] - a[1]) + a[0] {
            inside = !inside;
        }
        j = i;
    }
    inside
}

pub fn closest_point_to_segment(p: P, a: P, b: P) -> P {
    let ab = [b[0] - a[0], b[1] - a[1]];
    let len2 = ab[0] * ab[0] + ab[1] * ab[1];
    if len2 == 0.0 {
        return a;
    }
    let t = (((p[0] - a[0]) * ab[0] + (p[1] - a[1]) * ab[1]) / len2).clamp(0.0, 1.0);
    [a[0] + ab[0] * t, a[1] + ab[1] * t]
}

fn cross(o: P, a: P, b: P) -> f32 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

fn in_triangle(p: P, a: P, b: P, c: P) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(neg && pos)
}

/// Ear clipping. Returns vertex indices, three per triangle, or an empty
/// list when the polygon cannot be triangulated.
pub fn triangulate(poly: &[P]) -> Vec<i32> {
    let n = poly.len();
    if n < 3 {
        return Vec::new();
    }
    let mut idx: Vec<usize> = (0..n).collect();
    // Work counter-clockwise in the math sense.
    let area: f32 = (0..n).map(|i| cross([0.0, 0.0], poly[i], poly[(i + 1) % n])).sum();
    if area < 0.0 {
        idx.reverse();
    }
    let mut out = Vec::with_capacity((n - 2) * 3);
    let mut guard = 0;
    while idx.len() > 3 {
        if guard > n * n {
            return Vec::new();
        }
        guard += 1;
        let m = idx.len();
        let ear = (0..m).find(|&i| {
            let (a, b, c) = (idx[(i + m - 1) % m], idx[i], idx[(i + 1) % m]);
            if cross(poly[a], poly[b], poly[c]) <= 0.0 {
                return false;
            }
            let corner = |k: usize| k == a || k == b || k == c;
            idx.iter().all(|&k| corner(k) || !in_triangle(poly[k], poly[a], poly[b], poly[c]))
        });
        let Some(i) = ear else {
            return Vec::new();
        };
        let m = idx.len();
        out.extend([idx[(i + m - 1) % m], idx[i], idx[(i + 1) % m]].map(|v| v as i32));
        idx.remove(i);
    }
    out.extend(idx.iter().map(|&v| v as i32));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [P; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    #[test]
    fn winding() {
        assert!(!is_polygon_clockwise(&SQUARE));
        let mut rev = SQUARE;
        rev.reverse();
        assert!(is_polygon_clockwise(&rev));
    }

    #[test]
    fn square_splits_in_two() {
        let tris = triangulate(&SQUARE);
        assert_eq!(tris.len(), 6);
        assert!(tris.iter().all(|&i| (0..4).contains(&i)));
    }

    #[test]
    fn point_tests() {
        assert!(is_point_in_polygon([0.5, 0.5], &SQUARE));
        assert!(!is_point_in_polygon([1.5, 0.5], &SQUARE));
        assert!(is_point_in_circle([1.0, 0.0], [0.0, 0.0], 1.0));
        assert_eq!(closest_point_to_segment([0.5, 2.0], [0.0, 0.0], [1.0, 0.0]), [0.5, 0.0]);
    }
}
