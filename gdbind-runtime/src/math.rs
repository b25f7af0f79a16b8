// Engine math types. Vectors are glam types with the engine's names; the
// engine's pointer-call layout for them is plain `f32`/`i32` components.

pub use glam::{IVec2 as Vector2i, Vec2 as Vector2, Vec3 as Vector3};

/// RGBA colour with `f32` components, laid out as the engine's `Color`.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    /// Linear interpolation of all four channels.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (to.r - self.r) * t,
            self.g + (to.g - self.g) * t,
            self.b + (to.b - self.b) * t,
            self.a + (to.a - self.a) * t,
        )
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::from_array(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_four_floats() {
        assert_eq!(size_of::<Color>(), 16);
        assert_eq!(size_of::<Vector2>(), 8);
        assert_eq!(size_of::<Vector2i>(), 8);
        assert_eq!(size_of::<Vector3>(), 12);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgba(0.5, 0.5, 0.5, 1.0));
    }
}
