mod common;

use common::setup;
use gdbind_classes::*;
use gdbind_runtime::{upcast, EngineClass, Vector2, Vector2i, Vector3};

#[test]
fn chorus_properties_read_back() {
    setup();
    let chorus = AudioEffectChorus::new();
    assert_eq!(chorus.voice_count(), 2);
    chorus.set_voice_count(3);
    chorus.set_dry(0.75);
    chorus.set_wet(0.25);
    chorus.set_voice_delay_ms(0, 12.0);
    assert_eq!(chorus.voice_count(), 3);
    assert_eq!(chorus.dry(), 0.75);
    assert_eq!(chorus.wet(), 0.25);
    assert!((chorus.get_voice_delay_ms(0) - 12.0).abs() < f64::from(f32::EPSILON));
    // Untouched voices keep the engine's defaults.
    assert_eq!(chorus.get_voice_delay_ms(1), 20.0);
}

#[test]
fn torus_defaults_and_casts() {
    setup();
    let torus = CSGTorus3D::new();
    assert_eq!(torus.inner_radius(), 0.5);
    assert_eq!(torus.outer_radius(), 1.0);
    assert_eq!(torus.sides(), 8);

    let primitive: CSGPrimitive3D = upcast(torus);
    let spatial: &Node3D = primitive.as_node_3d();
    let node: &Node = spatial.as_node();
    assert_eq!(node.handle(), torus.handle());
    assert_eq!(node.get_class(), "CSGTorus3D");

    primitive.set_flip_faces(true);
    assert!(torus.flip_faces());
    assert!(torus.free());
}

#[test]
fn navigation_mesh_polygons() {
    setup();
    let mesh = NavigationMesh::new();
    let verts = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    mesh.set_vertices(&verts);
    assert_eq!(mesh.vertices(), verts.to_vec());
    mesh.add_polygon(&[0, 1, 2]);
    mesh.add_polygon(&[0, 2, 3]);
    assert_eq!(mesh.get_polygon_count(), 2);
    assert_eq!(mesh.get_polygon(1), vec![0, 2, 3]);
    mesh.clear_polygons();
    assert_eq!(mesh.get_polygon_count(), 0);
    assert!(mesh.get_polygon(0).is_empty());
}

#[test]
fn geometry_singleton_queries() {
    setup();
    let geometry = Geometry2D::singleton();
    let square = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];
    assert!(!geometry.is_polygon_clockwise(&square));
    assert!(geometry.is_point_in_circle(Vector2::new(1.0, 0.0), Vector2::new(0.0, 0.0), 2.0));
    let triangles = geometry.triangulate_polygon(&square);
    assert_eq!(triangles.len(), 6);
    assert!(triangles.iter().all(|i| (0..4).contains(i)));
    assert!(GEOMETRY_2D.is_cached());
    assert_eq!(Geometry2D::singleton(), geometry);
}

#[test]
fn tile_map_used_cells() {
    setup();
    let map = TileMap::new();
    let at = Vector2i::new(3, 4);
    map.set_cell(0, at, 1, Vector2i::new(0, 0), 0);
    assert_eq!(map.get_cell_source_id(0, at, false), 1);
    assert_eq!(map.get_used_cells(0), vec![at]);
    map.erase_cell(0, at);
    assert!(map.get_used_cells(0).is_empty());
    assert_eq!(map.get_cell_source_id(0, at, false), -1);
    assert!(map.free());
}
