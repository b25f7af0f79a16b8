mod common;

use common::*;
use gdbind_runtime::*;

#[test]
fn construct_takes_one_reference() {
    setup();
    let mesh = NavigationMesh::new();
    assert!(!mesh.is_nil());
    assert_eq!(gdbind_test_engine::reference_count(mesh.handle()), Some(1));
    assert_eq!(mesh.get_reference_count(), 1);
    assert_eq!(pointer_registry::live_carriers(mesh.handle()), 1);
}

#[test]
fn clone_and_drop_balance_engine_count() {
    setup();
    let mesh = NavigationMesh::new();
    let handle = mesh.handle();
    let copies: Vec<NavigationMesh> = (0..4).map(|_| mesh.clone()).collect();
    assert_eq!(gdbind_test_engine::reference_count(handle), Some(5));
    assert_eq!(pointer_registry::live_carriers(handle), 5);
    drop(copies);
    assert_eq!(gdbind_test_engine::reference_count(handle), Some(1));
    drop(mesh);
    assert!(!gdbind_test_engine::is_alive(handle));
    assert_eq!(pointer_registry::live_carriers(handle), 0);
}

#[test]
fn transferred_return_is_not_double_counted() {
    setup();
    let res = Resource::new();
    res.set_name(&GString::from("original"));
    let dup = res.duplicate(false).expect("duplicate returns a resource");
    assert_ne!(dup.handle(), res.handle());
    assert_eq!(gdbind_test_engine::reference_count(dup.handle()), Some(1));
    assert_eq!(dup.get_name(), "original");
    let h = dup.handle();
    drop(dup);
    assert!(!gdbind_test_engine::is_alive(h));
}

#[test]
fn same_object_same_proxy() {
    setup();
    let mesh = NavigationMesh::new();
    let again = mesh.clone();
    let view: &Object = upcast_ref(&mesh);
    assert_eq!(view.handle(), again.handle());
    let proxy = pointer_registry::find(mesh.handle());
    assert!(proxy.is_some());
    assert_eq!(proxy, pointer_registry::find(again.handle()));
    assert_eq!(pointer_registry::live_carriers(mesh.handle()), 2);
}

#[test]
fn engine_free_makes_carriers_stale() {
    setup();
    let mesh = NavigationMesh::new();
    let proxy = pointer_registry::find(mesh.handle()).expect("tracked");
    let handle = mesh.handle();
    gdbind_test_engine::free_object(handle);
    assert_eq!(pointer_registry::get(proxy), None);
    // Cloning a stale handle yields nil; dropping it leaves the engine alone.
    let stale = mesh.clone();
    assert!(stale.is_nil());
    drop(mesh);
    assert!(!gdbind_test_engine::is_alive(handle));
}

#[test]
fn upcast_moves_the_reference() {
    setup();
    let mesh = NavigationMesh::new();
    let handle = mesh.handle();
    let res: Resource = upcast(mesh);
    assert_eq!(res.handle(), handle);
    assert_eq!(gdbind_test_engine::reference_count(handle), Some(1));
    assert_eq!(res.get_class(), "NavigationMesh");
}

#[test]
fn abstract_class_constructs_nil() {
    setup();
    // Geometry2D is a singleton and not instantiable.
    let g = construct::<Geometry2D>();
    assert!(g.is_nil());
}

#[test]
fn borrowed_children_carry_no_reference() {
    setup();
    let root = Node::new();
    let child = Node3D::new();
    root.add_child(&child);
    assert_eq!(root.get_child_count(), 1);
    let fetched = root.get_child(0).expect("child present");
    assert_eq!(fetched.handle(), child.handle());
    let expected = format!("/{}/{}", root.get_name(), child.get_name());
    assert_eq!(fetched.get_path(), expected.as_str());
    assert!(root.get_child(5).is_none());
    gdbind_test_engine::free_object(root.handle());
    assert!(!gdbind_test_engine::is_alive(child.handle()));
    assert!(!object::is_live_instance(child.handle()));
}

#[test]
fn singleton_is_cached() {
    setup();
    let a = Geometry2D::singleton();
    let b = Geometry2D::singleton();
    assert!(!a.is_nil());
    assert_eq!(a, b);
    assert!(GEOMETRY_2D.is_cached());
    let tris = a.triangulate_polygon(&PackedVector2Array::from_slice(&[
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ]));
    assert_eq!(tris.len(), 6);
    let (point, end) = (Vector2::new(0.5, 2.0), Vector2::new(1.0, 0.0));
    let p = a.get_closest_point_to_segment(point, Vector2::ZERO, end);
    assert_eq!(p, Vector2::new(0.5, 0.0));
}
