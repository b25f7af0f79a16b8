mod common;

use common::*;
use gdbind_runtime::*;

#[test]
fn strings_survive_the_boundary() {
    setup();
    let res = Resource::new();
    for text in ["", "ascii", "ünïcödé ✓", &"long ".repeat(200)] {
        res.set_name(&GString::from(text));
        assert_eq!(res.get_name().to_string(), text);
    }
}

#[test]
fn string_name_and_node_path() {
    setup();
    let node = Node::new();
    node.set_name(&StringName::from("Player"));
    assert_eq!(node.get_name(), "Player");
    assert_eq!(node.get_path(), "/Player");
    assert!(node.get_path().is_absolute());
    assert!(node.has_signal(&StringName::from("ready")));
    assert!(!node.has_signal(&StringName::from("changed")));
    gdbind_test_engine::free_object(node.handle());
}

#[test]
fn packed_arrays_pass_in_and_out() {
    setup();
    let mesh = NavigationMesh::new();
    mesh.add_polygon(&PackedInt32Array::from_slice(&[0, 1, 2]));
    mesh.add_polygon(&PackedInt32Array::from_slice(&[2, 3, 0]));
    assert_eq!(mesh.get_polygon_count(), 2);
    assert_eq!(mesh.get_polygon(1).to_vec(), vec![2, 3, 0]);
    // Out of range is the engine's empty default.
    assert!(mesh.get_polygon(9).is_empty());

    let verts =
        PackedVector3Array::from_slice(&[Vector3::ZERO, Vector3::X, Vector3::new(1.0, 0.0, 1.0)]);
    mesh.set_vertices(&verts);
    assert_eq!(mesh.get_vertices(), verts);
}

#[test]
fn packed_arrays_copy_on_write() {
    setup();
    let a = PackedInt32Array::from_slice(&[1, 2, 3]);
    let mut b = a.clone();
    assert_eq!(a, b);
    b.set(0, &10);
    b.push(&4);
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
    assert_eq!(b.to_vec(), vec![10, 2, 3, 4]);
    assert_eq!(b.as_slice(), &[10, 2, 3, 4]);
}

#[test]
fn packed_strings_own_their_elements() {
    setup();
    let mut names: PackedStringArray = ["a", "b"].into_iter().map(GString::from).collect();
    names.set(1, &GString::from("bee"));
    let copy = names.clone();
    drop(names);
    assert_eq!(copy.get(1).map(|s| s.to_string()), Some("bee".to_owned()));
}

#[test]
fn vectors_and_color_by_value() {
    setup();
    let node = Node3D::new();
    node.set_position(Vector3::new(1.5, -2.0, 3.25));
    assert_eq!(node.get_position(), Vector3::new(1.5, -2.0, 3.25));
    gdbind_test_engine::free_object(node.handle());

    let c = Color::from([0.25, 0.5, 0.75, 1.0]);
    let v = Variant::from(c);
    assert_eq!(v.get_type(), VariantType::COLOR);
    assert_eq!(v.try_to::<Color>(), Some(c));
}

#[test]
fn variants_tag_their_payload() {
    setup();
    assert!(Variant::nil().is_nil());
    assert_eq!(Variant::from(7i64).to::<i64>(), 7);
    // Int widens to float; the reverse is a mismatch.
    assert_eq!(Variant::from(7i64).try_to::<f64>(), Some(7.0));
    assert_eq!(Variant::from(0.5f64).try_to::<i64>(), None);
    assert_eq!(
        Variant::from("hi").try_to::<GString>().map(|s| s.to_string()),
        Some("hi".to_owned())
    );
    assert_eq!(
        Variant::from(Vector2i::new(-3, 4)).try_to::<Vector2i>(),
        Some(Vector2i::new(-3, 4))
    );
    assert_eq!(Variant::from(true), Variant::from(true));
    assert_ne!(Variant::from(1i64), Variant::from(2i64));
}

#[test]
fn arrays_and_dictionaries_share_storage() {
    setup();
    let mut arr = Array::new();
    arr.push_value(&1i64);
    arr.push(&Variant::from("two"));
    let alias = arr.clone();
    arr.push_value(&3.0f64);
    assert_eq!(alias.len(), 3);
    assert_eq!(
        alias.get(1).and_then(|v| v.try_to::<GString>()).map(|s| s.to_string()),
        Some("two".to_owned())
    );
    assert!(arr.get(10).is_none());

    let mut dict = Dictionary::new();
    dict.set(&GString::from("kind"), &3i64);
    dict.set(&1i64, &true);
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get_as::<GString, i64>(&GString::from("kind")), Some(3));
    assert!(dict.remove(&1i64));
    assert!(!dict.contains_key(&1i64));
    let keys: Vec<String> =
        dict.iter().filter_map(|(k, _)| k.try_to::<GString>()).map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["kind".to_owned()]);
}

#[test]
fn typed_arrays_reject_foreign_elements() {
    setup();
    let mut cells: TypedArray<Vector2i> = TypedArray::new();
    assert!(cells.push(&Vector2i::new(1, 2)));
    assert_eq!(cells.as_array().element_type(), VariantType::VECTOR2I);
    let mut raw = cells.as_array().clone();
    assert!(!raw.push(&Variant::from("nope")));
    assert_eq!(cells.to_vec(), vec![Vector2i::new(1, 2)]);
}
