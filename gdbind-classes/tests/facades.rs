mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::setup;
use gdbind_classes::core::node::ProcessMode;
use gdbind_classes::core::object::ConnectFlags;
use gdbind_classes::*;
use gdbind_runtime::{
    pointer_registry, try_cast, upcast_ref, Dictionary, EngineClass, EngineEnum, GString, NodePath,
    PackedByteArray, PackedFloat32Array, Variant, Vector3,
};

#[test]
fn bind_table_loads_once() {
    setup();
    let first = load_method_binds().expect("binds resolve");
    let second = load_method_binds().expect("binds resolve");
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.node.add_child, second.node.add_child);
    assert!(!first.resource.duplicate.is_nil());
}

#[test]
fn refcounted_carriers_match_the_engine_count() {
    setup();
    let mesh = NavigationMesh::new();
    let h = mesh.handle();
    assert_eq!(mesh.get_reference_count(), 1);
    let copies: Vec<NavigationMesh> = (0..3).map(|_| mesh.clone()).collect();
    assert_eq!(gdbind_test_engine::reference_count(h), Some(4));
    assert_eq!(pointer_registry::live_carriers(h), 4);
    drop(copies);
    assert_eq!(gdbind_test_engine::reference_count(h), Some(1));
    drop(mesh);
    assert!(!gdbind_test_engine::is_alive(h));
}

#[test]
fn duplicate_adopts_the_transferred_reference() {
    setup();
    let res = Resource::new();
    res.set_resource_name("original");
    let dup = res.duplicate(false).expect("duplicate returns a resource");
    assert_ne!(dup.handle(), res.handle());
    assert_eq!(gdbind_test_engine::reference_count(dup.handle()), Some(1));
    assert_eq!(dup.resource_name(), "original");
    assert_eq!(dup.advanced().get_name(), "original");
}

#[test]
fn checked_casts_follow_the_runtime_class() {
    setup();
    let body = SoftBody3D::new();
    let object: &Object = upcast_ref(&body);
    assert!(try_cast::<MeshInstance3D>(object).is_some());
    assert!(try_cast::<Node3D>(object).is_some());
    assert!(try_cast::<SoftBody3D>(object).is_some());
    assert!(try_cast::<Control>(object).is_none());
    assert!(try_cast::<Resource>(object).is_none());
    assert!(try_cast::<Node>(&Object::NIL).is_none());
    assert!(body.free());
}

#[test]
fn typed_children_and_lookup() {
    setup();
    let root = Node::new();
    root.set_name("Root");
    let spatial = Node3D::new();
    let map = TileMap::new();
    root.add_child(&spatial, true);
    root.add_child(&map, true);
    assert_eq!(root.children().len(), 2);
    let found: TileMap = root.find_child_of::<TileMap>().expect("tile map child");
    assert_eq!(found.handle(), map.handle());
    assert!(root.find_child_of::<CodeEdit>().is_none());

    let path = map.get_path();
    assert!(path.starts_with("/Root/"));
    let again = root.get_node_or_null(&path).expect("absolute path resolves");
    assert_eq!(again.handle(), map.handle());
    assert!(root.free());
    assert!(!gdbind_test_engine::is_alive(map.handle()));
}

#[test]
fn free_only_applies_to_plain_objects() {
    setup();
    let node = Node3D::new();
    let h = node.handle();
    assert!(node.free());
    assert!(!gdbind_test_engine::is_alive(h));
    // Already gone.
    assert!(!node.free());
    assert!(!Object::NIL.free());

    let res = Resource::new();
    assert!(!upcast_ref::<_, Object>(&res).free());
    assert!(gdbind_test_engine::is_alive(res.handle()));
}

#[test]
fn property_accessors_use_host_types() {
    setup();
    let node = Node3D::new();
    node.set_position(Vector3::new(1.0, 2.0, 3.0));
    node.translate(Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(node.position(), Vector3::new(1.0, 3.0, 3.0));
    assert_eq!(node.advanced().get_position(), node.position());

    let edit = TextEdit::new();
    edit.set_text("first\nsecond");
    assert_eq!(edit.text(), "first\nsecond");
    assert_eq!(edit.get_line_count(), 2);
    assert_eq!(edit.get_line(1), "second");
    assert!(edit.free());
}

#[test]
fn carriers_round_trip_through_object_properties() {
    setup();
    let node = Node::new();

    let bytes = PackedByteArray::from_slice(&[1, 2, 255]);
    node.set("bytes", &Variant::from(&bytes));
    assert_eq!(node.get("bytes").try_to::<PackedByteArray>(), Some(bytes));

    let floats = PackedFloat32Array::from_slice(&[0.5, -1.25]);
    node.set("floats", &Variant::from(&floats));
    let back = node.get("floats").to::<PackedFloat32Array>();
    assert_eq!(back.to_vec(), vec![0.5, -1.25]);

    let mut dict = Dictionary::new();
    dict.set(&GString::from("bone"), &3i64);
    node.set("dict", &Variant::from(&dict));
    let back = node.get("dict").to::<Dictionary>();
    assert_eq!(back.len(), 1);
    assert_eq!(back.get_as::<GString, i64>(&GString::from("bone")), Some(3));

    let path = NodePath::from("../Skeleton3D");
    node.set("path", &Variant::from(&path));
    assert_eq!(node.get("path").to::<NodePath>(), "../Skeleton3D");

    let any = Variant::from(7i64);
    node.set("any", &any);
    assert_eq!(node.get("any"), any);
    assert_eq!(node.get("missing"), Variant::nil());
    assert!(node.free());
}

#[test]
fn signal_connectors_fire_and_decode() {
    setup();
    let edit = TextEdit::new();
    let edits = Rc::new(RefCell::new(Vec::new()));
    let sink = edits.clone();
    let code = edit.on_lines_edited_from(move |from, to| sink.borrow_mut().push((from, to)));
    assert_eq!(code, Error::OK);
    let changed = Rc::new(Cell::new(0));
    let seen = changed.clone();
    assert_eq!(edit.on_text_changed(move || seen.set(seen.get() + 1)), Error::OK);

    edit.insert_text_at_caret("a\nb", -1);
    assert_eq!(*edits.borrow(), vec![(0, 1)]);
    assert_eq!(changed.get(), 1);

    let parent = Node::new();
    let entered = Rc::new(RefCell::new(None));
    let slot = entered.clone();
    parent.on_child_entered_tree(move |child| *slot.borrow_mut() = child.map(|c| c.handle()));
    parent.add_child(&edit, false);
    assert_eq!(*entered.borrow(), Some(edit.handle()));
    assert!(parent.free());
}

#[test]
fn unknown_signals_return_the_engine_error() {
    setup();
    let res = Resource::new();
    assert_eq!(res.emit_signal("no_such_signal"), Error::ERR_UNAVAILABLE);
    assert!(!res.has_signal("renamed"));
    assert!(res.has_signal("changed"));
}

#[test]
fn engine_enums_and_bitfields() {
    setup();
    assert_eq!(ProcessMode::from_ord(3), ProcessMode::ALWAYS);
    assert_eq!(ProcessMode::DISABLED.ord(), 4);
    let flags = ConnectFlags::DEFERRED | ConnectFlags::ONE_SHOT;
    assert!(flags.contains(ConnectFlags::ONE_SHOT));
    assert!(!flags.contains(ConnectFlags::PERSIST));
    assert_eq!(flags.ord(), 5);
    assert_eq!(<Error as EngineEnum>::NAME, "Error");
}
