mod common;

use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::*;
use gdbind_runtime::*;
use gdbind_test_engine::Value;

#[derive(Default)]
struct Spinner {
    elapsed: f64,
    ready_calls: u32,
}

impl HostClass for Spinner {
    type Base = Node3D;
    const CLASS_NAME: &'static str = "Spinner";
}

fn spinner_virtuals(table: &mut VirtualTable) -> BindResult<()> {
    table.add::<Spinner>("_ready", |this, _args, _ret| this.ready_calls += 1)?;
    table.add::<Spinner>("_process", |this, args, _ret| {
        this.elapsed += unsafe { args.get::<f64>(0) }
    })?;
    Ok(())
}

static TALLY_DROPS: AtomicUsize = AtomicUsize::new(0);

#[derive(Default)]
struct Tally {
    setups: u32,
}

impl Drop for Tally {
    fn drop(&mut self) {
        TALLY_DROPS.fetch_add(1, Ordering::SeqCst);
    }
}

impl HostClass for Tally {
    type Base = Resource;
    const CLASS_NAME: &'static str = "Tally";
}

fn tally_virtuals(table: &mut VirtualTable) -> BindResult<()> {
    table.add::<Tally>("_setup_local_to_scene", |this, _args, _ret| this.setups += 1)
}

gdbind_runtime::__inventory::submit! {
    HostClassRegistration { class_name: "Spinner", record: ClassRecord::of::<Spinner> }
}
gdbind_runtime::__inventory::submit! {
    VirtualRegistration { class_name: "Spinner", register: spinner_virtuals }
}
gdbind_runtime::__inventory::submit! {
    HostClassRegistration { class_name: "Tally", record: ClassRecord::of::<Tally> }
}
gdbind_runtime::__inventory::submit! {
    VirtualRegistration { class_name: "Tally", register: tally_virtuals }
}

fn register() {
    static REGISTER: Once = Once::new();
    REGISTER.call_once(|| {
        register_test_classes();
        let count = host_class::register_all_from_inventory().expect("host classes register");
        assert_eq!(count, 2);
    });
}

#[test]
fn registration_is_idempotent() {
    register();
    assert_eq!(host_class::register_all_from_inventory(), Ok(0));
    assert!(class_registry::is_subclass("Spinner", "Node"));
    assert_eq!(class_registry::is_ref_counted("Tally"), Some(true));
}

#[test]
fn engine_dispatches_overrides_by_name() {
    register();
    let spinner = Subclass::<Spinner>::new().expect("construct Spinner");
    let h = spinner.handle();
    assert_eq!(gdbind_test_engine::class_of(h).as_deref(), Some("Spinner"));
    assert_eq!(
        gdbind_test_engine::call_virtual(h, "_process", vec![Value::Float(0.25)]),
        Some(Value::Nil)
    );
    gdbind_test_engine::call_virtual(h, "_process", vec![Value::Float(0.5)]);
    assert_eq!(spinner.bind().elapsed, 0.75);
    // Not overridden: the engine keeps its own behavior.
    assert_eq!(
        gdbind_test_engine::call_virtual(h, "_physics_process", vec![Value::Float(1.0)]),
        None
    );
    gdbind_test_engine::free_object(h);
}

#[test]
fn tree_entry_runs_ready() {
    register();
    let parent = Node::new();
    let spinner = Subclass::<Spinner>::new().expect("construct Spinner");
    parent.add_child(&spinner);
    assert_eq!(spinner.bind().ready_calls, 1);
    // Base methods reach the same engine object.
    spinner.set_position(Vector3::new(0.0, 2.0, 0.0));
    assert_eq!(spinner.get_position().y, 2.0);
    gdbind_test_engine::free_object(parent.handle());
}

#[test]
fn refcounted_host_instances_die_with_their_last_handle() {
    register();
    let before = TALLY_DROPS.load(Ordering::SeqCst);
    let tally = Subclass::<Tally>::new().expect("construct Tally");
    let h = tally.handle();
    assert_eq!(gdbind_test_engine::reference_count(h), Some(1));
    gdbind_test_engine::call_virtual(h, "_setup_local_to_scene", Vec::new());
    assert_eq!(tally.bind().setups, 1);

    let again = tally.clone();
    assert_eq!(gdbind_test_engine::reference_count(h), Some(2));
    drop(tally);
    assert!(gdbind_test_engine::is_alive(h));
    drop(again);
    assert!(!gdbind_test_engine::is_alive(h));
    assert!(TALLY_DROPS.load(Ordering::SeqCst) > before);
}

#[test]
fn checked_casts_follow_the_runtime_class() {
    register();
    let spinner = Subclass::<Spinner>::new().expect("construct Spinner");
    let as_object: &Object = spinner.upcast();
    assert!(try_cast::<Node>(as_object).is_some());
    assert!(try_cast::<Node3D>(as_object).is_some());
    assert!(try_cast::<Resource>(as_object).is_none());

    let base = try_cast::<Node3D>(as_object).expect("Spinner is a Node3D");
    let typed = Subclass::<Spinner>::from_base(base).expect("instance of Spinner");
    assert_eq!(typed.handle(), spinner.handle());
    assert!(Subclass::<Spinner>::from_base(Node3D::new()).is_none());

    // The most derived generated façade for a host instance is its base.
    let any = class_registry::wrap_dynamic(spinner.handle()).expect("known class");
    assert!(any.downcast_ref::<Node3D>().is_some());
    gdbind_test_engine::free_object(spinner.handle());
}

#[test]
fn refcounted_casts_take_their_own_reference() {
    register();
    let mesh = NavigationMesh::new();
    let h = mesh.handle();
    let view: &Object = upcast_ref(&mesh);
    let res = try_cast::<Resource>(view).expect("NavigationMesh is a Resource");
    assert_eq!(gdbind_test_engine::reference_count(h), Some(2));
    drop(mesh);
    assert_eq!(res.get_class(), "NavigationMesh");
    drop(res);
    assert!(!gdbind_test_engine::is_alive(h));
}
