// `#[gdclass_impl]` rejects misspelled overridables at compile time. Records
// submitted by hand still go through the registration-time check.

use gdbind::prelude::*;
use gdbind::runtime::{
    ClassRecord, HostClass, HostClassRegistration, VirtualRegistration, VirtualTable,
};

#[derive(Default)]
struct Misspelled;

impl HostClass for Misspelled {
    type Base = Node;
    const CLASS_NAME: &'static str = "Misspelled";
}

fn misspelled_virtuals(table: &mut VirtualTable) -> BindResult<()> {
    table.add::<Misspelled>("_redy", |_, _, _| {})
}

gdbind::runtime::__inventory::submit! {
    HostClassRegistration { class_name: "Misspelled", record: ClassRecord::of::<Misspelled> }
}
gdbind::runtime::__inventory::submit! {
    VirtualRegistration { class_name: "Misspelled", register: misspelled_virtuals }
}

#[test]
fn init_refuses_unknown_overridables() {
    assert!(gdbind::init(gdbind_test_engine::interface()).is_null());
    assert!(gdbind_test_engine::logged_contains(
        "init failed: Misspelled declares no overridable named _redy"
    ));
    assert!(!gdbind::runtime::class_registry::is_registered("Misspelled"));
}
