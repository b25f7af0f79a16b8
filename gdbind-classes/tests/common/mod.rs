// Runtime initialization against the in-process engine, shared by every
// test in this directory.

use std::sync::Once;

use gdbind_ffi::HostCallbacks;
use gdbind_runtime::{class_registry, init_api, pointer_registry, ObjectPtr};

unsafe extern "C" fn on_object_freed(obj: ObjectPtr) {
    pointer_registry::invalidate(obj);
}

unsafe extern "C" fn on_shutdown() {
    pointer_registry::clear();
}

pub fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        init_api(gdbind_test_engine::interface()).expect("init against the test engine");
        gdbind_test_engine::set_host_callbacks(&HostCallbacks { on_shutdown, on_object_freed });
        class_registry::register_all_from_inventory();
        gdbind_classes::load_method_binds().expect("every bind resolves");
    });
}
