// gdbind-test-engine: an in-process engine double implementing the gdbind
// interface table, driven by the same extension_api.json the generator reads.
// Tests initialize the runtime with `interface()` and inspect engine state
// through the helpers below.

mod abi;
mod behavior;
mod geometry;
mod manifest;
mod object;
mod value;

use gdbind_ffi::{EngineInterface, HostCallbacks, InitFn, ObjectPtr};

pub use value::Value;

/// The engine's interface table. Lives for the whole process.
pub fn interface() -> *const EngineInterface {
    &abi::INTERFACE
}

/// Hand the table to a host entry point and keep the callbacks it returns.
/// Returns false when the host declined (null callbacks).
///
/// # Safety
/// `init` must follow the host entry contract.
pub unsafe fn load_host(init: InitFn) -> bool {
    let callbacks = unsafe { init(interface()) }.cast::<HostCallbacks>();
    if callbacks.is_null() {
        return false;
    }
    let callbacks = unsafe { &*callbacks };
    object::set_host_hooks(callbacks.on_object_freed, callbacks.on_shutdown);
    true
}

/// Install host callbacks without going through an entry point.
pub fn set_host_callbacks(callbacks: &HostCallbacks) {
    object::set_host_hooks(callbacks.on_object_freed, callbacks.on_shutdown);
}

/// Send the shutdown notification, if the host registered for it.
pub fn shutdown() {
    if let Some(hook) = object::shutdown_hook() {
        unsafe { hook() };
    }
}

/// Engine reference count; `None` for null or freed objects.
pub fn reference_count(obj: ObjectPtr) -> Option<u32> {
    object::get(obj).map(|o| o.refcount())
}

pub fn is_alive(obj: ObjectPtr) -> bool {
    object::get(obj).is_some()
}

/// Runtime class name of a live object.
pub fn class_of(obj: ObjectPtr) -> Option<String> {
    object::get(obj).map(|o| o.class())
}

/// Number of live objects.
pub fn object_count() -> usize {
    object::live_count()
}

/// Free an object as the engine would (scene teardown, `free()` from script).
pub fn free_object(obj: ObjectPtr) {
    object::destroy(obj);
}

/// Emit `signal` on `obj` with the given arguments.
pub fn emit_signal(obj: ObjectPtr, signal: &str, args: Vec<Value>) {
    object::emit(obj, signal, args);
}

/// Number of connections on `signal`.
pub fn connection_count(obj: ObjectPtr, signal: &str) -> usize {
    object::get(obj)
        .map_or(0, |o| o.state().connections.iter().filter(|c| c.signal == signal).count())
}

/// Invoke a host override the way the engine would. `None` when the
/// object's class does not override `name`.
pub fn call_virtual(obj: ObjectPtr, name: &str, args: Vec<Value>) -> Option<Value> {
    object::call_virtual(obj, name, args)
}

/// Stored property value, falling back to the declared default.
pub fn property(obj: ObjectPtr, name: &str) -> Option<Value> {
    object::get(obj)?.prop(name)
}

/// Every line printed through the logging table, with its level.
pub fn logged() -> Vec<(u32, String)> {
    object::log_lines()
}

/// Whether any logged line contains `needle`.
pub fn logged_contains(needle: &str) -> bool {
    logged().iter().any(|(_, line)| line.contains(needle))
}
