// Signal connector: binds host callables to engine signals by name.
//
// The engine keeps its own copy of the callable; the host closure lives
// until the engine releases it (object freed or signal disconnected).

use gdbind_ffi::ObjectPtr;

use crate::api::{ffi_len, object_api};
use crate::builtin::{CallArgs, Callable, Variant};

/// Connection flags, passed through to the engine unchanged.
pub mod flags {
    pub const DEFERRED: u32 = 1;
    pub const PERSIST: u32 = 2;
    pub const ONE_SHOT: u32 = 4;
    pub const REFERENCE_COUNTED: u32 = 8;
}

/// Connect `callable` to `signal` on `obj`. Returns the engine error code
/// verbatim (0 = OK), nil objects included.
pub fn connect(obj: ObjectPtr, signal: &str, callable: &Callable, flags: u32) -> i64 {
    unsafe {
        (object_api().connect)(obj, signal.as_ptr(), ffi_len(signal), callable.opaque_ptr(), flags)
    }
}

/// Wrap `f` in a Callable and connect it. Generated `on_<signal>`
/// connectors call this.
pub fn connect_fn(
    obj: ObjectPtr,
    signal: &str,
    f: impl FnMut(&CallArgs<'_>) -> Variant + 'static,
) -> i64 {
    let callable = Callable::from_fn(f);
    let code = connect(obj, signal, &callable, 0);
    if code != 0 {
        log::warn!("connect {signal} failed with engine error {code}");
    }
    code
}
