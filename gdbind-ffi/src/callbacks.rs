use crate::handles::ObjectPtr;

/// Callback table filled by the host and returned to the engine from `gdbind_init`.
/// The engine calls into the host through these function pointers.
#[repr(C)]
pub struct HostCallbacks {
    /// Shutdown notification: the host should release everything it holds.
    pub on_shutdown: unsafe extern "C" fn(),

    /// An object is being destroyed. Sent for every object the engine frees,
    /// before its memory is released.
    pub on_object_freed: unsafe extern "C" fn(obj: ObjectPtr),
}
