use std::ffi::c_void;

use crate::handles::*;
use crate::layout::CallError;

/// Registration record for a host-defined class. The engine copies it.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ExtensionClassInfo {
    /// Passed back verbatim to every class-level callback.
    pub class_userdata: *mut c_void,

    /// Build a new object of the host class: the host constructs the engine
    /// base object, attaches its instance data via `ObjectApi::set_instance`,
    /// and returns the object.
    pub create_instance: unsafe extern "C" fn(class_userdata: *mut c_void) -> ObjectPtr,

    /// The engine is freeing an object carrying host instance data.
    pub free_instance:
        unsafe extern "C" fn(class_userdata: *mut c_void, instance: ClassInstancePtr),

    /// Look up an overridable by name. Null means "not overridden": the engine
    /// runs its default behavior. Non-null values are passed back to
    /// `call_virtual_with_data`.
    pub get_virtual: unsafe extern "C" fn(
        class_userdata: *mut c_void,
        name: *const u8,
        name_len: u32,
    ) -> *mut c_void,

    /// Inbound virtual call. `args` holds one pointer per declared argument in
    /// pointer-call encoding; `ret` is null for void virtuals.
    pub call_virtual_with_data: unsafe extern "C" fn(
        instance: ClassInstancePtr,
        name: *const u8,
        name_len: u32,
        virtual_userdata: *mut c_void,
        args: *const *const c_void,
        ret: *mut c_void,
    ),
}

unsafe impl Send for ExtensionClassInfo {}
unsafe impl Sync for ExtensionClassInfo {}

/// Construction record for a Callable backed by host code.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CallableCustomInfo {
    pub userdata: *mut c_void,

    /// `args` are Variant pointers; `ret` is an uninitialized Variant slot.
    pub call_func: unsafe extern "C" fn(
        userdata: *mut c_void,
        args: *const *const c_void,
        argc: i64,
        ret: *mut c_void,
        error: *mut CallError,
    ),

    /// Called once when the engine drops its last reference to the callable.
    pub free_func: Option<unsafe extern "C" fn(userdata: *mut c_void)>,
}
