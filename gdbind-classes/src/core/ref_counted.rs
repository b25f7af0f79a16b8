// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Object;

/// Engine class `RefCounted` (inherits `Object`).
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RefCounted(RefHandle);

impl EngineClass for RefCounted {
    const CLASS_NAME: &'static str = "RefCounted";
    const REF_COUNTED: bool = true;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        RefCounted(unsafe { RefHandle::adopt(ptr) })
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl HasBase for RefCounted {
    type Base = Object;
}

unsafe impl Inherits<Object> for RefCounted {}

impl Deref for RefCounted {
    type Target = Object;

    fn deref(&self) -> &Object {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<RefCounted>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "RefCounted", parent: Some("Object"), ref_counted: true, construct: wrap_handle }
}

impl RefCounted {
    pub const NIL: Self = RefCounted(RefHandle::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    pub fn get_reference_count(&self) -> i64 {
        self.advanced().get_reference_count()
    }
}

/// Raw surface of [`RefCounted`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(RefCounted);

impl Advanced {
    pub fn instance(&self) -> &RefCounted {
        &self.0
    }

    pub fn get_reference_count(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().ref_counted.get_reference_count, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::core::object::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_object().advanced()
    }
}
