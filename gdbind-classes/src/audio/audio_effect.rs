// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Object;
use crate::RefCounted;
use crate::Resource;

/// Engine class `AudioEffect` (inherits `Resource`).
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AudioEffect(RefHandle);

impl EngineClass for AudioEffect {
    const CLASS_NAME: &'static str = "AudioEffect";
    const REF_COUNTED: bool = true;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        AudioEffect(unsafe { RefHandle::adopt(ptr) })
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_setup_local_to_scene> for AudioEffect {
    type Signature = fn();
}

impl HasBase for AudioEffect {
    type Base = Resource;
}

unsafe impl Inherits<Resource> for AudioEffect {}
unsafe impl Inherits<RefCounted> for AudioEffect {}
unsafe impl Inherits<Object> for AudioEffect {}

impl Deref for AudioEffect {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<AudioEffect>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "AudioEffect", parent: Some("Resource"), ref_counted: true, construct: wrap_handle }
}

impl AudioEffect {
    pub const NIL: Self = AudioEffect(RefHandle::NIL);

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_resource(&self) -> &Resource {
        upcast_ref(self)
    }

    pub fn as_ref_counted(&self) -> &RefCounted {
        upcast_ref(self)
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }
}

/// Raw surface of [`AudioEffect`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(AudioEffect);

impl Advanced {
    pub fn instance(&self) -> &AudioEffect {
        &self.0
    }
}

impl Deref for Advanced {
    type Target = crate::core::resource::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_resource().advanced()
    }
}
