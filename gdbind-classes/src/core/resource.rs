// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Object;
use crate::RefCounted;

/// Engine class `Resource` (inherits `RefCounted`).
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Resource(RefHandle);

impl EngineClass for Resource {
    const CLASS_NAME: &'static str = "Resource";
    const REF_COUNTED: bool = true;
    const VIRTUALS: &'static [&'static str] = &["_setup_local_to_scene"];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        Resource(unsafe { RefHandle::adopt(ptr) })
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_setup_local_to_scene> for Resource {
    type Signature = fn();
}

impl HasBase for Resource {
    type Base = RefCounted;
}

unsafe impl Inherits<RefCounted> for Resource {}
unsafe impl Inherits<Object> for Resource {}

impl Deref for Resource {
    type Target = RefCounted;

    fn deref(&self) -> &RefCounted {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<Resource>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "Resource", parent: Some("RefCounted"), ref_counted: true, construct: wrap_handle }
}

impl Resource {
    pub const NIL: Self = Resource(RefHandle::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_ref_counted(&self) -> &RefCounted {
        upcast_ref(self)
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    /// Property `resource_name`.
    pub fn resource_name(&self) -> String {
        self.advanced().get_name().to_string()
    }

    pub fn set_resource_name(&self, value: &str) {
        self.advanced().set_name(&GString::from(value))
    }

    /// Property `resource_path`.
    pub fn resource_path(&self) -> String {
        self.advanced().get_path().to_string()
    }

    pub fn set_resource_path(&self, value: &str) {
        self.advanced().set_path(&GString::from(value))
    }

    /// Property `resource_local_to_scene`.
    pub fn resource_local_to_scene(&self) -> bool {
        self.advanced().is_local_to_scene()
    }

    pub fn set_resource_local_to_scene(&self, value: bool) {
        self.advanced().set_local_to_scene(value)
    }

    pub fn duplicate(&self, subresources: bool) -> Option<Resource> {
        self.advanced().duplicate(subresources)
    }

    pub fn emit_changed(&self) {
        self.advanced().emit_changed()
    }

    /// Connect `f` to the `changed` signal.
    pub fn on_changed(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "changed", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
}

/// Raw surface of [`Resource`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(Resource);

impl Advanced {
    pub fn instance(&self) -> &Resource {
        &self.0
    }

    pub fn set_name(&self, name: &GString) {
        let mut frame = CallFrame::new();
        frame.arg(name);
        unsafe { frame.call(binds().resource.set_name, self.0.handle()) }
    }

    pub fn get_name(&self) -> GString {
        unsafe { CallFrame::new().call_ret(binds().resource.get_name, self.0.handle()) }
    }

    pub fn set_path(&self, path: &GString) {
        let mut frame = CallFrame::new();
        frame.arg(path);
        unsafe { frame.call(binds().resource.set_path, self.0.handle()) }
    }

    pub fn get_path(&self) -> GString {
        unsafe { CallFrame::new().call_ret(binds().resource.get_path, self.0.handle()) }
    }

    pub fn set_local_to_scene(&self, local_to_scene: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&local_to_scene);
        unsafe { frame.call(binds().resource.set_local_to_scene, self.0.handle()) }
    }

    pub fn is_local_to_scene(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().resource.is_local_to_scene, self.0.handle()) }
    }

    pub fn duplicate(&self, subresources: bool) -> Option<Resource> {
        let mut frame = CallFrame::new();
        frame.arg(&subresources);
        let ret: ObjectPtr = unsafe { frame.call_ret(binds().resource.duplicate, self.0.handle()) };
        unsafe { adopt::<Resource>(ret, Ownership::Transferred) }
    }

    pub fn emit_changed(&self) {
        unsafe { CallFrame::new().call(binds().resource.emit_changed, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::core::ref_counted::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref_counted().advanced()
    }
}
