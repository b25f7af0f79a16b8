// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Node;
use crate::Node3D;
use crate::Object;
use crate::VisualInstance3D;

/// Engine class `GeometryInstance3D` (inherits `VisualInstance3D`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GeometryInstance3D(ObjectRef);

impl EngineClass for GeometryInstance3D {
    const CLASS_NAME: &'static str = "GeometryInstance3D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        GeometryInstance3D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for GeometryInstance3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for GeometryInstance3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for GeometryInstance3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for GeometryInstance3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for GeometryInstance3D {
    type Signature = fn();
}

impl HasBase for GeometryInstance3D {
    type Base = VisualInstance3D;
}

unsafe impl Inherits<VisualInstance3D> for GeometryInstance3D {}
unsafe impl Inherits<Node3D> for GeometryInstance3D {}
unsafe impl Inherits<Node> for GeometryInstance3D {}
unsafe impl Inherits<Object> for GeometryInstance3D {}

impl Deref for GeometryInstance3D {
    type Target = VisualInstance3D;

    fn deref(&self) -> &VisualInstance3D {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<GeometryInstance3D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "GeometryInstance3D", parent: Some("VisualInstance3D"), ref_counted: false, construct: wrap_handle }
}

impl GeometryInstance3D {
    pub const NIL: Self = GeometryInstance3D(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_visual_instance_3d(&self) -> &VisualInstance3D {
        upcast_ref(self)
    }

    pub fn as_node_3d(&self) -> &Node3D {
        upcast_ref(self)
    }

    pub fn as_node(&self) -> &Node {
        upcast_ref(self)
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    /// Property `cast_shadow`.
    pub fn cast_shadow(&self) -> crate::scene_3d::geometry_instance_3d::ShadowCastingSetting {
        self.advanced().get_cast_shadows_setting()
    }

    pub fn set_cast_shadow(&self, value: crate::scene_3d::geometry_instance_3d::ShadowCastingSetting) {
        self.advanced().set_cast_shadows_setting(value)
    }

    /// Property `transparency`.
    pub fn transparency(&self) -> f64 {
        self.advanced().get_transparency()
    }

    pub fn set_transparency(&self, value: f64) {
        self.advanced().set_transparency(value)
    }
}

/// Raw surface of [`GeometryInstance3D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(GeometryInstance3D);

impl Advanced {
    pub fn instance(&self) -> &GeometryInstance3D {
        &self.0
    }

    pub fn set_cast_shadows_setting(&self, cast_shadow: crate::scene_3d::geometry_instance_3d::ShadowCastingSetting) {
        let mut frame = CallFrame::new();
        frame.arg(&cast_shadow);
        unsafe { frame.call(binds().geometry_instance_3d.set_cast_shadows_setting, self.0.handle()) }
    }

    pub fn get_cast_shadows_setting(&self) -> crate::scene_3d::geometry_instance_3d::ShadowCastingSetting {
        unsafe { CallFrame::new().call_ret(binds().geometry_instance_3d.get_cast_shadows_setting, self.0.handle()) }
    }

    pub fn set_transparency(&self, transparency: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&transparency);
        unsafe { frame.call(binds().geometry_instance_3d.set_transparency, self.0.handle()) }
    }

    pub fn get_transparency(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().geometry_instance_3d.get_transparency, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::scene_3d::visual_instance_3d::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_visual_instance_3d().advanced()
    }
}

/// Engine enum `GeometryInstance3D.ShadowCastingSetting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShadowCastingSetting(i64);

impl ShadowCastingSetting {
    pub const OFF: ShadowCastingSetting = ShadowCastingSetting(0);
    pub const ON: ShadowCastingSetting = ShadowCastingSetting(1);
    pub const DOUBLE_SIDED: ShadowCastingSetting = ShadowCastingSetting(2);
    pub const SHADOWS_ONLY: ShadowCastingSetting = ShadowCastingSetting(3);
}

impl EngineEnum for ShadowCastingSetting {
    const NAME: &'static str = "GeometryInstance3D.ShadowCastingSetting";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        ShadowCastingSetting(ord)
    }
}
