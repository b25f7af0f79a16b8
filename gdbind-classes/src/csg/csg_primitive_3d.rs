// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::CSGShape3D;
use crate::GeometryInstance3D;
use crate::Node;
use crate::Node3D;
use crate::Object;
use crate::VisualInstance3D;

/// Engine class `CSGPrimitive3D` (inherits `CSGShape3D`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CSGPrimitive3D(ObjectRef);

impl EngineClass for CSGPrimitive3D {
    const CLASS_NAME: &'static str = "CSGPrimitive3D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        CSGPrimitive3D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for CSGPrimitive3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for CSGPrimitive3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for CSGPrimitive3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for CSGPrimitive3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for CSGPrimitive3D {
    type Signature = fn();
}

impl HasBase for CSGPrimitive3D {
    type Base = CSGShape3D;
}

unsafe impl Inherits<CSGShape3D> for CSGPrimitive3D {}
unsafe impl Inherits<GeometryInstance3D> for CSGPrimitive3D {}
unsafe impl Inherits<VisualInstance3D> for CSGPrimitive3D {}
unsafe impl Inherits<Node3D> for CSGPrimitive3D {}
unsafe impl Inherits<Node> for CSGPrimitive3D {}
unsafe impl Inherits<Object> for CSGPrimitive3D {}

impl Deref for CSGPrimitive3D {
    type Target = CSGShape3D;

    fn deref(&self) -> &CSGShape3D {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<CSGPrimitive3D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "CSGPrimitive3D", parent: Some("CSGShape3D"), ref_counted: false, construct: wrap_handle }
}

impl CSGPrimitive3D {
    pub const NIL: Self = CSGPrimitive3D(ObjectRef::NIL);

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_csg_shape_3d(&self) -> &CSGShape3D {
        upcast_ref(self)
    }

    pub fn as_geometry_instance_3d(&self) -> &GeometryInstance3D {
        upcast_ref(self)
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

    /// Property `flip_faces`.
    pub fn flip_faces(&self) -> bool {
        self.advanced().get_flip_faces()
    }

    pub fn set_flip_faces(&self, value: bool) {
        self.advanced().set_flip_faces(value)
    }
}

/// Raw surface of [`CSGPrimitive3D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(CSGPrimitive3D);

impl Advanced {
    pub fn instance(&self) -> &CSGPrimitive3D {
        &self.0
    }

    pub fn set_flip_faces(&self, flip_faces: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&flip_faces);
        unsafe { frame.call(binds().csg_primitive_3d.set_flip_faces, self.0.handle()) }
    }

    pub fn get_flip_faces(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().csg_primitive_3d.get_flip_faces, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::csg::csg_shape_3d::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_csg_shape_3d().advanced()
    }
}
