// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::GeometryInstance3D;
use crate::Node;
use crate::Node3D;
use crate::Object;
use crate::VisualInstance3D;

/// Engine class `CSGShape3D` (inherits `GeometryInstance3D`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CSGShape3D(ObjectRef);

impl EngineClass for CSGShape3D {
    const CLASS_NAME: &'static str = "CSGShape3D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        CSGShape3D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for CSGShape3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for CSGShape3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for CSGShape3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for CSGShape3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for CSGShape3D {
    type Signature = fn();
}

impl HasBase for CSGShape3D {
    type Base = GeometryInstance3D;
}

unsafe impl Inherits<GeometryInstance3D> for CSGShape3D {}
unsafe impl Inherits<VisualInstance3D> for CSGShape3D {}
unsafe impl Inherits<Node3D> for CSGShape3D {}
unsafe impl Inherits<Node> for CSGShape3D {}
unsafe impl Inherits<Object> for CSGShape3D {}

impl Deref for CSGShape3D {
    type Target = GeometryInstance3D;

    fn deref(&self) -> &GeometryInstance3D {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<CSGShape3D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "CSGShape3D", parent: Some("GeometryInstance3D"), ref_counted: false, construct: wrap_handle }
}

impl CSGShape3D {
    pub const NIL: Self = CSGShape3D(ObjectRef::NIL);

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
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

    /// Property `operation`.
    pub fn operation(&self) -> crate::csg::csg_shape_3d::Operation {
        self.advanced().get_operation()
    }

    pub fn set_operation(&self, value: crate::csg::csg_shape_3d::Operation) {
        self.advanced().set_operation(value)
    }

    /// Property `use_collision`.
    pub fn use_collision(&self) -> bool {
        self.advanced().is_using_collision()
    }

    pub fn set_use_collision(&self, value: bool) {
        self.advanced().set_use_collision(value)
    }

    pub fn is_root_shape(&self) -> bool {
        self.advanced().is_root_shape()
    }

    pub fn get_meshes(&self) -> Array {
        self.advanced().get_meshes()
    }
}

/// Raw surface of [`CSGShape3D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(CSGShape3D);

impl Advanced {
    pub fn instance(&self) -> &CSGShape3D {
        &self.0
    }

    pub fn set_operation(&self, operation: crate::csg::csg_shape_3d::Operation) {
        let mut frame = CallFrame::new();
        frame.arg(&operation);
        unsafe { frame.call(binds().csg_shape_3d.set_operation, self.0.handle()) }
    }

    pub fn get_operation(&self) -> crate::csg::csg_shape_3d::Operation {
        unsafe { CallFrame::new().call_ret(binds().csg_shape_3d.get_operation, self.0.handle()) }
    }

    pub fn set_use_collision(&self, use_collision: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&use_collision);
        unsafe { frame.call(binds().csg_shape_3d.set_use_collision, self.0.handle()) }
    }

    pub fn is_using_collision(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().csg_shape_3d.is_using_collision, self.0.handle()) }
    }

    pub fn is_root_shape(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().csg_shape_3d.is_root_shape, self.0.handle()) }
    }

    pub fn get_meshes(&self) -> Array {
        unsafe { CallFrame::new().call_ret(binds().csg_shape_3d.get_meshes, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::scene_3d::geometry_instance_3d::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_geometry_instance_3d().advanced()
    }
}

/// Engine enum `CSGShape3D.Operation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Operation(i64);

impl Operation {
    pub const UNION: Operation = Operation(0);
    pub const INTERSECTION: Operation = Operation(1);
    pub const SUBTRACTION: Operation = Operation(2);
}

impl EngineEnum for Operation {
    const NAME: &'static str = "CSGShape3D.Operation";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        Operation(ord)
    }
}
