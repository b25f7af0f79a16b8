// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::CSGPrimitive3D;
use crate::CSGShape3D;
use crate::GeometryInstance3D;
use crate::Node;
use crate::Node3D;
use crate::Object;
use crate::VisualInstance3D;

/// Engine class `CSGTorus3D` (inherits `CSGPrimitive3D`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CSGTorus3D(ObjectRef);

impl EngineClass for CSGTorus3D {
    const CLASS_NAME: &'static str = "CSGTorus3D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        CSGTorus3D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for CSGTorus3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for CSGTorus3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for CSGTorus3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for CSGTorus3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for CSGTorus3D {
    type Signature = fn();
}

impl HasBase for CSGTorus3D {
    type Base = CSGPrimitive3D;
}

unsafe impl Inherits<CSGPrimitive3D> for CSGTorus3D {}
unsafe impl Inherits<CSGShape3D> for CSGTorus3D {}
unsafe impl Inherits<GeometryInstance3D> for CSGTorus3D {}
unsafe impl Inherits<VisualInstance3D> for CSGTorus3D {}
unsafe impl Inherits<Node3D> for CSGTorus3D {}
unsafe impl Inherits<Node> for CSGTorus3D {}
unsafe impl Inherits<Object> for CSGTorus3D {}

impl Deref for CSGTorus3D {
    type Target = CSGPrimitive3D;

    fn deref(&self) -> &CSGPrimitive3D {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<CSGTorus3D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "CSGTorus3D", parent: Some("CSGPrimitive3D"), ref_counted: false, construct: wrap_handle }
}

impl CSGTorus3D {
    pub const NIL: Self = CSGTorus3D(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_csg_primitive_3d(&self) -> &CSGPrimitive3D {
        upcast_ref(self)
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

    /// Property `inner_radius`.
    pub fn inner_radius(&self) -> f64 {
        self.advanced().get_inner_radius()
    }

    pub fn set_inner_radius(&self, value: f64) {
        self.advanced().set_inner_radius(value)
    }

    /// Property `outer_radius`.
    pub fn outer_radius(&self) -> f64 {
        self.advanced().get_outer_radius()
    }

    pub fn set_outer_radius(&self, value: f64) {
        self.advanced().set_outer_radius(value)
    }

    /// Property `sides`.
    pub fn sides(&self) -> i64 {
        self.advanced().get_sides()
    }

    pub fn set_sides(&self, value: i64) {
        self.advanced().set_sides(value)
    }

    /// Property `ring_sides`.
    pub fn ring_sides(&self) -> i64 {
        self.advanced().get_ring_sides()
    }

    pub fn set_ring_sides(&self, value: i64) {
        self.advanced().set_ring_sides(value)
    }

    /// Property `smooth_faces`.
    pub fn smooth_faces(&self) -> bool {
        self.advanced().get_smooth_faces()
    }

    pub fn set_smooth_faces(&self, value: bool) {
        self.advanced().set_smooth_faces(value)
    }
}

/// Raw surface of [`CSGTorus3D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(CSGTorus3D);

impl Advanced {
    pub fn instance(&self) -> &CSGTorus3D {
        &self.0
    }

    pub fn set_inner_radius(&self, inner_radius: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&inner_radius);
        unsafe { frame.call(binds().csg_torus_3d.set_inner_radius, self.0.handle()) }
    }

    pub fn get_inner_radius(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().csg_torus_3d.get_inner_radius, self.0.handle()) }
    }

    pub fn set_outer_radius(&self, outer_radius: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&outer_radius);
        unsafe { frame.call(binds().csg_torus_3d.set_outer_radius, self.0.handle()) }
    }

    pub fn get_outer_radius(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().csg_torus_3d.get_outer_radius, self.0.handle()) }
    }

    pub fn set_sides(&self, sides: i64) {
        let mut frame = CallFrame::new();
        frame.arg(&sides);
        unsafe { frame.call(binds().csg_torus_3d.set_sides, self.0.handle()) }
    }

    pub fn get_sides(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().csg_torus_3d.get_sides, self.0.handle()) }
    }

    pub fn set_ring_sides(&self, ring_sides: i64) {
        let mut frame = CallFrame::new();
        frame.arg(&ring_sides);
        unsafe { frame.call(binds().csg_torus_3d.set_ring_sides, self.0.handle()) }
    }

    pub fn get_ring_sides(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().csg_torus_3d.get_ring_sides, self.0.handle()) }
    }

    pub fn set_smooth_faces(&self, smooth_faces: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&smooth_faces);
        unsafe { frame.call(binds().csg_torus_3d.set_smooth_faces, self.0.handle()) }
    }

    pub fn get_smooth_faces(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().csg_torus_3d.get_smooth_faces, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::csg::csg_primitive_3d::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_csg_primitive_3d().advanced()
    }
}
