// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::GeometryInstance3D;
use crate::MeshInstance3D;
use crate::Node;
use crate::Node3D;
use crate::Object;
use crate::VisualInstance3D;

/// Engine class `SoftBody3D` (inherits `MeshInstance3D`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SoftBody3D(ObjectRef);

impl EngineClass for SoftBody3D {
    const CLASS_NAME: &'static str = "SoftBody3D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        SoftBody3D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for SoftBody3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for SoftBody3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for SoftBody3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for SoftBody3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for SoftBody3D {
    type Signature = fn();
}

impl HasBase for SoftBody3D {
    type Base = MeshInstance3D;
}

unsafe impl Inherits<MeshInstance3D> for SoftBody3D {}
unsafe impl Inherits<GeometryInstance3D> for SoftBody3D {}
unsafe impl Inherits<VisualInstance3D> for SoftBody3D {}
unsafe impl Inherits<Node3D> for SoftBody3D {}
unsafe impl Inherits<Node> for SoftBody3D {}
unsafe impl Inherits<Object> for SoftBody3D {}

impl Deref for SoftBody3D {
    type Target = MeshInstance3D;

    fn deref(&self) -> &MeshInstance3D {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<SoftBody3D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "SoftBody3D", parent: Some("MeshInstance3D"), ref_counted: false, construct: wrap_handle }
}

impl SoftBody3D {
    pub const NIL: Self = SoftBody3D(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_mesh_instance_3d(&self) -> &MeshInstance3D {
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

    /// Property `simulation_precision`.
    pub fn simulation_precision(&self) -> i64 {
        self.advanced().get_simulation_precision()
    }

    pub fn set_simulation_precision(&self, value: i64) {
        self.advanced().set_simulation_precision(value)
    }

    /// Property `total_mass`.
    pub fn total_mass(&self) -> f64 {
        self.advanced().get_total_mass()
    }

    pub fn set_total_mass(&self, value: f64) {
        self.advanced().set_total_mass(value)
    }

    /// Property `pressure_coefficient`.
    pub fn pressure_coefficient(&self) -> f64 {
        self.advanced().get_pressure_coefficient()
    }

    pub fn set_pressure_coefficient(&self, value: f64) {
        self.advanced().set_pressure_coefficient(value)
    }

    /// Property `disable_mode`.
    pub fn disable_mode(&self) -> crate::scene_3d::soft_body_3d::DisableMode {
        self.advanced().get_disable_mode()
    }

    pub fn set_disable_mode(&self, value: crate::scene_3d::soft_body_3d::DisableMode) {
        self.advanced().set_disable_mode(value)
    }
}

/// Raw surface of [`SoftBody3D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(SoftBody3D);

impl Advanced {
    pub fn instance(&self) -> &SoftBody3D {
        &self.0
    }

    pub fn set_simulation_precision(&self, simulation_precision: i64) {
        let mut frame = CallFrame::new();
        frame.arg(&simulation_precision);
        unsafe { frame.call(binds().soft_body_3d.set_simulation_precision, self.0.handle()) }
    }

    pub fn get_simulation_precision(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().soft_body_3d.get_simulation_precision, self.0.handle()) }
    }

    pub fn set_total_mass(&self, total_mass: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&total_mass);
        unsafe { frame.call(binds().soft_body_3d.set_total_mass, self.0.handle()) }
    }

    pub fn get_total_mass(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().soft_body_3d.get_total_mass, self.0.handle()) }
    }

    pub fn set_pressure_coefficient(&self, pressure_coefficient: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&pressure_coefficient);
        unsafe { frame.call(binds().soft_body_3d.set_pressure_coefficient, self.0.handle()) }
    }

    pub fn get_pressure_coefficient(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().soft_body_3d.get_pressure_coefficient, self.0.handle()) }
    }

    pub fn set_disable_mode(&self, disable_mode: crate::scene_3d::soft_body_3d::DisableMode) {
        let mut frame = CallFrame::new();
        frame.arg(&disable_mode);
        unsafe { frame.call(binds().soft_body_3d.set_disable_mode, self.0.handle()) }
    }

    pub fn get_disable_mode(&self) -> crate::scene_3d::soft_body_3d::DisableMode {
        unsafe { CallFrame::new().call_ret(binds().soft_body_3d.get_disable_mode, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::scene_3d::mesh_instance_3d::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_mesh_instance_3d().advanced()
    }
}

/// Engine enum `SoftBody3D.DisableMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisableMode(i64);

impl DisableMode {
    pub const REMOVE: DisableMode = DisableMode(0);
    pub const KEEP_ACTIVE: DisableMode = DisableMode(1);
}

impl EngineEnum for DisableMode {
    const NAME: &'static str = "SoftBody3D.DisableMode";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        DisableMode(ord)
    }
}
