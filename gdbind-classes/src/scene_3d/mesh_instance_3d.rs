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

/// Engine class `MeshInstance3D` (inherits `GeometryInstance3D`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MeshInstance3D(ObjectRef);

impl EngineClass for MeshInstance3D {
    const CLASS_NAME: &'static str = "MeshInstance3D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        MeshInstance3D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for MeshInstance3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for MeshInstance3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for MeshInstance3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for MeshInstance3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for MeshInstance3D {
    type Signature = fn();
}

impl HasBase for MeshInstance3D {
    type Base = GeometryInstance3D;
}

unsafe impl Inherits<GeometryInstance3D> for MeshInstance3D {}
unsafe impl Inherits<VisualInstance3D> for MeshInstance3D {}
unsafe impl Inherits<Node3D> for MeshInstance3D {}
unsafe impl Inherits<Node> for MeshInstance3D {}
unsafe impl Inherits<Object> for MeshInstance3D {}

impl Deref for MeshInstance3D {
    type Target = GeometryInstance3D;

    fn deref(&self) -> &GeometryInstance3D {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<MeshInstance3D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "MeshInstance3D", parent: Some("GeometryInstance3D"), ref_counted: false, construct: wrap_handle }
}

impl MeshInstance3D {
    pub const NIL: Self = MeshInstance3D(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

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

    /// Property `skeleton`.
    pub fn skeleton(&self) -> String {
        self.advanced().get_skeleton_path().to_string()
    }

    pub fn set_skeleton(&self, value: &str) {
        self.advanced().set_skeleton_path(&NodePath::from(value))
    }

    pub fn get_surface_override_material_count(&self) -> i64 {
        self.advanced().get_surface_override_material_count()
    }
}

/// Raw surface of [`MeshInstance3D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(MeshInstance3D);

impl Advanced {
    pub fn instance(&self) -> &MeshInstance3D {
        &self.0
    }

    pub fn set_skeleton_path(&self, skeleton: &NodePath) {
        let mut frame = CallFrame::new();
        frame.arg(skeleton);
        unsafe { frame.call(binds().mesh_instance_3d.set_skeleton_path, self.0.handle()) }
    }

    pub fn get_skeleton_path(&self) -> NodePath {
        unsafe { CallFrame::new().call_ret(binds().mesh_instance_3d.get_skeleton_path, self.0.handle()) }
    }

    pub fn get_surface_override_material_count(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().mesh_instance_3d.get_surface_override_material_count, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::scene_3d::geometry_instance_3d::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_geometry_instance_3d().advanced()
    }
}
