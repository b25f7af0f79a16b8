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

/// Engine class `VisualInstance3D` (inherits `Node3D`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VisualInstance3D(ObjectRef);

impl EngineClass for VisualInstance3D {
    const CLASS_NAME: &'static str = "VisualInstance3D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        VisualInstance3D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for VisualInstance3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for VisualInstance3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for VisualInstance3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for VisualInstance3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for VisualInstance3D {
    type Signature = fn();
}

impl HasBase for VisualInstance3D {
    type Base = Node3D;
}

unsafe impl Inherits<Node3D> for VisualInstance3D {}
unsafe impl Inherits<Node> for VisualInstance3D {}
unsafe impl Inherits<Object> for VisualInstance3D {}

impl Deref for VisualInstance3D {
    type Target = Node3D;

    fn deref(&self) -> &Node3D {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<VisualInstance3D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "VisualInstance3D", parent: Some("Node3D"), ref_counted: false, construct: wrap_handle }
}

impl VisualInstance3D {
    pub const NIL: Self = VisualInstance3D(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
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

    /// Property `layers`.
    pub fn layers(&self) -> i64 {
        self.advanced().get_layer_mask()
    }

    pub fn set_layers(&self, value: i64) {
        self.advanced().set_layer_mask(value)
    }
}

/// Raw surface of [`VisualInstance3D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(VisualInstance3D);

impl Advanced {
    pub fn instance(&self) -> &VisualInstance3D {
        &self.0
    }

    pub fn set_layer_mask(&self, layers: i64) {
        let mut frame = CallFrame::new();
        frame.arg(&layers);
        unsafe { frame.call(binds().visual_instance_3d.set_layer_mask, self.0.handle()) }
    }

    pub fn get_layer_mask(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().visual_instance_3d.get_layer_mask, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::scene_3d::node_3d::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_node_3d().advanced()
    }
}
