// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::CanvasItem;
use crate::Node;
use crate::Object;

/// Engine class `Node2D` (inherits `CanvasItem`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Node2D(ObjectRef);

impl EngineClass for Node2D {
    const CLASS_NAME: &'static str = "Node2D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        Node2D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_draw> for Node2D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_ready> for Node2D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for Node2D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for Node2D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for Node2D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for Node2D {
    type Signature = fn();
}

impl HasBase for Node2D {
    type Base = CanvasItem;
}

unsafe impl Inherits<CanvasItem> for Node2D {}
unsafe impl Inherits<Node> for Node2D {}
unsafe impl Inherits<Object> for Node2D {}

impl Deref for Node2D {
    type Target = CanvasItem;

    fn deref(&self) -> &CanvasItem {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<Node2D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "Node2D", parent: Some("CanvasItem"), ref_counted: false, construct: wrap_handle }
}

impl Node2D {
    pub const NIL: Self = Node2D(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_canvas_item(&self) -> &CanvasItem {
        upcast_ref(self)
    }

    pub fn as_node(&self) -> &Node {
        upcast_ref(self)
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    /// Property `position`.
    pub fn position(&self) -> Vector2 {
        self.advanced().get_position()
    }

    pub fn set_position(&self, value: Vector2) {
        self.advanced().set_position(value)
    }

    /// Property `rotation`.
    pub fn rotation(&self) -> f64 {
        self.advanced().get_rotation()
    }

    pub fn set_rotation(&self, value: f64) {
        self.advanced().set_rotation(value)
    }

    /// Property `scale`.
    pub fn scale(&self) -> Vector2 {
        self.advanced().get_scale()
    }

    pub fn set_scale(&self, value: Vector2) {
        self.advanced().set_scale(value)
    }
}

/// Raw surface of [`Node2D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(Node2D);

impl Advanced {
    pub fn instance(&self) -> &Node2D {
        &self.0
    }

    pub fn set_position(&self, position: Vector2) {
        let mut frame = CallFrame::new();
        frame.arg(&position);
        unsafe { frame.call(binds().node_2d.set_position, self.0.handle()) }
    }

    pub fn get_position(&self) -> Vector2 {
        unsafe { CallFrame::new().call_ret(binds().node_2d.get_position, self.0.handle()) }
    }

    pub fn set_rotation(&self, rotation: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&rotation);
        unsafe { frame.call(binds().node_2d.set_rotation, self.0.handle()) }
    }

    pub fn get_rotation(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().node_2d.get_rotation, self.0.handle()) }
    }

    pub fn set_scale(&self, scale: Vector2) {
        let mut frame = CallFrame::new();
        frame.arg(&scale);
        unsafe { frame.call(binds().node_2d.set_scale, self.0.handle()) }
    }

    pub fn get_scale(&self) -> Vector2 {
        unsafe { CallFrame::new().call_ret(binds().node_2d.get_scale, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::scene_2d::canvas_item::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_canvas_item().advanced()
    }
}
