// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Node;
use crate::Object;

/// Engine class `Node3D` (inherits `Node`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Node3D(ObjectRef);

impl EngineClass for Node3D {
    const CLASS_NAME: &'static str = "Node3D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        Node3D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for Node3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for Node3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for Node3D {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for Node3D {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for Node3D {
    type Signature = fn();
}

impl HasBase for Node3D {
    type Base = Node;
}

unsafe impl Inherits<Node> for Node3D {}
unsafe impl Inherits<Object> for Node3D {}

impl Deref for Node3D {
    type Target = Node;

    fn deref(&self) -> &Node {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<Node3D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "Node3D", parent: Some("Node"), ref_counted: false, construct: wrap_handle }
}

impl Node3D {
    pub const NIL: Self = Node3D(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_node(&self) -> &Node {
        upcast_ref(self)
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    /// Property `position`.
    pub fn position(&self) -> Vector3 {
        self.advanced().get_position()
    }

    pub fn set_position(&self, value: Vector3) {
        self.advanced().set_position(value)
    }

    /// Property `rotation`.
    pub fn rotation(&self) -> Vector3 {
        self.advanced().get_rotation()
    }

    pub fn set_rotation(&self, value: Vector3) {
        self.advanced().set_rotation(value)
    }

    /// Property `scale`.
    pub fn scale(&self) -> Vector3 {
        self.advanced().get_scale()
    }

    pub fn set_scale(&self, value: Vector3) {
        self.advanced().set_scale(value)
    }

    /// Property `visible`.
    pub fn visible(&self) -> bool {
        self.advanced().is_visible()
    }

    pub fn set_visible(&self, value: bool) {
        self.advanced().set_visible(value)
    }

    pub fn translate(&self, offset: Vector3) {
        self.advanced().translate(offset)
    }

    pub fn show(&self) {
        self.advanced().show()
    }

    pub fn hide(&self) {
        self.advanced().hide()
    }

    /// Connect `f` to the `visibility_changed` signal.
    pub fn on_visibility_changed(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "visibility_changed", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
}

/// Raw surface of [`Node3D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(Node3D);

impl Advanced {
    pub fn instance(&self) -> &Node3D {
        &self.0
    }

    pub fn set_position(&self, position: Vector3) {
        let mut frame = CallFrame::new();
        frame.arg(&position);
        unsafe { frame.call(binds().node_3d.set_position, self.0.handle()) }
    }

    pub fn get_position(&self) -> Vector3 {
        unsafe { CallFrame::new().call_ret(binds().node_3d.get_position, self.0.handle()) }
    }

    pub fn set_rotation(&self, rotation: Vector3) {
        let mut frame = CallFrame::new();
        frame.arg(&rotation);
        unsafe { frame.call(binds().node_3d.set_rotation, self.0.handle()) }
    }

    pub fn get_rotation(&self) -> Vector3 {
        unsafe { CallFrame::new().call_ret(binds().node_3d.get_rotation, self.0.handle()) }
    }

    pub fn set_scale(&self, scale: Vector3) {
        let mut frame = CallFrame::new();
        frame.arg(&scale);
        unsafe { frame.call(binds().node_3d.set_scale, self.0.handle()) }
    }

    pub fn get_scale(&self) -> Vector3 {
        unsafe { CallFrame::new().call_ret(binds().node_3d.get_scale, self.0.handle()) }
    }

    pub fn set_visible(&self, visible: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&visible);
        unsafe { frame.call(binds().node_3d.set_visible, self.0.handle()) }
    }

    pub fn is_visible(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().node_3d.is_visible, self.0.handle()) }
    }

    pub fn translate(&self, offset: Vector3) {
        let mut frame = CallFrame::new();
        frame.arg(&offset);
        unsafe { frame.call(binds().node_3d.translate, self.0.handle()) }
    }

    pub fn show(&self) {
        unsafe { CallFrame::new().call(binds().node_3d.show, self.0.handle()) }
    }

    pub fn hide(&self) {
        unsafe { CallFrame::new().call(binds().node_3d.hide, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::core::node::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_node().advanced()
    }
}
