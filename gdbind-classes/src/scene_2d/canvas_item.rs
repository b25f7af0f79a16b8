// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Node;
use crate::Object;

/// Engine class `CanvasItem` (inherits `Node`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CanvasItem(ObjectRef);

impl EngineClass for CanvasItem {
    const CLASS_NAME: &'static str = "CanvasItem";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &["_draw"];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        CanvasItem(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_draw> for CanvasItem {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_ready> for CanvasItem {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for CanvasItem {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for CanvasItem {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for CanvasItem {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for CanvasItem {
    type Signature = fn();
}

impl HasBase for CanvasItem {
    type Base = Node;
}

unsafe impl Inherits<Node> for CanvasItem {}
unsafe impl Inherits<Object> for CanvasItem {}

impl Deref for CanvasItem {
    type Target = Node;

    fn deref(&self) -> &Node {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<CanvasItem>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "CanvasItem", parent: Some("Node"), ref_counted: false, construct: wrap_handle }
}

impl CanvasItem {
    pub const NIL: Self = CanvasItem(ObjectRef::NIL);

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

    /// Property `visible`.
    pub fn visible(&self) -> bool {
        self.advanced().is_visible()
    }

    pub fn set_visible(&self, value: bool) {
        self.advanced().set_visible(value)
    }

    /// Property `modulate`.
    pub fn modulate(&self) -> Color {
        self.advanced().get_modulate()
    }

    pub fn set_modulate(&self, value: Color) {
        self.advanced().set_modulate(value)
    }

    pub fn show(&self) {
        self.advanced().show()
    }

    pub fn hide(&self) {
        self.advanced().hide()
    }

    pub fn queue_redraw(&self) {
        self.advanced().queue_redraw()
    }

    /// Connect `f` to the `draw` signal.
    pub fn on_draw(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "draw", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
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

/// Raw surface of [`CanvasItem`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(CanvasItem);

impl Advanced {
    pub fn instance(&self) -> &CanvasItem {
        &self.0
    }

    pub fn set_visible(&self, visible: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&visible);
        unsafe { frame.call(binds().canvas_item.set_visible, self.0.handle()) }
    }

    pub fn is_visible(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().canvas_item.is_visible, self.0.handle()) }
    }

    pub fn set_modulate(&self, modulate: Color) {
        let mut frame = CallFrame::new();
        frame.arg(&modulate);
        unsafe { frame.call(binds().canvas_item.set_modulate, self.0.handle()) }
    }

    pub fn get_modulate(&self) -> Color {
        unsafe { CallFrame::new().call_ret(binds().canvas_item.get_modulate, self.0.handle()) }
    }

    pub fn show(&self) {
        unsafe { CallFrame::new().call(binds().canvas_item.show, self.0.handle()) }
    }

    pub fn hide(&self) {
        unsafe { CallFrame::new().call(binds().canvas_item.hide, self.0.handle()) }
    }

    pub fn queue_redraw(&self) {
        unsafe { CallFrame::new().call(binds().canvas_item.queue_redraw, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::core::node::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_node().advanced()
    }
}
