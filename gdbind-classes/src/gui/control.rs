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

/// Engine class `Control` (inherits `CanvasItem`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Control(ObjectRef);

impl EngineClass for Control {
    const CLASS_NAME: &'static str = "Control";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &["_has_point", "_get_minimum_size"];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        Control(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_has_point> for Control {
    type Signature = fn(Vector2) -> bool;
}

impl Overridable<crate::virtuals::_get_minimum_size> for Control {
    type Signature = fn() -> Vector2;
}

impl Overridable<crate::virtuals::_draw> for Control {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_ready> for Control {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for Control {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for Control {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for Control {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for Control {
    type Signature = fn();
}

impl HasBase for Control {
    type Base = CanvasItem;
}

unsafe impl Inherits<CanvasItem> for Control {}
unsafe impl Inherits<Node> for Control {}
unsafe impl Inherits<Object> for Control {}

impl Deref for Control {
    type Target = CanvasItem;

    fn deref(&self) -> &CanvasItem {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<Control>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "Control", parent: Some("CanvasItem"), ref_counted: false, construct: wrap_handle }
}

impl Control {
    pub const NIL: Self = Control(ObjectRef::NIL);

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

    /// Property `size`.
    pub fn size(&self) -> Vector2 {
        self.advanced().get_size()
    }

    pub fn set_size(&self, value: Vector2) {
        self.advanced().set_size(value)
    }

    /// Property `tooltip_text`.
    pub fn tooltip_text(&self) -> String {
        self.advanced().get_tooltip_text().to_string()
    }

    pub fn set_tooltip_text(&self, value: &str) {
        self.advanced().set_tooltip_text(&GString::from(value))
    }

    /// Property `custom_minimum_size`.
    pub fn custom_minimum_size(&self) -> Vector2 {
        self.advanced().get_custom_minimum_size()
    }

    pub fn set_custom_minimum_size(&self, value: Vector2) {
        self.advanced().set_custom_minimum_size(value)
    }

    pub fn grab_focus(&self) {
        self.advanced().grab_focus()
    }

    pub fn has_focus(&self) -> bool {
        self.advanced().has_focus()
    }

    pub fn get_combined_minimum_size(&self) -> Vector2 {
        self.advanced().get_combined_minimum_size()
    }

    /// Connect `f` to the `resized` signal.
    pub fn on_resized(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "resized", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `focus_entered` signal.
    pub fn on_focus_entered(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "focus_entered", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `focus_exited` signal.
    pub fn on_focus_exited(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "focus_exited", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
}

/// Raw surface of [`Control`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(Control);

impl Advanced {
    pub fn instance(&self) -> &Control {
        &self.0
    }

    pub fn set_size(&self, size: Vector2) {
        let mut frame = CallFrame::new();
        frame.arg(&size);
        unsafe { frame.call(binds().control.set_size, self.0.handle()) }
    }

    pub fn get_size(&self) -> Vector2 {
        unsafe { CallFrame::new().call_ret(binds().control.get_size, self.0.handle()) }
    }

    pub fn set_tooltip_text(&self, tooltip_text: &GString) {
        let mut frame = CallFrame::new();
        frame.arg(tooltip_text);
        unsafe { frame.call(binds().control.set_tooltip_text, self.0.handle()) }
    }

    pub fn get_tooltip_text(&self) -> GString {
        unsafe { CallFrame::new().call_ret(binds().control.get_tooltip_text, self.0.handle()) }
    }

    pub fn set_custom_minimum_size(&self, custom_minimum_size: Vector2) {
        let mut frame = CallFrame::new();
        frame.arg(&custom_minimum_size);
        unsafe { frame.call(binds().control.set_custom_minimum_size, self.0.handle()) }
    }

    pub fn get_custom_minimum_size(&self) -> Vector2 {
        unsafe { CallFrame::new().call_ret(binds().control.get_custom_minimum_size, self.0.handle()) }
    }

    pub fn grab_focus(&self) {
        unsafe { CallFrame::new().call(binds().control.grab_focus, self.0.handle()) }
    }

    pub fn has_focus(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().control.has_focus, self.0.handle()) }
    }

    pub fn get_combined_minimum_size(&self) -> Vector2 {
        unsafe { CallFrame::new().call_ret(binds().control.get_combined_minimum_size, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::scene_2d::canvas_item::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_canvas_item().advanced()
    }
}
