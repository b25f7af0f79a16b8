// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::CanvasItem;
use crate::Control;
use crate::Node;
use crate::Object;

/// Engine class `TextEdit` (inherits `Control`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TextEdit(ObjectRef);

impl EngineClass for TextEdit {
    const CLASS_NAME: &'static str = "TextEdit";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &["_handle_unicode_input", "_backspace", "_cut", "_copy", "_paste"];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        TextEdit(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_handle_unicode_input> for TextEdit {
    type Signature = fn(i32, i32);
}

impl Overridable<crate::virtuals::_backspace> for TextEdit {
    type Signature = fn(i32);
}

impl Overridable<crate::virtuals::_cut> for TextEdit {
    type Signature = fn(i32);
}

impl Overridable<crate::virtuals::_copy> for TextEdit {
    type Signature = fn(i32);
}

impl Overridable<crate::virtuals::_paste> for TextEdit {
    type Signature = fn(i32);
}

impl Overridable<crate::virtuals::_has_point> for TextEdit {
    type Signature = fn(Vector2) -> bool;
}

impl Overridable<crate::virtuals::_get_minimum_size> for TextEdit {
    type Signature = fn() -> Vector2;
}

impl Overridable<crate::virtuals::_draw> for TextEdit {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_ready> for TextEdit {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for TextEdit {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for TextEdit {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for TextEdit {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for TextEdit {
    type Signature = fn();
}

impl HasBase for TextEdit {
    type Base = Control;
}

unsafe impl Inherits<Control> for TextEdit {}
unsafe impl Inherits<CanvasItem> for TextEdit {}
unsafe impl Inherits<Node> for TextEdit {}
unsafe impl Inherits<Object> for TextEdit {}

impl Deref for TextEdit {
    type Target = Control;

    fn deref(&self) -> &Control {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<TextEdit>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "TextEdit", parent: Some("Control"), ref_counted: false, construct: wrap_handle }
}

impl TextEdit {
    pub const NIL: Self = TextEdit(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_control(&self) -> &Control {
        upcast_ref(self)
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

    /// Property `text`.
    pub fn text(&self) -> String {
        self.advanced().get_text().to_string()
    }

    pub fn set_text(&self, value: &str) {
        self.advanced().set_text(&GString::from(value))
    }

    /// Property `editable`.
    pub fn editable(&self) -> bool {
        self.advanced().is_editable()
    }

    pub fn set_editable(&self, value: bool) {
        self.advanced().set_editable(value)
    }

    /// Property `placeholder_text`.
    pub fn placeholder_text(&self) -> String {
        self.advanced().get_placeholder().to_string()
    }

    pub fn set_placeholder_text(&self, value: &str) {
        self.advanced().set_placeholder(&GString::from(value))
    }

    pub fn get_line_count(&self) -> i64 {
        self.advanced().get_line_count()
    }

    pub fn get_line(&self, line: i32) -> String {
        self.advanced().get_line(line).to_string()
    }

    pub fn insert_text_at_caret(&self, text: &str, caret_index: i32) {
        self.advanced().insert_text_at_caret(&GString::from(text), caret_index)
    }

    pub fn clear(&self) {
        self.advanced().clear()
    }

    pub fn backspace(&self, caret_index: i32) {
        self.advanced().backspace(caret_index)
    }

    /// Connect `f` to the `text_changed` signal.
    pub fn on_text_changed(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "text_changed", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `lines_edited_from` signal.
    pub fn on_lines_edited_from(&self, mut f: impl FnMut(i64, i64) + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "lines_edited_from", move |args| {
            f(args.arg::<i64>(0), args.arg::<i64>(1));
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
}

/// Raw surface of [`TextEdit`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(TextEdit);

impl Advanced {
    pub fn instance(&self) -> &TextEdit {
        &self.0
    }

    pub fn set_text(&self, text: &GString) {
        let mut frame = CallFrame::new();
        frame.arg(text);
        unsafe { frame.call(binds().text_edit.set_text, self.0.handle()) }
    }

    pub fn get_text(&self) -> GString {
        unsafe { CallFrame::new().call_ret(binds().text_edit.get_text, self.0.handle()) }
    }

    pub fn set_editable(&self, editable: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&editable);
        unsafe { frame.call(binds().text_edit.set_editable, self.0.handle()) }
    }

    pub fn is_editable(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().text_edit.is_editable, self.0.handle()) }
    }

    pub fn set_placeholder(&self, placeholder_text: &GString) {
        let mut frame = CallFrame::new();
        frame.arg(placeholder_text);
        unsafe { frame.call(binds().text_edit.set_placeholder, self.0.handle()) }
    }

    pub fn get_placeholder(&self) -> GString {
        unsafe { CallFrame::new().call_ret(binds().text_edit.get_placeholder, self.0.handle()) }
    }

    pub fn get_line_count(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().text_edit.get_line_count, self.0.handle()) }
    }

    pub fn get_line(&self, line: i32) -> GString {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(line));
        unsafe { frame.call_ret(binds().text_edit.get_line, self.0.handle()) }
    }

    pub fn insert_text_at_caret(&self, text: &GString, caret_index: i32) {
        let mut frame = CallFrame::new();
        frame.arg(text).arg(&i64::from(caret_index));
        unsafe { frame.call(binds().text_edit.insert_text_at_caret, self.0.handle()) }
    }

    pub fn clear(&self) {
        unsafe { CallFrame::new().call(binds().text_edit.clear, self.0.handle()) }
    }

    pub fn backspace(&self, caret_index: i32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(caret_index));
        unsafe { frame.call(binds().text_edit.backspace, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::gui::control::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_control().advanced()
    }
}
