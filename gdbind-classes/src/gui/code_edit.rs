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
use crate::Resource;
use crate::TextEdit;

/// Engine class `CodeEdit` (inherits `TextEdit`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CodeEdit(ObjectRef);

impl EngineClass for CodeEdit {
    const CLASS_NAME: &'static str = "CodeEdit";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &["_confirm_code_completion", "_request_code_completion", "_filter_code_completion_candidates"];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        CodeEdit(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_confirm_code_completion> for CodeEdit {
    type Signature = fn(bool);
}

impl Overridable<crate::virtuals::_request_code_completion> for CodeEdit {
    type Signature = fn(bool);
}

impl Overridable<crate::virtuals::_filter_code_completion_candidates> for CodeEdit {
    type Signature = fn(TypedArray<Dictionary>) -> TypedArray<Dictionary>;
}

impl Overridable<crate::virtuals::_handle_unicode_input> for CodeEdit {
    type Signature = fn(i32, i32);
}

impl Overridable<crate::virtuals::_backspace> for CodeEdit {
    type Signature = fn(i32);
}

impl Overridable<crate::virtuals::_cut> for CodeEdit {
    type Signature = fn(i32);
}

impl Overridable<crate::virtuals::_copy> for CodeEdit {
    type Signature = fn(i32);
}

impl Overridable<crate::virtuals::_paste> for CodeEdit {
    type Signature = fn(i32);
}

impl Overridable<crate::virtuals::_has_point> for CodeEdit {
    type Signature = fn(Vector2) -> bool;
}

impl Overridable<crate::virtuals::_get_minimum_size> for CodeEdit {
    type Signature = fn() -> Vector2;
}

impl Overridable<crate::virtuals::_draw> for CodeEdit {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_ready> for CodeEdit {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for CodeEdit {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for CodeEdit {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for CodeEdit {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for CodeEdit {
    type Signature = fn();
}

impl HasBase for CodeEdit {
    type Base = TextEdit;
}

unsafe impl Inherits<TextEdit> for CodeEdit {}
unsafe impl Inherits<Control> for CodeEdit {}
unsafe impl Inherits<CanvasItem> for CodeEdit {}
unsafe impl Inherits<Node> for CodeEdit {}
unsafe impl Inherits<Object> for CodeEdit {}

impl Deref for CodeEdit {
    type Target = TextEdit;

    fn deref(&self) -> &TextEdit {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<CodeEdit>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "CodeEdit", parent: Some("TextEdit"), ref_counted: false, construct: wrap_handle }
}

impl CodeEdit {
    pub const NIL: Self = CodeEdit(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_text_edit(&self) -> &TextEdit {
        upcast_ref(self)
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

    /// Property `code_completion_enabled`.
    pub fn code_completion_enabled(&self) -> bool {
        self.advanced().is_code_completion_enabled()
    }

    pub fn set_code_completion_enabled(&self, value: bool) {
        self.advanced().set_code_completion_enabled(value)
    }

    /// Property `auto_brace_completion_enabled`.
    pub fn auto_brace_completion_enabled(&self) -> bool {
        self.advanced().is_auto_brace_completion_enabled()
    }

    pub fn set_auto_brace_completion_enabled(&self, value: bool) {
        self.advanced().set_auto_brace_completion_enabled(value)
    }

    /// Property `code_completion_prefixes`.
    pub fn code_completion_prefixes(&self) -> Vec<GString> {
        self.advanced().get_code_completion_prefixes().to_vec()
    }

    pub fn set_code_completion_prefixes(&self, value: &[GString]) {
        self.advanced().set_code_completion_prefixes(&TypedArray::from_slice(value))
    }

    pub fn request_code_completion(&self, force: bool) {
        self.advanced().request_code_completion(force)
    }

    pub fn add_code_completion_option(&self, r#type: crate::gui::code_edit::CodeCompletionKind, display_text: &str, insert_text: &str, text_color: Color, icon: Option<&Resource>, value: &Variant, location: i32) {
        self.advanced().add_code_completion_option(r#type, &GString::from(display_text), &GString::from(insert_text), text_color, icon, value, location)
    }

    pub fn update_code_completion_options(&self, force: bool) {
        self.advanced().update_code_completion_options(force)
    }

    pub fn get_code_completion_options(&self) -> Vec<Dictionary> {
        self.advanced().get_code_completion_options().to_vec()
    }

    pub fn confirm_code_completion(&self, replace: bool) {
        self.advanced().confirm_code_completion(replace)
    }

    pub fn cancel_code_completion(&self) {
        self.advanced().cancel_code_completion()
    }

    /// Connect `f` to the `code_completion_requested` signal.
    pub fn on_code_completion_requested(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "code_completion_requested", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `symbol_lookup` signal.
    pub fn on_symbol_lookup(&self, mut f: impl FnMut(GString, i64, i64) + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "symbol_lookup", move |args| {
            f(args.arg::<GString>(0), args.arg::<i64>(1), args.arg::<i64>(2));
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
}

/// Raw surface of [`CodeEdit`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(CodeEdit);

impl Advanced {
    pub fn instance(&self) -> &CodeEdit {
        &self.0
    }

    pub fn set_code_completion_enabled(&self, code_completion_enabled: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&code_completion_enabled);
        unsafe { frame.call(binds().code_edit.set_code_completion_enabled, self.0.handle()) }
    }

    pub fn is_code_completion_enabled(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().code_edit.is_code_completion_enabled, self.0.handle()) }
    }

    pub fn set_auto_brace_completion_enabled(&self, auto_brace_completion_enabled: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&auto_brace_completion_enabled);
        unsafe { frame.call(binds().code_edit.set_auto_brace_completion_enabled, self.0.handle()) }
    }

    pub fn is_auto_brace_completion_enabled(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().code_edit.is_auto_brace_completion_enabled, self.0.handle()) }
    }

    pub fn set_code_completion_prefixes(&self, code_completion_prefixes: &TypedArray<GString>) {
        let mut frame = CallFrame::new();
        frame.arg(code_completion_prefixes);
        unsafe { frame.call(binds().code_edit.set_code_completion_prefixes, self.0.handle()) }
    }

    pub fn get_code_completion_prefixes(&self) -> TypedArray<GString> {
        unsafe { CallFrame::new().call_ret(binds().code_edit.get_code_completion_prefixes, self.0.handle()) }
    }

    pub fn request_code_completion(&self, force: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&force);
        unsafe { frame.call(binds().code_edit.request_code_completion, self.0.handle()) }
    }

    pub fn add_code_completion_option(&self, r#type: crate::gui::code_edit::CodeCompletionKind, display_text: &GString, insert_text: &GString, text_color: Color, icon: Option<&Resource>, value: &Variant, location: i32) {
        let mut frame = CallFrame::new();
        frame.arg(&r#type).arg(display_text).arg(insert_text).arg(&text_color).arg(&icon.map_or(ObjectPtr::NULL, |o| o.handle())).arg(value).arg(&i64::from(location));
        unsafe { frame.call(binds().code_edit.add_code_completion_option, self.0.handle()) }
    }

    pub fn update_code_completion_options(&self, force: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&force);
        unsafe { frame.call(binds().code_edit.update_code_completion_options, self.0.handle()) }
    }

    pub fn get_code_completion_options(&self) -> TypedArray<Dictionary> {
        unsafe { CallFrame::new().call_ret(binds().code_edit.get_code_completion_options, self.0.handle()) }
    }

    pub fn confirm_code_completion(&self, replace: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&replace);
        unsafe { frame.call(binds().code_edit.confirm_code_completion, self.0.handle()) }
    }

    pub fn cancel_code_completion(&self) {
        unsafe { CallFrame::new().call(binds().code_edit.cancel_code_completion, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::gui::text_edit::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_text_edit().advanced()
    }
}

/// Engine enum `CodeEdit.CodeCompletionKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodeCompletionKind(i64);

impl CodeCompletionKind {
    pub const CLASS: CodeCompletionKind = CodeCompletionKind(0);
    pub const FUNCTION: CodeCompletionKind = CodeCompletionKind(1);
    pub const SIGNAL: CodeCompletionKind = CodeCompletionKind(2);
    pub const VARIABLE: CodeCompletionKind = CodeCompletionKind(3);
    pub const MEMBER: CodeCompletionKind = CodeCompletionKind(4);
    pub const ENUM: CodeCompletionKind = CodeCompletionKind(5);
    pub const CONSTANT: CodeCompletionKind = CodeCompletionKind(6);
    pub const NODE_PATH: CodeCompletionKind = CodeCompletionKind(7);
    pub const FILE_PATH: CodeCompletionKind = CodeCompletionKind(8);
    pub const PLAIN_TEXT: CodeCompletionKind = CodeCompletionKind(9);
}

impl EngineEnum for CodeCompletionKind {
    const NAME: &'static str = "CodeEdit.CodeCompletionKind";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        CodeCompletionKind(ord)
    }
}

/// Engine enum `CodeEdit.CodeCompletionLocation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodeCompletionLocation(i64);

impl CodeCompletionLocation {
    pub const LOCAL: CodeCompletionLocation = CodeCompletionLocation(0);
    pub const PARENT_MASK: CodeCompletionLocation = CodeCompletionLocation(256);
    pub const OTHER_USER_CODE: CodeCompletionLocation = CodeCompletionLocation(512);
    pub const OTHER: CodeCompletionLocation = CodeCompletionLocation(1024);
}

impl EngineEnum for CodeCompletionLocation {
    const NAME: &'static str = "CodeEdit.CodeCompletionLocation";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        CodeCompletionLocation(ord)
    }
}
