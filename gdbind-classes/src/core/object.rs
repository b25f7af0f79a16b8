// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;

use gdbind_runtime::*;

use crate::bind_table::binds;

/// Engine class `Object`, the root of every class chain.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Object(ObjectRef);

impl EngineClass for Object {
    const CLASS_NAME: &'static str = "Object";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        Object(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        if Self::VIRTUALS.contains(&name) { Some(Self::CLASS_NAME) } else { None }
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<Object>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "Object", parent: None, ref_counted: false, construct: wrap_handle }
}

impl Object {
    pub const NIL: Self = Object(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn get_class(&self) -> String {
        self.advanced().get_class().to_string()
    }

    pub fn get_instance_id(&self) -> i64 {
        self.advanced().get_instance_id()
    }

    pub fn set(&self, property: &str, value: &Variant) {
        self.advanced().set(&StringName::from(property), value)
    }

    pub fn get(&self, property: &str) -> Variant {
        self.advanced().get(&StringName::from(property))
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.advanced().has_method(&StringName::from(method))
    }

    pub fn has_signal(&self, signal: &str) -> bool {
        self.advanced().has_signal(&StringName::from(signal))
    }

    pub fn emit_signal(&self, signal: &str) -> crate::global_enums::Error {
        self.advanced().emit_signal(&StringName::from(signal))
    }

    pub fn is_connected(&self, signal: &str, callable: &Callable) -> bool {
        self.advanced().is_connected(&StringName::from(signal), callable)
    }

    /// Connect `f` to the `property_list_changed` signal.
    pub fn on_property_list_changed(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "property_list_changed", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `script_changed` signal.
    pub fn on_script_changed(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "script_changed", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
}

/// Raw surface of [`Object`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(Object);

impl Advanced {
    pub fn instance(&self) -> &Object {
        &self.0
    }

    pub fn get_class(&self) -> GString {
        unsafe { CallFrame::new().call_ret(binds().object.get_class, self.0.handle()) }
    }

    pub fn get_instance_id(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().object.get_instance_id, self.0.handle()) }
    }

    pub fn set(&self, property: &StringName, value: &Variant) {
        let mut frame = CallFrame::new();
        frame.arg(property).arg(value);
        unsafe { frame.call(binds().object.set, self.0.handle()) }
    }

    pub fn get(&self, property: &StringName) -> Variant {
        let mut frame = CallFrame::new();
        frame.arg(property);
        unsafe { frame.call_ret(binds().object.get, self.0.handle()) }
    }

    pub fn has_method(&self, method: &StringName) -> bool {
        let mut frame = CallFrame::new();
        frame.arg(method);
        unsafe { frame.call_ret(binds().object.has_method, self.0.handle()) }
    }

    pub fn has_signal(&self, signal: &StringName) -> bool {
        let mut frame = CallFrame::new();
        frame.arg(signal);
        unsafe { frame.call_ret(binds().object.has_signal, self.0.handle()) }
    }

    pub fn emit_signal(&self, signal: &StringName) -> crate::global_enums::Error {
        let mut frame = CallFrame::new();
        frame.arg(signal);
        unsafe { frame.call_ret(binds().object.emit_signal, self.0.handle()) }
    }

    pub fn is_connected(&self, signal: &StringName, callable: &Callable) -> bool {
        let mut frame = CallFrame::new();
        frame.arg(signal).arg(callable);
        unsafe { frame.call_ret(binds().object.is_connected, self.0.handle()) }
    }
}


/// Engine bitfield `Object.ConnectFlags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConnectFlags(i64);

impl ConnectFlags {
    pub const DEFERRED: ConnectFlags = ConnectFlags(1);
    pub const PERSIST: ConnectFlags = ConnectFlags(2);
    pub const ONE_SHOT: ConnectFlags = ConnectFlags(4);
    pub const REFERENCE_COUNTED: ConnectFlags = ConnectFlags(8);

    pub fn contains(self, other: ConnectFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl EngineEnum for ConnectFlags {
    const NAME: &'static str = "Object.ConnectFlags";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        ConnectFlags(ord)
    }
}

impl std::ops::BitOr for ConnectFlags {
    type Output = ConnectFlags;

    fn bitor(self, rhs: ConnectFlags) -> ConnectFlags {
        ConnectFlags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ConnectFlags {
    fn bitor_assign(&mut self, rhs: ConnectFlags) {
        self.0 |= rhs.0;
    }
}
