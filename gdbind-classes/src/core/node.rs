// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Object;

/// Engine class `Node` (inherits `Object`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Node(ObjectRef);

impl EngineClass for Node {
    const CLASS_NAME: &'static str = "Node";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &["_ready", "_process", "_physics_process", "_enter_tree", "_exit_tree"];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        Node(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_ready> for Node {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for Node {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for Node {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for Node {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for Node {
    type Signature = fn();
}

impl HasBase for Node {
    type Base = Object;
}

unsafe impl Inherits<Object> for Node {}

impl Deref for Node {
    type Target = Object;

    fn deref(&self) -> &Object {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<Node>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "Node", parent: Some("Object"), ref_counted: false, construct: wrap_handle }
}

impl Node {
    pub const NIL: Self = Node(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    /// Property `name`.
    pub fn name(&self) -> String {
        self.advanced().get_name().to_string()
    }

    pub fn set_name(&self, value: &str) {
        self.advanced().set_name(&StringName::from(value))
    }

    pub fn add_child(&self, node: &impl Inherits<Node>, force_readable_name: bool) {
        self.advanced().add_child(Some(upcast_ref(node)), force_readable_name)
    }

    pub fn remove_child(&self, node: &impl Inherits<Node>) {
        self.advanced().remove_child(Some(upcast_ref(node)))
    }

    pub fn get_child_count(&self, include_internal: bool) -> i64 {
        self.advanced().get_child_count(include_internal)
    }

    pub fn get_child(&self, idx: i32, include_internal: bool) -> Option<Node> {
        self.advanced().get_child(idx, include_internal)
    }

    pub fn get_parent(&self) -> Option<Node> {
        self.advanced().get_parent()
    }

    pub fn get_path(&self) -> String {
        self.advanced().get_path().to_string()
    }

    pub fn get_node_or_null(&self, path: &str) -> Option<Node> {
        self.advanced().get_node_or_null(&NodePath::from(path))
    }

    pub fn is_inside_tree(&self) -> bool {
        self.advanced().is_inside_tree()
    }

    pub fn queue_free(&self) {
        self.advanced().queue_free()
    }

    /// Connect `f` to the `ready` signal.
    pub fn on_ready(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "ready", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `tree_entered` signal.
    pub fn on_tree_entered(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "tree_entered", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `tree_exiting` signal.
    pub fn on_tree_exiting(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "tree_exiting", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `renamed` signal.
    pub fn on_renamed(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "renamed", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }

    /// Connect `f` to the `child_entered_tree` signal.
    pub fn on_child_entered_tree(&self, mut f: impl FnMut(Option<Node>) + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "child_entered_tree", move |args| {
            f(args.object::<Node>(0));
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
}

/// Raw surface of [`Node`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(Node);

impl Advanced {
    pub fn instance(&self) -> &Node {
        &self.0
    }

    pub fn set_name(&self, name: &StringName) {
        let mut frame = CallFrame::new();
        frame.arg(name);
        unsafe { frame.call(binds().node.set_name, self.0.handle()) }
    }

    pub fn get_name(&self) -> StringName {
        unsafe { CallFrame::new().call_ret(binds().node.get_name, self.0.handle()) }
    }

    pub fn add_child(&self, node: Option<&Node>, force_readable_name: bool) {
        let mut frame = CallFrame::new();
        frame.arg(&node.map_or(ObjectPtr::NULL, |o| o.handle())).arg(&force_readable_name);
        unsafe { frame.call(binds().node.add_child, self.0.handle()) }
    }

    pub fn remove_child(&self, node: Option<&Node>) {
        let mut frame = CallFrame::new();
        frame.arg(&node.map_or(ObjectPtr::NULL, |o| o.handle()));
        unsafe { frame.call(binds().node.remove_child, self.0.handle()) }
    }

    pub fn get_child_count(&self, include_internal: bool) -> i64 {
        let mut frame = CallFrame::new();
        frame.arg(&include_internal);
        unsafe { frame.call_ret(binds().node.get_child_count, self.0.handle()) }
    }

    pub fn get_child(&self, idx: i32, include_internal: bool) -> Option<Node> {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(idx)).arg(&include_internal);
        let ret: ObjectPtr = unsafe { frame.call_ret(binds().node.get_child, self.0.handle()) };
        unsafe { adopt::<Node>(ret, Ownership::Borrowed) }
    }

    pub fn get_parent(&self) -> Option<Node> {
        let ret: ObjectPtr = unsafe { CallFrame::new().call_ret(binds().node.get_parent, self.0.handle()) };
        unsafe { adopt::<Node>(ret, Ownership::Borrowed) }
    }

    pub fn get_path(&self) -> NodePath {
        unsafe { CallFrame::new().call_ret(binds().node.get_path, self.0.handle()) }
    }

    pub fn get_node_or_null(&self, path: &NodePath) -> Option<Node> {
        let mut frame = CallFrame::new();
        frame.arg(path);
        let ret: ObjectPtr = unsafe { frame.call_ret(binds().node.get_node_or_null, self.0.handle()) };
        unsafe { adopt::<Node>(ret, Ownership::Borrowed) }
    }

    pub fn is_inside_tree(&self) -> bool {
        unsafe { CallFrame::new().call_ret(binds().node.is_inside_tree, self.0.handle()) }
    }

    pub fn queue_free(&self) {
        unsafe { CallFrame::new().call(binds().node.queue_free, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::core::object::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_object().advanced()
    }
}

/// Engine enum `Node.ProcessMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProcessMode(i64);

impl ProcessMode {
    pub const INHERIT: ProcessMode = ProcessMode(0);
    pub const PAUSABLE: ProcessMode = ProcessMode(1);
    pub const WHEN_PAUSED: ProcessMode = ProcessMode(2);
    pub const ALWAYS: ProcessMode = ProcessMode(3);
    pub const DISABLED: ProcessMode = ProcessMode(4);
}

impl EngineEnum for ProcessMode {
    const NAME: &'static str = "Node.ProcessMode";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        ProcessMode(ord)
    }
}
