// Objects, the instance-id map, extension classes and signals.
//
// Objects are leaked on allocation and never reused, so a freed handle stays
// a valid address that merely reports `freed`. No engine lock is held while
// calling back into the host.

use std::collections::{HashMap, HashSet};
use std::ffi::c_void;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use gdbind_ffi::{CallError, ClassInstancePtr, ExtensionClassInfo, ObjectPtr};

use crate::manifest::db;
use crate::value::{
    destroy_slot, destroy_variant, lock, read_variant, take_slot, write_slot, write_variant,
    CallableRef, Kind, Value,
};

pub struct Connection {
    pub signal: String,
    pub callable: CallableRef,
    pub flags: u32,
}

const ONE_SHOT: u32 = 4;

#[derive(Clone, Copy)]
pub struct ExtBinding {
    pub info: ExtensionClassInfo,
    pub instance: ClassInstancePtr,
}

#[derive(Clone)]
pub struct Cell {
    pub layer: i64,
    pub coords: [i32; 2],
    pub source: i64,
    pub atlas: [i32; 2],
    pub alternative: i64,
}

#[derive(Default)]
pub struct State {
    pub props: HashMap<String, Value>,
    pub connections: Vec<Connection>,
    pub children: Vec<ObjectPtr>,
    pub parent: Option<ObjectPtr>,
    pub ext: Option<ExtBinding>,
    pub cells: Vec<Cell>,
    pub layers: i64,
    pub polygons: Vec<Value>,
    pub pending_options: Vec<Value>,
    pub options: Vec<Value>,
    pub focus: bool,
}

pub struct FakeObject {
    pub id: u64,
    pub ref_counted: bool,
    class: Mutex<String>,
    refcount: AtomicU32,
    freed: AtomicBool,
    state: Mutex<State>,
}

impl FakeObject {
    pub fn class(&self) -> String {
        lock(&self.class).clone()
    }

    pub fn state(&self) -> MutexGuard<'_, State> {
        lock(&self.state)
    }

    pub fn refcount(&self) -> u32 {
        self.refcount.load(Ordering::SeqCst)
    }

    pub fn reference(&self) -> u32 {
        self.refcount.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True when the count dropped to zero.
    pub fn unreference(&self) -> bool {
        let prev = self.refcount.fetch_sub(1, Ordering::SeqCst);
        if prev == 0 {
            self.refcount.store(0, Ordering::SeqCst);
            eprintln!("[test-engine] unreference below zero on object {}", self.id);
            return false;
        }
        prev == 1
    }

    /// Engine class whose manifest entry describes this object.
    pub fn engine_class(&self) -> String {
        engine_class_of(&self.class())
    }

    pub fn prop(&self, name: &str) -> Option<Value> {
        if let Some(v) = self.state().props.get(name) {
            return Some(v.clone());
        }
        let def = db().property(&self.engine_class(), name)?;
        let default = def.default_value.as_deref().unwrap_or("");
        Some(crate::value::parse_default(Kind::parse(&def.ty), default))
    }

    pub fn set_prop(&self, name: &str, value: Value) -> Option<Value> {
        self.state().props.insert(name.to_owned(), value)
    }
}

pub struct ExtClass {
    pub parent: String,
    pub info: ExtensionClassInfo,
}

#[derive(Default)]
struct Engine {
    live: HashMap<u64, ObjectPtr>,
    known: HashSet<usize>,
    next_id: u64,
    ext_classes: HashMap<String, ExtClass>,
    singletons: HashMap<String, ObjectPtr>,
    on_object_freed: Option<unsafe extern "C" fn(ObjectPtr)>,
    on_shutdown: Option<unsafe extern "C" fn()>,
    log: Vec<(u32, String)>,
}

fn engine() -> MutexGuard<'static, Engine> {
    static ENGINE: OnceLock<Mutex<Engine>> = OnceLock::new();
    lock(ENGINE.get_or_init(|| Mutex::new(Engine { next_id: 1, ..Engine::default() })))
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// Nearest manifest class for `class`, following extension parents.
pub fn engine_class_of(class: &str) -> String {
    let mut current = class.to_owned();
    let engine = engine();
    while !db().classes.contains_key(&current) {
        match engine.ext_classes.get(&current) {
            Some(ext) => current = ext.parent.clone(),
            None => break,
        }
    }
    current
}

pub fn class_exists(class: &str) -> bool {
    db().classes.contains_key(class) || engine().ext_classes.contains_key(class)
}

pub fn is_subclass(class: &str, ancestor: &str) -> bool {
    let mut current = class.to_owned();
    loop {
        if current == ancestor {
            return true;
        }
        let parent = engine().ext_classes.get(&current).map(|e| e.parent.clone());
        match parent {
            Some(p) => current = p,
            None => return db().is_subclass(&current, ancestor),
        }
    }
}

pub fn register_extension(name: &str, parent: &str, info: ExtensionClassInfo) -> bool {
    if !class_exists(parent) || class_exists(name) {
        return false;
    }
    engine().ext_classes.insert(name.to_owned(), ExtClass { parent: parent.to_owned(), info });
    true
}

pub fn unregister_extension(name: &str) {
    engine().ext_classes.remove(name);
}

fn extension_info(name: &str) -> Option<ExtensionClassInfo> {
    engine().ext_classes.get(name).map(|e| e.info)
}

// ---------------------------------------------------------------------------
// Lifetime
// ---------------------------------------------------------------------------

pub fn get(ptr: ObjectPtr) -> Option<&'static FakeObject> {
    if ptr.is_null() || !engine().known.contains(&ptr.addr()) {
        return None;
    }
    // SAFETY: every known address is a leaked `FakeObject`.
    let obj = unsafe { &*(ptr.0 as *const FakeObject) };
    (!obj.freed.load(Ordering::SeqCst)).then_some(obj)
}

pub fn ptr_of(obj: &'static FakeObject) -> ObjectPtr {
    ObjectPtr((obj as *const FakeObject).cast_mut().cast::<c_void>())
}

/// Allocate a builtin object. Refcounted objects start at zero.
pub fn alloc(class: &str) -> ObjectPtr {
    let ref_counted = is_subclass(class, "RefCounted");
    alloc_in(&mut engine(), class, ref_counted)
}

fn alloc_in(engine: &mut Engine, class: &str, ref_counted: bool) -> ObjectPtr {
    let id = engine.next_id;
    engine.next_id += 1;
    let obj: &'static FakeObject = Box::leak(Box::new(FakeObject {
        id,
        ref_counted,
        class: Mutex::new(class.to_owned()),
        refcount: AtomicU32::new(0),
        freed: AtomicBool::new(false),
        state: Mutex::new(State { layers: 1, ..State::default() }),
    }));
    let ptr = ptr_of(obj);
    engine.known.insert(ptr.addr());
    engine.live.insert(id, ptr);
    ptr
}

/// Construct by class name: extension classes go through the host.
pub fn construct(class: &str) -> ObjectPtr {
    if let Some(info) = extension_info(class) {
        return unsafe { (info.create_instance)(info.class_userdata) };
    }
    match db().classes.get(class) {
        Some(def) if def.is_instantiable => alloc(class),
        _ => ObjectPtr::NULL,
    }
}

pub fn set_instance(ptr: ObjectPtr, class: &str, instance: ClassInstancePtr) {
    let (Some(obj), Some(info)) = (get(ptr), extension_info(class)) else {
        eprintln!("[test-engine] set_instance on unknown object or class {class}");
        return;
    };
    *lock(&obj.class) = class.to_owned();
    obj.state().ext = Some(ExtBinding { info, instance });
}

pub fn from_instance_id(id: u64) -> ObjectPtr {
    engine().live.get(&id).copied().unwrap_or(ObjectPtr::NULL)
}

pub fn singleton(name: &str) -> ObjectPtr {
    if !db().singletons.iter().any(|s| s == name) {
        return ObjectPtr::NULL;
    }
    let mut engine = engine();
    if let Some(&ptr) = engine.singletons.get(name) {
        return ptr;
    }
    let ptr = alloc_in(&mut engine, name, false);
    engine.singletons.insert(name.to_owned(), ptr);
    ptr
}

/// Free an object now: the host hears about it first, then its instance
/// data is released, then its children go.
pub fn destroy(ptr: ObjectPtr) {
    let Some(obj) = get(ptr) else {
        return;
    };
    if obj.freed.swap(true, Ordering::SeqCst) {
        return;
    }
    let on_freed = {
        let mut engine = engine();
        engine.live.remove(&obj.id);
        engine.on_object_freed
    };
    if let Some(on_freed) = on_freed {
        unsafe { on_freed(ptr) };
    }

    let (ext, children, parent, dropped) = {
        let mut state = obj.state();
        let dropped = (std::mem::take(&mut state.props), std::mem::take(&mut state.connections));
        (state.ext.take(), std::mem::take(&mut state.children), state.parent.take(), dropped)
    };
    if let Some(ext) = ext {
        unsafe { (ext.info.free_instance)(ext.info.class_userdata, ext.instance) };
    }
    if let Some(parent) = parent.and_then(get) {
        parent.state().children.retain(|c| *c != ptr);
    }
    for child in children {
        if let Some(c) = get(child) {
            c.state().parent = None;
        }
        destroy(child);
    }
    drop(dropped);
}

pub fn set_host_hooks(
    on_object_freed: unsafe extern "C" fn(ObjectPtr),
    on_shutdown: unsafe extern "C" fn(),
) {
    let mut engine = engine();
    engine.on_object_freed = Some(on_object_freed);
    engine.on_shutdown = Some(on_shutdown);
}

pub fn shutdown_hook() -> Option<unsafe extern "C" fn()> {
    engine().on_shutdown
}

pub fn live_count() -> usize {
    engine().live.len()
}

pub fn push_log(level: u32, msg: String) {
    engine().log.push((level, msg));
}

pub fn log_lines() -> Vec<(u32, String)> {
    engine().log.clone()
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

pub fn has_signal(ptr: ObjectPtr, signal: &str) -> bool {
    get(ptr).is_some_and(|obj| db().has_signal(&obj.engine_class(), signal))
}

/// Engine error codes for `connect`.
pub const OK: i64 = 0;
pub const ERR_INVALID_PARAMETER: i64 = 31;

pub fn connect(ptr: ObjectPtr, signal: &str, callable: Option<CallableRef>, flags: u32) -> i64 {
    let (Some(obj), Some(callable)) = (get(ptr), callable) else {
        return ERR_INVALID_PARAMETER;
    };
    if !has_signal(ptr, signal) {
        return ERR_INVALID_PARAMETER;
    }
    let mut state = obj.state();
    if state.connections.iter().any(|c| c.signal == signal && Arc::ptr_eq(&c.callable, &callable)) {
        return ERR_INVALID_PARAMETER;
    }
    state.connections.push(Connection { signal: signal.to_owned(), callable, flags });
    OK
}

pub fn is_connected(ptr: ObjectPtr, signal: &str, callable: &Option<CallableRef>) -> bool {
    let (Some(obj), Some(callable)) = (get(ptr), callable) else {
        return false;
    };
    obj.state().connections.iter().any(|c| c.signal == signal && Arc::ptr_eq(&c.callable, callable))
}

/// Call every connection of `signal` in connection order. One-shot
/// connections are removed before they run.
pub fn emit(ptr: ObjectPtr, signal: &str, args: Vec<Value>) {
    let Some(obj) = get(ptr) else {
        return;
    };
    let targets: Vec<CallableRef> = {
        let mut state = obj.state();
        let targets = state
            .connections
            .iter()
            .filter(|c| c.signal == signal)
            .map(|c| c.callable.clone())
            .collect();
        state.connections.retain(|c| c.signal != signal || c.flags & ONE_SHOT == 0);
        targets
    };
    for callable in targets {
        let result = call_callable(&callable, &args);
        if let Err(err) = result {
            eprintln!("[test-engine] signal {signal} handler failed with call error {}", err.error);
        }
    }
}

pub fn call_callable(callable: &CallableRef, args: &[Value]) -> Result<Value, CallError> {
    let mut words: Vec<[usize; 3]> = args.iter().cloned().map(write_variant).collect();
    let ptrs: Vec<*const c_void> =
        words.iter().map(|w| (w as *const [usize; 3]).cast::<c_void>()).collect();
    let mut ret = [0usize; 3];
    let mut error = CallError::default();
    unsafe {
        (callable.info.call_func)(
            callable.info.userdata,
            ptrs.as_ptr(),
            ptrs.len() as i64,
            (&raw mut ret).cast::<c_void>(),
            &mut error,
        );
    }
    for w in &mut words {
        unsafe { destroy_variant(w) };
    }
    let value = unsafe { read_variant(&ret) };
    unsafe { destroy_variant(&mut ret) };
    if error.is_ok() { Ok(value) } else { Err(error) }
}

// ---------------------------------------------------------------------------
// Overridables
// ---------------------------------------------------------------------------

/// Invoke the host override of `name` on an extension instance. `None`
/// when the object has no host class or the host does not override it.
pub fn call_virtual(ptr: ObjectPtr, name: &str, args: Vec<Value>) -> Option<Value> {
    let obj = get(ptr)?;
    let ext = obj.state().ext?;
    let (name_ptr, name_len) = (name.as_ptr(), name.len() as u32);
    let vdata = unsafe { (ext.info.get_virtual)(ext.info.class_userdata, name_ptr, name_len) };
    if vdata.is_null() {
        return None;
    }
    let (arg_types, ret_type) = db().virtual_signature(&obj.engine_class(), name)?;
    let kinds: Vec<Kind> = arg_types.iter().map(|t| Kind::parse(t)).collect();

    let mut slots: Vec<[u64; 4]> = vec![[0; 4]; kinds.len()];
    for ((slot, kind), value) in slots.iter_mut().zip(&kinds).zip(args) {
        unsafe { write_slot(*kind, slot.as_mut_ptr().cast::<u8>(), value) };
    }
    let ptrs: Vec<*const c_void> = slots.iter().map(|s| s.as_ptr().cast::<c_void>()).collect();
    let mut ret = [0u64; 4];
    let ret_ptr =
        if ret_type.is_some() { ret.as_mut_ptr().cast::<c_void>() } else { std::ptr::null_mut() };

    unsafe {
        (ext.info.call_virtual_with_data)(
            ext.instance,
            name_ptr,
            name_len,
            vdata,
            ptrs.as_ptr(),
            ret_ptr,
        )
    };

    for (slot, kind) in slots.iter_mut().zip(&kinds) {
        unsafe { destroy_slot(*kind, slot.as_mut_ptr().cast::<u8>()) };
    }
    match ret_type {
        Some(ty) => Some(unsafe { take_slot(Kind::parse(&ty), ret.as_mut_ptr().cast::<u8>()) }),
        None => Some(Value::Nil),
    }
}

