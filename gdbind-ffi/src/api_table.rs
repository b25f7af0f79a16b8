use std::ffi::c_void;

use crate::extension::{CallableCustomInfo, ExtensionClassInfo};
use crate::handles::*;
use crate::layout::CallError;
use crate::variant_type::VariantType;

/// Bumped whenever a sub-table changes shape.
pub const ABI_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Top-level table
// ---------------------------------------------------------------------------

/// The table the engine hands the host at init time. Every entry point the
/// binding consumes lives in one of the fixed sub-tables.
#[repr(C)]
pub struct EngineInterface {
    pub version: u32,
    pub object: *const ObjectApi,
    pub classdb: *const ClassDbApi,
    pub builtin: *const BuiltinApi,
    pub string: *const StringApi,
    pub array: *const ArrayApi,
    pub dictionary: *const DictionaryApi,
    pub packed: *const PackedApi,
    pub variant: *const VariantApi,
    pub callable: *const CallableApi,
    pub logging: *const LoggingApi,
}

unsafe impl Send for EngineInterface {}
unsafe impl Sync for EngineInterface {}

// ---------------------------------------------------------------------------
// ObjectApi
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct ObjectApi {
    /// The pointer-call entry. `args` holds one pointer per declared argument,
    /// in declaration order. `ret` is null for methods without a return value.
    pub method_bind_ptrcall: unsafe extern "C" fn(
        bind: MethodBindPtr,
        obj: ObjectPtr,
        args: *const ConstTypePtr,
        ret: TypePtr,
    ),

    /// Free an object immediately. Attached host instance data is released
    /// through `ExtensionClassInfo::free_instance`.
    pub destroy: unsafe extern "C" fn(obj: ObjectPtr),

    /// Increment the reference count of a RefCounted object. Returns the new count.
    pub reference: unsafe extern "C" fn(obj: ObjectPtr) -> u32,

    /// Decrement the reference count. Returns true when the count reached zero;
    /// the caller must then call `destroy`.
    pub unreference: unsafe extern "C" fn(obj: ObjectPtr) -> bool,

    /// Current reference count (0 for objects that are not RefCounted).
    pub reference_count: unsafe extern "C" fn(obj: ObjectPtr) -> u32,

    pub get_instance_id: unsafe extern "C" fn(obj: ObjectPtr) -> u64,

    /// Null when no live object has this id.
    pub from_instance_id: unsafe extern "C" fn(id: u64) -> ObjectPtr,

    /// Write the runtime class name (UTF-8) into `buf`. Returns the full length,
    /// which may exceed `buf_len`.
    pub get_class_name: unsafe extern "C" fn(obj: ObjectPtr, buf: *mut u8, buf_len: u32) -> u32,

    /// Connect `callable` (a Callable slot) to the named signal. Returns the
    /// engine error code (0 = OK).
    pub connect: unsafe extern "C" fn(
        obj: ObjectPtr,
        signal: *const u8,
        signal_len: u32,
        callable: ConstTypePtr,
        flags: u32,
    ) -> i64,

    /// Attach host instance data of a host-defined class to a freshly constructed object.
    pub set_instance: unsafe extern "C" fn(
        obj: ObjectPtr,
        class_name: *const u8,
        class_name_len: u32,
        instance: ClassInstancePtr,
    ),
}

// ---------------------------------------------------------------------------
// ClassDbApi
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct ClassDbApi {
    /// Construct an instance by class name. Null for unknown or abstract classes.
    /// RefCounted results start with a count of zero.
    pub construct_object: unsafe extern "C" fn(class_name: *const u8, len: u32) -> ObjectPtr,

    /// Resolve a (class, method) pair. Null when the engine has no such method.
    pub get_method_bind: unsafe extern "C" fn(
        class_name: *const u8,
        class_len: u32,
        method: *const u8,
        method_len: u32,
        hash: i64,
    ) -> MethodBindPtr,

    /// Global singleton by name. Null when no such singleton exists.
    pub get_singleton: unsafe extern "C" fn(name: *const u8, len: u32) -> ObjectPtr,

    /// Register a host-defined class deriving from `parent`. Returns false when
    /// the parent is unknown or the name is taken.
    pub register_extension_class: unsafe extern "C" fn(
        class_name: *const u8,
        class_len: u32,
        parent: *const u8,
        parent_len: u32,
        info: *const ExtensionClassInfo,
    ) -> bool,

    pub unregister_extension_class: unsafe extern "C" fn(class_name: *const u8, len: u32),
}

// ---------------------------------------------------------------------------
// BuiltinApi: lifecycle of carrier slots, keyed by value type
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct BuiltinApi {
    pub construct_default: unsafe extern "C" fn(ty: VariantType, dst: TypePtr),
    /// `dst` must be uninitialized; it receives a new reference or a deep copy.
    pub copy: unsafe extern "C" fn(ty: VariantType, dst: TypePtr, src: ConstTypePtr),
    pub destroy: unsafe extern "C" fn(ty: VariantType, ptr: TypePtr),
    pub equals: unsafe extern "C" fn(ty: VariantType, a: ConstTypePtr, b: ConstTypePtr) -> bool,
}

// ---------------------------------------------------------------------------
// StringApi: String, StringName and NodePath share one text interface
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct StringApi {
    /// Construct into uninitialized `dst`.
    pub new_with_utf8:
        unsafe extern "C" fn(ty: VariantType, dst: TypePtr, utf8: *const u8, len: u32),

    /// Write the UTF-8 bytes into `buf`. Returns the full length, which may
    /// exceed `buf_len`; the caller retries with a larger buffer.
    pub to_utf8:
        unsafe extern "C" fn(ty: VariantType, src: ConstTypePtr, buf: *mut u8, buf_len: u32) -> u32,
}

// ---------------------------------------------------------------------------
// ArrayApi
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct ArrayApi {
    pub size: unsafe extern "C" fn(arr: ConstTypePtr) -> i64,
    /// Copy element `index` into uninitialized Variant `out`. False when out of range.
    pub get: unsafe extern "C" fn(arr: ConstTypePtr, index: i64, out: TypePtr) -> bool,
    /// False when out of range or when the value violates the element type.
    pub set: unsafe extern "C" fn(arr: TypePtr, index: i64, value: ConstTypePtr) -> bool,
    pub push: unsafe extern "C" fn(arr: TypePtr, value: ConstTypePtr) -> bool,
    pub resize: unsafe extern "C" fn(arr: TypePtr, len: i64),
    pub clear: unsafe extern "C" fn(arr: TypePtr),
    /// Constrain the element type. `class_name` is empty for builtin element types.
    pub set_typed: unsafe extern "C" fn(
        arr: TypePtr,
        ty: VariantType,
        class_name: *const u8,
        class_len: u32,
    ),
    /// `NIL` for untyped arrays.
    pub element_type: unsafe extern "C" fn(arr: ConstTypePtr) -> VariantType,
}

// ---------------------------------------------------------------------------
// DictionaryApi
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct DictionaryApi {
    pub size: unsafe extern "C" fn(dict: ConstTypePtr) -> i64,
    /// Copy the value for `key` into uninitialized Variant `out`. False when absent.
    pub get: unsafe extern "C" fn(dict: ConstTypePtr, key: ConstTypePtr, out: TypePtr) -> bool,
    pub set: unsafe extern "C" fn(dict: TypePtr, key: ConstTypePtr, value: ConstTypePtr),
    pub erase: unsafe extern "C" fn(dict: TypePtr, key: ConstTypePtr) -> bool,
    /// Construct a new Array of the keys, in insertion order, into uninitialized `out`.
    pub keys: unsafe extern "C" fn(dict: ConstTypePtr, out: TypePtr),
}

// ---------------------------------------------------------------------------
// PackedApi: contiguous copy-on-write buffers
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct PackedApi {
    pub size: unsafe extern "C" fn(ty: VariantType, arr: ConstTypePtr) -> i64,
    /// Read-only view of the element storage. Null for empty arrays.
    pub ptr: unsafe extern "C" fn(ty: VariantType, arr: ConstTypePtr) -> *const u8,
    /// Writable view; detaches shared storage first.
    pub ptrw: unsafe extern "C" fn(ty: VariantType, arr: TypePtr) -> *mut u8,
    /// Detaches, then grows with default elements or truncates.
    pub resize: unsafe extern "C" fn(ty: VariantType, arr: TypePtr, len: i64),
}

// ---------------------------------------------------------------------------
// VariantApi
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct VariantApi {
    pub new_nil: unsafe extern "C" fn(dst: TypePtr),
    pub copy: unsafe extern "C" fn(dst: TypePtr, src: ConstTypePtr),
    pub destroy: unsafe extern "C" fn(v: TypePtr),
    pub equals: unsafe extern "C" fn(a: ConstTypePtr, b: ConstTypePtr) -> bool,
    pub get_type: unsafe extern "C" fn(v: ConstTypePtr) -> VariantType,
    /// Wrap a typed value (copied) into uninitialized Variant `dst`.
    pub from_type: unsafe extern "C" fn(ty: VariantType, dst: TypePtr, value: ConstTypePtr),
    /// Extract a typed value into uninitialized `dst`. False (and `dst`
    /// untouched) when the variant holds another type.
    pub to_type: unsafe extern "C" fn(ty: VariantType, dst: TypePtr, v: ConstTypePtr) -> bool,
}

// ---------------------------------------------------------------------------
// CallableApi
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct CallableApi {
    /// Construct a Callable backed by host code into uninitialized `dst`.
    pub create_custom: unsafe extern "C" fn(dst: TypePtr, info: *const CallableCustomInfo),
    /// Invoke with Variant arguments; the result goes into uninitialized Variant `ret`.
    pub call: unsafe extern "C" fn(
        callable: ConstTypePtr,
        args: *const ConstTypePtr,
        argc: i64,
        ret: TypePtr,
        error: *mut CallError,
    ),
}

// ---------------------------------------------------------------------------
// LoggingApi
// ---------------------------------------------------------------------------

pub const LOG_INFO: u32 = 0;
pub const LOG_WARNING: u32 = 1;
pub const LOG_ERROR: u32 = 2;

#[repr(C)]
pub struct LoggingApi {
    pub print: unsafe extern "C" fn(level: u32, msg: *const u8, len: u32),
}

/// Signature of the host's entry symbol.
pub type InitFn = unsafe extern "C" fn(interface: *const EngineInterface) -> *const c_void;
