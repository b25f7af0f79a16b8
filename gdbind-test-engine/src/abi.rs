// The interface table handed to the host. Every entry decodes its slots
// through `value` and forwards to `object` or `behavior`.

use std::ffi::c_void;
use std::sync::Arc;

use gdbind_ffi::*;

use crate::behavior;
use crate::manifest::{db, MethodEntry};
use crate::object;
use crate::value::*;

unsafe fn text<'a>(p: *const u8, len: u32) -> &'a str {
    if p.is_null() || len == 0 {
        return "";
    }
    let bytes = unsafe { std::slice::from_raw_parts(p, len as usize) };
    std::str::from_utf8(bytes).unwrap_or("")
}

fn write_bytes(s: &str, buf: *mut u8, buf_len: u32) -> u32 {
    let n = s.len().min(buf_len as usize);
    if n > 0 && !buf.is_null() {
        unsafe { std::ptr::copy_nonoverlapping(s.as_ptr(), buf, n) };
    }
    u32::try_from(s.len()).unwrap_or(u32::MAX)
}

// ---------------------------------------------------------------------------
// Object
// ---------------------------------------------------------------------------

unsafe extern "C" fn method_bind_ptrcall(
    bind: MethodBindPtr,
    obj: ObjectPtr,
    args: *const ConstTypePtr,
    ret: TypePtr,
) {
    if bind.is_null() {
        object::push_log(LOG_ERROR, "ptrcall through a null bind".to_owned());
        return;
    }
    let entry = unsafe { &*(bind.0 as *const MethodEntry) };
    let values: Vec<Value> = entry
        .args
        .iter()
        .enumerate()
        .map(|(i, ty)| unsafe { read_slot(Kind::parse(ty), (*args.add(i)).cast::<u8>()) })
        .collect();
    let result = behavior::call(obj, entry, values);
    if let Some(ty) = &entry.ret {
        if !ret.is_null() {
            unsafe { write_slot(Kind::parse(ty), ret.cast::<u8>(), result) };
        }
    }
}

unsafe extern "C" fn destroy(obj: ObjectPtr) {
    object::destroy(obj);
}

unsafe extern "C" fn reference(obj: ObjectPtr) -> u32 {
    match object::get(obj) {
        Some(o) if o.ref_counted => o.reference(),
        _ => 0,
    }
}

unsafe extern "C" fn unreference(obj: ObjectPtr) -> bool {
    match object::get(obj) {
        Some(o) if o.ref_counted => o.unreference(),
        _ => false,
    }
}

unsafe extern "C" fn reference_count(obj: ObjectPtr) -> u32 {
    match object::get(obj) {
        Some(o) if o.ref_counted => o.refcount(),
        _ => 0,
    }
}

unsafe extern "C" fn get_instance_id(obj: ObjectPtr) -> u64 {
    object::get(obj).map_or(0, |o| o.id)
}

unsafe extern "C" fn from_instance_id(id: u64) -> ObjectPtr {
    object::from_instance_id(id)
}

unsafe extern "C" fn get_class_name(obj: ObjectPtr, buf: *mut u8, buf_len: u32) -> u32 {
    match object::get(obj) {
        Some(o) => write_bytes(&o.class(), buf, buf_len),
        None => 0,
    }
}

unsafe extern "C" fn connect(
    obj: ObjectPtr,
    signal: *const u8,
    signal_len: u32,
    callable: ConstTypePtr,
    flags: u32,
) -> i64 {
    let signal = unsafe { text(signal, signal_len) };
    let callable = match unsafe { read_slot(Kind::Callable, callable.cast::<u8>()) } {
        Value::Callable(c) => c,
        _ => None,
    };
    object::connect(obj, signal, callable, flags)
}

unsafe extern "C" fn set_instance(
    obj: ObjectPtr,
    class_name: *const u8,
    class_name_len: u32,
    instance: ClassInstancePtr,
) {
    object::set_instance(obj, unsafe { text(class_name, class_name_len) }, instance);
}

static OBJECT: ObjectApi = ObjectApi {
    method_bind_ptrcall,
    destroy,
    reference,
    unreference,
    reference_count,
    get_instance_id,
    from_instance_id,
    get_class_name,
    connect,
    set_instance,
};

// ---------------------------------------------------------------------------
// ClassDb
// ---------------------------------------------------------------------------

unsafe extern "C" fn construct_object(class_name: *const u8, len: u32) -> ObjectPtr {
    object::construct(unsafe { text(class_name, len) })
}

unsafe extern "C" fn get_method_bind(
    class_name: *const u8,
    class_len: u32,
    method: *const u8,
    method_len: u32,
    hash: i64,
) -> MethodBindPtr {
    let (class, method) = unsafe { (text(class_name, class_len), text(method, method_len)) };
    match db().bind(class, method, hash) {
        Some(entry) => MethodBindPtr((entry as *const MethodEntry).cast_mut().cast::<c_void>()),
        None => MethodBindPtr::NULL,
    }
}

unsafe extern "C" fn get_singleton(name: *const u8, len: u32) -> ObjectPtr {
    object::singleton(unsafe { text(name, len) })
}

unsafe extern "C" fn register_extension_class(
    class_name: *const u8,
    class_len: u32,
    parent: *const u8,
    parent_len: u32,
    info: *const ExtensionClassInfo,
) -> bool {
    if info.is_null() {
        return false;
    }
    let (name, parent) = unsafe { (text(class_name, class_len), text(parent, parent_len)) };
    object::register_extension(name, parent, unsafe { *info })
}

unsafe extern "C" fn unregister_extension_class(class_name: *const u8, len: u32) {
    object::unregister_extension(unsafe { text(class_name, len) });
}

static CLASSDB: ClassDbApi = ClassDbApi {
    construct_object,
    get_method_bind,
    get_singleton,
    register_extension_class,
    unregister_extension_class,
};

// ---------------------------------------------------------------------------
// Builtin lifecycle
// ---------------------------------------------------------------------------

unsafe extern "C" fn construct_default(ty: VariantType, dst: TypePtr) {
    let kind = Kind::from_variant_type(ty);
    unsafe { write_slot(kind, dst.cast::<u8>(), kind.default_value()) };
}

unsafe extern "C" fn builtin_copy(ty: VariantType, dst: TypePtr, src: ConstTypePtr) {
    let kind = Kind::from_variant_type(ty);
    unsafe { write_slot(kind, dst.cast::<u8>(), read_slot(kind, src.cast::<u8>())) };
}

unsafe extern "C" fn builtin_destroy(ty: VariantType, p: TypePtr) {
    unsafe { destroy_slot(Kind::from_variant_type(ty), p.cast::<u8>()) };
}

unsafe extern "C" fn builtin_equals(ty: VariantType, a: ConstTypePtr, b: ConstTypePtr) -> bool {
    let kind = Kind::from_variant_type(ty);
    unsafe { read_slot(kind, a.cast::<u8>()) == read_slot(kind, b.cast::<u8>()) }
}

static BUILTIN: BuiltinApi = BuiltinApi {
    construct_default,
    copy: builtin_copy,
    destroy: builtin_destroy,
    equals: builtin_equals,
};

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

unsafe extern "C" fn new_with_utf8(ty: VariantType, dst: TypePtr, utf8: *const u8, len: u32) {
    let s = unsafe { text(utf8, len) };
    let kind = Kind::from_variant_type(ty);
    unsafe { write_slot(kind, dst.cast::<u8>(), Value::string(s)) };
}

unsafe extern "C" fn to_utf8(
    _ty: VariantType,
    src: ConstTypePtr,
    buf: *mut u8,
    buf_len: u32,
) -> u32 {
    let word = unsafe { *src.cast::<usize>() };
    if word == 0 {
        return 0;
    }
    let s = unsafe { text_from_word(word) };
    write_bytes(&s, buf, buf_len)
}

static STRING: StringApi = StringApi { new_with_utf8, to_utf8 };

// ---------------------------------------------------------------------------
// Arrays and dictionaries
// ---------------------------------------------------------------------------

unsafe fn array_at(p: ConstTypePtr) -> Option<ArrayRef> {
    match unsafe { read_slot(Kind::Array, p.cast::<u8>()) } {
        Value::Array(a) if unsafe { *p.cast::<usize>() } != 0 => Some(a),
        _ => None,
    }
}

unsafe extern "C" fn array_size(arr: ConstTypePtr) -> i64 {
    unsafe { array_at(arr) }.map_or(0, |a| lock(&a).items.len() as i64)
}

unsafe extern "C" fn array_get(arr: ConstTypePtr, index: i64, out: TypePtr) -> bool {
    let item = unsafe { array_at(arr) }.and_then(|a| {
        let data = lock(&a);
        usize::try_from(index).ok().and_then(|i| data.items.get(i).cloned())
    });
    match item {
        Some(v) => {
            unsafe { *out.cast::<[usize; 3]>() = write_variant(v) };
            true
        }
        None => false,
    }
}

unsafe extern "C" fn array_set(arr: TypePtr, index: i64, value: ConstTypePtr) -> bool {
    let Some(a) = (unsafe { array_at(arr) }) else {
        return false;
    };
    let value = unsafe { read_variant(&*value.cast::<[usize; 3]>()) };
    let mut data = lock(&a);
    if !data.accepts(&value) {
        return false;
    }
    match usize::try_from(index).ok().and_then(|i| data.items.get_mut(i)) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

unsafe extern "C" fn array_push(arr: TypePtr, value: ConstTypePtr) -> bool {
    let Some(a) = (unsafe { array_at(arr) }) else {
        return false;
    };
    let value = unsafe { read_variant(&*value.cast::<[usize; 3]>()) };
    let mut data = lock(&a);
    if !data.accepts(&value) {
        return false;
    }
    data.items.push(value);
    true
}

unsafe extern "C" fn array_resize(arr: TypePtr, len: i64) {
    if let Some(a) = unsafe { array_at(arr) } {
        let mut data = lock(&a);
        let fill = match &data.typed {
            Some((ty, _)) => Kind::from_variant_type(*ty).default_value(),
            None => Value::Nil,
        };
        data.items.resize(usize::try_from(len).unwrap_or(0), fill);
    }
}

unsafe extern "C" fn array_clear(arr: TypePtr) {
    if let Some(a) = unsafe { array_at(arr) } {
        lock(&a).items.clear();
    }
}

unsafe extern "C" fn array_set_typed(
    arr: TypePtr,
    ty: VariantType,
    class_name: *const u8,
    class_len: u32,
) {
    if let Some(a) = unsafe { array_at(arr) } {
        let class = unsafe { text(class_name, class_len) }.to_owned();
        lock(&a).typed = Some((ty, class));
    }
}

unsafe extern "C" fn array_element_type(arr: ConstTypePtr) -> VariantType {
    unsafe { array_at(arr) }
        .and_then(|a| lock(&a).typed.as_ref().map(|t| t.0))
        .unwrap_or(VariantType::NIL)
}

static ARRAY: ArrayApi = ArrayApi {
    size: array_size,
    get: array_get,
    set: array_set,
    push: array_push,
    resize: array_resize,
    clear: array_clear,
    set_typed: array_set_typed,
    element_type: array_element_type,
};

unsafe fn dict_at(p: ConstTypePtr) -> Option<DictRef> {
    match unsafe { read_slot(Kind::Dictionary, p.cast::<u8>()) } {
        Value::Dictionary(d) if unsafe { *p.cast::<usize>() } != 0 => Some(d),
        _ => None,
    }
}

unsafe extern "C" fn dict_size(dict: ConstTypePtr) -> i64 {
    unsafe { dict_at(dict) }.map_or(0, |d| lock(&d).entries.len() as i64)
}

unsafe extern "C" fn dict_get(dict: ConstTypePtr, key: ConstTypePtr, out: TypePtr) -> bool {
    let key = unsafe { read_variant(&*key.cast::<[usize; 3]>()) };
    let found = unsafe { dict_at(dict) }.and_then(|d| lock(&d).get(&key).cloned());
    match found {
        Some(v) => {
            unsafe { *out.cast::<[usize; 3]>() = write_variant(v) };
            true
        }
        None => false,
    }
}

unsafe extern "C" fn dict_set(dict: TypePtr, key: ConstTypePtr, value: ConstTypePtr) {
    let key = unsafe { read_variant(&*key.cast::<[usize; 3]>()) };
    let value = unsafe { read_variant(&*value.cast::<[usize; 3]>()) };
    if let Some(d) = unsafe { dict_at(dict) } {
        lock(&d).set(key, value);
    }
}

unsafe extern "C" fn dict_erase(dict: TypePtr, key: ConstTypePtr) -> bool {
    let key = unsafe { read_variant(&*key.cast::<[usize; 3]>()) };
    unsafe { dict_at(dict) }.is_some_and(|d| lock(&d).erase(&key))
}

unsafe extern "C" fn dict_keys(dict: ConstTypePtr, out: TypePtr) {
    let keys = unsafe { dict_at(dict) }
        .map(|d| lock(&d).entries.iter().map(|(k, _)| k.clone()).collect())
        .unwrap_or_default();
    unsafe { write_slot(Kind::Array, out.cast::<u8>(), new_array(keys)) };
}

static DICTIONARY: DictionaryApi = DictionaryApi {
    size: dict_size,
    get: dict_get,
    set: dict_set,
    erase: dict_erase,
    keys: dict_keys,
};

// ---------------------------------------------------------------------------
// Packed arrays: copy on write
// ---------------------------------------------------------------------------

/// Run `f` on a uniquely owned copy of the packed storage in slot `p`.
unsafe fn with_unique<R>(ty: VariantType, p: TypePtr, f: impl FnOnce(&mut PackedData) -> R) -> R {
    let word = unsafe { &mut *p.cast::<usize>() };
    let mut arc = if *word == 0 {
        Arc::new(PackedData::new(ty))
    } else {
        unsafe { Arc::from_raw(*word as *const PackedData) }
    };
    let result = f(Arc::make_mut(&mut arc));
    *word = Arc::into_raw(arc) as usize;
    result
}

unsafe extern "C" fn packed_size(_ty: VariantType, arr: ConstTypePtr) -> i64 {
    let word = unsafe { *arr.cast::<usize>() };
    if word == 0 {
        return 0;
    }
    unsafe { (*(word as *const PackedData)).len as i64 }
}

unsafe extern "C" fn packed_ptr(_ty: VariantType, arr: ConstTypePtr) -> *const u8 {
    let word = unsafe { *arr.cast::<usize>() };
    if word == 0 {
        return std::ptr::null();
    }
    let data = unsafe { &*(word as *const PackedData) };
    if data.len == 0 { std::ptr::null() } else { data.words.as_ptr().cast::<u8>() }
}

unsafe extern "C" fn packed_ptrw(ty: VariantType, arr: TypePtr) -> *mut u8 {
    unsafe {
        with_unique(ty, arr, |data| {
            if data.len == 0 { std::ptr::null_mut() } else { data.words.as_mut_ptr().cast::<u8>() }
        })
    }
}

unsafe extern "C" fn packed_resize(ty: VariantType, arr: TypePtr, len: i64) {
    unsafe { with_unique(ty, arr, |data| data.resize(usize::try_from(len).unwrap_or(0))) };
}

static PACKED: PackedApi = PackedApi {
    size: packed_size,
    ptr: packed_ptr,
    ptrw: packed_ptrw,
    resize: packed_resize,
};

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

unsafe fn words<'a>(p: ConstTypePtr) -> &'a [usize; 3] {
    unsafe { &*p.cast::<[usize; 3]>() }
}

unsafe extern "C" fn variant_new_nil(dst: TypePtr) {
    unsafe { *dst.cast::<[usize; 3]>() = [0; 3] };
}

unsafe extern "C" fn variant_copy(dst: TypePtr, src: ConstTypePtr) {
    unsafe { *dst.cast::<[usize; 3]>() = write_variant(read_variant(words(src))) };
}

unsafe extern "C" fn variant_destroy(v: TypePtr) {
    unsafe { destroy_variant(&mut *v.cast::<[usize; 3]>()) };
}

unsafe extern "C" fn variant_equals(a: ConstTypePtr, b: ConstTypePtr) -> bool {
    unsafe { read_variant(words(a)) == read_variant(words(b)) }
}

unsafe extern "C" fn variant_get_type(v: ConstTypePtr) -> VariantType {
    VariantType(unsafe { words(v)[0] } as u32)
}

unsafe extern "C" fn variant_from_type(ty: VariantType, dst: TypePtr, value: ConstTypePtr) {
    let value = unsafe { read_slot(Kind::from_variant_type(ty), value.cast::<u8>()) };
    let value = match value {
        Value::Object(o) if o.is_null() => Value::Nil,
        v => v,
    };
    unsafe { *dst.cast::<[usize; 3]>() = write_variant(value) };
}

unsafe extern "C" fn variant_to_type(ty: VariantType, dst: TypePtr, v: ConstTypePtr) -> bool {
    let value = unsafe { read_variant(words(v)) };
    let value = match (ty, value) {
        (VariantType::FLOAT, Value::Int(i)) => Value::Float(i as f64),
        (_, v) => v,
    };
    if value.variant_type() != ty {
        return false;
    }
    unsafe { write_slot(Kind::from_variant_type(ty), dst.cast::<u8>(), value) };
    true
}

static VARIANT: VariantApi = VariantApi {
    new_nil: variant_new_nil,
    copy: variant_copy,
    destroy: variant_destroy,
    equals: variant_equals,
    get_type: variant_get_type,
    from_type: variant_from_type,
    to_type: variant_to_type,
};

// ---------------------------------------------------------------------------
// Callables and logging
// ---------------------------------------------------------------------------

unsafe extern "C" fn create_custom(dst: TypePtr, info: *const CallableCustomInfo) {
    let value = if info.is_null() {
        Value::Callable(None)
    } else {
        Value::Callable(Some(Arc::new(CallableData { info: unsafe { *info } })))
    };
    unsafe { write_slot(Kind::Callable, dst.cast::<u8>(), value) };
}

unsafe extern "C" fn callable_call(
    callable: ConstTypePtr,
    args: *const ConstTypePtr,
    argc: i64,
    ret: TypePtr,
    error: *mut CallError,
) {
    let target = match unsafe { read_slot(Kind::Callable, callable.cast::<u8>()) } {
        Value::Callable(Some(c)) => c,
        _ => {
            unsafe {
                *ret.cast::<[usize; 3]>() = [0; 3];
                if !error.is_null() {
                    *error =
                        CallError { error: CallError::INSTANCE_IS_NULL, argument: 0, expected: 0 };
                }
            }
            return;
        }
    };
    unsafe { (target.info.call_func)(target.info.userdata, args, argc, ret, error) };
}

static CALLABLE: CallableApi = CallableApi { create_custom, call: callable_call };

unsafe extern "C" fn print(level: u32, msg: *const u8, len: u32) {
    let msg = unsafe { text(msg, len) }.to_owned();
    eprintln!("[engine:{level}] {msg}");
    object::push_log(level, msg);
}

static LOGGING: LoggingApi = LoggingApi { print };

pub static INTERFACE: EngineInterface = EngineInterface {
    version: ABI_VERSION,
    object: &OBJECT,
    classdb: &CLASSDB,
    builtin: &BUILTIN,
    string: &STRING,
    array: &ARRAY,
    dictionary: &DICTIONARY,
    packed: &PACKED,
    variant: &VARIANT,
    callable: &CALLABLE,
    logging: &LOGGING,
};

