// Engine-side values and their slot encodings.
//
// Carriers are reference-counted on the engine side: a string, array,
// dictionary, packed array or callable slot holds the raw pointer of an
// `Arc`. Copying a slot takes another strong count; destroying it drops one.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gdbind_ffi::{CallableCustomInfo, ObjectPtr, VariantType};

pub type Text = Arc<String>;
pub type ArrayRef = Arc<Mutex<ArrayData>>;
pub type DictRef = Arc<Mutex<DictData>>;
pub type PackedRef = Arc<PackedData>;
pub type CallableRef = Arc<CallableData>;

pub fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Debug)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Text),
    StringName(Text),
    NodePath(Text),
    Vector2([f32; 2]),
    Vector2i([i32; 2]),
    Vector3([f32; 3]),
    Color([f32; 4]),
    Object(ObjectPtr),
    Callable(Option<CallableRef>),
    Dictionary(DictRef),
    Array(ArrayRef),
    Packed(PackedRef),
}

impl Value {
    pub fn string(s: &str) -> Value {
        Value::String(Arc::new(s.to_owned()))
    }

    pub fn variant_type(&self) -> VariantType {
        match self {
            Value::Nil => VariantType::NIL,
            Value::Bool(_) => VariantType::BOOL,
            Value::Int(_) => VariantType::INT,
            Value::Float(_) => VariantType::FLOAT,
            Value::String(_) => VariantType::STRING,
            Value::StringName(_) => VariantType::STRING_NAME,
            Value::NodePath(_) => VariantType::NODE_PATH,
            Value::Vector2(_) => VariantType::VECTOR2,
            Value::Vector2i(_) => VariantType::VECTOR2I,
            Value::Vector3(_) => VariantType::VECTOR3,
            Value::Color(_) => VariantType::COLOR,
            Value::Object(_) => VariantType::OBJECT,
            Value::Callable(_) => VariantType::CALLABLE,
            Value::Dictionary(_) => VariantType::DICTIONARY,
            Value::Array(_) => VariantType::ARRAY,
            Value::Packed(p) => p.ty,
        }
    }

    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(i) => *i,
            Value::Float(f) => *f as i64,
            Value::Bool(b) => i64::from(*b),
            _ => 0,
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            Value::Float(f) => *f,
            Value::Int(i) => *i as f64,
            _ => 0.0,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) | Value::StringName(s) | Value::NodePath(s) => s.as_str(),
            _ => "",
        }
    }

    pub fn as_vector2(&self) -> [f32; 2] {
        match self {
            Value::Vector2(v) => *v,
            _ => [0.0; 2],
        }
    }

    pub fn as_vector2i(&self) -> [i32; 2] {
        match self {
            Value::Vector2i(v) => *v,
            _ => [0; 2],
        }
    }

    pub fn as_vector3(&self) -> [f32; 3] {
        match self {
            Value::Vector3(v) => *v,
            _ => [0.0; 3],
        }
    }

    pub fn as_object(&self) -> ObjectPtr {
        match self {
            Value::Object(o) => *o,
            _ => ObjectPtr::NULL,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b))
            | (Value::StringName(a), Value::StringName(b))
            | (Value::NodePath(a), Value::NodePath(b)) => a == b,
            (Value::Vector2(a), Value::Vector2(b)) => a == b,
            (Value::Vector2i(a), Value::Vector2i(b)) => a == b,
            (Value::Vector3(a), Value::Vector3(b)) => a == b,
            (Value::Color(a), Value::Color(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => match (a, b) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            },
            (Value::Array(a), Value::Array(b)) => {
                Arc::ptr_eq(a, b) || lock(a).items == lock(b).items
            }
            (Value::Dictionary(a), Value::Dictionary(b)) => {
                Arc::ptr_eq(a, b) || lock(a).entries == lock(b).entries
            }
            (Value::Packed(a), Value::Packed(b)) => Arc::ptr_eq(a, b) || **a == **b,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[derive(Default, Debug)]
pub struct ArrayData {
    pub items: Vec<Value>,
    pub typed: Option<(VariantType, String)>,
}

impl ArrayData {
    pub fn accepts(&self, value: &Value) -> bool {
        match &self.typed {
            None => true,
            Some((ty, _)) => {
                value.variant_type() == *ty
                    || (*ty == VariantType::OBJECT && matches!(value, Value::Nil))
            }
        }
    }
}

pub fn new_array(items: Vec<Value>) -> Value {
    Value::Array(Arc::new(Mutex::new(ArrayData { items, typed: None })))
}

pub fn new_typed_array(items: Vec<Value>, ty: VariantType) -> Value {
    Value::Array(Arc::new(Mutex::new(ArrayData { items, typed: Some((ty, String::new())) })))
}

#[derive(Default, Debug)]
pub struct DictData {
    pub entries: Vec<(Value, Value)>,
}

impl DictData {
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn set(&mut self, key: Value, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn erase(&mut self, key: &Value) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        before != self.entries.len()
    }
}

pub fn new_dictionary(entries: Vec<(Value, Value)>) -> Value {
    Value::Dictionary(Arc::new(Mutex::new(DictData { entries })))
}

/// Packed storage: `len` elements of the type's stride in 8-byte-aligned words.
/// String arrays store one `Text` pointer per element (0 = empty string).
#[derive(Debug)]
pub struct PackedData {
    pub ty: VariantType,
    pub len: usize,
    pub words: Vec<u64>,
}

impl PackedData {
    pub fn new(ty: VariantType) -> PackedData {
        PackedData { ty, len: 0, words: Vec::new() }
    }

    pub fn stride(&self) -> usize {
        self.ty.packed_stride().unwrap_or(1)
    }

    pub fn is_strings(&self) -> bool {
        self.ty == VariantType::PACKED_STRING_ARRAY
    }

    pub fn bytes(&self) -> &[u8] {
        let n = self.len * self.stride();
        // SAFETY: `words` always holds at least `n` bytes.
        unsafe { std::slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), n) }
    }

    pub fn resize(&mut self, len: usize) {
        if self.is_strings() {
            for i in len..self.len {
                unsafe { release_text(self.words[i] as usize) };
            }
        }
        let old_bytes = self.len * self.stride();
        let new_bytes = len * self.stride();
        self.words.resize(new_bytes.div_ceil(8), 0);
        if new_bytes > old_bytes {
            let bytes = unsafe {
                let capacity = self.words.len() * 8;
                std::slice::from_raw_parts_mut(self.words.as_mut_ptr().cast::<u8>(), capacity)
            };
            bytes[old_bytes..new_bytes].fill(0);
        }
        self.len = len;
    }

    pub fn element<T: Copy>(&self, i: usize) -> T {
        debug_assert_eq!(size_of::<T>(), self.stride());
        let at = unsafe { self.words.as_ptr().cast::<u8>().add(i * self.stride()) };
        unsafe { std::ptr::read_unaligned(at.cast::<T>()) }
    }

    pub fn from_elements<T: Copy>(ty: VariantType, items: &[T]) -> PackedData {
        let mut data = PackedData::new(ty);
        data.resize(items.len());
        for (i, item) in items.iter().enumerate() {
            unsafe {
                std::ptr::write_unaligned(
                    data.words.as_mut_ptr().cast::<u8>().add(i * data.stride()).cast::<T>(),
                    *item,
                )
            };
        }
        data
    }

    pub fn text(&self, i: usize) -> String {
        let word = self.words[i] as usize;
        if word == 0 { String::new() } else { unsafe { (*(word as *const String)).clone() } }
    }
}

impl Clone for PackedData {
    fn clone(&self) -> Self {
        if self.is_strings() {
            for &w in &self.words[..self.len] {
                unsafe { retain_text(w as usize) };
            }
        }
        PackedData { ty: self.ty, len: self.len, words: self.words.clone() }
    }
}

impl Drop for PackedData {
    fn drop(&mut self) {
        if self.is_strings() {
            for &w in &self.words[..self.len] {
                unsafe { release_text(w as usize) };
            }
        }
    }
}

impl PartialEq for PackedData {
    fn eq(&self, other: &Self) -> bool {
        if self.ty != other.ty || self.len != other.len {
            return false;
        }
        if self.is_strings() {
            (0..self.len).all(|i| self.text(i) == other.text(i))
        } else {
            self.bytes() == other.bytes()
        }
    }
}

pub fn new_packed<T: Copy>(ty: VariantType, items: &[T]) -> Value {
    Value::Packed(Arc::new(PackedData::from_elements(ty, items)))
}

/// Host callable record. The free hook runs when the last slot lets go.
pub struct CallableData {
    pub info: CallableCustomInfo,
}

impl fmt::Debug for CallableData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallableData({:#x})", self.info.userdata.addr())
    }
}

unsafe impl Send for CallableData {}
unsafe impl Sync for CallableData {}

impl Drop for CallableData {
    fn drop(&mut self) {
        if let Some(free) = self.info.free_func {
            unsafe { free(self.info.userdata) };
        }
    }
}

// ---------------------------------------------------------------------------
// Raw Arc words
// ---------------------------------------------------------------------------

unsafe fn arc_clone<T>(word: usize) -> Arc<T> {
    unsafe {
        Arc::increment_strong_count(word as *const T);
        Arc::from_raw(word as *const T)
    }
}

unsafe fn arc_release<T>(word: usize) {
    if word != 0 {
        unsafe { Arc::decrement_strong_count(word as *const T) };
    }
}

fn arc_word<T>(arc: Arc<T>) -> usize {
    Arc::into_raw(arc) as usize
}

pub unsafe fn retain_text(word: usize) {
    if word != 0 {
        unsafe { Arc::increment_strong_count(word as *const String) };
    }
}

pub unsafe fn release_text(word: usize) {
    unsafe { arc_release::<String>(word) };
}

pub unsafe fn text_from_word(word: usize) -> Text {
    if word == 0 { Arc::new(String::new()) } else { unsafe { arc_clone(word) } }
}

pub fn text_word(text: Text) -> usize {
    arc_word(text)
}

// ---------------------------------------------------------------------------
// Kinds: how a declared type travels through a pointer-call slot
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
    Bool,
    Int,
    Float,
    String,
    StringName,
    NodePath,
    Vector2,
    Vector2i,
    Vector3,
    Color,
    Object,
    Callable,
    Dictionary,
    Array,
    Packed(VariantType),
    Variant,
}

impl Kind {
    pub fn parse(ty: &str) -> Kind {
        match ty {
            "bool" => Kind::Bool,
            "int" => Kind::Int,
            "float" => Kind::Float,
            "String" => Kind::String,
            "StringName" => Kind::StringName,
            "NodePath" => Kind::NodePath,
            "Vector2" => Kind::Vector2,
            "Vector2i" => Kind::Vector2i,
            "Vector3" => Kind::Vector3,
            "Color" => Kind::Color,
            "Callable" => Kind::Callable,
            "Dictionary" => Kind::Dictionary,
            "Array" => Kind::Array,
            "Variant" => Kind::Variant,
            "PackedByteArray" => Kind::Packed(VariantType::PACKED_BYTE_ARRAY),
            "PackedInt32Array" => Kind::Packed(VariantType::PACKED_INT32_ARRAY),
            "PackedInt64Array" => Kind::Packed(VariantType::PACKED_INT64_ARRAY),
            "PackedFloat32Array" => Kind::Packed(VariantType::PACKED_FLOAT32_ARRAY),
            "PackedFloat64Array" => Kind::Packed(VariantType::PACKED_FLOAT64_ARRAY),
            "PackedStringArray" => Kind::Packed(VariantType::PACKED_STRING_ARRAY),
            "PackedVector2Array" => Kind::Packed(VariantType::PACKED_VECTOR2_ARRAY),
            "PackedVector3Array" => Kind::Packed(VariantType::PACKED_VECTOR3_ARRAY),
            "PackedColorArray" => Kind::Packed(VariantType::PACKED_COLOR_ARRAY),
            t if t.starts_with("enum::") || t.starts_with("bitfield::") => Kind::Int,
            t if t.starts_with("typedarray::") => Kind::Array,
            _ => Kind::Object,
        }
    }

    pub fn from_variant_type(ty: VariantType) -> Kind {
        match ty {
            VariantType::BOOL => Kind::Bool,
            VariantType::INT => Kind::Int,
            VariantType::FLOAT => Kind::Float,
            VariantType::STRING => Kind::String,
            VariantType::STRING_NAME => Kind::StringName,
            VariantType::NODE_PATH => Kind::NodePath,
            VariantType::VECTOR2 => Kind::Vector2,
            VariantType::VECTOR2I => Kind::Vector2i,
            VariantType::VECTOR3 => Kind::Vector3,
            VariantType::COLOR => Kind::Color,
            VariantType::OBJECT => Kind::Object,
            VariantType::CALLABLE => Kind::Callable,
            VariantType::DICTIONARY => Kind::Dictionary,
            VariantType::ARRAY => Kind::Array,
            t if t.is_packed_array() => Kind::Packed(t),
            _ => Kind::Variant,
        }
    }

    pub fn default_value(self) -> Value {
        match self {
            Kind::Bool => Value::Bool(false),
            Kind::Int => Value::Int(0),
            Kind::Float => Value::Float(0.0),
            Kind::String => Value::string(""),
            Kind::StringName => Value::StringName(Arc::new(String::new())),
            Kind::NodePath => Value::NodePath(Arc::new(String::new())),
            Kind::Vector2 => Value::Vector2([0.0; 2]),
            Kind::Vector2i => Value::Vector2i([0; 2]),
            Kind::Vector3 => Value::Vector3([0.0; 3]),
            Kind::Color => Value::Color([0.0; 4]),
            Kind::Object => Value::Object(ObjectPtr::NULL),
            Kind::Callable => Value::Callable(None),
            Kind::Dictionary => new_dictionary(Vec::new()),
            Kind::Array => new_array(Vec::new()),
            Kind::Packed(ty) => Value::Packed(Arc::new(PackedData::new(ty))),
            Kind::Variant => Value::Nil,
        }
    }

    /// Bring `value` to this kind where the engine would convert implicitly.
    pub fn coerce(self, value: Value) -> Value {
        match (self, value) {
            (Kind::Int, v @ (Value::Float(_) | Value::Bool(_))) => Value::Int(v.as_int()),
            (Kind::Float, Value::Int(i)) => Value::Float(i as f64),
            (Kind::String, Value::StringName(s) | Value::NodePath(s)) => Value::String(s),
            (Kind::StringName, Value::String(s) | Value::NodePath(s)) => Value::StringName(s),
            (Kind::NodePath, Value::String(s) | Value::StringName(s)) => Value::NodePath(s),
            (Kind::Object, Value::Nil) => Value::Object(ObjectPtr::NULL),
            (_, v) => v,
        }
    }
}

/// Parse a manifest default (`"0.5"`, `"true"`, `"Vector3(1, 1, 1)"`, `"\"\""`).
pub fn parse_default(kind: Kind, text: &str) -> Value {
    let numbers = || -> Vec<f64> {
        let inner = text.split_once('(').map(|(_, r)| r.trim_end_matches(')')).unwrap_or("");
        inner.split(',').filter_map(|n| n.trim().parse::<f64>().ok()).collect()
    };
    match kind {
        Kind::Bool => Value::Bool(text == "true"),
        Kind::Int => Value::Int(text.parse().unwrap_or(0)),
        Kind::Float => Value::Float(text.parse().unwrap_or(0.0)),
        Kind::String | Kind::StringName | Kind::NodePath => {
            let s = text.trim_start_matches('&').trim_start_matches('^').trim_matches('"');
            kind.coerce(Value::string(s))
        }
        Kind::Vector2 => {
            let n = numbers();
            let at = |i: usize| n.get(i).copied().unwrap_or(0.0) as f32;
            Value::Vector2([at(0), at(1)])
        }
        Kind::Vector3 => {
            let n = numbers();
            let at = |i: usize| n.get(i).copied().unwrap_or(0.0) as f32;
            Value::Vector3([at(0), at(1), at(2)])
        }
        Kind::Color => {
            let n = numbers();
            let at = |i: usize| n.get(i).copied().unwrap_or(1.0) as f32;
            Value::Color([at(0), at(1), at(2), at(3)])
        }
        _ => kind.default_value(),
    }
}

// ---------------------------------------------------------------------------
// Pointer-call slots
// ---------------------------------------------------------------------------

/// Read a slot the caller keeps ownership of.
///
/// # Safety
/// `p` must point at a live value of `kind`.
pub unsafe fn read_slot(kind: Kind, p: *const u8) -> Value {
    unsafe {
        match kind {
            Kind::Bool => Value::Bool(*p != 0),
            Kind::Int => Value::Int(p.cast::<i64>().read_unaligned()),
            Kind::Float => Value::Float(p.cast::<f64>().read_unaligned()),
            Kind::String => Value::String(text_from_word(*p.cast::<usize>())),
            Kind::StringName => Value::StringName(text_from_word(*p.cast::<usize>())),
            Kind::NodePath => Value::NodePath(text_from_word(*p.cast::<usize>())),
            Kind::Vector2 => Value::Vector2(p.cast::<[f32; 2]>().read_unaligned()),
            Kind::Vector2i => Value::Vector2i(p.cast::<[i32; 2]>().read_unaligned()),
            Kind::Vector3 => Value::Vector3(p.cast::<[f32; 3]>().read_unaligned()),
            Kind::Color => Value::Color(p.cast::<[f32; 4]>().read_unaligned()),
            Kind::Object => Value::Object(*p.cast::<ObjectPtr>()),
            Kind::Callable => {
                let w = *p.cast::<usize>();
                Value::Callable((w != 0).then(|| arc_clone::<CallableData>(w)))
            }
            Kind::Dictionary => {
                let w = *p.cast::<usize>();
                if w == 0 { new_dictionary(Vec::new()) } else { Value::Dictionary(arc_clone(w)) }
            }
            Kind::Array => {
                let w = *p.cast::<usize>();
                if w == 0 { new_array(Vec::new()) } else { Value::Array(arc_clone(w)) }
            }
            Kind::Packed(ty) => {
                let w = *p.cast::<usize>();
                Value::Packed(if w == 0 { Arc::new(PackedData::new(ty)) } else { arc_clone(w) })
            }
            Kind::Variant => read_variant(&*p.cast::<[usize; 3]>()),
        }
    }
}

/// Move `value` into an uninitialized slot.
///
/// # Safety
/// `p` must be writable for the slot size of `kind`.
pub unsafe fn write_slot(kind: Kind, p: *mut u8, value: Value) {
    let value = kind.coerce(value);
    unsafe {
        match (kind, value) {
            (Kind::Bool, v) => *p = u8::from(v.as_bool()),
            (Kind::Int, v) => p.cast::<i64>().write_unaligned(v.as_int()),
            (Kind::Float, v) => p.cast::<f64>().write_unaligned(v.as_float()),
            (
                Kind::String | Kind::StringName | Kind::NodePath,
                Value::String(s) | Value::StringName(s) | Value::NodePath(s),
            ) => *p.cast::<usize>() = text_word(s),
            (Kind::String | Kind::StringName | Kind::NodePath, _) => {
                *p.cast::<usize>() = text_word(Arc::new(String::new()))
            }
            (Kind::Vector2, v) => p.cast::<[f32; 2]>().write_unaligned(v.as_vector2()),
            (Kind::Vector2i, v) => p.cast::<[i32; 2]>().write_unaligned(v.as_vector2i()),
            (Kind::Vector3, v) => p.cast::<[f32; 3]>().write_unaligned(v.as_vector3()),
            (Kind::Color, Value::Color(c)) => p.cast::<[f32; 4]>().write_unaligned(c),
            (Kind::Color, _) => p.cast::<[f32; 4]>().write_unaligned([0.0; 4]),
            (Kind::Object, v) => *p.cast::<ObjectPtr>() = v.as_object(),
            (Kind::Callable, Value::Callable(c)) => {
                *p.cast::<[usize; 2]>() = [c.map(arc_word).unwrap_or(0), 0];
            }
            (Kind::Callable, _) => *p.cast::<[usize; 2]>() = [0, 0],
            (Kind::Dictionary, Value::Dictionary(d)) => *p.cast::<usize>() = arc_word(d),
            (Kind::Array, Value::Array(a)) => *p.cast::<usize>() = arc_word(a),
            (Kind::Packed(_), Value::Packed(d)) => *p.cast::<[usize; 2]>() = [arc_word(d), 0],
            (Kind::Variant, v) => *p.cast::<[usize; 3]>() = write_variant(v),
            (k, _) => write_slot(k, p, k.default_value()),
        }
    }
}

/// Release a slot's value.
///
/// # Safety
/// `p` must point at a live value of `kind` that is not used afterwards.
pub unsafe fn destroy_slot(kind: Kind, p: *mut u8) {
    unsafe {
        match kind {
            Kind::String | Kind::StringName | Kind::NodePath => {
                release_text(*p.cast::<usize>());
                *p.cast::<usize>() = 0;
            }
            Kind::Callable => {
                arc_release::<CallableData>(*p.cast::<usize>());
                *p.cast::<usize>() = 0;
            }
            Kind::Dictionary => {
                arc_release::<Mutex<DictData>>(*p.cast::<usize>());
                *p.cast::<usize>() = 0;
            }
            Kind::Array => {
                arc_release::<Mutex<ArrayData>>(*p.cast::<usize>());
                *p.cast::<usize>() = 0;
            }
            Kind::Packed(_) => {
                arc_release::<PackedData>(*p.cast::<usize>());
                *p.cast::<usize>() = 0;
            }
            Kind::Variant => {
                destroy_variant(&mut *p.cast::<[usize; 3]>());
            }
            _ => {}
        }
    }
}

/// Read and release: the slot's ownership moves into the result.
///
/// # Safety
/// As for [`read_slot`] and [`destroy_slot`].
pub unsafe fn take_slot(kind: Kind, p: *mut u8) -> Value {
    unsafe {
        let value = read_slot(kind, p);
        destroy_slot(kind, p);
        value
    }
}

// ---------------------------------------------------------------------------
// Variants: [type tag, payload, payload]
// ---------------------------------------------------------------------------

fn pack_f32(a: f32, b: f32) -> usize {
    (u64::from(a.to_bits()) | (u64::from(b.to_bits()) << 32)) as usize
}

fn unpack_f32(w: usize) -> (f32, f32) {
    let w = w as u64;
    (f32::from_bits(w as u32), f32::from_bits((w >> 32) as u32))
}

/// Build variant words from a value, moving carrier ownership into them.
pub fn write_variant(value: Value) -> [usize; 3] {
    let tag = value.variant_type().0 as usize;
    let (a, b) = match value {
        Value::Nil => (0, 0),
        Value::Bool(v) => (usize::from(v), 0),
        Value::Int(v) => (v as usize, 0),
        Value::Float(v) => (v.to_bits() as usize, 0),
        Value::String(s) | Value::StringName(s) | Value::NodePath(s) => (text_word(s), 0),
        Value::Vector2([x, y]) => (pack_f32(x, y), 0),
        Value::Vector2i([x, y]) => {
            ((u64::from(x as u32) | (u64::from(y as u32) << 32)) as usize, 0)
        }
        Value::Vector3([x, y, z]) => (pack_f32(x, y), pack_f32(z, 0.0)),
        Value::Color([r, g, b, a]) => (pack_f32(r, g), pack_f32(b, a)),
        Value::Object(o) => (o.addr(), 0),
        Value::Callable(c) => (c.map(arc_word).unwrap_or(0), 0),
        Value::Dictionary(d) => (arc_word(d), 0),
        Value::Array(a) => (arc_word(a), 0),
        Value::Packed(p) => (arc_word(p), 0),
    };
    [tag, a, b]
}

/// Read a variant without taking ownership.
///
/// # Safety
/// `words` must be a live variant.
pub unsafe fn read_variant(words: &[usize; 3]) -> Value {
    let [tag, a, b] = *words;
    let ty = VariantType(tag as u32);
    unsafe {
        match ty {
            VariantType::NIL => Value::Nil,
            VariantType::BOOL => Value::Bool(a != 0),
            VariantType::INT => Value::Int(a as i64),
            VariantType::FLOAT => Value::Float(f64::from_bits(a as u64)),
            VariantType::STRING => Value::String(text_from_word(a)),
            VariantType::STRING_NAME => Value::StringName(text_from_word(a)),
            VariantType::NODE_PATH => Value::NodePath(text_from_word(a)),
            VariantType::VECTOR2 => {
                let (x, y) = unpack_f32(a);
                Value::Vector2([x, y])
            }
            VariantType::VECTOR2I => {
                Value::Vector2i([a as u64 as u32 as i32, ((a as u64) >> 32) as u32 as i32])
            }
            VariantType::VECTOR3 => {
                let (x, y) = unpack_f32(a);
                Value::Vector3([x, y, unpack_f32(b).0])
            }
            VariantType::COLOR => {
                let (r, g) = unpack_f32(a);
                let (bl, al) = unpack_f32(b);
                Value::Color([r, g, bl, al])
            }
            VariantType::OBJECT => Value::Object(ObjectPtr(a as *mut _)),
            VariantType::CALLABLE => {
                Value::Callable((a != 0).then(|| arc_clone::<CallableData>(a)))
            }
            VariantType::DICTIONARY => Value::Dictionary(arc_clone(a)),
            VariantType::ARRAY => Value::Array(arc_clone(a)),
            t if t.is_packed_array() => Value::Packed(arc_clone(a)),
            _ => Value::Nil,
        }
    }
}

/// # Safety
/// `words` must be a live variant; it is reset to nil.
pub unsafe fn destroy_variant(words: &mut [usize; 3]) {
    let ty = VariantType(words[0] as u32);
    let a = words[1];
    unsafe {
        match ty {
            VariantType::STRING | VariantType::STRING_NAME | VariantType::NODE_PATH => {
                release_text(a)
            }
            VariantType::CALLABLE => arc_release::<CallableData>(a),
            VariantType::DICTIONARY => arc_release::<Mutex<DictData>>(a),
            VariantType::ARRAY => arc_release::<Mutex<ArrayData>>(a),
            t if t.is_packed_array() => arc_release::<PackedData>(a),
            _ => {}
        }
    }
    *words = [0; 3];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_round_trip() {
        let mut slot = [0u64; 4];
        let p = slot.as_mut_ptr().cast::<u8>();
        unsafe {
            write_slot(Kind::Vector3, p, Value::Vector3([1.0, 2.0, 3.0]));
            assert_eq!(read_slot(Kind::Vector3, p), Value::Vector3([1.0, 2.0, 3.0]));
            write_slot(Kind::String, p, Value::string("abc"));
            assert_eq!(take_slot(Kind::String, p).as_str(), "abc");
        }
    }

    #[test]
    fn variant_words_keep_the_payload() {
        let mut words = write_variant(Value::Color([0.1, 0.2, 0.3, 0.4]));
        assert_eq!(unsafe { read_variant(&words) }, Value::Color([0.1, 0.2, 0.3, 0.4]));
        unsafe { destroy_variant(&mut words) };
        assert_eq!(words, [0; 3]);
    }

    #[test]
    fn defaults_parse() {
        assert_eq!(parse_default(Kind::Float, "0.25"), Value::Float(0.25));
        assert_eq!(parse_default(Kind::Vector3, "Vector3(1, 1, 1)"), Value::Vector3([1.0; 3]));
        assert_eq!(parse_default(Kind::StringName, "&\"\"").as_str(), "");
        assert_eq!(parse_default(Kind::Bool, "true"), Value::Bool(true));
    }

    #[test]
    fn packed_strings_share_elements() {
        let mut data = PackedData::new(VariantType::PACKED_STRING_ARRAY);
        data.resize(1);
        data.words[0] = text_word(Arc::new("x".to_owned())) as u64;
        let copy = data.clone();
        assert_eq!(copy.text(0), "x");
        assert!(copy == data);
    }

    unsafe extern "C" fn ignore_call(
        _: *mut std::ffi::c_void,
        _: *const *const std::ffi::c_void,
        _: i64,
        _: *mut std::ffi::c_void,
        _: *mut gdbind_ffi::CallError,
    ) {
    }

    #[test]
    fn callable_data_debug_shows_the_userdata() {
        let info = CallableCustomInfo {
            userdata: 0x40 as *mut std::ffi::c_void,
            call_func: ignore_call,
            free_func: None,
        };
        let data = CallableData { info };
        assert_eq!(format!("{data:?}"), "CallableData(0x40)");
    }
}
