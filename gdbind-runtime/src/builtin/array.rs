// Array carriers. `Array` is the engine's untyped variant array; `TypedArray<T>`
// is the same engine value carrying an element-type constraint, with `T`
// as the host-side witness of that constraint.

use std::fmt;
use std::marker::PhantomData;

use gdbind_ffi::{ArrayOpaque, VariantOpaque, VariantType};

use super::carrier_lifecycle;
use super::variant::Variant;
use crate::api::array_api;
use crate::bridge::{Bridge, VariantBridge};

/// Engine variant array. Clones share the engine storage.
#[repr(transparent)]
pub struct Array {
    opaque: ArrayOpaque,
    _marker: PhantomData<*const ()>,
}

carrier_lifecycle!(Array, 1, ARRAY);

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        let n = unsafe { (array_api().size)(self.opaque_ptr()) };
        usize::try_from(n).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<Variant> {
        let mut out = VariantOpaque::ZEROED;
        let ok =
            unsafe { (array_api().get)(self.opaque_ptr(), index as i64, (&raw mut out).cast()) };
        ok.then(|| unsafe { Variant::from_engine(out) })
    }

    /// False when `index` is out of range or the value violates the element type.
    pub fn set(&mut self, index: usize, value: &Variant) -> bool {
        unsafe { (array_api().set)(self.opaque_mut_ptr(), index as i64, value.opaque_ptr()) }
    }

    pub fn push(&mut self, value: &Variant) -> bool {
        unsafe { (array_api().push)(self.opaque_mut_ptr(), value.opaque_ptr()) }
    }

    pub fn push_value<T: VariantBridge>(&mut self, value: &T) -> bool {
        self.push(&Variant::from_value(value))
    }

    pub fn resize(&mut self, len: usize) {
        unsafe { (array_api().resize)(self.opaque_mut_ptr(), len as i64) };
    }

    pub fn clear(&mut self) {
        unsafe { (array_api().clear)(self.opaque_mut_ptr()) };
    }

    /// `NIL` for untyped arrays.
    pub fn element_type(&self) -> VariantType {
        unsafe { (array_api().element_type)(self.opaque_ptr()) }
    }

    pub fn iter(&self) -> impl Iterator<Item = Variant> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    fn set_typed(&mut self, ty: VariantType, class_name: &str) {
        unsafe {
            (array_api().set_typed)(
                self.opaque_mut_ptr(),
                ty,
                class_name.as_ptr(),
                crate::api::ffi_len(class_name),
            )
        };
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Variant> for Array {
    fn from_iter<I: IntoIterator<Item = Variant>>(iter: I) -> Self {
        let mut array = Array::new();
        for v in iter {
            array.push(&v);
        }
        array
    }
}

/// Engine array constrained to elements of type `T`.
#[repr(transparent)]
pub struct TypedArray<T: VariantBridge> {
    array: Array,
    _element: PhantomData<T>,
}

impl<T: VariantBridge> TypedArray<T> {
    /// New empty array, typed on the engine side.
    pub fn new() -> Self {
        let mut array = Array::new();
        array.set_typed(T::VARIANT_TYPE, "");
        Self { array, _element: PhantomData }
    }

    pub fn from_slice(items: &[T]) -> Self {
        let mut out = Self::new();
        for item in items {
            out.push(item);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.array.get(index)?.try_to::<T>()
    }

    pub fn set(&mut self, index: usize, value: &T) -> bool {
        self.array.set(index, &Variant::from_value(value))
    }

    pub fn push(&mut self, value: &T) -> bool {
        self.array.push_value(value)
    }

    pub fn clear(&mut self) {
        self.array.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// The untyped view of the same engine value.
    pub fn as_array(&self) -> &Array {
        &self.array
    }
}

impl<T: VariantBridge> Default for TypedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: VariantBridge> Clone for TypedArray<T> {
    fn clone(&self) -> Self {
        Self { array: self.array.clone(), _element: PhantomData }
    }
}

impl<T: VariantBridge> PartialEq for TypedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T: VariantBridge + fmt::Debug> fmt::Debug for TypedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: VariantBridge> FromIterator<T> for TypedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        for item in iter {
            out.push(&item);
        }
        out
    }
}

unsafe impl<T: VariantBridge> Bridge for TypedArray<T> {
    type Repr = ArrayOpaque;

    fn to_engine(&self) -> ArrayOpaque {
        self.array.to_engine()
    }

    unsafe fn from_engine(repr: ArrayOpaque) -> Self {
        Self { array: unsafe { Array::from_engine(repr) }, _element: PhantomData }
    }

    unsafe fn from_engine_borrowed(repr: &ArrayOpaque) -> Self {
        Self { array: unsafe { Array::from_engine_borrowed(repr) }, _element: PhantomData }
    }
}

impl<T: VariantBridge> VariantBridge for TypedArray<T> {
    const VARIANT_TYPE: VariantType = VariantType::ARRAY;
}
