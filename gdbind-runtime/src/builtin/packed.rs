// Packed arrays: engine-owned contiguous buffers with copy-on-write storage.
// Elements are read and written in place through the engine's pointers;
// nothing is copied to host memory on a boundary crossing.

use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use gdbind_ffi::{PackedArrayOpaque, VariantType};

use super::string::GString;
use super::{construct_default, copy_opaque, destroy_opaque, opaque_equals};
use crate::api::packed_api;
use crate::bridge::{Bridge, VariantBridge};
use crate::math::{Color, Vector2, Vector3};

/// Element types of the engine's packed arrays.
///
/// # Safety
/// `ARRAY_TYPE` must be the packed type whose element layout is `Self`.
pub unsafe trait PackedElement: Sized {
    const ARRAY_TYPE: VariantType;

    /// # Safety
    /// `src` points at a live element.
    unsafe fn read(src: *const u8) -> Self;

    /// # Safety
    /// `dst` points at a live element, which is replaced.
    unsafe fn write(dst: *mut u8, value: &Self);
}

macro_rules! pod_element {
    ($($t:ty => $vt:ident),* $(,)?) => {
        $(
            unsafe impl PackedElement for $t {
                const ARRAY_TYPE: VariantType = VariantType::$vt;

                unsafe fn read(src: *const u8) -> Self {
                    unsafe { ptr::read_unaligned(src.cast::<$t>()) }
                }

                unsafe fn write(dst: *mut u8, value: &Self) {
                    unsafe { ptr::write_unaligned(dst.cast::<$t>(), *value) }
                }
            }
        )*
    };
}

pod_element! {
    u8 => PACKED_BYTE_ARRAY,
    i32 => PACKED_INT32_ARRAY,
    i64 => PACKED_INT64_ARRAY,
    f32 => PACKED_FLOAT32_ARRAY,
    f64 => PACKED_FLOAT64_ARRAY,
    Vector2 => PACKED_VECTOR2_ARRAY,
    Vector3 => PACKED_VECTOR3_ARRAY,
    Color => PACKED_COLOR_ARRAY,
}

// String elements are engine strings: reads copy, writes replace.
unsafe impl PackedElement for GString {
    const ARRAY_TYPE: VariantType = VariantType::PACKED_STRING_ARRAY;

    unsafe fn read(src: *const u8) -> Self {
        unsafe { GString::from_engine_borrowed(&*src.cast::<gdbind_ffi::StringOpaque>()) }
    }

    unsafe fn write(dst: *mut u8, value: &Self) {
        let slot = dst.cast::<gdbind_ffi::StringOpaque>();
        unsafe {
            destroy_opaque(VariantType::STRING, &mut *slot);
            ptr::write(slot, copy_opaque(VariantType::STRING, &value.to_engine()));
        }
    }
}

/// Engine packed array of `T`.
#[repr(transparent)]
pub struct PackedArray<T: PackedElement> {
    opaque: PackedArrayOpaque,
    _element: PhantomData<*const T>,
}

pub type PackedByteArray = PackedArray<u8>;
pub type PackedInt32Array = PackedArray<i32>;
pub type PackedInt64Array = PackedArray<i64>;
pub type PackedFloat32Array = PackedArray<f32>;
pub type PackedFloat64Array = PackedArray<f64>;
pub type PackedStringArray = PackedArray<GString>;
pub type PackedVector2Array = PackedArray<Vector2>;
pub type PackedVector3Array = PackedArray<Vector3>;
pub type PackedColorArray = PackedArray<Color>;

impl<T: PackedElement> PackedArray<T> {
    const STRIDE: usize = size_of::<T>();

    fn from_opaque(opaque: PackedArrayOpaque) -> Self {
        Self { opaque, _element: PhantomData }
    }

    fn ptr(&self) -> *const std::ffi::c_void {
        (&self.opaque as *const PackedArrayOpaque).cast()
    }

    fn ptr_mut(&mut self) -> *mut std::ffi::c_void {
        (&mut self.opaque as *mut PackedArrayOpaque).cast()
    }

    pub fn new() -> Self {
        Self::from_opaque(construct_default(T::ARRAY_TYPE))
    }

    pub fn from_slice(items: &[T]) -> Self {
        let mut out = Self::new();
        out.resize(items.len());
        if !items.is_empty() {
            let base = unsafe { (packed_api().ptrw)(T::ARRAY_TYPE, out.ptr_mut()) };
            for (i, item) in items.iter().enumerate() {
                unsafe { T::write(base.add(i * Self::STRIDE), item) };
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        let n = unsafe { (packed_api().size)(T::ARRAY_TYPE, self.ptr()) };
        usize::try_from(n).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        let base = unsafe { (packed_api().ptr)(T::ARRAY_TYPE, self.ptr()) };
        Some(unsafe { T::read(base.add(index * Self::STRIDE)) })
    }

    /// Replace element `index`; detaches shared storage first. False when out of range.
    pub fn set(&mut self, index: usize, value: &T) -> bool {
        if index >= self.len() {
            return false;
        }
        let base = unsafe { (packed_api().ptrw)(T::ARRAY_TYPE, self.ptr_mut()) };
        unsafe { T::write(base.add(index * Self::STRIDE), value) };
        true
    }

    pub fn push(&mut self, value: &T) {
        let len = self.len();
        self.resize(len + 1);
        self.set(len, value);
    }

    pub fn resize(&mut self, len: usize) {
        unsafe { (packed_api().resize)(T::ARRAY_TYPE, self.ptr_mut(), len as i64) };
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: PackedElement + Copy> PackedArray<T> {
    /// Borrow the engine storage directly. Valid until the next mutation,
    /// which the borrow prevents.
    pub fn as_slice(&self) -> &[T] {
        let len = self.len();
        if len == 0 {
            return &[];
        }
        let base = unsafe { (packed_api().ptr)(T::ARRAY_TYPE, self.ptr()) };
        unsafe { std::slice::from_raw_parts(base.cast::<T>(), len) }
    }
}

impl<T: PackedElement> Default for PackedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PackedElement> Clone for PackedArray<T> {
    fn clone(&self) -> Self {
        Self::from_opaque(copy_opaque(T::ARRAY_TYPE, &self.opaque))
    }
}

impl<T: PackedElement> Drop for PackedArray<T> {
    fn drop(&mut self) {
        destroy_opaque(T::ARRAY_TYPE, &mut self.opaque);
    }
}

impl<T: PackedElement> PartialEq for PackedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        opaque_equals(T::ARRAY_TYPE, &self.opaque, &other.opaque)
    }
}

impl<T: PackedElement + fmt::Debug> fmt::Debug for PackedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PackedElement> From<&[T]> for PackedArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: PackedElement> FromIterator<T> for PackedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        Self::from_slice(&items)
    }
}

unsafe impl<T: PackedElement> Bridge for PackedArray<T> {
    type Repr = PackedArrayOpaque;

    fn to_engine(&self) -> PackedArrayOpaque {
        self.opaque
    }

    unsafe fn from_engine(repr: PackedArrayOpaque) -> Self {
        Self::from_opaque(repr)
    }

    unsafe fn from_engine_borrowed(repr: &PackedArrayOpaque) -> Self {
        Self::from_opaque(copy_opaque(T::ARRAY_TYPE, repr))
    }
}

impl<T: PackedElement> VariantBridge for PackedArray<T> {
    const VARIANT_TYPE: VariantType = T::ARRAY_TYPE;
}
