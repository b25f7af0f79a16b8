// Canonical cross-boundary carriers. Each one owns an engine-side value and
// releases it on Drop; Clone asks the engine for a copy.

pub mod string;
pub mod variant;
pub mod array;
pub mod dictionary;
pub mod packed;
pub mod callable;

pub use array::{Array, TypedArray};
pub use callable::{CallArgs, Callable};
pub use dictionary::Dictionary;
pub use packed::{
    PackedArray, PackedByteArray, PackedColorArray, PackedElement, PackedFloat32Array,
    PackedFloat64Array, PackedInt32Array, PackedInt64Array, PackedStringArray, PackedVector2Array,
    PackedVector3Array,
};
pub use string::{GString, NodePath, StringName};
pub use variant::Variant;

use std::ffi::c_void;

use gdbind_ffi::{Opaque, VariantType};

use crate::api::builtin_api;

// Lifecycle helpers shared by the carrier types.

pub(crate) fn construct_default<const N: usize>(ty: VariantType) -> Opaque<N> {
    let mut out = Opaque::<N>::ZEROED;
    unsafe { (builtin_api().construct_default)(ty, (&raw mut out).cast::<c_void>()) };
    out
}

pub(crate) fn copy_opaque<const N: usize>(ty: VariantType, src: &Opaque<N>) -> Opaque<N> {
    let mut out = Opaque::<N>::ZEROED;
    unsafe {
        (builtin_api().copy)(
            ty,
            (&raw mut out).cast::<c_void>(),
            (src as *const Opaque<N>).cast::<c_void>(),
        )
    };
    out
}

pub(crate) fn destroy_opaque<const N: usize>(ty: VariantType, value: &mut Opaque<N>) {
    unsafe { (builtin_api().destroy)(ty, (value as *mut Opaque<N>).cast::<c_void>()) };
}

pub(crate) fn opaque_equals<const N: usize>(ty: VariantType, a: &Opaque<N>, b: &Opaque<N>) -> bool {
    unsafe {
        (builtin_api().equals)(
            ty,
            (a as *const Opaque<N>).cast::<c_void>(),
            (b as *const Opaque<N>).cast::<c_void>(),
        )
    }
}

/// Implement Clone, Drop, PartialEq, Default and the bridge traits for a
/// carrier declared as `struct $name { opaque: Opaque<N>, _marker: PhantomData<*const ()> }`.
macro_rules! carrier_lifecycle {
    ($name:ident, $n:literal, $vt:ident) => {
        #[allow(dead_code)]
        impl $name {
            pub(crate) fn from_opaque(opaque: gdbind_ffi::Opaque<$n>) -> Self {
                Self { opaque, _marker: std::marker::PhantomData }
            }

            pub(crate) fn opaque_ptr(&self) -> *const std::ffi::c_void {
                (&self.opaque as *const gdbind_ffi::Opaque<$n>).cast()
            }

            pub(crate) fn opaque_mut_ptr(&mut self) -> *mut std::ffi::c_void {
                (&mut self.opaque as *mut gdbind_ffi::Opaque<$n>).cast()
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                let ty = gdbind_ffi::VariantType::$vt;
                Self::from_opaque($crate::builtin::copy_opaque(ty, &self.opaque))
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                $crate::builtin::destroy_opaque(gdbind_ffi::VariantType::$vt, &mut self.opaque);
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                let ty = gdbind_ffi::VariantType::$vt;
                $crate::builtin::opaque_equals(ty, &self.opaque, &other.opaque)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_opaque($crate::builtin::construct_default(gdbind_ffi::VariantType::$vt))
            }
        }

        unsafe impl $crate::bridge::Bridge for $name {
            type Repr = gdbind_ffi::Opaque<$n>;

            fn to_engine(&self) -> Self::Repr {
                self.opaque
            }

            unsafe fn from_engine(repr: Self::Repr) -> Self {
                Self::from_opaque(repr)
            }

            unsafe fn from_engine_borrowed(repr: &Self::Repr) -> Self {
                Self::from_opaque($crate::builtin::copy_opaque(gdbind_ffi::VariantType::$vt, repr))
            }
        }

        impl $crate::bridge::VariantBridge for $name {
            const VARIANT_TYPE: gdbind_ffi::VariantType = gdbind_ffi::VariantType::$vt;
        }
    };
}

pub(crate) use carrier_lifecycle;
