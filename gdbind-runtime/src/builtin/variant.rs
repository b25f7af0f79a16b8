// Variant: the engine's tagged union, three opaque words moved by value.

use std::fmt;
use std::marker::PhantomData;

use gdbind_ffi::{ObjectPtr, VariantOpaque, VariantType};

use crate::api::variant_api;
use crate::bridge::{Bridge, VariantBridge};

/// Engine variant carrying any engine value.
#[repr(transparent)]
pub struct Variant {
    opaque: VariantOpaque,
    _marker: PhantomData<*const ()>,
}

impl Variant {
    pub(crate) fn from_opaque(opaque: VariantOpaque) -> Self {
        Self { opaque, _marker: PhantomData }
    }

    pub(crate) fn opaque_ptr(&self) -> *const std::ffi::c_void {
        (&self.opaque as *const VariantOpaque).cast()
    }

    /// The nil variant.
    pub fn nil() -> Self {
        let mut opaque = VariantOpaque::ZEROED;
        unsafe { (variant_api().new_nil)((&raw mut opaque).cast()) };
        Self::from_opaque(opaque)
    }

    pub fn get_type(&self) -> VariantType {
        unsafe { (variant_api().get_type)(self.opaque_ptr()) }
    }

    pub fn is_nil(&self) -> bool {
        self.get_type() == VariantType::NIL
    }

    /// Wrap a copy of `value`.
    pub fn from_value<T: VariantBridge>(value: &T) -> Self {
        let repr = value.to_engine();
        let mut opaque = VariantOpaque::ZEROED;
        unsafe {
            (variant_api().from_type)(
                T::VARIANT_TYPE,
                (&raw mut opaque).cast(),
                (&raw const repr).cast(),
            )
        };
        Self::from_opaque(opaque)
    }

    /// Extract a `T`, or `None` when the variant holds another type.
    pub fn try_to<T: VariantBridge>(&self) -> Option<T> {
        let mut repr = std::mem::MaybeUninit::<T::Repr>::uninit();
        let ok = unsafe {
            (variant_api().to_type)(T::VARIANT_TYPE, repr.as_mut_ptr().cast(), self.opaque_ptr())
        };
        // SAFETY: on success the engine constructed a fresh owned value.
        ok.then(|| unsafe { T::from_engine(repr.assume_init()) })
    }

    /// Extract a `T`, falling back to `T::default()` on a type mismatch.
    pub fn to<T: VariantBridge + Default>(&self) -> T {
        self.try_to().unwrap_or_default()
    }

    /// Raw engine handle when the variant holds an object.
    pub fn object_handle(&self) -> Option<ObjectPtr> {
        self.try_to::<ObjectPtr>().filter(|h| !h.is_null())
    }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        let mut opaque = VariantOpaque::ZEROED;
        unsafe { (variant_api().copy)((&raw mut opaque).cast(), self.opaque_ptr()) };
        Self::from_opaque(opaque)
    }
}

impl Drop for Variant {
    fn drop(&mut self) {
        unsafe { (variant_api().destroy)((&raw mut self.opaque).cast()) };
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        unsafe { (variant_api().equals)(self.opaque_ptr(), other.opaque_ptr()) }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variant<{}>", self.get_type().name())
    }
}

unsafe impl Bridge for Variant {
    type Repr = VariantOpaque;

    fn to_engine(&self) -> VariantOpaque {
        self.opaque
    }

    unsafe fn from_engine(repr: VariantOpaque) -> Self {
        Self::from_opaque(repr)
    }

    unsafe fn from_engine_borrowed(repr: &VariantOpaque) -> Self {
        let mut opaque = VariantOpaque::ZEROED;
        let src = (repr as *const VariantOpaque).cast();
        unsafe { (variant_api().copy)((&raw mut opaque).cast(), src) };
        Self::from_opaque(opaque)
    }
}

macro_rules! variant_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Variant {
                fn from(value: $t) -> Self {
                    Variant::from_value(&value)
                }
            }
        )*
    };
}

variant_from!(
    bool,
    i64,
    f64,
    crate::math::Vector2,
    crate::math::Vector2i,
    crate::math::Vector3,
    crate::math::Color
);

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Variant::from_value(&super::GString::from(s))
    }
}

impl<T: VariantBridge> From<&T> for Variant {
    fn from(value: &T) -> Self {
        Variant::from_value(value)
    }
}
