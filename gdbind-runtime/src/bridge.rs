// Value bridges: how each cross-boundary type sits in a pointer-call slot.

use gdbind_ffi::{ObjectPtr, VariantType};

use crate::math::{Color, Vector2, Vector2i, Vector3};

/// Contract between a host value and its pointer-call encoding.
///
/// `Repr` is the exact bit pattern the engine reads from an argument slot or
/// writes into a return slot.
///
/// # Safety
/// `Repr` must match the engine's layout for the type, and `from_engine`
/// must take over exactly the ownership the engine hands out for a return.
pub unsafe trait Bridge: Sized {
    type Repr: Copy;

    /// Borrowing conversion for an outbound argument. Ownership stays with `self`.
    fn to_engine(&self) -> Self::Repr;

    /// Take ownership of a value the engine constructed into a return slot.
    ///
    /// # Safety
    /// `repr` must be a live value of this type that nobody else will release.
    unsafe fn from_engine(repr: Self::Repr) -> Self;

    /// Copy a value the engine still owns (inbound arguments).
    ///
    /// # Safety
    /// `repr` must point at a live value of this type.
    unsafe fn from_engine_borrowed(repr: &Self::Repr) -> Self {
        unsafe { Self::from_engine(*repr) }
    }

    /// Hand ownership to the engine (inbound return slots, owned temporaries).
    fn into_engine(self) -> Self::Repr {
        let repr = self.to_engine();
        std::mem::forget(self);
        repr
    }
}

/// Size of the return slot a call site reserves for `T`.
pub const fn size_of_return_slot<T: Bridge>() -> usize {
    size_of::<T::Repr>()
}

/// Types that can be wrapped in a Variant: a bridge plus the engine type tag.
pub trait VariantBridge: Bridge {
    const VARIANT_TYPE: VariantType;
}

/// Engine enumerations and bitfields: newtypes over the engine's `int`.
pub trait EngineEnum: Copy + 'static {
    /// Qualified engine name, e.g. `CSGShape3D.Operation`.
    const NAME: &'static str;

    fn ord(self) -> i64;

    fn from_ord(ord: i64) -> Self;
}

unsafe impl<E: EngineEnum> Bridge for E {
    type Repr = i64;

    fn to_engine(&self) -> i64 {
        self.ord()
    }

    unsafe fn from_engine(repr: i64) -> Self {
        E::from_ord(repr)
    }
}

impl<E: EngineEnum> VariantBridge for E {
    const VARIANT_TYPE: VariantType = VariantType::INT;
}

macro_rules! pod_bridge {
    ($($t:ty => $vt:ident),* $(,)?) => {
        $(
            unsafe impl Bridge for $t {
                type Repr = $t;

                #[inline]
                fn to_engine(&self) -> $t {
                    *self
                }

                #[inline]
                unsafe fn from_engine(repr: $t) -> $t {
                    repr
                }
            }

            impl VariantBridge for $t {
                const VARIANT_TYPE: VariantType = VariantType::$vt;
            }
        )*
    };
}

pod_bridge! {
    i64 => INT,
    f64 => FLOAT,
    Vector2 => VECTOR2,
    Vector2i => VECTOR2I,
    Vector3 => VECTOR3,
    Color => COLOR,
    ObjectPtr => OBJECT,
}

// The engine encodes bool as one byte.
unsafe impl Bridge for bool {
    type Repr = u8;

    #[inline]
    fn to_engine(&self) -> u8 {
        u8::from(*self)
    }

    #[inline]
    unsafe fn from_engine(repr: u8) -> bool {
        repr != 0
    }
}

impl VariantBridge for bool {
    const VARIANT_TYPE: VariantType = VariantType::BOOL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    struct Mode(i64);

    impl EngineEnum for Mode {
        const NAME: &'static str = "Test.Mode";

        fn ord(self) -> i64 {
            self.0
        }

        fn from_ord(ord: i64) -> Self {
            Mode(ord)
        }
    }

    #[test]
    fn return_slot_sizes() {
        assert_eq!(size_of_return_slot::<bool>(), 1);
        assert_eq!(size_of_return_slot::<i64>(), 8);
        assert_eq!(size_of_return_slot::<Vector3>(), 12);
        assert_eq!(size_of_return_slot::<Color>(), 16);
        assert_eq!(size_of_return_slot::<Mode>(), 8);
    }

    #[test]
    fn primitives_pass_by_value() {
        unsafe {
            assert!(bool::from_engine(true.to_engine()));
            assert_eq!(f64::from_engine(0.75f64.to_engine()), 0.75);
            let v = Vector2i::new(3, 4);
            assert_eq!(Vector2i::from_engine(v.to_engine()), v);
        }
    }

    #[test]
    fn enums_travel_as_int() {
        assert_eq!(Mode(2).to_engine(), 2);
        assert_eq!(unsafe { Mode::from_engine(5) }, Mode(5));
        assert_eq!(<Mode as VariantBridge>::VARIANT_TYPE, VariantType::INT);
    }
}
