// Text carriers: String (`GString`), StringName and NodePath. All three are
// one engine word and share the engine's UTF-8 interface.

use std::fmt;
use std::marker::PhantomData;

use gdbind_ffi::{Opaque, VariantType};

use super::carrier_lifecycle;
use crate::api::{ffi_len, string_api};

fn new_text(ty: VariantType, s: &str) -> Opaque<1> {
    let mut out = Opaque::<1>::ZEROED;
    unsafe { (string_api().new_with_utf8)(ty, (&raw mut out).cast(), s.as_ptr(), ffi_len(s)) };
    out
}

/// Read the UTF-8 text of a text carrier. Uses a stack buffer for short
/// strings and retries with the exact length for long ones.
fn read_text(ty: VariantType, opaque: &Opaque<1>) -> String {
    let src = (opaque as *const Opaque<1>).cast();
    let mut buf = [0u8; 256];
    let len =
        unsafe { (string_api().to_utf8)(ty, src, buf.as_mut_ptr(), buf.len() as u32) } as usize;
    if len <= buf.len() {
        return String::from_utf8_lossy(&buf[..len]).into_owned();
    }
    let mut heap = vec![0u8; len];
    let written =
        unsafe { (string_api().to_utf8)(ty, src, heap.as_mut_ptr(), len as u32) } as usize;
    heap.truncate(written.min(len));
    String::from_utf8_lossy(&heap).into_owned()
}

macro_rules! text_carrier {
    ($(#[$doc:meta])* $name:ident, $vt:ident) => {
        $(#[$doc])*
        #[repr(transparent)]
        pub struct $name {
            opaque: Opaque<1>,
            _marker: PhantomData<*const ()>,
        }

        carrier_lifecycle!($name, 1, $vt);

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Length of the UTF-8 text in bytes.
            pub fn len(&self) -> usize {
                read_text(VariantType::$vt, &self.opaque).len()
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_opaque(new_text(VariantType::$vt, s))
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<&$name> for String {
            fn from(s: &$name) -> String {
                read_text(VariantType::$vt, &s.opaque)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&read_text(VariantType::$vt, &self.opaque))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), read_text(VariantType::$vt, &self.opaque))
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                read_text(VariantType::$vt, &self.opaque) == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                read_text(VariantType::$vt, &self.opaque) == *other
            }
        }

        impl Eq for $name {}
    };
}

text_carrier!(
    /// Engine string. Named `GString` to keep `String` meaning the Rust type.
    GString,
    STRING
);

text_carrier!(
    /// Interned engine string used for names (methods, signals, properties).
    StringName,
    STRING_NAME
);

text_carrier!(
    /// Path through the scene graph, e.g. `../Skeleton3D`.
    NodePath,
    NODE_PATH
);

impl NodePath {
    /// Whether the path starts at the scene root.
    pub fn is_absolute(&self) -> bool {
        self.to_string().starts_with('/')
    }
}
