use std::ffi::c_void;

/// Opaque handle to an engine object. The host never dereferences it.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ObjectPtr(pub *mut c_void);

/// Opaque handle to a resolved (class, method) implementation.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MethodBindPtr(pub *mut c_void);

/// Host-side instance data attached to an engine object of a host-defined class.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ClassInstancePtr(pub *mut c_void);

/// Untyped pointer to a value slot the engine reads or writes.
pub type TypePtr = *mut c_void;
/// Untyped pointer to a value slot the engine only reads.
pub type ConstTypePtr = *const c_void;

macro_rules! null_handle {
    ($($name:ident),*) => {
        $(
            impl $name {
                pub const NULL: Self = Self(std::ptr::null_mut());

                #[inline]
                pub fn is_null(self) -> bool {
                    self.0.is_null()
                }

                #[inline]
                pub fn addr(self) -> usize {
                    self.0 as usize
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::NULL
                }
            }
        )*
    };
}

null_handle!(ObjectPtr, MethodBindPtr, ClassInstancePtr);

// Handles are raw identifiers. They can be sent across threads
// (but must only be *used* on the engine main thread).
// Sync is needed for OnceLock caching of binds and singletons.
unsafe impl Send for ObjectPtr {}
unsafe impl Sync for ObjectPtr {}
unsafe impl Send for MethodBindPtr {}
unsafe impl Sync for MethodBindPtr {}
unsafe impl Send for ClassInstancePtr {}
unsafe impl Sync for ClassInstancePtr {}
