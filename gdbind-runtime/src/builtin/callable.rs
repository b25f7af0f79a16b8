// Callable: engine function object. Host closures become Callables through
// the callable registry; the engine calls back through `call_trampoline`.

use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;
use std::panic::AssertUnwindSafe;

use gdbind_ffi::{CallError, CallableCustomInfo, CallableOpaque, VariantOpaque};

use super::carrier_lifecycle;
use super::variant::Variant;
use crate::api::{callable_api, variant_api};
use crate::bridge::{Bridge, VariantBridge};
use crate::callable_registry;
use crate::class_registry;
use crate::ffi_guard::ffi_boundary;
use crate::object::EngineClass;

#[repr(transparent)]
pub struct Callable {
    opaque: CallableOpaque,
    _marker: PhantomData<*const ()>,
}

carrier_lifecycle!(Callable, 2, CALLABLE);

impl Callable {
    /// Wrap a host closure. The closure lives until the engine drops its
    /// last reference to the Callable.
    pub fn from_fn(f: impl FnMut(&CallArgs<'_>) -> Variant + 'static) -> Self {
        let id = callable_registry::register(f);
        let info = CallableCustomInfo {
            userdata: id as usize as *mut c_void,
            call_func: call_trampoline,
            free_func: Some(free_trampoline),
        };
        let mut opaque = CallableOpaque::ZEROED;
        unsafe { (callable_api().create_custom)((&raw mut opaque).cast(), &info) };
        Self::from_opaque(opaque)
    }

    /// Invoke through the engine.
    pub fn call(&self, args: &[Variant]) -> Result<Variant, CallError> {
        let ptrs: Vec<*const c_void> = args.iter().map(|a| a.opaque_ptr()).collect();
        let mut ret = VariantOpaque::ZEROED;
        let mut error = CallError::default();
        unsafe {
            (callable_api().call)(
                self.opaque_ptr(),
                ptrs.as_ptr(),
                ptrs.len() as i64,
                (&raw mut ret).cast(),
                &mut error,
            );
        }
        let ret = unsafe { Variant::from_engine(ret) };
        if error.is_ok() { Ok(ret) } else { Err(error) }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable")
    }
}

/// Arguments of an inbound Callable invocation, borrowed from the engine.
pub struct CallArgs<'a> {
    args: &'a [*const c_void],
}

impl<'a> CallArgs<'a> {
    pub fn empty() -> CallArgs<'static> {
        CallArgs { args: &[] }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Borrow argument `i` as a Variant.
    pub fn variant(&self, i: usize) -> Option<&'a Variant> {
        let p = *self.args.get(i)?;
        // SAFETY: the engine passes pointers to live Variants, and Variant is
        // a transparent wrapper over the opaque payload.
        Some(unsafe { &*p.cast::<Variant>() })
    }

    pub fn get<T: VariantBridge>(&self, i: usize) -> Option<T> {
        self.variant(i)?.try_to::<T>()
    }

    /// Argument `i`, or `T::default()` when missing or mistyped.
    pub fn arg<T: VariantBridge + Default>(&self, i: usize) -> T {
        self.get(i).unwrap_or_default()
    }

    /// Argument `i` as an object of class `T` (or a subclass).
    pub fn object<T: EngineClass>(&self, i: usize) -> Option<T> {
        let handle = self.variant(i)?.object_handle()?;
        class_registry::cast_handle::<T>(handle)
    }
}

unsafe extern "C" fn call_trampoline(
    userdata: *mut c_void,
    args: *const *const c_void,
    argc: i64,
    ret: *mut c_void,
    error: *mut CallError,
) {
    let id = userdata as usize as u64;
    let result = ffi_boundary(
        None,
        AssertUnwindSafe(|| {
            let slice: &[*const c_void] = match usize::try_from(argc) {
                Ok(n) if n > 0 && !args.is_null() => unsafe { std::slice::from_raw_parts(args, n) },
                _ => &[],
            };
            callable_registry::invoke(id, &CallArgs { args: slice })
        }),
    );
    unsafe {
        match result {
            Some(value) => {
                std::ptr::write(ret.cast::<VariantOpaque>(), value.into_engine());
                if !error.is_null() {
                    *error = CallError::default();
                }
            }
            None => {
                (variant_api().new_nil)(ret);
                if !error.is_null() {
                    *error =
                        CallError { error: CallError::INVALID_METHOD, argument: 0, expected: 0 };
                }
            }
        }
    }
}

unsafe extern "C" fn free_trampoline(userdata: *mut c_void) {
    let id = userdata as usize as u64;
    ffi_boundary((), || callable_registry::unregister(id));
}
