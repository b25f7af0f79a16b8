// Method bind resolution. Generated bind tables resolve every
// (class, method) pair once at startup and keep the pointers for the
// process lifetime.

use std::fmt;

use gdbind_ffi::MethodBindPtr;

use crate::api::{classdb_api, ffi_len};
use crate::error::{BindError, BindResult};

/// Resolved engine method. Copy, immutable after resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MethodBind(MethodBindPtr);

impl MethodBind {
    pub const NIL: MethodBind = MethodBind(MethodBindPtr::NULL);

    #[inline]
    pub fn from_raw(ptr: MethodBindPtr) -> Self {
        MethodBind(ptr)
    }

    #[inline]
    pub fn raw(self) -> MethodBindPtr {
        self.0
    }

    #[inline]
    pub fn is_nil(self) -> bool {
        self.0.is_null()
    }
}

impl Default for MethodBind {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Debug for MethodBind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodBind({:#x})", self.0.addr())
    }
}

/// Ask the engine for a single bind. Nil when the engine does not know it.
pub fn lookup(class: &str, method: &str, hash: i64) -> MethodBind {
    let raw = unsafe {
        (classdb_api().get_method_bind)(
            class.as_ptr(),
            ffi_len(class),
            method.as_ptr(),
            ffi_len(method),
            hash,
        )
    };
    MethodBind(raw)
}

/// Collects misses while a bind table is being filled, so one startup
/// report names every unresolved method.
#[derive(Default)]
pub struct BindResolver {
    resolved: usize,
    missing: Vec<(String, String)>,
}

impl BindResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, class: &str, method: &str, hash: i64) -> MethodBind {
        let bind = lookup(class, method, hash);
        if bind.is_nil() {
            log::warn!("method bind not found: {class}::{method} (hash {hash})");
            self.missing.push((class.to_owned(), method.to_owned()));
        } else {
            self.resolved += 1;
        }
        bind
    }

    pub fn resolved(&self) -> usize {
        self.resolved
    }

    pub fn missing(&self) -> &[(String, String)] {
        &self.missing
    }

    /// Fail with every miss when at least one bind is nil.
    pub fn finish(self) -> BindResult<()> {
        if self.missing.is_empty() {
            log::debug!("resolved {} method binds", self.resolved);
            Ok(())
        } else {
            Err(BindError::MissingMethodBinds(self.missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_bind() {
        assert!(MethodBind::NIL.is_nil());
        assert!(MethodBind::default().is_nil());
        assert_eq!(MethodBind::NIL.raw(), MethodBindPtr::NULL);
    }

    #[test]
    fn empty_resolver_finishes_ok() {
        let resolver = BindResolver::new();
        assert_eq!(resolver.resolved(), 0);
        assert!(resolver.missing().is_empty());
        assert_eq!(resolver.finish(), Ok(()));
    }
}
