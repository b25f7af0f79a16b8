// Global engine interface storage. Initialized once at entry, then read-only.

use std::sync::OnceLock;

use gdbind_ffi::*;

use crate::error::{BindError, BindResult};

/// Wrapper so a raw pointer can live inside OnceLock (which requires Send+Sync).
/// SAFETY: The interface table is created by the engine before `gdbind_init`
/// and lives for the entire library lifetime. Access is read-only after init.
struct InterfaceRef(*const EngineInterface);
unsafe impl Send for InterfaceRef {}
unsafe impl Sync for InterfaceRef {}

static API: OnceLock<InterfaceRef> = OnceLock::new();

/// Store the engine interface pointer. Called once by `gdbind::init`.
///
/// Re-initializing with the same table is a no-op; a different table is an error.
pub fn init_api(table: *const EngineInterface) -> BindResult<()> {
    if table.is_null() {
        return Err(BindError::NullInterface);
    }
    let found = unsafe { (*table).version };
    if found != ABI_VERSION {
        return Err(BindError::AbiMismatch { expected: ABI_VERSION, found });
    }
    let stored = API.get_or_init(|| InterfaceRef(table));
    if stored.0 != table {
        return Err(BindError::AlreadyInitialized);
    }
    Ok(())
}

/// Access the global interface table. Panics if called before `init_api`.
#[inline(always)]
pub fn api() -> &'static EngineInterface {
    // SAFETY: The pointer was validated non-null in init_api, and the engine
    // guarantees the table outlives the library.
    unsafe { &*API.get().expect("gdbind engine interface not initialized").0 }
}

/// Returns true if the interface table has been initialized.
#[inline]
pub fn is_api_initialized() -> bool {
    API.get().is_some()
}

// Sub-table accessors. The engine fills every sub-table pointer.

#[inline(always)]
pub(crate) fn object_api() -> &'static ObjectApi {
    unsafe { &*api().object }
}

#[inline(always)]
pub(crate) fn classdb_api() -> &'static ClassDbApi {
    unsafe { &*api().classdb }
}

#[inline(always)]
pub(crate) fn builtin_api() -> &'static BuiltinApi {
    unsafe { &*api().builtin }
}

#[inline(always)]
pub(crate) fn string_api() -> &'static StringApi {
    unsafe { &*api().string }
}

#[inline(always)]
pub(crate) fn array_api() -> &'static ArrayApi {
    unsafe { &*api().array }
}

#[inline(always)]
pub(crate) fn dictionary_api() -> &'static DictionaryApi {
    unsafe { &*api().dictionary }
}

#[inline(always)]
pub(crate) fn packed_api() -> &'static PackedApi {
    unsafe { &*api().packed }
}

#[inline(always)]
pub(crate) fn variant_api() -> &'static VariantApi {
    unsafe { &*api().variant }
}

#[inline(always)]
pub(crate) fn callable_api() -> &'static CallableApi {
    unsafe { &*api().callable }
}

#[inline(always)]
pub(crate) fn logging_api() -> &'static LoggingApi {
    unsafe { &*api().logging }
}

/// Length of a UTF-8 string in the `u32` the interface expects.
#[inline]
pub(crate) fn ffi_len(s: &str) -> u32 {
    u32::try_from(s.len()).unwrap_or(u32::MAX)
}
