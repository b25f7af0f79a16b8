// FFI boundary guard: wraps host callbacks to catch panics before they
// cross the FFI boundary (which is undefined behavior).

use std::any::Any;

/// Execute `f` and catch any panic, returning `default` on failure.
///
/// Every `extern "C"` function the engine calls should wrap its body in this
/// guard. The panic message is logged through the engine at error level.
pub fn ffi_boundary<F, R>(default: R, f: F) -> R
where
    F: FnOnce() -> R + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => value,
        Err(payload) => {
            log::error!("{}", panic_message(payload.as_ref()));
            default
        }
    }
}

/// Report an invariant violation and terminate the process.
///
/// Reserved for states the binding cannot continue from: an inbound call
/// naming an instance the host never created, a call frame used past its
/// capacity, a slot read with the wrong type.
pub fn fatal(msg: &str) -> ! {
    let line = format!("[gdbind] fatal: {msg}");
    crate::logging::print(gdbind_ffi::LOG_ERROR, &line);
    eprintln!("{line}");
    std::process::abort()
}

/// Extract a human-readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("host panic: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("host panic: {s}")
    } else {
        "host panic (unknown payload)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffi_boundary_returns_value_on_success() {
        let result = ffi_boundary(0i32, || 42);
        assert_eq!(result, 42);
    }

    #[test]
    fn ffi_boundary_returns_default_on_panic() {
        let result = ffi_boundary(-1i32, || {
            panic!("test panic");
        });
        assert_eq!(result, -1);
    }

    #[test]
    fn ffi_boundary_returns_default_on_string_panic() {
        let result = ffi_boundary(false, || -> bool {
            panic!("{}", "formatted panic");
        });
        assert!(!result);
    }

    #[test]
    fn panic_messages_are_prefixed() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "host panic: boom");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "host panic (unknown payload)");
    }
}
