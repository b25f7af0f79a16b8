// Error types for the gdbind runtime.
//
// Only setup-time operations (init, bind resolution, class registration) return
// `BindResult`. Forwarders hand engine error codes back unchanged as the
// generated `Error` enum and never synthesize errors of their own.

use thiserror::Error;

/// Rich error type for gdbind setup operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("engine interface not initialized")]
    NotInitialized,

    #[error("engine interface pointer is null")]
    NullInterface,

    #[error("engine interface already initialized with a different table")]
    AlreadyInitialized,

    #[error("engine ABI version {found} does not match expected {expected}")]
    AbiMismatch { expected: u32, found: u32 },

    #[error("{} method bind(s) could not be resolved (first: {})", .0.len(), first_missing(.0))]
    MissingMethodBinds(Vec<(String, String)>),

    #[error("class not found: {0}")]
    ClassNotFound(String),

    #[error("{class} declares no overridable named {name}")]
    UnknownVirtual { class: String, name: String },

    #[error("engine failed to construct {0}")]
    ConstructionFailed(String),

    #[error("engine rejected registration of host class {0}")]
    RegistrationRejected(String),

    #[error("operation on a nil object")]
    NilObject,

    #[error("engine returned error code {0}")]
    Engine(i64),
}

fn first_missing(missing: &[(String, String)]) -> String {
    missing
        .first()
        .map(|(class, method)| format!("{class}.{method}"))
        .unwrap_or_default()
}

/// Convenience alias used throughout the runtime.
pub type BindResult<T> = Result<T, BindError>;

/// Convert a raw engine error code to a `BindResult<()>`. `0` is OK; any
/// other value is carried verbatim in `BindError::Engine`.
pub fn check_engine(code: i64) -> BindResult<()> {
    match code {
        0 => Ok(()),
        other => Err(BindError::Engine(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_engine_ok_returns_ok() {
        assert!(check_engine(0).is_ok());
    }

    #[test]
    fn check_engine_forwards_code_verbatim() {
        assert_eq!(check_engine(31), Err(BindError::Engine(31)));
        assert_eq!(check_engine(-4), Err(BindError::Engine(-4)));
    }

    #[test]
    fn missing_binds_names_the_first_pair() {
        let err = BindError::MissingMethodBinds(vec![
            ("Node".into(), "get_name".into()),
            ("Node".into(), "set_name".into()),
        ]);
        assert_eq!(
            err.to_string(),
            "2 method bind(s) could not be resolved (first: Node.get_name)"
        );
    }

    #[test]
    fn display_formats_are_human_readable() {
        let err = BindError::UnknownVirtual { class: "CodeEdit".into(), name: "_nope".into() };
        assert_eq!(err.to_string(), "CodeEdit declares no overridable named _nope");
    }
}
