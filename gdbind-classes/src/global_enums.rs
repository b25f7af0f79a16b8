// Generated by gdbind-codegen from extension_api.json. Do not edit.

use gdbind_runtime::EngineEnum;

/// Engine enum `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Error(i64);

impl Error {
    pub const OK: Error = Error(0);
    pub const FAILED: Error = Error(1);
    pub const ERR_UNAVAILABLE: Error = Error(2);
    pub const ERR_UNCONFIGURED: Error = Error(3);
    pub const ERR_UNAUTHORIZED: Error = Error(4);
    pub const ERR_PARAMETER_RANGE_ERROR: Error = Error(5);
    pub const ERR_OUT_OF_MEMORY: Error = Error(6);
    pub const ERR_FILE_NOT_FOUND: Error = Error(7);
    pub const ERR_INVALID_DATA: Error = Error(30);
    pub const ERR_INVALID_PARAMETER: Error = Error(31);
    pub const ERR_ALREADY_EXISTS: Error = Error(32);
    pub const ERR_DOES_NOT_EXIST: Error = Error(33);
    pub const ERR_BUSY: Error = Error(44);
    pub const ERR_BUG: Error = Error(47);
}

impl EngineEnum for Error {
    const NAME: &'static str = "Error";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        Error(ord)
    }
}

/// Engine enum `Side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Side(i64);

impl Side {
    pub const LEFT: Side = Side(0);
    pub const TOP: Side = Side(1);
    pub const RIGHT: Side = Side(2);
    pub const BOTTOM: Side = Side(3);
}

impl EngineEnum for Side {
    const NAME: &'static str = "Side";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        Side(ord)
    }
}
