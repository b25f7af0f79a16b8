// Logging bridge: `log` records are forwarded to the engine's print entry.

use gdbind_ffi::{LOG_ERROR, LOG_INFO, LOG_WARNING};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::api::{ffi_len, is_api_initialized, logging_api};

/// `log::Log` implementation writing through the engine's logging sub-table.
///
/// Records emitted before the interface is initialized are dropped.
pub struct EngineLogger;

static LOGGER: EngineLogger = EngineLogger;

impl Log for EngineLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!("[gdbind] {}", record.args());
        print(engine_level(record.level()), &msg);
    }

    fn flush(&self) {}
}

/// Install the engine logger as the global `log` sink.
///
/// Returns false when another logger was already installed (tests, or a host
/// crate that brought its own); the level filter is applied either way.
pub fn install_logger(level: LevelFilter) -> bool {
    let installed = log::set_logger(&LOGGER).is_ok();
    log::set_max_level(level);
    installed
}

/// Map a `log` level onto the engine's three severities.
pub fn engine_level(level: Level) -> u32 {
    match level {
        Level::Error => LOG_ERROR,
        Level::Warn => LOG_WARNING,
        Level::Info | Level::Debug | Level::Trace => LOG_INFO,
    }
}

/// Print one line through the engine, bypassing the `log` filter.
pub fn print(level: u32, msg: &str) {
    if !is_api_initialized() {
        return;
    }
    unsafe { (logging_api().print)(level, msg.as_ptr(), ffi_len(msg)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_collapse_to_three_severities() {
        assert_eq!(engine_level(Level::Error), LOG_ERROR);
        assert_eq!(engine_level(Level::Warn), LOG_WARNING);
        assert_eq!(engine_level(Level::Info), LOG_INFO);
        assert_eq!(engine_level(Level::Trace), LOG_INFO);
    }
}
