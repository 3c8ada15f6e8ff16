//! Diagnostic logging bootstrap.
//!
//! # Invariants
//! - The logger is started at most once per process.
//! - `RUST_LOG` takes precedence over the configured level.
//! - Initialization never panics; failures are reported to the caller.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts stderr logging at `level` (trace|debug|info|warn|error).
///
/// Later calls are no-ops and keep the first level.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;

    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, String> {
        let handle = Logger::try_with_env_or_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        debug!(
            "event=app_start module=core status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );
        Ok(handle)
    })?;

    Ok(())
}

pub fn logging_active() -> bool {
    LOGGER.get().is_some()
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        )),
    }
}
