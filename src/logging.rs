use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::info;

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Starts the stderr logger. `RUST_LOG` overrides `level` when set.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn init_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=app_start module=postdesk status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}
