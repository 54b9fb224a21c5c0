//! Quick log lines.

use std::fmt;

/// Log file named when the caller does not pick one.
pub const DEFAULT_LOG_FILE: &str = "toolbox.log";

/// Tracing target for every line written through [`log`].
pub const LOG_TARGET: &str = "toolbox";

/// Emits `message` as an info event on the `toolbox` target.
///
/// `file` travels as a field so a subscriber can route the line to its own
/// log file. Nothing is written unless the application installs a subscriber.
pub fn log(message: impl fmt::Display, file: &str) {
    tracing::info!(target: LOG_TARGET, file, "{message}");
}

/// Emits `message` tagged with [`DEFAULT_LOG_FILE`].
pub fn log_default(message: impl fmt::Display) {
    log(message, DEFAULT_LOG_FILE);
}
