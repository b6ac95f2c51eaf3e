/// This config file lists out all the default values for the main mlconsole env configs.
/// All can be overridden by an ENV var of the same name. The backend origin can also be
/// overridden from the command line. These should only be primitive types
///

/// origin of the ML training backend
pub static MLCONSOLE_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// milliseconds the TUI event loop sleeps between terminal polls
pub static MLCONSOLE_TICK_RATE_MS: usize = 16;

/// number of most recent log lines kept in view by the log overlay
pub static MLCONSOLE_LOG_OVERLAY_LINES: usize = 500;
