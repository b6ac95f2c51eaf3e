/// `log` backend for the console. Stdout belongs to the terminal UI while it
/// runs, so records go to a bounded in-memory ring the log overlay reads from.
use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

const MAX_LOG_LINES: usize = 50_000;

/// Crates whose debug output is worth keeping. Dependencies only log at info and up.
const OWN_TARGET_PREFIX: &str = "mlconsole";

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: Level, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            at: Local::now(),
            level,
            target: target.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Shared ring of log entries; the oldest entry is evicted once full
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<RwLock<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(RwLock::new(VecDeque::with_capacity(capacity.min(1024)))),
            capacity: capacity.max(1),
        }
    }

    pub fn add_log(&self, entry: LogEntry) {
        let mut logs = self.logs.write().unwrap_or_else(PoisonError::into_inner);
        while logs.len() >= self.capacity {
            logs.pop_front();
        }
        logs.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.logs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// The newest `count` entries formatted for display, oldest first
    pub fn get_recent_logs(&self, count: usize) -> Vec<String> {
        let logs = self.logs.read().unwrap_or_else(PoisonError::into_inner);
        let skip = logs.len().saturating_sub(count);
        logs.iter().skip(skip).map(LogEntry::to_string).collect()
    }
}

pub struct BufferedLogger {
    buffer: LogBuffer,
}

impl BufferedLogger {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl log::Log for BufferedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match metadata.level() {
            Level::Trace => false,
            Level::Debug => metadata.target().starts_with(OWN_TARGET_PREFIX),
            _ => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.buffer.add_log(LogEntry::new(
            record.level(),
            record.target(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

/// Install a [`BufferedLogger`] as the global logger. Fails if another
/// logger is already installed; the caller must not print the error while
/// the terminal is in raw mode.
pub fn init_memory_logger() -> Result<LogBuffer, SetLoggerError> {
    let buffer = LogBuffer::new();
    log::set_boxed_logger(Box::new(BufferedLogger::new(buffer.clone())))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use log::Log;

    fn entry(message: &str) -> LogEntry {
        LogEntry::new(Level::Info, "mlconsole_tui", message)
    }

    #[test]
    fn test_recent_logs_returns_tail() {
        let buffer = LogBuffer::new();
        for i in 0..5 {
            buffer.add_log(entry(&format!("line {i}")));
        }
        let recent = buffer.get_recent_logs(2);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("line 3"));
        assert!(recent[1].ends_with("line 4"));
    }

    #[test]
    fn test_buffer_evicts_oldest_when_full() {
        let buffer = LogBuffer::with_capacity(3);
        for i in 0..10 {
            buffer.add_log(entry(&i.to_string()));
        }
        assert_eq!(buffer.len(), 3);
        let kept = buffer.get_recent_logs(10);
        assert!(kept[0].ends_with(": 7"));
        assert!(kept[2].ends_with(": 9"));
    }

    #[test]
    fn test_debug_from_dependencies_is_filtered() {
        let logger = BufferedLogger::new(LogBuffer::new());
        let own = Metadata::builder()
            .level(Level::Debug)
            .target("mlconsole_tui::effects")
            .build();
        let foreign = Metadata::builder()
            .level(Level::Debug)
            .target("hyper_util::client")
            .build();
        let foreign_warning = Metadata::builder()
            .level(Level::Warn)
            .target("hyper_util::client")
            .build();
        assert!(logger.enabled(&own));
        assert!(!logger.enabled(&foreign));
        assert!(logger.enabled(&foreign_warning));
    }

    #[test]
    fn test_entry_display() {
        let mut e = entry("hello");
        e.at = Local.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
        assert_eq!(
            e.to_string(),
            "[2026-10-14 09:00:00.000] INFO mlconsole_tui: hello"
        );
    }
}
