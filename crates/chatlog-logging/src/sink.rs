//! Host log sink management

use chatlog_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Receiver for log lines in the host runtime
///
/// Called with the level, the target (module path), and the formatted
/// message including structured fields.
pub type LogSink = Arc<dyn Fn(LogLevel, &str, &str) + Send + Sync>;

static SINK_MANAGER: OnceCell<LogSinkManager> = OnceCell::new();

/// Holds the active sink and level filter
pub struct LogSinkManager {
    sink: RwLock<Option<LogSink>>,
    level: AtomicU8,
}

impl LogSinkManager {
    pub fn new() -> Self {
        Self {
            sink: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the process-wide manager
    pub fn global() -> &'static LogSinkManager {
        SINK_MANAGER.get_or_init(LogSinkManager::new)
    }

    /// Route log lines to `sink`, replacing any previous sink
    pub fn set_sink(&self, sink: impl Fn(LogLevel, &str, &str) + Send + Sync + 'static) {
        *self.sink.write() = Some(Arc::new(sink));
    }

    /// Stop forwarding log lines
    pub fn clear_sink(&self) {
        *self.sink.write() = None;
    }

    pub fn has_sink(&self) -> bool {
        self.sink.read().is_some()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Forward a line to the sink if one is set and the level is enabled
    pub fn log(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        // Clone out of the lock so a sink that logs again cannot deadlock
        let sink = match self.sink.read().as_ref() {
            Some(sink) => Arc::clone(sink),
            None => return,
        };

        sink(level, target, message);
    }
}

impl Default for LogSinkManager {
    fn default() -> Self {
        Self::new()
    }
}
