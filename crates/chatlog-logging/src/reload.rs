//! Runtime log level changes

use crate::sink::LogSinkManager;
use chatlog_core::{ChatLogError, ChatLogResult, LogLevel};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

/// Handle for changing the installed level filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, tracing_subscriber::Registry>>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set by [`init_logging`](crate::init_logging)
    pub fn set_handle(&self, handle: reload::Handle<LevelFilter, tracing_subscriber::Registry>) {
        *self.handle.lock() = Some(handle);
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Switch both the subscriber filter and the sink level
    pub fn reload_level(&self, level: LogLevel) -> ChatLogResult<()> {
        let guard = self.handle.lock();
        let handle = guard
            .as_ref()
            .ok_or_else(|| ChatLogError::ConfigError("logging is not initialized".to_string()))?;
        handle
            .reload(level_filter(level))
            .map_err(|e| ChatLogError::ConfigError(format!("failed to reload log filter: {e}")))?;
        LogSinkManager::global().set_level(level);
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
