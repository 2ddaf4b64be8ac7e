//! chatlog-logging - Tracing bridge to the host's log
//!
//! This crate provides:
//! - [`HostLoggingLayer`] tracing layer that forwards events to a host sink
//! - [`LogSink`] and [`LogSinkManager`] for registering that sink
//! - [`ReloadHandle`] for changing the level at runtime

mod layer;
mod reload;
mod sink;

pub use chatlog_core::LogLevel;
pub use layer::{HostLoggingLayer, init_logging, init_logging_with_level};
pub use reload::ReloadHandle;
pub use sink::{LogSink, LogSinkManager};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{HostLoggingLayer, LogLevel, LogSinkManager, ReloadHandle, init_logging};
}
