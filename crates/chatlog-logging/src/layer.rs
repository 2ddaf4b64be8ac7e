//! Tracing layer that forwards to the host log sink

use crate::reload::{ReloadHandle, level_filter};
use crate::sink::LogSinkManager;
use chatlog_core::{ChatLogConfig, ChatLogResult, LogLevel};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that forwards events to a [`LogSinkManager`]
///
/// Events are flattened to `message key=value key=value`.
pub struct HostLoggingLayer {
    manager: &'static LogSinkManager,
}

impl HostLoggingLayer {
    /// Create a layer using the global sink manager
    pub fn new() -> Self {
        Self {
            manager: LogSinkManager::global(),
        }
    }

    pub fn with_manager(manager: &'static LogSinkManager) -> Self {
        Self { manager }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for HostLoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for HostLoggingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        if !self.manager.is_enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        self.manager
            .log(level, metadata.target(), &visitor.into_line());
    }

    fn enabled(&self, metadata: &tracing::Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.manager
            .is_enabled(Self::convert_level(metadata.level()))
    }
}

/// Collects the message and structured fields of an event
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl EventVisitor {
    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        self.fields.push_str(&format!("{name}={value}"));
    }

    fn into_line(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Install the host logging layer as the global subscriber
///
/// The level comes from `config.log_level` and can be changed later through
/// [`ReloadHandle::global`]. Installing twice keeps the first subscriber.
pub fn init_logging(config: &ChatLogConfig) -> ChatLogResult<()> {
    init_logging_with_level(config.log_level()?);
    Ok(())
}

/// Install the host logging layer with an explicit level
pub fn init_logging_with_level(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    LogSinkManager::global().set_level(level);

    let (filter, handle) = tracing_subscriber::reload::Layer::new(level_filter(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(HostLoggingLayer::new());

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        ReloadHandle::global().set_handle(handle);
    }
}
