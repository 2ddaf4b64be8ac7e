//! # chatlog
//!
//! Persistence of chat log records as JSON.
//!
//! A record is a timestamp, a repeat count and two rich-text documents: the
//! text shown to the player and the text as it was received. chatlog provides:
//! - A rich-text model with styles, colors, click and hover events
//! - A JSON text codec with bounded nesting depth
//! - [`MessageRecordCodec`] for record <-> JSON conversion
//! - A clean-save pass that strips interactions and flattens nesting
//! - Logging callbacks to the host application
//!
//! ## Quick Start
//!
//! ```
//! use chatlog::prelude::*;
//!
//! let codec = MessageRecordCodec::new(CodecOptions::new(true));
//! let json = serde_json::json!({
//!     "time": "2024-03-01T12:30:45",
//!     "stacks": 2,
//!     "display": {"text": "", "extra": [{"text": "hi", "bold": true}]},
//!     "original": "hi"
//! });
//!
//! let record = codec.decode(&json).unwrap();
//! assert_eq!(record.stacks, 2);
//! assert_eq!(record.display_text.to_plain_string(), "hi");
//!
//! let saved = codec.encode(&record).unwrap();
//! assert_eq!(saved["time"], "2024-03-01T12:30:45");
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`chatlog_core`] - Record and text model, errors, configuration
//! - [`chatlog_transport`] - JSON codecs and sanitizing
//! - [`chatlog_logging`] - Tracing layer and host log sink

// Re-export core types
pub use chatlog_core::{
    ChatLogConfig, ChatLogError, ChatLogResult, ChatRecord, ChatRecordBuilder, ClickAction,
    ClickEvent, CodecOptions, ConfigStore, HoverEvent, LogLevel, NamedColor, RichTextCodec, Style,
    TextCodecError, TextColor, TextComponent,
};

// Re-export codecs
pub use chatlog_transport::{
    JsonCodec, JsonSave, JsonTextCodec, MessageRecordCodec, format_time, parse_time_str, sanitize,
};

// Re-export logging
pub use chatlog_logging::{
    HostLoggingLayer, LogSinkManager, ReloadHandle, init_logging, init_logging_with_level,
};

// Re-export common dependencies that hosts need
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use chatlog::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        ChatLogConfig, ChatLogError, ChatLogResult, ChatRecord, ClickAction, ClickEvent,
        CodecOptions, HoverEvent, JsonSave, JsonTextCodec, LogLevel, MessageRecordCodec,
        NamedColor, Style, TextColor, TextComponent, sanitize,
    };
}
