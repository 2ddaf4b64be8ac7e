//! chatlog-core - Chat record model, errors, and configuration
//!
//! This crate provides the foundational types for persisting chat logs:
//! - [`ChatRecord`] for a single logged message
//! - [`TextComponent`] and [`Style`] for rich chat text
//! - [`RichTextCodec`] trait for text document (de)serialization
//! - [`ChatLogError`] and [`TextCodecError`] for error handling
//! - [`ChatLogConfig`] and [`CodecOptions`] for configuration

mod codec;
mod config;
mod error;
mod record;
mod text;

pub use codec::RichTextCodec;
pub use config::{
    CLEAN_SAVE_KEY, ChatLogConfig, CodecOptions, ConfigStore, DEFAULT_MAX_TEXT_DEPTH,
};
pub use error::{ChatLogError, ChatLogResult, MAX_FRAGMENT_LEN, TextCodecError};
pub use record::{ChatRecord, ChatRecordBuilder};
pub use text::{
    ClickAction, ClickEvent, HoverEvent, NamedColor, Style, TextColor, TextComponent,
};

/// Log levels shared with the host
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ChatLogConfig, ChatLogError, ChatLogResult, ChatRecord, CodecOptions, ConfigStore,
        LogLevel, RichTextCodec, Style, TextCodecError, TextColor, TextComponent,
    };
}
