//! Text framing of persisted records
//!
//! [`MessageRecordCodec`](crate::MessageRecordCodec) works on
//! `serde_json::Value`s; a [`Codec`] turns those into the bytes written to
//! a log file and back.

use chatlog_core::ChatLogError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors raised while framing or unframing JSON text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The value could not be written as JSON
    #[error("cannot write record JSON: {0}")]
    Write(String),

    /// The input is not valid JSON for the requested type
    #[error("malformed record JSON at line {line}, column {column}: {reason}")]
    Malformed {
        line: usize,
        column: usize,
        reason: String,
    },
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return CodecError::Write(err.to_string());
        }
        CodecError::Malformed {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

impl From<CodecError> for ChatLogError {
    fn from(err: CodecError) -> Self {
        ChatLogError::SerializationError(err.to_string())
    }
}

/// Framing of serializable values as bytes
pub trait Codec: Send + Sync {
    fn write_bytes<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    fn read_bytes<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError>;

    /// MIME type of the framed output
    fn content_type(&self) -> &'static str;
}

/// How framed JSON is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonLayout {
    /// Single line per value
    #[default]
    Compact,
    /// Indented over several lines
    Pretty,
}

/// serde_json framing with a fixed [`JsonLayout`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    layout: JsonLayout,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::with_layout(JsonLayout::Compact)
    }

    pub fn pretty() -> Self {
        Self::with_layout(JsonLayout::Pretty)
    }

    pub fn with_layout(layout: JsonLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> JsonLayout {
        self.layout
    }

    pub fn is_pretty(&self) -> bool {
        self.layout == JsonLayout::Pretty
    }

    pub fn write_text<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        let text = match self.layout {
            JsonLayout::Compact => serde_json::to_string(value)?,
            JsonLayout::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(text)
    }

    pub fn read_text<T: DeserializeOwned>(&self, data: &str) -> Result<T, CodecError> {
        Ok(serde_json::from_str(data)?)
    }
}

impl Codec for JsonCodec {
    fn write_bytes<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let bytes = match self.layout {
            JsonLayout::Compact => serde_json::to_vec(value)?,
            JsonLayout::Pretty => serde_json::to_vec_pretty(value)?,
        };
        Ok(bytes)
    }

    fn read_bytes<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        Ok(serde_json::from_slice(data)?)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
