//! Error types for chat record encoding and decoding

use thiserror::Error;

/// Result type alias for chat record operations
pub type ChatLogResult<T> = Result<T, ChatLogError>;

/// Longest JSON fragment kept inside an error message
pub const MAX_FRAGMENT_LEN: usize = 256;

/// Error type for chat record operations
#[derive(Error, Debug)]
pub enum ChatLogError {
    /// The `time` field is missing or is not an ISO local date-time
    #[error("invalid record time {value:?}: {reason}")]
    DateTimeParse { value: String, reason: String },

    /// A required record field is absent
    #[error("missing record field: {0}")]
    MissingField(&'static str),

    /// A record field has the wrong JSON type or an out-of-range value
    #[error("invalid record field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The rich-text codec rejected a text document
    #[error("failed to decode {field} text from {fragment}: {source}")]
    TextDecode {
        field: &'static str,
        fragment: String,
        #[source]
        source: TextCodecError,
    },

    /// The rich-text codec could not represent a text document
    #[error("failed to encode {field} text: {source}")]
    TextEncode {
        field: &'static str,
        #[source]
        source: TextCodecError,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error outside the record schema
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl ChatLogError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            ChatLogError::DateTimeParse { .. } => 1,
            ChatLogError::MissingField(_) => 2,
            ChatLogError::InvalidField { .. } => 3,
            ChatLogError::TextDecode { .. } => 4,
            ChatLogError::TextEncode { .. } => 5,
            ChatLogError::ConfigError(_) => 6,
            ChatLogError::SerializationError(_) => 7,
        }
    }

    /// Build a [`ChatLogError::TextDecode`] keeping a bounded copy of the offending JSON
    pub fn text_decode(
        field: &'static str,
        json: &serde_json::Value,
        source: TextCodecError,
    ) -> Self {
        ChatLogError::TextDecode {
            field,
            fragment: truncate_fragment(json.to_string()),
            source,
        }
    }

    /// Whether the error came from malformed input rather than from encoding
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ChatLogError::DateTimeParse { .. }
                | ChatLogError::MissingField(_)
                | ChatLogError::InvalidField { .. }
                | ChatLogError::TextDecode { .. }
        )
    }
}

impl From<serde_json::Error> for ChatLogError {
    fn from(err: serde_json::Error) -> Self {
        ChatLogError::SerializationError(err.to_string())
    }
}

/// Errors raised by a [`RichTextCodec`](crate::RichTextCodec)
///
/// `path` is a JSON path to the offending element, rooted at `$`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextCodecError {
    #[error("{path}: expected {expected}")]
    InvalidShape { path: String, expected: &'static str },

    #[error("{path}: missing key {key:?}")]
    MissingKey { path: String, key: &'static str },

    #[error("{path}: unknown color {value:?}")]
    UnknownColor { path: String, value: String },

    #[error("{path}: unknown action {value:?}")]
    UnknownAction { path: String, value: String },

    #[error("{path}: text nested deeper than {max_depth} levels")]
    TooDeep { path: String, max_depth: usize },
}

impl TextCodecError {
    /// JSON path of the element that failed
    pub fn path(&self) -> &str {
        match self {
            TextCodecError::InvalidShape { path, .. }
            | TextCodecError::MissingKey { path, .. }
            | TextCodecError::UnknownColor { path, .. }
            | TextCodecError::UnknownAction { path, .. }
            | TextCodecError::TooDeep { path, .. } => path,
        }
    }
}

fn truncate_fragment(mut fragment: String) -> String {
    if fragment.len() <= MAX_FRAGMENT_LEN {
        return fragment;
    }
    let mut cut = MAX_FRAGMENT_LEN;
    while !fragment.is_char_boundary(cut) {
        cut -= 1;
    }
    fragment.truncate(cut);
    fragment.push_str("...");
    fragment
}
