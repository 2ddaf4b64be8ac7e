//! Configuration types

use crate::LogLevel;
use crate::error::{ChatLogError, ChatLogResult};
use serde::{Deserialize, Serialize};

/// Key of the flag that strips interactive metadata before saving
pub const CLEAN_SAVE_KEY: &str = "cleanSave";

/// Default nesting limit for rich-text documents
pub const DEFAULT_MAX_TEXT_DEPTH: usize = 512;

/// Read-only access to boolean settings owned by the host
pub trait ConfigStore {
    /// Returns `None` when the key is unset or not a boolean
    fn get_bool(&self, key: &str) -> Option<bool>;
}

/// Chat log configuration supplied by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatLogConfig {
    /// Host settings, keyed by name (e.g. `cleanSave`)
    #[serde(default)]
    pub data: serde_json::Value,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print records written as strings
    #[serde(default)]
    pub pretty_json: bool,

    /// Deepest rich-text nesting accepted or produced
    #[serde(default = "default_max_text_depth")]
    pub max_text_depth: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_text_depth() -> usize {
    DEFAULT_MAX_TEXT_DEPTH
}

impl Default for ChatLogConfig {
    fn default() -> Self {
        Self {
            data: serde_json::Value::Null,
            log_level: default_log_level(),
            pretty_json: false,
            max_text_depth: default_max_text_depth(),
        }
    }
}

impl ChatLogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes; empty input yields defaults
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Get a typed value from the settings data
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| T::deserialize(v).ok())
    }

    /// Set a value in the settings data
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), serde_json::Error> {
        if !self.data.is_object() {
            self.data = serde_json::json!({});
        }
        if let Some(obj) = self.data.as_object_mut() {
            obj.insert(key.to_string(), serde_json::to_value(value)?);
        }
        Ok(())
    }

    /// Parsed [`log_level`](Self::log_level)
    pub fn log_level(&self) -> ChatLogResult<LogLevel> {
        self.log_level
            .parse()
            .map_err(|_| ChatLogError::ConfigError(format!("unknown log level: {}", self.log_level)))
    }

    /// Codec options derived from this configuration
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::from_store(self)
    }
}

impl ConfigStore for ChatLogConfig {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.data.get(key).and_then(serde_json::Value::as_bool)
    }
}

/// Immutable options read by the record codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    /// Strip click, hover, and insertion metadata when encoding
    pub clean_save: bool,
}

impl CodecOptions {
    pub fn new(clean_save: bool) -> Self {
        Self { clean_save }
    }

    /// Read options from a host store; unset flags are off
    pub fn from_store(store: &impl ConfigStore) -> Self {
        Self {
            clean_save: store.get_bool(CLEAN_SAVE_KEY).unwrap_or(false),
        }
    }
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
