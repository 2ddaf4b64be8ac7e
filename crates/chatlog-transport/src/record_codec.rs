//! Chat record <-> JSON mapping
//!
//! A persisted record is a JSON object with exactly four keys:
//!
//! ```json
//! {
//!   "time": "2021-05-01T13:45:02",
//!   "stacks": 3,
//!   "display": {"text": "", "extra": [{"text": "Hello", "color": "red"}]},
//!   "original": {"text": "hello"}
//! }
//! ```
//!
//! `time` is an ISO-8601 local date-time. `display` and `original` are
//! whatever the [`RichTextCodec`] produces.

use crate::codec::{Codec, JsonCodec};
use crate::sanitize::sanitize;
use crate::text_codec::JsonTextCodec;
use chatlog_core::{
    ChatLogConfig, ChatLogError, ChatLogResult, ChatRecord, CodecOptions, RichTextCodec,
    TextComponent,
};
use chrono::{NaiveDateTime, Timelike};
use serde_json::{Map, Value};

pub const TIME_KEY: &str = "time";
pub const STACKS_KEY: &str = "stacks";
pub const DISPLAY_KEY: &str = "display";
pub const ORIGINAL_KEY: &str = "original";

/// Loading and saving of a value as a JSON object
pub trait JsonSave<T> {
    fn load(&self, obj: &Value) -> ChatLogResult<T>;

    fn save(&self, value: &T) -> ChatLogResult<Value>;
}

/// Converts [`ChatRecord`]s to and from their persisted JSON form
///
/// Holds no state besides its options, so one instance can be shared by
/// every reader and writer of a log.
#[derive(Debug, Clone)]
pub struct MessageRecordCodec<C = JsonTextCodec> {
    text_codec: C,
    options: CodecOptions,
    json: JsonCodec,
}

impl MessageRecordCodec<JsonTextCodec> {
    /// Codec using the default JSON text codec
    pub fn new(options: CodecOptions) -> Self {
        Self::with_text_codec(JsonTextCodec::new(), options)
    }

    /// Codec configured from host settings
    pub fn from_config(config: &ChatLogConfig) -> Self {
        let json = if config.pretty_json {
            JsonCodec::pretty()
        } else {
            JsonCodec::new()
        };
        Self::with_text_codec(JsonTextCodec::from_config(config), config.codec_options())
            .with_json_codec(json)
    }
}

impl Default for MessageRecordCodec<JsonTextCodec> {
    fn default() -> Self {
        Self::new(CodecOptions::default())
    }
}

impl<C: RichTextCodec> MessageRecordCodec<C> {
    /// Codec using a host-provided text codec
    pub fn with_text_codec(text_codec: C, options: CodecOptions) -> Self {
        Self {
            text_codec,
            options,
            json: JsonCodec::new(),
        }
    }

    /// Replace the codec used by the string and byte helpers
    pub fn with_json_codec(mut self, json: JsonCodec) -> Self {
        self.json = json;
        self
    }

    pub fn options(&self) -> CodecOptions {
        self.options
    }

    pub fn text_codec(&self) -> &C {
        &self.text_codec
    }

    /// Decode a record from its JSON object
    ///
    /// Fails on the first invalid field; no partial record is returned.
    pub fn decode(&self, json: &Value) -> ChatLogResult<ChatRecord> {
        let result = self.decode_record(json);
        match &result {
            Ok(record) => tracing::debug!(stacks = record.stacks, "decoded chat record"),
            Err(err) => tracing::warn!(error = %err, "failed to decode chat record"),
        }
        result
    }

    fn decode_record(&self, json: &Value) -> ChatLogResult<ChatRecord> {
        let obj = json.as_object().ok_or_else(|| ChatLogError::InvalidField {
            field: "record",
            reason: format!("expected a JSON object, got {}", json_kind(json)),
        })?;

        let timestamp = parse_time(obj.get(TIME_KEY))?;
        let stacks = parse_stacks(obj.get(STACKS_KEY))?;
        let display_text = self.decode_text(obj, DISPLAY_KEY)?;
        let original_text = self.decode_text(obj, ORIGINAL_KEY)?;

        Ok(ChatRecord {
            date: timestamp.date(),
            time: timestamp.time(),
            display_text,
            original_text,
            stacks,
        })
    }

    fn decode_text(
        &self,
        obj: &Map<String, Value>,
        key: &'static str,
    ) -> ChatLogResult<TextComponent> {
        let json = obj.get(key).ok_or(ChatLogError::MissingField(key))?;
        self.text_codec
            .decode(json)
            .map_err(|source| ChatLogError::text_decode(key, json, source))
    }

    /// Encode a record to its JSON object
    ///
    /// Both texts go through [`sanitize`](Self::sanitize) first.
    pub fn encode(&self, record: &ChatRecord) -> ChatLogResult<Value> {
        let display = self.encode_text(&record.display_text, DISPLAY_KEY)?;
        let original = self.encode_text(&record.original_text, ORIGINAL_KEY)?;

        tracing::debug!(
            stacks = record.stacks,
            clean_save = self.options.clean_save,
            "encoded chat record"
        );

        let mut obj = Map::new();
        obj.insert(TIME_KEY.into(), Value::String(format_time(&record.timestamp())));
        obj.insert(STACKS_KEY.into(), Value::from(record.stacks));
        obj.insert(DISPLAY_KEY.into(), display);
        obj.insert(ORIGINAL_KEY.into(), original);
        Ok(Value::Object(obj))
    }

    fn encode_text(&self, text: &TextComponent, key: &'static str) -> ChatLogResult<Value> {
        let encoded = if self.options.clean_save {
            self.text_codec.encode(&sanitize(text, self.options))
        } else {
            self.text_codec.encode(text)
        };
        encoded.map_err(|source| ChatLogError::TextEncode { field: key, source })
    }

    /// Apply this codec's clean-save option to a text document
    pub fn sanitize(&self, text: &TextComponent) -> TextComponent {
        sanitize(text, self.options)
    }

    /// Encode a record to a JSON string
    pub fn encode_string(&self, record: &ChatRecord) -> ChatLogResult<String> {
        Ok(self.json.write_text(&self.encode(record)?)?)
    }

    /// Decode a record from a JSON string
    pub fn decode_str(&self, data: &str) -> ChatLogResult<ChatRecord> {
        let json: Value = self.json.read_text(data)?;
        self.decode(&json)
    }

    /// Encode a record to JSON bytes
    pub fn encode_bytes(&self, record: &ChatRecord) -> ChatLogResult<Vec<u8>> {
        Ok(self.json.write_bytes(&self.encode(record)?)?)
    }

    /// Decode a record from JSON bytes
    pub fn decode_bytes(&self, data: &[u8]) -> ChatLogResult<ChatRecord> {
        let json: Value = self.json.read_bytes(data)?;
        self.decode(&json)
    }
}

impl<C: RichTextCodec> JsonSave<ChatRecord> for MessageRecordCodec<C> {
    fn load(&self, obj: &Value) -> ChatLogResult<ChatRecord> {
        self.decode(obj)
    }

    fn save(&self, value: &ChatRecord) -> ChatLogResult<Value> {
        self.encode(value)
    }
}

/// Format as ISO-8601 local date-time
///
/// Seconds are always written; the fraction only when non-zero, without
/// trailing zeros.
pub fn format_time(timestamp: &NaiveDateTime) -> String {
    let mut out = timestamp.format("%Y-%m-%dT%H:%M:%S").to_string();
    let nanos = timestamp.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

/// Parse an ISO-8601 local date-time; seconds and fraction are optional
pub fn parse_time_str(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    value
        .parse::<NaiveDateTime>()
        .or_else(|err| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").map_err(|_| err))
}

fn parse_time(value: Option<&Value>) -> ChatLogResult<NaiveDateTime> {
    match value {
        None => Err(ChatLogError::DateTimeParse {
            value: String::new(),
            reason: format!("missing {TIME_KEY} field"),
        }),
        Some(Value::String(s)) => parse_time_str(s).map_err(|err| ChatLogError::DateTimeParse {
            value: s.clone(),
            reason: err.to_string(),
        }),
        Some(other) => Err(ChatLogError::DateTimeParse {
            value: other.to_string(),
            reason: format!("expected a string, got {}", json_kind(other)),
        }),
    }
}

fn parse_stacks(value: Option<&Value>) -> ChatLogResult<u32> {
    let value = value.ok_or(ChatLogError::MissingField(STACKS_KEY))?;
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ChatLogError::InvalidField {
            field: STACKS_KEY,
            reason: format!("expected a non-negative 32-bit integer, got {value}"),
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "record_codec/record_codec_tests.rs"]
mod record_codec_tests;
