//! chatlog-transport - JSON codecs for chat records
//!
//! This crate provides:
//! - [`MessageRecordCodec`] for converting [`ChatRecord`](chatlog_core::ChatRecord)s to and from JSON
//! - [`JsonTextCodec`], the default [`RichTextCodec`](chatlog_core::RichTextCodec)
//! - [`sanitize`] for stripping interactive text metadata
//! - [`JsonCodec`] for string and byte framing

mod codec;
mod record_codec;
mod sanitize;
mod text_codec;

pub use codec::{Codec, CodecError, JsonCodec, JsonLayout};
pub use record_codec::{
    DISPLAY_KEY, JsonSave, MessageRecordCodec, ORIGINAL_KEY, STACKS_KEY, TIME_KEY, format_time,
    parse_time_str,
};
pub use sanitize::sanitize;
pub use text_codec::JsonTextCodec;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{JsonCodec, JsonSave, JsonTextCodec, MessageRecordCodec, sanitize};
}
