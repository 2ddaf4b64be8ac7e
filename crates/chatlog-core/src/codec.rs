//! Rich-text codec contract

use crate::error::TextCodecError;
use crate::text::TextComponent;

/// Converts rich-text documents to and from their JSON form
///
/// The record codec treats the JSON schema of a text document as owned by
/// the implementation and propagates its errors unchanged.
pub trait RichTextCodec: Send + Sync {
    /// Encode a text document to JSON
    fn encode(&self, text: &TextComponent) -> Result<serde_json::Value, TextCodecError>;

    /// Decode a text document from JSON
    fn decode(&self, json: &serde_json::Value) -> Result<TextComponent, TextCodecError>;
}

impl<C: RichTextCodec + ?Sized> RichTextCodec for &C {
    fn encode(&self, text: &TextComponent) -> Result<serde_json::Value, TextCodecError> {
        (**self).encode(text)
    }

    fn decode(&self, json: &serde_json::Value) -> Result<TextComponent, TextCodecError> {
        (**self).decode(json)
    }
}

impl<C: RichTextCodec + ?Sized> RichTextCodec for Box<C> {
    fn encode(&self, text: &TextComponent) -> Result<serde_json::Value, TextCodecError> {
        (**self).encode(text)
    }

    fn decode(&self, json: &serde_json::Value) -> Result<TextComponent, TextCodecError> {
        (**self).decode(json)
    }
}
