//! JSON rich-text codec
//!
//! Reads and writes the chat client's text-component JSON:
//!
//! - a string is an unstyled literal
//! - an array is a root (first element) followed by its siblings
//! - an object has a required `text`, optional style keys, and an optional
//!   `extra` array of children
//!
//! Encoding always produces the object form and omits unset style keys.
//! It fails on nesting deeper than the configured limit and on RGB colors
//! that do not fit in `#RRGGBB`.

use chatlog_core::{
    ChatLogConfig, ClickAction, ClickEvent, DEFAULT_MAX_TEXT_DEPTH, HoverEvent, RichTextCodec,
    Style, TextCodecError, TextColor, TextComponent,
};
use serde_json::{Map, Value};

const TEXT: &str = "text";
const EXTRA: &str = "extra";
const COLOR: &str = "color";
const BOLD: &str = "bold";
const ITALIC: &str = "italic";
const UNDERLINED: &str = "underlined";
const STRIKETHROUGH: &str = "strikethrough";
const OBFUSCATED: &str = "obfuscated";
const FONT: &str = "font";
const INSERTION: &str = "insertion";
const CLICK_EVENT: &str = "clickEvent";
const HOVER_EVENT: &str = "hoverEvent";
const ACTION: &str = "action";
const VALUE: &str = "value";
const CONTENTS: &str = "contents";

/// Default [`RichTextCodec`] for the client's text JSON
#[derive(Debug, Clone)]
pub struct JsonTextCodec {
    max_depth: usize,
}

impl Default for JsonTextCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonTextCodec {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_TEXT_DEPTH,
        }
    }

    /// Limit how deeply components (including hover text) may nest
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn from_config(config: &ChatLogConfig) -> Self {
        Self::with_max_depth(config.max_text_depth)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn check_depth(&self, path: &str, depth: usize) -> Result<(), TextCodecError> {
        if depth > self.max_depth {
            return Err(TextCodecError::TooDeep {
                path: path.to_string(),
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }

    fn encode_component(
        &self,
        text: &TextComponent,
        path: &str,
        depth: usize,
    ) -> Result<Value, TextCodecError> {
        self.check_depth(path, depth)?;

        let mut obj = Map::new();
        obj.insert(TEXT.into(), Value::String(text.text.clone()));
        self.encode_style(&text.style, &mut obj, path, depth)?;

        if !text.siblings.is_empty() {
            let extra = text
                .siblings
                .iter()
                .enumerate()
                .map(|(i, sibling)| {
                    self.encode_component(sibling, &format!("{path}.{EXTRA}[{i}]"), depth + 1)
                })
                .collect::<Result<Vec<_>, _>>()?;
            obj.insert(EXTRA.into(), Value::Array(extra));
        }

        Ok(Value::Object(obj))
    }

    fn encode_style(
        &self,
        style: &Style,
        obj: &mut Map<String, Value>,
        path: &str,
        depth: usize,
    ) -> Result<(), TextCodecError> {
        if let Some(color) = style.color {
            if !color.is_valid() {
                return Err(TextCodecError::InvalidShape {
                    path: format!("{path}.{COLOR}"),
                    expected: "24-bit RGB color",
                });
            }
            obj.insert(COLOR.into(), Value::String(color.to_string()));
        }
        for (key, flag) in [
            (BOLD, style.bold),
            (ITALIC, style.italic),
            (UNDERLINED, style.underlined),
            (STRIKETHROUGH, style.strikethrough),
            (OBFUSCATED, style.obfuscated),
        ] {
            if let Some(flag) = flag {
                obj.insert(key.into(), Value::Bool(flag));
            }
        }
        if let Some(font) = &style.font {
            obj.insert(FONT.into(), Value::String(font.clone()));
        }
        if let Some(insertion) = &style.insertion {
            obj.insert(INSERTION.into(), Value::String(insertion.clone()));
        }
        if let Some(click) = &style.click_event {
            let mut event = Map::new();
            event.insert(ACTION.into(), Value::String(click.action.name().into()));
            event.insert(VALUE.into(), Value::String(click.value.clone()));
            obj.insert(CLICK_EVENT.into(), Value::Object(event));
        }
        if let Some(hover) = &style.hover_event {
            let contents = match hover {
                HoverEvent::ShowText(text) => self.encode_component(
                    text,
                    &format!("{path}.{HOVER_EVENT}.{CONTENTS}"),
                    depth + 1,
                )?,
                HoverEvent::ShowItem(contents) | HoverEvent::ShowEntity(contents) => {
                    contents.clone()
                }
            };
            let mut event = Map::new();
            event.insert(ACTION.into(), Value::String(hover.action_name().into()));
            event.insert(CONTENTS.into(), contents);
            obj.insert(HOVER_EVENT.into(), Value::Object(event));
        }
        Ok(())
    }

    fn decode_component(
        &self,
        json: &Value,
        path: &str,
        depth: usize,
    ) -> Result<TextComponent, TextCodecError> {
        self.check_depth(path, depth)?;

        match json {
            Value::String(text) => Ok(TextComponent::literal(text.as_str())),
            Value::Number(n) => Ok(TextComponent::literal(n.to_string())),
            Value::Bool(b) => Ok(TextComponent::literal(b.to_string())),
            Value::Array(items) => {
                let (first, rest) = items.split_first().ok_or_else(|| TextCodecError::InvalidShape {
                    path: path.to_string(),
                    expected: "non-empty array",
                })?;
                let mut root = self.decode_component(first, &format!("{path}[0]"), depth)?;
                for (i, item) in rest.iter().enumerate() {
                    let sibling =
                        self.decode_component(item, &format!("{path}[{}]", i + 1), depth + 1)?;
                    root.siblings.push(sibling);
                }
                Ok(root)
            }
            Value::Object(obj) => self.decode_object(obj, path, depth),
            Value::Null => Err(TextCodecError::InvalidShape {
                path: path.to_string(),
                expected: "text component",
            }),
        }
    }

    fn decode_object(
        &self,
        obj: &Map<String, Value>,
        path: &str,
        depth: usize,
    ) -> Result<TextComponent, TextCodecError> {
        let text = opt_str(obj, TEXT, path)?.ok_or_else(|| TextCodecError::MissingKey {
            path: path.to_string(),
            key: TEXT,
        })?;

        let style = self.decode_style(obj, path, depth)?;

        let siblings = match obj.get(EXTRA) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    self.decode_component(item, &format!("{path}.{EXTRA}[{i}]"), depth + 1)
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(TextCodecError::InvalidShape {
                    path: format!("{path}.{EXTRA}"),
                    expected: "array",
                });
            }
        };

        Ok(TextComponent {
            text: text.to_string(),
            style,
            siblings,
        })
    }

    fn decode_style(
        &self,
        obj: &Map<String, Value>,
        path: &str,
        depth: usize,
    ) -> Result<Style, TextCodecError> {
        let color = opt_str(obj, COLOR, path)?
            .map(|name| {
                name.parse::<TextColor>()
                    .map_err(|_| TextCodecError::UnknownColor {
                        path: format!("{path}.{COLOR}"),
                        value: name.to_string(),
                    })
            })
            .transpose()?;

        let click_event = match obj.get(CLICK_EVENT) {
            None | Some(Value::Null) => None,
            Some(event) => Some(decode_click_event(event, &format!("{path}.{CLICK_EVENT}"))?),
        };

        let hover_event = match obj.get(HOVER_EVENT) {
            None | Some(Value::Null) => None,
            Some(event) => Some(self.decode_hover_event(
                event,
                &format!("{path}.{HOVER_EVENT}"),
                depth,
            )?),
        };

        Ok(Style {
            color,
            bold: opt_bool(obj, BOLD, path)?,
            italic: opt_bool(obj, ITALIC, path)?,
            underlined: opt_bool(obj, UNDERLINED, path)?,
            strikethrough: opt_bool(obj, STRIKETHROUGH, path)?,
            obfuscated: opt_bool(obj, OBFUSCATED, path)?,
            font: opt_str(obj, FONT, path)?.map(str::to_string),
            click_event,
            hover_event,
            insertion: opt_str(obj, INSERTION, path)?.map(str::to_string),
        })
    }

    fn decode_hover_event(
        &self,
        json: &Value,
        path: &str,
        depth: usize,
    ) -> Result<HoverEvent, TextCodecError> {
        let obj = as_object(json, path)?;
        let action = required_str(obj, ACTION, path)?;

        // Older clients wrote the payload under "value"
        let (key, contents) = [CONTENTS, VALUE]
            .into_iter()
            .find_map(|key| obj.get(key).map(|v| (key, v)))
            .ok_or_else(|| TextCodecError::MissingKey {
                path: path.to_string(),
                key: CONTENTS,
            })?;

        match action {
            "show_text" => {
                let text = self.decode_component(contents, &format!("{path}.{key}"), depth + 1)?;
                Ok(HoverEvent::ShowText(Box::new(text)))
            }
            "show_item" => Ok(HoverEvent::ShowItem(contents.clone())),
            "show_entity" => Ok(HoverEvent::ShowEntity(contents.clone())),
            other => Err(TextCodecError::UnknownAction {
                path: format!("{path}.{ACTION}"),
                value: other.to_string(),
            }),
        }
    }
}

impl RichTextCodec for JsonTextCodec {
    fn encode(&self, text: &TextComponent) -> Result<Value, TextCodecError> {
        self.encode_component(text, "$", 1)
    }

    fn decode(&self, json: &Value) -> Result<TextComponent, TextCodecError> {
        self.decode_component(json, "$", 1)
    }
}

fn decode_click_event(json: &Value, path: &str) -> Result<ClickEvent, TextCodecError> {
    let obj = as_object(json, path)?;
    let action = required_str(obj, ACTION, path)?;
    let action = ClickAction::from_name(action).ok_or_else(|| TextCodecError::UnknownAction {
        path: format!("{path}.{ACTION}"),
        value: action.to_string(),
    })?;
    let value = required_str(obj, VALUE, path)?;
    Ok(ClickEvent::new(action, value))
}

fn as_object<'a>(json: &'a Value, path: &str) -> Result<&'a Map<String, Value>, TextCodecError> {
    json.as_object().ok_or_else(|| TextCodecError::InvalidShape {
        path: path.to_string(),
        expected: "object",
    })
}

fn opt_str<'a>(
    obj: &'a Map<String, Value>,
    key: &'static str,
    path: &str,
) -> Result<Option<&'a str>, TextCodecError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(TextCodecError::InvalidShape {
            path: format!("{path}.{key}"),
            expected: "string",
        }),
    }
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    key: &'static str,
    path: &str,
) -> Result<&'a str, TextCodecError> {
    opt_str(obj, key, path)?.ok_or_else(|| TextCodecError::MissingKey {
        path: path.to_string(),
        key,
    })
}

fn opt_bool(
    obj: &Map<String, Value>,
    key: &'static str,
    path: &str,
) -> Result<Option<bool>, TextCodecError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(TextCodecError::InvalidShape {
            path: format!("{path}.{key}"),
            expected: "boolean",
        }),
    }
}
