//! Rich-text document model
//!
//! A [`TextComponent`] is a literal string with a [`Style`] and an ordered
//! list of sibling components appended after it. This mirrors the game
//! client's chat text tree closely enough to round-trip persisted logs,
//! without depending on the client itself.

use std::fmt;
use std::str::FromStr;

/// A styled text segment with optional children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextComponent {
    /// Literal text payload
    pub text: String,

    /// Style applied to this segment (children inherit unset attributes)
    pub style: Style,

    /// Components rendered after this one, in order
    pub siblings: Vec<TextComponent>,
}

impl TextComponent {
    /// Create an unstyled literal
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            siblings: Vec::new(),
        }
    }

    /// Create an empty root, used as a container for siblings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append a sibling component
    pub fn append(mut self, sibling: TextComponent) -> Self {
        self.siblings.push(sibling);
        self
    }

    /// Concatenate this component's text and every descendant, depth-first
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        self.collect_plain(&mut out);
        out
    }

    fn collect_plain(&self, out: &mut String) {
        out.push_str(&self.text);
        for sibling in &self.siblings {
            sibling.collect_plain(out);
        }
    }
}

impl From<&str> for TextComponent {
    fn from(text: &str) -> Self {
        TextComponent::literal(text)
    }
}

impl From<String> for TextComponent {
    fn from(text: String) -> Self {
        TextComponent::literal(text)
    }
}

/// Visual and interactive attributes of a segment
///
/// `None` means "inherit from the parent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<TextColor>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
    pub font: Option<String>,
    pub click_event: Option<ClickEvent>,
    pub hover_event: Option<HoverEvent>,
    pub insertion: Option<String>,
}

impl Style {
    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_click_event(mut self, event: ClickEvent) -> Self {
        self.click_event = Some(event);
        self
    }

    pub fn with_hover_event(mut self, event: HoverEvent) -> Self {
        self.hover_event = Some(event);
        self
    }

    pub fn with_insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }

    /// Copy of this style with click, hover, and insertion cleared
    pub fn without_interactions(&self) -> Self {
        Self {
            click_event: None,
            hover_event: None,
            insertion: None,
            ..self.clone()
        }
    }

    /// Whether any interactive attribute is set
    pub fn has_interactions(&self) -> bool {
        self.click_event.is_some() || self.hover_event.is_some() || self.insertion.is_some()
    }

    /// Whether no attribute is set at all
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

/// The sixteen legacy chat colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Registry name used in text JSON
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// RGB value the client renders this color with
    pub fn rgb(self) -> u32 {
        match self {
            NamedColor::Black => 0x000000,
            NamedColor::DarkBlue => 0x0000AA,
            NamedColor::DarkGreen => 0x00AA00,
            NamedColor::DarkAqua => 0x00AAAA,
            NamedColor::DarkRed => 0xAA0000,
            NamedColor::DarkPurple => 0xAA00AA,
            NamedColor::Gold => 0xFFAA00,
            NamedColor::Gray => 0xAAAAAA,
            NamedColor::DarkGray => 0x555555,
            NamedColor::Blue => 0x5555FF,
            NamedColor::Green => 0x55FF55,
            NamedColor::Aqua => 0x55FFFF,
            NamedColor::Red => 0xFF5555,
            NamedColor::LightPurple => 0xFF55FF,
            NamedColor::Yellow => 0xFFFF55,
            NamedColor::White => 0xFFFFFF,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NamedColor::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Segment color: a named chat color or a 24-bit RGB value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Named(NamedColor),
    Rgb(u32),
}

impl TextColor {
    /// Largest value `#RRGGBB` can express
    pub const MAX_RGB: u32 = 0xFF_FFFF;

    /// RGB value regardless of representation
    pub fn rgb(self) -> u32 {
        match self {
            TextColor::Named(named) => named.rgb(),
            TextColor::Rgb(rgb) => rgb,
        }
    }

    /// Whether the color fits in 24 bits and can be written as `#RRGGBB`
    pub fn is_valid(self) -> bool {
        self.rgb() <= Self::MAX_RGB
    }
}

impl From<NamedColor> for TextColor {
    fn from(color: NamedColor) -> Self {
        TextColor::Named(color)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColor::Named(named) => f.write_str(named.name()),
            TextColor::Rgb(rgb) => write!(f, "#{:06X}", rgb),
        }
    }
}

impl FromStr for TextColor {
    type Err = String;

    /// Parses `#RRGGBB` or a registry color name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return u32::from_str_radix(hex, 16)
                    .map(TextColor::Rgb)
                    .map_err(|e| e.to_string());
            }
            return Err(format!("invalid hex color: {s}"));
        }
        NamedColor::from_name(s)
            .map(TextColor::Named)
            .ok_or_else(|| format!("unknown color name: {s}"))
    }
}

/// What happens when a segment is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    pub fn name(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "open_url" => ClickAction::OpenUrl,
            "open_file" => ClickAction::OpenFile,
            "run_command" => ClickAction::RunCommand,
            "suggest_command" => ClickAction::SuggestCommand,
            "change_page" => ClickAction::ChangePage,
            "copy_to_clipboard" => ClickAction::CopyToClipboard,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }
}

/// Tooltip shown when hovering a segment
///
/// Item and entity tooltips are kept as opaque JSON; only the client can
/// interpret them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverEvent {
    ShowText(Box<TextComponent>),
    ShowItem(serde_json::Value),
    ShowEntity(serde_json::Value),
}

impl HoverEvent {
    pub fn show_text(text: impl Into<TextComponent>) -> Self {
        HoverEvent::ShowText(Box::new(text.into()))
    }

    /// Action name used in text JSON
    pub fn action_name(&self) -> &'static str {
        match self {
            HoverEvent::ShowText(_) => "show_text",
            HoverEvent::ShowItem(_) => "show_item",
            HoverEvent::ShowEntity(_) => "show_entity",
        }
    }
}
