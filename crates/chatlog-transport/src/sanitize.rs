//! Stripping of interactive metadata before records are saved

use chatlog_core::{CodecOptions, Style, TextComponent};

/// Prepare a text document for saving
///
/// With `clean_save` off the document is returned unchanged. With it on,
/// the result is a fresh unstyled root whose siblings are one literal per
/// segment of the input: the root's own text (when non-empty) followed by
/// each direct sibling flattened to its plain string. Every literal keeps
/// its segment's visual style with click, hover, and insertion removed.
/// Anything nested below the first level is folded into its parent's text.
pub fn sanitize(text: &TextComponent, options: CodecOptions) -> TextComponent {
    if !options.clean_save {
        return text.clone();
    }

    let mut root = TextComponent::empty();
    if !text.text.is_empty() {
        root.siblings.push(clean_literal(text.text.clone(), &text.style));
    }
    root.siblings.extend(
        text.siblings
            .iter()
            .map(|sibling| clean_literal(sibling.to_plain_string(), &sibling.style)),
    );
    root
}

fn clean_literal(text: String, style: &Style) -> TextComponent {
    TextComponent {
        text,
        style: style.without_interactions(),
        siblings: Vec::new(),
    }
}
