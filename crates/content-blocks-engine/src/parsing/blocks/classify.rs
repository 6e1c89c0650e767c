use super::kinds::{BlockQuote, CodeFence, Divider, Heading, Image, List, ListMarker};

/// What a line would open if it were seen between blocks.
///
/// This is phase 1 of block parsing: each line is classified on its own,
/// without reference to any construct that is already open. Continuation
/// rules for open constructs live in the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    Divider,
    Heading { level: u8, text: &'a str },
    FenceOpen { info: &'a str },
    Quote { text: &'a str },
    Image { alt: &'a str, url: &'a str },
    ListItem { marker: ListMarker },
    /// Opens nothing; starts or continues a paragraph.
    Text,
}

/// Classifies individual lines by construct precedence:
/// divider, heading, fence, blockquote, image, list, paragraph.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if Divider::matches(line) {
            return LineClass::Divider;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(info) = CodeFence::open(line) {
            return LineClass::FenceOpen { info };
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote { text };
        }
        if let Some((alt, url)) = Image::parse(line) {
            return LineClass::Image { alt, url };
        }
        if let Some(marker) = List::item(line) {
            return LineClass::ListItem { marker };
        }
        LineClass::Text
    }
}
