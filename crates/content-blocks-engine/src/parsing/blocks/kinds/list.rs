use std::sync::LazyLock;

use regex::Regex;

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+").expect("valid unordered item pattern"));

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+").expect("valid ordered item pattern"));

/// Marker style of a list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*` or `+`
    Bullet,
    /// digits followed by `.`
    Numbered,
}

/// List syntax. List bodies keep their lines verbatim, markers included.
pub struct List;

impl List {
    /// Minimum leading whitespace for a continuation line.
    pub const CONTINUATION_INDENT: usize = 2;

    /// Returns the marker style if the line is a list item.
    pub fn item(line: &str) -> Option<ListMarker> {
        if ORDERED_ITEM.is_match(line) {
            Some(ListMarker::Numbered)
        } else if UNORDERED_ITEM.is_match(line) {
            Some(ListMarker::Bullet)
        } else {
            None
        }
    }

    /// True for a non-blank line indented by at least two whitespace characters.
    ///
    /// Only meaningful once a list has started.
    pub fn is_continuation(line: &str) -> bool {
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        indent >= Self::CONTINUATION_INDENT && !line.trim().is_empty()
    }
}
