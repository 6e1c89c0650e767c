use serde::{Deserialize, Serialize};

use super::wire::WireBlock;

/// The kind of a block together with its kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX heading (`#` through `######`).
    Heading {
        /// Number of `#` characters, always within 1..=6.
        level: u8,
    },
    /// A run of plain lines (default when no other construct matches).
    Paragraph,
    /// A run of list items and their indented continuation lines.
    List {
        /// Whether the first item uses a `1.` style marker.
        ordered: bool,
    },
    /// A backtick-fenced code block.
    Code {
        /// Info string after the opening fence, if any.
        language: Option<String>,
    },
    /// A run of `>` prefixed lines.
    Blockquote,
    /// A single `![alt](url)` line. The block body is the URL.
    Image { alt: String },
    /// A thematic break made of three or more hyphens.
    Divider,
    /// A block with a type tag this crate does not know about.
    ///
    /// Never produced by the parser; only arrives through deserialized block
    /// lists written by other tools.
    Other(String),
}

impl BlockKind {
    pub const HEADING: &'static str = "heading";
    pub const PARAGRAPH: &'static str = "paragraph";
    pub const LIST: &'static str = "list";
    pub const CODE: &'static str = "code";
    pub const BLOCKQUOTE: &'static str = "blockquote";
    pub const IMAGE: &'static str = "image";
    pub const DIVIDER: &'static str = "divider";

    /// The wire tag stored in the `type` field.
    pub fn tag(&self) -> &str {
        match self {
            BlockKind::Heading { .. } => Self::HEADING,
            BlockKind::Paragraph => Self::PARAGRAPH,
            BlockKind::List { .. } => Self::LIST,
            BlockKind::Code { .. } => Self::CODE,
            BlockKind::Blockquote => Self::BLOCKQUOTE,
            BlockKind::Image { .. } => Self::IMAGE,
            BlockKind::Divider => Self::DIVIDER,
            BlockKind::Other(tag) => tag,
        }
    }

    /// Kinds whose serialized form always re-parses to an identical block.
    ///
    /// Paragraphs and lists are excluded: the serializer normalizes spacing
    /// between blocks, which can change how adjacent plain lines group.
    #[must_use]
    pub fn is_round_trip_stable(&self) -> bool {
        matches!(
            self,
            BlockKind::Heading { .. }
                | BlockKind::Code { .. }
                | BlockKind::Blockquote
                | BlockKind::Image { .. }
                | BlockKind::Divider
        )
    }
}

/// One addressable unit of a parsed document.
///
/// Blocks carry no identifier of their own; callers address them by
/// position in the sequence returned from the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireBlock", into = "WireBlock")]
pub struct Block {
    pub kind: BlockKind,
    pub body: String,
}

impl Block {
    pub fn new(kind: BlockKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }

    pub fn heading(level: u8, body: impl Into<String>) -> Self {
        Self::new(
            BlockKind::Heading {
                level: level.clamp(1, 6),
            },
            body,
        )
    }

    pub fn paragraph(body: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, body)
    }

    pub fn list(ordered: bool, body: impl Into<String>) -> Self {
        Self::new(BlockKind::List { ordered }, body)
    }

    pub fn code(language: Option<&str>, body: impl Into<String>) -> Self {
        Self::new(
            BlockKind::Code {
                language: language.map(str::to_string),
            },
            body,
        )
    }

    pub fn blockquote(body: impl Into<String>) -> Self {
        Self::new(BlockKind::Blockquote, body)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(BlockKind::Image { alt: alt.into() }, url)
    }

    pub fn divider() -> Self {
        Self::new(BlockKind::Divider, "---")
    }
}
