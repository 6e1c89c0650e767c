//! JSON wire form shared with the storage layer and the rewrite tooling.
//!
//! `{"type": "heading", "body": "Title", "meta": {"level": 2}}`
//!
//! Decoding never fails on missing or mistyped `meta` entries; they fall back
//! to the same defaults the serializer uses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{Block, BlockKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireBlock {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub meta: Map<String, Value>,
}

const LEVEL: &str = "level";
const LANGUAGE: &str = "language";
const ALT: &str = "alt";
const ORDERED: &str = "ordered";

impl From<WireBlock> for Block {
    fn from(wire: WireBlock) -> Self {
        let meta = &wire.meta;
        let kind = match wire.tag.as_str() {
            BlockKind::HEADING => BlockKind::Heading {
                level: meta
                    .get(LEVEL)
                    .and_then(Value::as_u64)
                    .map_or(1, |level| level.clamp(1, 6) as u8),
            },
            BlockKind::PARAGRAPH => BlockKind::Paragraph,
            BlockKind::LIST => BlockKind::List {
                ordered: meta.get(ORDERED).and_then(Value::as_bool).unwrap_or(false),
            },
            BlockKind::CODE => BlockKind::Code {
                language: meta
                    .get(LANGUAGE)
                    .and_then(Value::as_str)
                    .filter(|language| !language.is_empty())
                    .map(str::to_string),
            },
            BlockKind::BLOCKQUOTE => BlockKind::Blockquote,
            BlockKind::IMAGE => BlockKind::Image {
                alt: meta
                    .get(ALT)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            BlockKind::DIVIDER => BlockKind::Divider,
            _ => BlockKind::Other(wire.tag.clone()),
        };
        Block {
            kind,
            body: wire.body,
        }
    }
}

impl From<Block> for WireBlock {
    fn from(block: Block) -> Self {
        let mut meta = Map::new();
        let tag = block.kind.tag().to_string();
        match block.kind {
            BlockKind::Heading { level } => {
                meta.insert(LEVEL.into(), Value::from(level));
            }
            BlockKind::List { ordered } => {
                meta.insert(ORDERED.into(), Value::from(ordered));
            }
            BlockKind::Code {
                language: Some(language),
            } => {
                meta.insert(LANGUAGE.into(), Value::from(language));
            }
            BlockKind::Image { alt } => {
                meta.insert(ALT.into(), Value::from(alt));
            }
            BlockKind::Code { language: None }
            | BlockKind::Paragraph
            | BlockKind::Blockquote
            | BlockKind::Divider
            | BlockKind::Other(_) => {}
        }
        WireBlock {
            tag,
            body: block.body,
            meta,
        }
    }
}
