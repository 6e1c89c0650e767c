use serde::Serialize;

use crate::parsing::blocks::{Block, BlockKind};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Kind with its attributes, e.g. `heading(2)` or `code(ts)`.
    pub kind: String,
    /// Body split into lines for readable diffs.
    pub lines: Vec<String>,
}

pub fn normalize(blocks: &[Block]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let kind = match &b.kind {
                BlockKind::Heading { level } => format!("heading({level})"),
                BlockKind::List { ordered: true } => "list(ordered)".to_string(),
                BlockKind::List { ordered: false } => "list".to_string(),
                BlockKind::Code {
                    language: Some(language),
                } => format!("code({language})"),
                BlockKind::Image { alt } => format!("image({alt})"),
                other => other.tag().to_string(),
            };

            BlockSnap {
                kind,
                lines: b.body.split('\n').map(str::to_string).collect(),
            }
        })
        .collect();

    Snap { blocks }
}
