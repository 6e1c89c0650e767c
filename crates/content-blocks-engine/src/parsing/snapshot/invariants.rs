use std::collections::HashSet;

use crate::parsing::blocks::{Block, BlockKind, kinds::Heading};

/// Validates parser output invariants against the source text.
///
/// Asserts that:
/// - No block has an unrecognized kind
/// - Heading levels are within 1..=6
/// - Paragraph and list bodies are non-empty
/// - Every paragraph and list body line occurs verbatim in the source
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, blocks: &[Block]) {
    let source_lines: HashSet<&str> = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    for (i, b) in blocks.iter().enumerate() {
        match &b.kind {
            BlockKind::Other(tag) => panic!("block {i}: parser produced unknown kind {tag:?}"),
            BlockKind::Heading { level } => assert!(
                (1..=Heading::MAX_LEVEL).contains(level),
                "block {i}: heading level {level} out of range"
            ),
            BlockKind::Paragraph | BlockKind::List { .. } => {
                assert!(!b.body.is_empty(), "block {i}: empty {} body", b.kind.tag());
                for line in b.body.split('\n') {
                    assert!(
                        source_lines.contains(line),
                        "block {i}: line {line:?} does not occur in the source"
                    );
                }
            }
            _ => {}
        }
    }
}
