//! Parse → serialize → parse verification.
//!
//! Only round-trip stable kinds (heading, code, blockquote, image, divider)
//! are compared. Paragraph and list blocks are skipped because blank-line
//! normalization may regroup them.

use serde::Serialize;

use super::{
    blocks::Block, parse_markdown_to_blocks, serialize::blocks_to_markdown,
};

/// A stable block that did not survive serialization unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTripMismatch {
    /// Index among the stable blocks of the original sequence.
    pub position: usize,
    pub expected: Option<Block>,
    pub actual: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTripReport {
    /// Number of stable blocks in the original sequence.
    pub checked: usize,
    pub mismatches: Vec<RoundTripMismatch>,
}

impl RoundTripReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Serializes `blocks`, re-parses the result and compares stable blocks
/// pairwise in order.
pub fn verify(blocks: &[Block]) -> RoundTripReport {
    let reparsed = parse_markdown_to_blocks(blocks_to_markdown(blocks).as_str());

    let before: Vec<&Block> = stable(blocks).collect();
    let after: Vec<&Block> = stable(&reparsed).collect();

    let mismatches = (0..before.len().max(after.len()))
        .filter_map(|position| {
            let expected = before.get(position).copied();
            let actual = after.get(position).copied();
            (expected != actual).then(|| RoundTripMismatch {
                position,
                expected: expected.cloned(),
                actual: actual.cloned(),
            })
        })
        .collect::<Vec<_>>();

    if !mismatches.is_empty() {
        log::debug!(
            "round trip changed {} of {} stable blocks",
            mismatches.len(),
            before.len()
        );
    }

    RoundTripReport {
        checked: before.len(),
        mismatches,
    }
}

/// Parses `markdown` and verifies the resulting blocks.
pub fn verify_markdown(markdown: &str) -> RoundTripReport {
    verify(&parse_markdown_to_blocks(markdown))
}

fn stable(blocks: &[Block]) -> impl Iterator<Item = &Block> {
    blocks.iter().filter(|b| b.kind.is_round_trip_stable())
}
