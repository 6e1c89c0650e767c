pub mod blocks;
pub mod roundtrip;
pub mod serialize;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder};

pub use roundtrip::{RoundTripMismatch, RoundTripReport};
pub use serialize::blocks_to_markdown;

/// Splits a document into ordered, typed blocks.
///
/// Total over every input: `None` and empty or whitespace-only text yield no
/// blocks, and malformed markup falls back to a deterministic block rather
/// than an error. Each call is an independent pass with no retained state.
///
/// ```
/// use content_blocks_engine::parsing::{blocks::Block, parse_markdown_to_blocks};
///
/// let blocks = parse_markdown_to_blocks("# Launch\n\nShip it.");
/// assert_eq!(blocks, vec![Block::heading(1, "Launch"), Block::paragraph("Ship it.")]);
/// assert!(parse_markdown_to_blocks(None::<&str>).is_empty());
/// ```
pub fn parse_markdown_to_blocks<'a>(markdown: impl Into<Option<&'a str>>) -> Vec<Block> {
    let Some(text) = markdown.into() else {
        return vec![];
    };

    let mut builder = BlockBuilder::new();
    for line in text.split('\n') {
        builder.push(line.strip_suffix('\r').unwrap_or(line));
    }
    let blocks = builder.finish();

    log::debug!("parsed {} blocks from {} bytes", blocks.len(), text.len());
    blocks
}
