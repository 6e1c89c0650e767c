use super::blocks::{
    Block, BlockKind,
    kinds::{BlockQuote, CodeFence, Divider, Heading, Image},
};

/// Separator between blocks. Original spacing is not preserved.
pub const BLOCK_SEPARATOR: &str = "\n\n";

impl Block {
    /// Renders this block as markdown on its own.
    ///
    /// Paragraph, list and unrecognized blocks are emitted verbatim.
    pub fn to_markdown(&self) -> String {
        match &self.kind {
            BlockKind::Heading { level } => Heading::render(*level, &self.body),
            BlockKind::Code { language } => CodeFence::render(language.as_deref(), &self.body),
            BlockKind::Blockquote => BlockQuote::render(&self.body),
            BlockKind::Image { alt } => Image::render(alt, &self.body),
            BlockKind::Divider => Divider::MARKER.to_string(),
            BlockKind::Paragraph | BlockKind::List { .. } | BlockKind::Other(_) => {
                self.body.clone()
            }
        }
    }
}

/// Reassembles blocks into one markdown document, one blank line between
/// each block.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::to_markdown)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
