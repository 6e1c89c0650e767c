use serde::{Deserialize, Serialize};

use crate::editing::EditError;
use crate::parsing::{blocks::Block, blocks_to_markdown, parse_markdown_to_blocks};

/// An ordered block list for one document.
///
/// Serializes as a bare JSON array of blocks, which is the shape the storage
/// layer persists per document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockDocument {
    blocks: Vec<Block>,
}

impl BlockDocument {
    /// Parses a document from scratch. Nothing carries over from earlier parses.
    pub fn from_markdown(markdown: &str) -> Self {
        Self {
            blocks: parse_markdown_to_blocks(markdown),
        }
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn to_markdown(&self) -> String {
        blocks_to_markdown(&self.blocks)
    }

    /// Replaces the body of the block at `index`, keeping its kind.
    ///
    /// Returns the previous body.
    pub fn replace_body(
        &mut self,
        index: usize,
        body: impl Into<String>,
    ) -> Result<String, EditError> {
        let block = self.block_mut(index)?;
        Ok(std::mem::replace(&mut block.body, body.into()))
    }

    /// Replaces the whole block at `index` (kind, attributes and body).
    ///
    /// Returns the previous block.
    pub fn replace_block(&mut self, index: usize, block: Block) -> Result<Block, EditError> {
        let slot = self.block_mut(index)?;
        Ok(std::mem::replace(slot, block))
    }

    /// Like [`replace_body`](Self::replace_body), but only if the block at
    /// `index` still has `expected_body`.
    pub fn replace_body_if_unchanged(
        &mut self,
        index: usize,
        expected_body: &str,
        body: impl Into<String>,
    ) -> Result<String, EditError> {
        let block = self.block_mut(index)?;
        if block.body != expected_body {
            log::debug!("refusing edit of block {index}: body changed since it was read");
            return Err(EditError::StaleBlock { index });
        }
        Ok(std::mem::replace(&mut block.body, body.into()))
    }

    fn block_mut(&mut self, index: usize) -> Result<&mut Block, EditError> {
        let len = self.blocks.len();
        self.blocks
            .get_mut(index)
            .ok_or(EditError::OutOfBounds { index, len })
    }
}

impl From<Vec<Block>> for BlockDocument {
    fn from(blocks: Vec<Block>) -> Self {
        Self::from_blocks(blocks)
    }
}
