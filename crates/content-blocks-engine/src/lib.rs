pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{BlockDocument, EditError};
pub use io::*;
pub use models::ContentFile;
pub use parsing::{
    blocks::{Block, BlockKind},
    blocks_to_markdown, parse_markdown_to_blocks,
};
