/*!
 * # Block Editing
 *
 * Editing tools (manual edits, generated rewrites) operate on one block at a
 * time and address it by its position in the parsed sequence.
 *
 * ## Addressing
 *
 * The parser assigns no identifiers. A position is only meaningful for the
 * sequence it was read from: once a document is re-parsed, an edit keyed on
 * an old position may land on a different block. Callers that hold a
 * position across a re-parse should use
 * [`BlockDocument::replace_body_if_unchanged`], which refuses the edit when
 * the block at that position no longer carries the body they read.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use content_blocks_engine::editing::BlockDocument;
 *
 * let mut doc = BlockDocument::from_markdown("# Draft\n\nOld intro.");
 * let previous = doc.replace_body(1, "New intro.").unwrap();
 * assert_eq!(previous, "Old intro.");
 * assert_eq!(doc.to_markdown(), "# Draft\n\nNew intro.");
 * ```
 */

pub mod document;

pub use document::BlockDocument;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("block index {index} out of bounds for document with {len} blocks")]
    OutOfBounds { index: usize, len: usize },
    #[error("block {index} changed since it was read")]
    StaleBlock { index: usize },
}
