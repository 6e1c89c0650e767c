//! # Block Parsing
//!
//! Two-phase block parsing over a document split into lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into the
//!    `LineClass` it would open, by construct precedence
//!    (divider > heading > fence > blockquote > image > list > paragraph)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the open
//!    multi-line construct, applies its continuation rule, and emits `Block`s
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`wire`**: JSON form (`type` / `body` / `meta`) used by storage and tooling
//! - **`kinds`**: per-kind syntax knowledge (detection and re-emission)
//! - **`classify`**: `MarkdownLineClassifier` producing `LineClass`
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks come out in source order
//! - Every non-blank line lands in exactly one block, except fence and
//!   divider lines whose content is the markup itself, and text trailing an
//!   image on the same line
//! - Fenced code is a raw zone: no construct is recognized inside it

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;
pub mod wire;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, BlockKind};
pub use wire::WireBlock;
