//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable, serializable `Snap` format
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (heading levels in
//!   range, no empty paragraph or list bodies, no invented content)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by fixture snapshots rather than a separate
//! formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{BlockSnap, Snap, normalize};
