//! # Snapshot Testing Support
//!
//! Utilities for testing the converter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts blocks to a stable, serializable `Snap` format that
//!   pairs every tag with the text it covers, for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for converter correctness (tag offsets in
//!   bounds and ordered, unbounded tags only where allowed)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
