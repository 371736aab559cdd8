pub mod block;
pub mod span;
pub mod tag;

pub use block::{Block, File};
pub use span::Span;
pub use tag::{DocTag, Tag};
