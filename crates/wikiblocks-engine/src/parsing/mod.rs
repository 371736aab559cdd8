//! # Page Conversion
//!
//! Turns a parsed HTML page into a list of annotated text [`Block`]s.
//!
//! ## Components
//!
//! - **`markup`**: `MarkupNode`, the read-only view of an element the converter
//!   walks (implemented for `scraper::ElementRef`)
//! - **`classify`**: `classify()` maps tag names to a `DocTag`, or `None` for
//!   transparent layout elements
//! - **`builder`**: `build()` flattens one element into a block, rebasing child
//!   tag offsets into the block's coordinates
//! - **`assemble`**: picks the title and top-level body elements of a page and
//!   builds each one
//! - **`snapshot`**: invariant checks and a normalized view for snapshot tests
//!
//! ## Key Invariants
//!
//! - Tag offsets are character offsets into the owning block's final text
//! - A block's own tag comes first and is unbounded (covers the whole text)
//! - One malformed section never stops the rest of the page converting

pub mod assemble;
pub mod builder;
pub mod classify;
pub mod markup;
pub mod snapshot;

use scraper::Html;

use crate::models::{Block, File};

pub use assemble::{Assembled, ConversionWarning, assemble, convert};
pub use builder::build;
pub use classify::classify;
pub use markup::{Child, MarkupNode};

/// Parses a full HTML page and converts it.
///
/// Parsing is permissive; malformed markup is repaired, not rejected.
pub fn parse_html(html: &str) -> File {
    let Assembled { blocks, warnings } = parse_html_with_warnings(html);
    if !warnings.is_empty() {
        log::info!("converted page with {} warning(s)", warnings.len());
    }
    File::new(blocks)
}

/// Like [`parse_html`], also returning what could not be converted.
pub fn parse_html_with_warnings(html: &str) -> Assembled {
    let doc = Html::parse_document(html);
    assemble(doc.root_element())
}

/// Convenience: converts a single element given as an HTML fragment.
///
/// The first element of the fragment is built; `None` when there is none or
/// it has no semantic kind.
pub fn build_fragment(html: &str) -> Option<Block> {
    let doc = Html::parse_fragment(html);
    let first = doc.root_element().children().find_map(|child| match child {
        Child::Element(el) => Some(el),
        Child::Text(_) => None,
    })?;
    build(first)
}
