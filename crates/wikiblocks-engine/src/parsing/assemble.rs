use crate::models::Block;

use super::builder::build;
use super::markup::{Child, MarkupNode};

/// `id` of the page title element.
pub const TITLE_ID: &str = "firstHeading";
/// Class of the container holding the article body.
pub const BODY_CLASS: &str = "mw-parser-output";
/// `id` of the element whose direct child is the article body container.
pub const CONTENT_ID: &str = "mw-content-text";
/// Class of the `<div>` newer page markup wraps section headings in.
pub const HEADING_WRAPPER_CLASS: &str = "mw-heading";

/// Top-level body elements that become blocks.
const BODY_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol"];
const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// A part of the page that could not be converted. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionWarning {
    #[error("Unable to find the #firstHeading title element")]
    MissingTitle,
    #[error("Title element <{0}> has no semantic kind")]
    UnclassifiedTitle(String),
    #[error("Unable to find the .mw-parser-output content container")]
    MissingBody,
}

/// Blocks extracted from a page plus whatever could not be extracted.
#[derive(Debug, Default)]
pub struct Assembled {
    pub blocks: Vec<Block>,
    pub warnings: Vec<ConversionWarning>,
}

impl Assembled {
    fn push(&mut self, block: Option<Block>) {
        match block {
            Some(block) if !block.is_blank() => {
                log::debug!("block: {} tags, {} chars", block.tags.len(), block.char_len());
                self.blocks.push(block);
            }
            _ => {}
        }
    }

    fn warn(&mut self, warning: ConversionWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// Builds the page title, then each top-level body element, in document order.
///
/// A missing title or body is recorded as a warning and the rest of the page
/// is still converted.
pub fn assemble<'a, N: MarkupNode<'a>>(root: N) -> Assembled {
    let mut out = Assembled::default();

    match find_self_or_descendant(root, |n| n.attr("id") == Some(TITLE_ID)) {
        Some(title) => match build(title) {
            Some(block) => out.push(Some(block)),
            None => out.warn(ConversionWarning::UnclassifiedTitle(
                title.tag_name().to_string(),
            )),
        },
        None => out.warn(ConversionWarning::MissingTitle),
    }

    match find_body(root) {
        Some(body) => {
            for el in body_elements(body) {
                out.push(build(el));
            }
        }
        None => out.warn(ConversionWarning::MissingBody),
    }

    out
}

/// The blocks of [`assemble`], without the warnings.
pub fn convert<'a, N: MarkupNode<'a>>(root: N) -> Vec<Block> {
    assemble(root).blocks
}

fn find_self_or_descendant<'a, N, P>(node: N, pred: P) -> Option<N>
where
    N: MarkupNode<'a>,
    P: Fn(&N) -> bool,
{
    if pred(&node) {
        return Some(node);
    }
    node.find_descendant(pred)
}

/// Page-status indicators carry their own `.mw-parser-output` ahead of the
/// article, so the container under `#mw-content-text` wins. Otherwise the
/// first container with a block-level child, then any container at all.
fn find_body<'a, N: MarkupNode<'a>>(root: N) -> Option<N> {
    let under_content = find_self_or_descendant(root, |n| n.attr("id") == Some(CONTENT_ID))
        .and_then(|content| {
            content.children().find_map(|child| match child {
                Child::Element(el) if el.has_class(BODY_CLASS) => Some(el),
                _ => None,
            })
        });

    under_content
        .or_else(|| {
            find_self_or_descendant(root, |n| {
                n.has_class(BODY_CLASS) && body_elements(*n).next().is_some()
            })
        })
        .or_else(|| find_self_or_descendant(root, |n| n.has_class(BODY_CLASS)))
}

fn body_elements<'a, N: MarkupNode<'a>>(body: N) -> impl Iterator<Item = N> {
    body.children().filter_map(|child| match child {
        Child::Element(el) if is_one_of(el.tag_name(), BODY_TAGS) => Some(el),
        Child::Element(el) if el.has_class(HEADING_WRAPPER_CLASS) => unwrap_heading(el),
        _ => None,
    })
}

fn unwrap_heading<'a, N: MarkupNode<'a>>(wrapper: N) -> Option<N> {
    wrapper.children().find_map(|child| match child {
        Child::Element(el) if is_one_of(el.tag_name(), HEADING_TAGS) => Some(el),
        _ => None,
    })
}

fn is_one_of(name: &str, names: &[&str]) -> bool {
    names.iter().any(|n| n.eq_ignore_ascii_case(name))
}
