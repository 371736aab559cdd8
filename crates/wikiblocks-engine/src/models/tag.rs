use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::span::Span;

/// Semantic kind of an annotation.
///
/// The serialized names are the wire names used in block JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Title,
    Paragraph,
    List,
    ListItem,
    Strong,
    Emph,
    Underline,
    Link,
    Blockquote,
    Blockcode,
    Code,
    Subscript,
    Superscript,
}

impl DocTag {
    /// Wire name of this kind, as it appears in block JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            DocTag::H1 => "h1",
            DocTag::H2 => "h2",
            DocTag::H3 => "h3",
            DocTag::H4 => "h4",
            DocTag::H5 => "h5",
            DocTag::H6 => "h6",
            DocTag::Title => "title",
            DocTag::Paragraph => "paragraph",
            DocTag::List => "list",
            DocTag::ListItem => "list-item",
            DocTag::Strong => "strong",
            DocTag::Emph => "emph",
            DocTag::Underline => "underline",
            DocTag::Link => "link",
            DocTag::Blockquote => "blockquote",
            DocTag::Blockcode => "blockcode",
            DocTag::Code => "code",
            DocTag::Subscript => "subscript",
            DocTag::Superscript => "superscript",
        }
    }

    /// Whether annotations of this kind carry a `value` read from attributes.
    pub fn carries_value(self) -> bool {
        matches!(self, DocTag::Link)
    }
}

impl fmt::Display for DocTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A semantic span over a block's text.
///
/// `span` is `None` when the tag covers the whole block. Both bounds are
/// present or absent together; a present `0` is a real boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: DocTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub span: Option<Span>,
}

impl Tag {
    /// A tag covering the whole block.
    pub fn whole(kind: DocTag) -> Self {
        Self {
            kind,
            value: None,
            span: None,
        }
    }

    /// A tag with exact bounds.
    pub fn bounded(kind: DocTag, span: Span) -> Self {
        Self {
            kind,
            value: None,
            span: Some(span),
        }
    }

    pub fn with_value(mut self, value: Option<BTreeMap<String, String>>) -> Self {
        self.value = value;
        self
    }

    /// Concrete span of this tag in a text of `text_len` characters.
    ///
    /// Unbounded tags resolve to `[0, text_len)`.
    pub fn resolve(&self, text_len: usize) -> Span {
        self.span.unwrap_or(Span::new(0, text_len))
    }

    /// Rebases this tag into a parent whose text already holds `offset`
    /// characters, given the child contributed `child_len` characters.
    pub(crate) fn rebased(mut self, offset: usize, child_len: usize) -> Self {
        self.span = Some(match self.span {
            Some(span) => span.shifted(offset),
            None => Span::new(offset, offset + child_len),
        });
        self
    }

    /// Value entry lookup, e.g. `href` on a link.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key).map(String::as_str)
    }
}
