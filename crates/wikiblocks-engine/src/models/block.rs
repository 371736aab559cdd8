use serde::{Deserialize, Serialize};

use super::span::Span;
use super::tag::{DocTag, Tag};

/// A unit of extracted text and the annotations that describe it.
///
/// Tag order is discovery order: a node's own tag first, then its
/// descendants' tags in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub text: String,
    pub tags: Vec<Tag>,
}

impl Block {
    pub fn new(text: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// Length of the text in characters, the unit tag offsets are measured in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The substring a tag covers. Unbounded tags cover the whole text.
    ///
    /// Out-of-range offsets are clamped to the end of the text.
    pub fn tag_text(&self, tag: &Tag) -> &str {
        self.slice(tag.resolve(self.char_len()))
    }

    /// Slices the text by character offsets.
    pub fn slice(&self, span: Span) -> &str {
        let start = byte_index(&self.text, span.start);
        let end = byte_index(&self.text, span.end.max(span.start));
        &self.text[start..end]
    }

    /// The first tag of `kind`, if any.
    pub fn find_tag(&self, kind: DocTag) -> Option<&Tag> {
        self.tags.iter().find(|t| t.kind == kind)
    }
}

fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(idx, _)| idx)
}

/// An imported document: its blocks in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub blocks: Vec<Block>,
}

impl File {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Every `(block, tag)` pair in the document.
    pub fn tags(&self) -> impl Iterator<Item = (&Block, &Tag)> {
        self.blocks
            .iter()
            .flat_map(|block| block.tags.iter().map(move |tag| (block, tag)))
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
