//! # Span Annotation Builder
//!
//! Flattens an element subtree into a single [`Block`]: the concatenated text
//! of every descendant text run, plus one [`Tag`] per classified element.
//!
//! ## Rebasing
//!
//! Each classified child is built into its own block first, with offsets
//! relative to the child's text. When it is merged into the parent, every
//! tag is shifted by the parent's current text length; an unbounded tag
//! becomes exactly the span the child contributed. A grandchild is therefore
//! shifted once per level, each time by that level's offset.
//!
//! ## Headline short-circuit
//!
//! A classified element with an `.mw-headline` descendant yields that
//! headline's text only, under a single unbounded tag. Sibling decorations
//! (edit links, section numbers) are dropped.

use std::collections::BTreeMap;

use crate::models::{Block, DocTag, Tag};

use super::classify::{classify, is_opaque};
use super::markup::{Child, MarkupNode};

/// Class marking the human-readable caption of a section heading.
pub const HEADLINE_CLASS: &str = "mw-headline";

/// Converts one element into a block.
///
/// Returns `None` when the element itself has no semantic kind.
pub fn build<'a, N: MarkupNode<'a>>(node: N) -> Option<Block> {
    let kind = classify(node.tag_name())?;
    Some(build_classified(node, kind))
}

fn build_classified<'a, N: MarkupNode<'a>>(node: N, kind: DocTag) -> Block {
    if let Some(headline) = node.find_descendant(|n| n.has_class(HEADLINE_CLASS)) {
        return Block::new(flatten_text(headline), vec![Tag::whole(kind)]);
    }

    let mut builder = BlockBuilder::new(Tag::whole(kind).with_value(tag_value(node, kind)));
    builder.push_children(node);
    builder.finish()
}

/// Attached data for kinds that carry it. A missing attribute yields no value.
fn tag_value<'a, N: MarkupNode<'a>>(node: N, kind: DocTag) -> Option<BTreeMap<String, String>> {
    if !kind.carries_value() {
        return None;
    }
    let href = node.attr("href")?;
    Some(BTreeMap::from([("href".to_string(), href.to_string())]))
}

/// Plain text of a subtree, skipping opaque elements.
pub fn flatten_text<'a, N: MarkupNode<'a>>(node: N) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text<'a, N: MarkupNode<'a>>(node: N, out: &mut String) {
    for child in node.children() {
        match child {
            Child::Text(text) => out.push_str(text),
            Child::Element(el) if !is_opaque(el.tag_name()) => collect_text(el, out),
            Child::Element(_) => {}
        }
    }
}

/// Running text and tags for one classified element.
///
/// The element's own tag is pushed first and keeps its unbounded span.
struct BlockBuilder {
    text: String,
    char_len: usize,
    tags: Vec<Tag>,
}

impl BlockBuilder {
    fn new(own: Tag) -> Self {
        Self {
            text: String::new(),
            char_len: 0,
            tags: vec![own],
        }
    }

    fn push_children<'a, N: MarkupNode<'a>>(&mut self, node: N) {
        for child in node.children() {
            match child {
                Child::Text(text) => self.push_text(text),
                Child::Element(el) => self.push_element(el),
            }
        }
    }

    fn push_element<'a, N: MarkupNode<'a>>(&mut self, el: N) {
        let name = el.tag_name();
        if is_opaque(name) {
            return;
        }
        match classify(name) {
            Some(kind) => self.merge(build_classified(el, kind)),
            // Transparent: its children flow straight into this block.
            None => self.push_children(el),
        }
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.char_len += text.chars().count();
    }

    /// Appends a built child, rebasing its tags. Blank children are dropped
    /// whole so they never leave a zero-width tag behind.
    fn merge(&mut self, child: Block) {
        if child.is_blank() {
            return;
        }
        let offset = self.char_len;
        let child_len = child.char_len();
        self.tags.extend(
            child
                .tags
                .into_iter()
                .map(|tag| tag.rebased(offset, child_len)),
        );
        self.text.push_str(&child.text);
        self.char_len += child_len;
    }

    fn finish(self) -> Block {
        Block::new(self.text, self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Span;
    use crate::parsing::snapshot::invariants;
    use crate::tests::{parse_fragment, select_first};
    use pretty_assertions::assert_eq;

    fn build_first(html: &str, selector: &str) -> Block {
        let doc = parse_fragment(html);
        let block = build(select_first(&doc, selector)).expect("classified element");
        invariants::check(&block);
        block
    }

    fn kinds(block: &Block) -> Vec<DocTag> {
        block.tags.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn heading_text_and_kind() {
        let block = build_first("<h1>Hi There</h1>", "h1");
        assert_eq!(block.text, "Hi There");
        assert_eq!(block.tags, vec![Tag::whole(DocTag::H1)]);
    }

    #[test]
    fn paragraph_text_is_concatenated_leaves() {
        let block = build_first("<p>one<!-- split --> two</p>", "p");
        assert_eq!(block.text, "one two");
        assert_eq!(block.tags, vec![Tag::whole(DocTag::Paragraph)]);
    }

    #[test]
    fn paragraph_with_link() {
        let block = build_first(r##"<p>This is a <a href="#">link</a></p>"##, "p");

        assert_eq!(block.text, "This is a link");
        assert_eq!(block.tags.len(), 2);
        assert_eq!(block.tags[0], Tag::whole(DocTag::Paragraph));

        let link = &block.tags[1];
        assert_eq!(link.kind, DocTag::Link);
        assert_eq!(link.span, Some(Span::new(10, 14)));
        assert_eq!(link.value_of("href"), Some("#"));
        assert_eq!(block.tag_text(link), "link");
    }

    #[test]
    fn link_without_href_has_no_value() {
        let block = build_first("<p>see <a>here</a></p>", "p");
        assert_eq!(block.tags[1].kind, DocTag::Link);
        assert_eq!(block.tags[1].value, None);
        assert_eq!(block.tag_text(&block.tags[1]), "here");
    }

    #[test]
    fn bold_and_italic() {
        let block = build_first("<p>This is <b>bold and <i>italic</i></b>.</p>", "p");

        assert_eq!(block.text, "This is bold and italic.");
        assert_eq!(
            kinds(&block),
            vec![DocTag::Paragraph, DocTag::Strong, DocTag::Emph]
        );
        assert_eq!(block.tags[0].span, None);
        assert_eq!(block.tag_text(&block.tags[1]), "bold and italic");
        assert_eq!(block.tag_text(&block.tags[2]), "italic");
    }

    #[test]
    fn nested_offsets_are_rebased_per_level() {
        let block = build_first("<p>A <b>B <i>C</i></b> D</p>", "p");

        assert_eq!(block.text, "A B C D");
        assert_eq!(block.tags[0].span, None);
        assert_eq!(block.tags[1].span, Some(Span::new(2, 5)));
        assert_eq!(block.tag_text(&block.tags[1]), "B C");
        assert_eq!(block.tags[2].span, Some(Span::new(4, 5)));
        assert_eq!(block.tag_text(&block.tags[2]), "C");
    }

    #[test]
    fn list_items_in_order() {
        let block = build_first("<ul><li>one</li> <li>two</li></ul>", "ul");

        assert_eq!(block.text, "one two");
        assert_eq!(
            kinds(&block),
            vec![DocTag::List, DocTag::ListItem, DocTag::ListItem]
        );
        assert_eq!(block.tag_text(&block.tags[0]), "one two");
        assert_eq!(block.tag_text(&block.tags[1]), "one");
        assert_eq!(block.tag_text(&block.tags[2]), "two");
    }

    #[test]
    fn list_inside_block_gets_bounded_span() {
        let block = build_first(
            "<blockquote>I have a list: <ul><li>one</li> <li>two</li></ul>. That's it..</blockquote>",
            "blockquote",
        );

        assert_eq!(block.text, "I have a list: one two. That's it..");
        assert_eq!(
            kinds(&block),
            vec![
                DocTag::Blockquote,
                DocTag::List,
                DocTag::ListItem,
                DocTag::ListItem
            ]
        );
        assert_eq!(block.tags[1].span, Some(Span::new(15, 22)));
        assert_eq!(block.tag_text(&block.tags[1]), "one two");
        assert_eq!(block.tag_text(&block.tags[2]), "one");
        assert_eq!(block.tag_text(&block.tags[3]), "two");
    }

    #[test]
    fn nested_lists() {
        let block = build_first(
            "<blockquote>I have a list: <ul><li>one <ul>Inner: <li>Thing</li></ul></li> <li>two</li></ul>. That's it..</blockquote>",
            "blockquote",
        );

        assert_eq!(block.text, "I have a list: one Inner: Thing two. That's it..");
        assert_eq!(
            kinds(&block),
            vec![
                DocTag::Blockquote,
                DocTag::List,
                DocTag::ListItem,
                DocTag::List,
                DocTag::ListItem,
                DocTag::ListItem
            ]
        );
        let texts: Vec<&str> = block.tags[1..].iter().map(|t| block.tag_text(t)).collect();
        assert_eq!(
            texts,
            vec!["one Inner: Thing two", "one Inner: Thing", "Inner: Thing", "Thing", "two"]
        );
    }

    #[test]
    fn headline_marker_short_circuits() {
        let block = build_first(
            r#"<h2><span class="mw-headline" id="History">History</span><span class="mw-editsection"><span class="mw-editsection-bracket">[</span><a href="/w/index.php?action=edit&amp;section=1">edit</a><span class="mw-editsection-bracket">]</span></span></h2>"#,
            "h2",
        );

        assert_eq!(block.text, "History");
        assert_eq!(block.tags, vec![Tag::whole(DocTag::H2)]);
    }

    #[test]
    fn headline_text_is_flattened() {
        let block = build_first(
            r#"<h3><span class="mw-headline">Range <i>and</i> habitat</span><span>[edit]</span></h3>"#,
            "h3",
        );
        assert_eq!(block.text, "Range and habitat");
        assert_eq!(block.tags.len(), 1);
    }

    #[test]
    fn blank_child_is_discarded() {
        let block = build_first("<p><b>   </b></p>", "p");
        assert_eq!(block.text, "");
        assert_eq!(block.tags, vec![Tag::whole(DocTag::Paragraph)]);
    }

    #[test]
    fn blank_child_drops_its_whitespace_too() {
        let block = build_first("<p>a<b> </b>c</p>", "p");
        assert_eq!(block.text, "ac");
        assert_eq!(block.tags.len(), 1);
    }

    #[test]
    fn empty_paragraph_keeps_own_tag() {
        let block = build_first("<p></p>", "p");
        assert_eq!(block.text, "");
        assert_eq!(block.tags, vec![Tag::whole(DocTag::Paragraph)]);
    }

    #[test]
    fn transparent_elements_flow_into_parent() {
        let block = build_first("<p>a <span>b <i>c</i></span> d</p>", "p");

        assert_eq!(block.text, "a b c d");
        assert_eq!(kinds(&block), vec![DocTag::Paragraph, DocTag::Emph]);
        assert_eq!(block.tags[1].span, Some(Span::new(4, 5)));
    }

    #[test]
    fn opaque_elements_are_skipped() {
        let block = build_first("<p>x<style>.mw-parser-output{}</style>y</p>", "p");
        assert_eq!(block.text, "xy");
        assert_eq!(block.tags.len(), 1);
    }

    #[test]
    fn transparent_root_yields_none() {
        let doc = parse_fragment("<div><p>text</p></div>");
        assert_eq!(build(select_first(&doc, "div")), None);
    }

    #[test]
    fn offsets_count_characters() {
        let block = build_first("<p>豹貓 is an <a href=\"/wiki/Ocelot\">ocelot</a></p>", "p");
        assert_eq!(block.tags[1].span, Some(Span::new(9, 15)));
        assert_eq!(block.tag_text(&block.tags[1]), "ocelot");
    }
}
