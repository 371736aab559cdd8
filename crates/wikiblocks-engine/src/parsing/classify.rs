use crate::models::DocTag;

/// Elements whose whole subtree is dropped: no text, no annotations.
const OPAQUE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Maps a tag name to its semantic kind.
///
/// Returns `None` for tags with no semantic meaning (`div`, `span`, ...).
/// Such elements are transparent: they contribute no annotation of their own
/// but their children are still converted.
pub fn classify(tag_name: &str) -> Option<DocTag> {
    let name = tag_name.trim().to_ascii_lowercase();
    let kind = match name.as_str() {
        "p" => DocTag::Paragraph,
        "h1" => DocTag::H1,
        "h2" => DocTag::H2,
        "h3" => DocTag::H3,
        "h4" => DocTag::H4,
        "h5" => DocTag::H5,
        "h6" => DocTag::H6,
        "title" => DocTag::Title,
        "ul" | "ol" => DocTag::List,
        "li" => DocTag::ListItem,
        "b" | "strong" => DocTag::Strong,
        "i" | "em" => DocTag::Emph,
        "u" => DocTag::Underline,
        "a" => DocTag::Link,
        "blockquote" => DocTag::Blockquote,
        "pre" => DocTag::Blockcode,
        "code" => DocTag::Code,
        "sub" => DocTag::Subscript,
        "sup" => DocTag::Superscript,
        _ => return None,
    };
    Some(kind)
}

/// Whether an element's subtree is skipped entirely.
pub fn is_opaque(tag_name: &str) -> bool {
    OPAQUE_TAGS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag_name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("p", DocTag::Paragraph)]
    #[case("h1", DocTag::H1)]
    #[case("h6", DocTag::H6)]
    #[case("ul", DocTag::List)]
    #[case("ol", DocTag::List)]
    #[case("li", DocTag::ListItem)]
    #[case("b", DocTag::Strong)]
    #[case("strong", DocTag::Strong)]
    #[case("i", DocTag::Emph)]
    #[case("em", DocTag::Emph)]
    #[case("a", DocTag::Link)]
    #[case("pre", DocTag::Blockcode)]
    #[case("H2", DocTag::H2)]
    #[case(" li ", DocTag::ListItem)]
    fn classifies_semantic_tags(#[case] tag: &str, #[case] expected: DocTag) {
        assert_eq!(classify(tag), Some(expected));
    }

    #[rstest]
    #[case("div")]
    #[case("span")]
    #[case("table")]
    #[case("")]
    fn layout_tags_are_transparent(#[case] tag: &str) {
        assert_eq!(classify(tag), None);
    }

    #[test]
    fn classification_is_stable() {
        for tag in ["p", "a", "span", "h3"] {
            assert_eq!(classify(tag), classify(tag));
        }
    }

    #[rstest]
    #[case("style", true)]
    #[case("SCRIPT", true)]
    #[case("p", false)]
    #[case("span", false)]
    fn opaque_tags(#[case] tag: &str, #[case] expected: bool) {
        assert_eq!(is_opaque(tag), expected);
    }
}
