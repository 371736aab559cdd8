use scraper::{ElementRef, Node};

/// A child of a markup element as seen by the converter.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a, N> {
    Element(N),
    Text(&'a str),
}

/// Read-only view of an element in a parsed markup tree.
///
/// Only elements and text runs are exposed; comments, doctypes and
/// processing instructions never reach the converter.
pub trait MarkupNode<'a>: Copy + 'a {
    /// The element's tag name as written in the tree (HTML parsers lowercase it).
    fn tag_name(&self) -> &'a str;

    /// Attribute lookup. Missing attributes are `None`, never an error.
    fn attr(&self, name: &str) -> Option<&'a str>;

    /// Element and text children in document order.
    fn children(self) -> impl Iterator<Item = Child<'a, Self>>;

    /// Whether the `class` attribute contains `class` as a whitespace-separated token.
    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Depth-first, document-order search of the strict descendants of this node.
    fn find_descendant<P>(self, pred: P) -> Option<Self>
    where
        P: Fn(&Self) -> bool,
    {
        find_descendant_by(self, &pred)
    }
}

fn find_descendant_by<'a, N, P>(node: N, pred: &P) -> Option<N>
where
    N: MarkupNode<'a>,
    P: Fn(&N) -> bool,
{
    for child in node.children() {
        if let Child::Element(el) = child {
            if pred(&el) {
                return Some(el);
            }
            if let Some(found) = find_descendant_by(el, pred) {
                return Some(found);
            }
        }
    }
    None
}

impl<'a> MarkupNode<'a> for ElementRef<'a> {
    fn tag_name(&self) -> &'a str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn children(self) -> impl Iterator<Item = Child<'a, Self>> {
        (*self).children().filter_map(|node| match node.value() {
            Node::Text(text) => Some(Child::Text(&**text)),
            Node::Element(_) => ElementRef::wrap(node).map(Child::Element),
            _ => None,
        })
    }
}
