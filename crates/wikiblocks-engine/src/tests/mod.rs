//! Shared helpers for unit tests.

use scraper::{ElementRef, Html, Selector};

/// Parses an HTML fragment the way a page body would be parsed.
pub fn parse_fragment(html: &str) -> Html {
    Html::parse_fragment(html)
}

/// First element matching a CSS selector. Panics when nothing matches.
pub fn select_first<'a>(html: &'a Html, selector: &str) -> ElementRef<'a> {
    let selector = Selector::parse(selector).expect("valid selector");
    html.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("no element matches {selector:?}"))
}
