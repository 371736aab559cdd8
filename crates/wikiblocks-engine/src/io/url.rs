use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::ValidationError;

const WIKI_PATH: &str = "/wiki/";

fn wikipedia_url_regex() -> &'static Regex {
    static WIKIPEDIA_URL: OnceLock<Regex> = OnceLock::new();
    WIKIPEDIA_URL.get_or_init(|| {
        Regex::new(r"^https://[A-Za-z]+\.wikipedia\.org/wiki/.+").expect("Invalid Wikipedia URL regex")
    })
}

/// A validated Wikipedia article URL (`https://LANGUAGE.wikipedia.org/wiki/TOPIC`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiUrl(String);

impl WikiUrl {
    /// Validates a locator before anything is fetched.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace; the
    /// stored URL is the trimmed input with its original casing.
    pub fn parse(url: Option<&str>) -> Result<Self, ValidationError> {
        let url = url.ok_or(ValidationError::Missing)?;
        let trimmed = url.trim();
        if !wikipedia_url_regex().is_match(&trimmed.to_lowercase()) {
            return Err(ValidationError::Malformed(url.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The article part of the path, without query string or fragment.
    pub fn topic(&self) -> &str {
        let start = self
            .0
            .to_ascii_lowercase()
            .find(WIKI_PATH)
            .map_or(0, |idx| idx + WIKI_PATH.len());
        let rest = &self.0[start..];
        rest.split(['?', '#']).next().unwrap_or(rest)
    }
}

impl FromStr for WikiUrl {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for WikiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WikiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
