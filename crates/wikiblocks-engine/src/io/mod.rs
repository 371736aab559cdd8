pub mod fetch;
pub mod url;

use std::path::PathBuf;

pub use fetch::{Fetch, HttpFetcher, read_html_file};
pub use url::WikiUrl;

/// The input locator is missing or is not a Wikipedia article URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing the `url` field in the import request")]
    Missing,
    #[error(
        "The provided `url` did not appear to match the format https://LANGUAGE.wikipedia.org/wiki/TOPIC. Got url: {0}"
    )]
    Malformed(String),
}

/// The page could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Failed to fetch {url}: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("Failed to fetch {url}: server returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
