pub mod importer;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use importer::{ImportError, Importer};
pub use io::{Fetch, HttpFetcher, RetrievalError, ValidationError, WikiUrl, read_html_file};
pub use models::*;
pub use parsing::{ConversionWarning, build, classify, convert, parse_html};
