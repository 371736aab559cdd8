use crate::io::{Fetch, RetrievalError, ValidationError, WikiUrl};
use crate::models::File;
use crate::parsing::parse_html;

/// Why an import produced no document.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Validates a URL, fetches the article and converts it to blocks.
#[derive(Debug, Clone)]
pub struct Importer<F> {
    fetcher: F,
}

impl<F: Fetch> Importer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Validation happens before the fetcher is touched; a rejected URL
    /// never reaches the network.
    pub fn import(&self, url: Option<&str>) -> Result<File, ImportError> {
        let url = WikiUrl::parse(url)?;
        let html = self.fetcher.fetch(&url)?;
        let file = parse_html(&html);
        log::info!("Imported {} block(s) from {url}", file.blocks.len());
        Ok(file)
    }
}
