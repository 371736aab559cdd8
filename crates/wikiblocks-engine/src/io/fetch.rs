use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use super::{RetrievalError, WikiUrl};

/// Obtains the raw HTML of an article.
pub trait Fetch {
    fn fetch(&self, url: &WikiUrl) -> Result<String, RetrievalError>;
}

/// Fetches articles over HTTP(S). Retries are left to the caller.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(RetrievalError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &WikiUrl) -> Result<String, RetrievalError> {
        log::info!("Fetching {url}");
        let request_error = |source| RetrievalError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.as_str()).send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status,
            });
        }
        response.text().map_err(request_error)
    }
}

/// Reads a saved HTML page from disk.
pub fn read_html_file(path: &Path) -> Result<String, RetrievalError> {
    fs::read_to_string(path).map_err(|source| RetrievalError::Io {
        path: path.to_path_buf(),
        source,
    })
}
