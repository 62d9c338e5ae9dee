//! HTTP client for the paginated top-headlines endpoint.
//!
//! One request per page, no retries and no backoff: the endpoint is polled
//! interactively and the controller treats any failure as terminal, so a
//! failed page is surfaced immediately rather than papered over.

use crate::feed::model::{Article, HeadlinesPage};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Request timeout for a single page fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while fetching a page of headlines.
///
/// The feed controller collapses all of these into a single sticky failure
/// flag; the distinction exists for logging and tests only.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Request exceeded the 30-second timeout
    #[error("Request timed out")]
    Timeout,
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body was not a valid headlines page
    #[error("Malformed response body: {0}")]
    Parse(String),
}

/// Client for a NewsAPI-compatible top-headlines endpoint.
///
/// Holds the base endpoint, the country filter, and the access key. The key
/// travels as the `apiKey` query parameter, matching what the endpoint
/// expects, and is wrapped in [`SecretString`] so it never leaks through
/// `Debug` output or logs.
#[derive(Clone)]
pub struct HeadlinesClient {
    http: reqwest::Client,
    endpoint: Url,
    country: String,
    api_key: SecretString,
}

impl std::fmt::Debug for HeadlinesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlinesClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("country", &self.country)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HeadlinesClient {
    /// Build a client against `endpoint` (scheme + host, e.g.
    /// `https://newsapi.org`).
    pub fn new(endpoint: &str, country: &str, api_key: SecretString) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint,
            country: country.to_string(),
            api_key,
        })
    }

    /// Fetch one page of headlines.
    ///
    /// Returns the page's article sequence; an empty vector means the
    /// endpoint has no more data at this cursor (the envelope may omit the
    /// `articles` field entirely, which reads the same way).
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] / [`FetchError::Timeout`] - transport failure
    /// - [`FetchError::HttpStatus`] - non-2xx response
    /// - [`FetchError::Parse`] - body is not a valid headlines envelope
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<Article>, FetchError> {
        let url = self
            .endpoint
            .join("/v2/top-headlines")
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!(page = page, country = %self.country, "Fetching headlines page");

        let page_param = page.to_string();
        let response = tokio::time::timeout(
            REQUEST_TIMEOUT,
            self.http
                .get(url)
                .query(&[
                    ("country", self.country.as_str()),
                    ("page", page_param.as_str()),
                    ("apiKey", self.api_key.expose_secret()),
                ])
                .send(),
        )
        .await
        .map_err(|_| FetchError::Timeout)?
        .map_err(FetchError::Network)?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        let envelope: HeadlinesPage =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(envelope.articles)
    }
}
