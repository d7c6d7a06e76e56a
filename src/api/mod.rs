//! Catalog API access (impure shell).
//!
//! Defines the [`CatalogClient`] seam the rest of the application
//! talks to, plus the `reqwest`-backed implementation against the
//! Open Library search endpoint. Test doubles implement the trait.

use crate::model::{Book, FetchError, SearchResults};
use tracing::debug;

pub mod worker;

pub use worker::spawn_fetch;

/// Queries the book catalog for one page of title matches.
///
/// Implementations make exactly one attempt per call: no retry, no
/// timeout beyond the transport's own behavior, no caching.
pub trait CatalogClient: Send + Sync {
    /// Fetch the records matching `query` on the 1-based `page`.
    ///
    /// Returns the page's records (possibly empty) on success.
    ///
    /// # Errors
    ///
    /// [`FetchError::Network`] for transport failures,
    /// [`FetchError::Status`] for non-successful HTTP statuses,
    /// [`FetchError::Parse`] for undecodable bodies.
    fn search(&self, query: &str, page: u32) -> Result<Vec<Book>, FetchError>;
}

/// `reqwest::blocking`-backed [`CatalogClient`] for the Open Library
/// search endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    search_url: String,
    http: reqwest::blocking::Client,
}

impl HttpCatalogClient {
    /// Create a client targeting `search_url`
    /// (e.g. `https://openlibrary.org/search.json`).
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl CatalogClient for HttpCatalogClient {
    fn search(&self, query: &str, page: u32) -> Result<Vec<Book>, FetchError> {
        let url = search_url(&self.search_url, query, page)?;
        debug!(%url, "fetching catalog page");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| FetchError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let results: SearchResults = response.json().map_err(|e| {
            if e.is_decode() {
                FetchError::Parse {
                    reason: e.to_string(),
                }
            } else {
                FetchError::Network {
                    reason: e.to_string(),
                }
            }
        })?;

        Ok(results.docs)
    }
}

/// Build the search request URL with URL-encoded query parameters.
fn search_url(base: &str, query: &str, page: u32) -> Result<reqwest::Url, FetchError> {
    reqwest::Url::parse_with_params(base, &[("title", query), ("page", &page.to_string())])
        .map_err(|e| FetchError::Network {
            reason: format!("invalid search URL {base:?}: {e}"),
        })
}

/// Build the cover-image URL for a numeric cover identifier.
///
/// `base` is the covers endpoint prefix
/// (e.g. `https://covers.openlibrary.org/b/id`). Records without a
/// cover identifier render the "No Image" placeholder instead of a
/// URL.
pub fn cover_url(base: &str, cover_id: u64) -> String {
    format!("{}/{cover_id}-M.jpg", base.trim_end_matches('/'))
}
