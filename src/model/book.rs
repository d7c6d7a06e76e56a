//! Catalog record types.
//!
//! `Book` is a read-only projection of one Open Library search record.
//! All fields are optional on the wire; missing fields are not errors
//! and render as explicit placeholders.

use serde::Deserialize;

/// Maximum number of records taken from one fetched page.
///
/// The API may return more docs per response; anything beyond this cap
/// is discarded before the records reach the result list.
pub const PAGE_SIZE: usize = 20;

/// One book record from the catalog search response.
///
/// Sourced verbatim from the API via serde; no local derivation or
/// validation beyond presence checks. Every field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    /// Book title. Absent in rare records; rendered as "Untitled".
    #[serde(default)]
    pub title: Option<String>,

    /// Author names in catalog order.
    #[serde(default)]
    pub author_name: Vec<String>,

    /// Year of first publication.
    #[serde(default)]
    pub first_publish_year: Option<i32>,

    /// Publishers; only the first entry is displayed.
    #[serde(default)]
    pub publisher: Vec<String>,

    /// ISBNs; only the first entry is displayed.
    #[serde(default)]
    pub isbn: Vec<String>,

    /// Numeric cover-image identifier for the covers endpoint.
    #[serde(default)]
    pub cover_i: Option<u64>,
}

impl Book {
    /// Title for display, with the "Untitled" fallback.
    pub fn title_display(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Comma-joined author list, or "Unknown Author" when empty.
    pub fn authors_display(&self) -> String {
        if self.author_name.is_empty() {
            "Unknown Author".to_string()
        } else {
            self.author_name.join(", ")
        }
    }

    /// First-publish year as text, or "N/A".
    pub fn year_display(&self) -> String {
        self.first_publish_year
            .map_or_else(|| "N/A".to_string(), |y| y.to_string())
    }

    /// First publisher, or "N/A".
    pub fn publisher_display(&self) -> &str {
        self.publisher.first().map_or("N/A", String::as_str)
    }

    /// First ISBN, or "N/A".
    pub fn isbn_display(&self) -> &str {
        self.isbn.first().map_or("N/A", String::as_str)
    }
}

/// Wire envelope for the catalog search response.
///
/// Only the `docs` array is consumed; a response without the field
/// decodes as an empty page rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    /// Matching records for the requested page.
    #[serde(default)]
    pub docs: Vec<Book>,
}
