//! Error types for the bookfind application.
//!
//! Hierarchical taxonomy using `thiserror`, composing via `?` and
//! `From` conversions.
//!
//! Fetch failures are non-fatal: they set the status-line error text
//! for the attempt and leave the result list untouched. Config,
//! logging, and terminal errors are fatal and propagate to `main`.

use thiserror::Error;

/// The single user-visible message shown for any fetch failure.
///
/// Network and parse failures are deliberately collapsed: the user can
/// only resubmit, so distinguishing them buys nothing on screen. The
/// full detail still goes to the log file.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch books. Try again.";

/// Top-level application error returned from main application logic.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog request failed. Non-fatal at the state level; fatal
    /// only if surfaced outside a request lifecycle.
    #[error("Failed to fetch from catalog: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error (crossterm/ratatui layer).
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure of a single catalog request.
///
/// Exactly one attempt is made per request; there is no retry state.
/// All variants map to [`FETCH_FAILURE_MESSAGE`] in the UI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, read).
    #[error("Network error: {reason}")]
    Network {
        /// Underlying transport error, stringified at the boundary.
        reason: String,
    },

    /// The endpoint answered with a non-successful HTTP status.
    #[error("Unexpected response status: {status}")]
    Status {
        /// HTTP status code returned by the catalog endpoint.
        status: u16,
    },

    /// The response body could not be decoded as a search result.
    #[error("Malformed response body: {reason}")]
    Parse {
        /// Decoder error, stringified at the boundary.
        reason: String,
    },
}

impl FetchError {
    /// The fixed message shown in the status line for this failure.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}
