//! Domain model types (pure data).

pub mod book;
pub mod error;
pub mod key_action;

pub use book::{Book, SearchResults, PAGE_SIZE};
pub use error::{AppError, FetchError, FETCH_FAILURE_MESSAGE};
pub use key_action::KeyAction;
