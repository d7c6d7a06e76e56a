//! Application state and pure transitions.

pub mod app_state;
pub mod query_input;

pub use app_state::{AppState, FetchMode, FetchOutcome, FetchRequest};
