//! Open Library search TUI (bookfind)
//!
//! Terminal interface for searching the Open Library book catalog with
//! incremental "load more" pagination.
//!
//! Organized as a Pure Core / Impure Shell: `model` and `state` hold
//! pure data and transitions, `api` and `view` perform the I/O.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
