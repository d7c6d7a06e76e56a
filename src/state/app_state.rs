//! Application state and transitions.
//!
//! `AppState` is the root state type containing all UI state.
//! All state transitions are pure functions following the Elm
//! architecture: a transition may *describe* a fetch by returning a
//! [`FetchRequest`], but never performs I/O itself. The shell layer
//! dispatches the request and later feeds the [`FetchOutcome`] back
//! through [`AppState::apply_outcome`].

use crate::model::{Book, FetchError, PAGE_SIZE};

// ===== Fetch effect descriptions =====

/// Whether a fetched page replaces the result list or appends to it.
///
/// Carried explicitly on every request rather than inferred from the
/// page number, so a new search for page 1 and a (hypothetical)
/// append of page 1 can never be confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// New search: the delivered docs become the whole result list.
    Replace,
    /// Load-more: the delivered docs extend the existing list.
    Append,
}

/// Description of one catalog fetch to perform.
///
/// Produced by [`AppState::begin_search`] and
/// [`AppState::begin_load_more`]; consumed by the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Trimmed, non-empty query text.
    pub query: String,
    /// 1-based page number to request.
    pub page: u32,
    /// How the delivered docs combine with the current list.
    pub mode: FetchMode,
}

/// Completion of one catalog fetch, delivered back to the state layer.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// The request this outcome answers.
    pub request: FetchRequest,
    /// Docs for the requested page, or the failure.
    pub result: Result<Vec<Book>, FetchError>,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Request state machine
///
/// Each request lifecycle is Idle → Loading → {Success, Failure} →
/// Idle. `loading` is true strictly between a `begin_*` transition and
/// the matching `apply_outcome`; there is no retry state.
///
/// # Concurrency caveat
///
/// Exactly one request is expected outstanding at a time in the
/// intended flow, but this is not enforced: a late outcome from a
/// superseded request is still applied, with no ordering guarantee.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Query text, updated on every keystroke.
    pub query: String,

    /// Ordered result list; at most [`PAGE_SIZE`] entries join per
    /// fetched page. No uniqueness beyond positional identity.
    books: Vec<Book>,

    /// 1-based page number of the most recently requested page.
    /// Starts at 1 and increments by one per load-more.
    page: u32,

    /// True iff the most recently fetched page returned at least one
    /// doc. Heuristic: assumes the API returns full pages until
    /// exhausted, so the worst case is one trailing empty append.
    has_more: bool,

    /// True only while a request is outstanding.
    loading: bool,

    /// Status-line error text; set on failure, cleared when a new
    /// attempt starts.
    error: Option<String>,

    /// Index of the highlighted card, clamped to the list length.
    selected: usize,
}

impl AppState {
    /// Create a fresh state with empty query and no results.
    pub fn new() -> Self {
        Self::default()
    }

    // ----- read-only projections -----

    /// The loaded result list.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Page number of the most recent request (1-based; 0 before the
    /// first search).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether another page is likely to contain results. The
    /// load-more affordance is shown only when this is true.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a request is currently outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Current error text, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Index of the highlighted card.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the load-more affordance should be offered to the user.
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.loading
    }

    // ----- transitions -----

    /// Start a new search for the current query.
    ///
    /// Empty or whitespace-only queries are a no-op: no request is
    /// described and no state changes. Otherwise resets the page
    /// counter to 1, marks the state loading, clears any previous
    /// error, and returns the page-1 Replace request.
    pub fn begin_search(&mut self) -> Option<FetchRequest> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        self.page = 1;
        self.loading = true;
        self.error = None;
        Some(FetchRequest {
            query: query.to_string(),
            page: 1,
            mode: FetchMode::Replace,
        })
    }

    /// Request the page after the last requested one.
    ///
    /// Returns `None` when the affordance would be hidden: no further
    /// results expected, a request already outstanding, or nothing to
    /// search for. This mirrors the UI guard; it does not serialize a
    /// raced concurrent call at the transport level.
    pub fn begin_load_more(&mut self) -> Option<FetchRequest> {
        let query = self.query.trim();
        if query.is_empty() || !self.has_more || self.loading {
            return None;
        }
        self.page += 1;
        self.loading = true;
        self.error = None;
        Some(FetchRequest {
            query: query.to_string(),
            page: self.page,
            mode: FetchMode::Append,
        })
    }

    /// Apply a completed fetch.
    ///
    /// Success replaces or appends per the request's [`FetchMode`],
    /// taking at most [`PAGE_SIZE`] docs; `has_more` is recomputed
    /// from the pre-truncation doc count. Failure sets the fixed
    /// error message and leaves the result list unchanged. Loading is
    /// cleared either way.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome.result {
            Ok(mut docs) => {
                self.has_more = !docs.is_empty();
                docs.truncate(PAGE_SIZE);
                match outcome.request.mode {
                    FetchMode::Replace => {
                        self.books = docs;
                        self.selected = 0;
                    }
                    FetchMode::Append => {
                        self.books.extend(docs);
                    }
                }
                self.clamp_selection();
            }
            Err(err) => {
                self.error = Some(err.user_message().to_string());
            }
        }
        self.loading = false;
    }

    // ----- selection -----

    /// Move the card selection by `delta`, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.books.is_empty() {
            self.selected = 0;
            return;
        }
        let max = self.books.len() - 1;
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, max as isize) as usize;
    }

    /// Jump selection to the first card.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump selection to the last loaded card.
    pub fn select_last(&mut self) {
        self.selected = self.books.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.books.len() {
            self.selected = self.books.len().saturating_sub(1);
        }
    }
}
