//! Query input editing (pure state transitions).
//!
//! Handles text input for the query bar. All functions are pure
//! mutations of `AppState.query` - no side effects, testable without
//! the TUI.
//!
//! Editing the query never triggers a fetch; only an explicit submit
//! does. The query is simple end-of-line editing (no cursor movement
//! within the text), matching the single input field it backs.

use crate::state::AppState;

/// Append a typed character to the query.
pub fn push_char(state: &mut AppState, ch: char) {
    state.query.push(ch);
}

/// Delete the last character of the query, if any.
pub fn backspace(state: &mut AppState) {
    state.query.pop();
}

/// Clear the whole query.
pub fn clear(state: &mut AppState) {
    state.query.clear();
}
