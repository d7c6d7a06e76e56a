//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `KeyBindings`. Printable characters are not routed through bindings;
/// they always edit the query input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Submit the current query as a new search. Default: Enter
    SubmitSearch,
    /// Fetch the next page and append it to the results. Default: Ctrl+n
    LoadMore,
    /// Clear the query input. Default: Ctrl+u
    ClearQuery,

    /// Move the card selection up one row. Default: ↑
    SelectUp,
    /// Move the card selection down one row. Default: ↓
    SelectDown,
    /// Move the card selection left within a row. Default: ←
    SelectLeft,
    /// Move the card selection right within a row. Default: →
    SelectRight,
    /// Jump selection to the first card. Default: Home
    SelectFirst,
    /// Jump selection to the last loaded card. Default: End
    SelectLast,

    /// Exit the application. Default: Esc/Ctrl+c
    Quit,
}
