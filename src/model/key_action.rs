//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Query editing while search focus is active is handled separately by
/// the shell (printable characters go to the query, not through bindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement
    /// Move the cursor up one visible row. Default: k/↑
    CursorUp,
    /// Move the cursor down one visible row. Default: j/↓
    CursorDown,
    /// Jump to the first visible row. Default: g/Home
    CursorTop,
    /// Jump to the last visible row. Default: G/End
    CursorBottom,

    // Selection
    /// Add or remove the cursor row from the selection set. Default: Enter/Space
    ToggleSelect,

    // Search
    /// Move focus to the search input. Default: //Ctrl+f
    StartSearch,
    /// Leave search focus, keeping the query. Default: Enter (in search focus)
    SubmitSearch,
    /// Leave search focus and clear the query. Default: Esc (in search focus)
    CancelSearch,

    // Sex filter
    /// Show all people regardless of sex. Default: a
    FilterAll,
    /// Show only male people. Default: m
    FilterMale,
    /// Show only female people. Default: f
    FilterFemale,

    // Sorting
    /// Sort by name; pressing again on the active field clears it. Default: n
    SortByName,
    /// Sort by sex code; pressing again on the active field clears it. Default: s
    SortBySex,
    /// Sort by birth year; pressing again on the active field clears it. Default: b
    SortByBorn,
    /// Flip sort order between ascending and descending. Default: o
    ToggleOrder,

    // Application
    /// Restore query, sex filter, and sort field to defaults. Default: r
    Reset,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
