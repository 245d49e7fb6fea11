//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. All state
//! transitions are pure functions following the Elm architecture; the
//! shell recomputes the visible list and redraws after every event.

use crate::model::{KeyAction, PersonRecord, PersonStore};
use crate::state::engine::compute_visible;
use crate::state::selection::SelectionSet;
use crate::state::view_state::{SexFilter, SortField, ViewState};
use tracing::debug;

// ===== FocusPane =====

/// Which control has keyboard focus. Sum type - exactly one.
///
/// # State Transitions
///
/// - Table → Search (when the user activates search with `/` or Ctrl+F)
/// - Search → Table (on Enter, keeping the query, or Esc, clearing it)
///
/// While Search has focus, printable characters edit the query live and
/// the engine recomputes on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The people table has focus; bindings drive cursor and filters.
    #[default]
    Table,
    /// The search input has focus; keystrokes edit the query.
    Search,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// Contains the immutable record store plus all mutable UI state: the
/// filter/sort view state, the selection set, keyboard focus, the cursor
/// position within the visible list, and the help overlay flag.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The static record store. Read-only for the process lifetime;
    /// all other fields are UI state.
    store: PersonStore,

    /// Current filter/sort configuration.
    pub view: ViewState,

    /// Selected people, order of addition preserved.
    pub selection: SelectionSet,

    /// Which control receives keyboard input.
    pub focus: FocusPane,

    /// Cursor row index into the visible list.
    /// Invariant: `cursor < visible().len()` whenever the list is non-empty,
    /// re-established by `clamp_cursor` after every filter/sort change.
    pub cursor: usize,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Create new AppState with default UI state around a loaded store.
    pub fn new(store: PersonStore) -> Self {
        Self {
            store,
            view: ViewState::default(),
            selection: SelectionSet::new(),
            focus: FocusPane::Table,
            cursor: 0,
            help_visible: false,
        }
    }

    /// Create new AppState with a preconfigured view (from CLI/config).
    pub fn with_view(store: PersonStore, view: ViewState) -> Self {
        let mut state = Self::new(store);
        state.view = view;
        state
    }

    /// Get immutable reference to the record store.
    pub fn store(&self) -> &PersonStore {
        &self.store
    }

    /// The ordered visible list for the current view state.
    pub fn visible(&self) -> Vec<&PersonRecord> {
        compute_visible(self.store.records(), &self.view)
    }

    /// The record under the cursor, if any row is visible.
    pub fn cursor_record(&self) -> Option<&PersonRecord> {
        self.visible().get(self.cursor).copied()
    }

    /// Caption line content: joined selected names or the placeholder.
    pub fn caption(&self) -> String {
        self.selection.caption(&self.store)
    }

    /// Apply a domain action. Returns true if the application should quit.
    ///
    /// Query editing while Search has focus does not go through here; the
    /// shell feeds those keystrokes to `handle_search_key`.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        debug!(?action, "Applying key action");
        match action {
            KeyAction::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            KeyAction::CursorDown => {
                let max = self.visible().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(max);
            }
            KeyAction::CursorTop => self.cursor = 0,
            KeyAction::CursorBottom => {
                self.cursor = self.visible().len().saturating_sub(1);
            }
            KeyAction::ToggleSelect => {
                if let Some(record) = self.cursor_record().cloned() {
                    self.selection.toggle(&record);
                }
            }
            KeyAction::StartSearch => self.focus = FocusPane::Search,
            KeyAction::SubmitSearch => self.focus = FocusPane::Table,
            KeyAction::CancelSearch => {
                self.view.clear_query();
                self.focus = FocusPane::Table;
                self.clamp_cursor();
            }
            KeyAction::FilterAll => self.set_sex_filter(SexFilter::All),
            KeyAction::FilterMale => self.set_sex_filter(SexFilter::Male),
            KeyAction::FilterFemale => self.set_sex_filter(SexFilter::Female),
            KeyAction::SortByName => self.toggle_sort(SortField::Name),
            KeyAction::SortBySex => self.toggle_sort(SortField::Sex),
            KeyAction::SortByBorn => self.toggle_sort(SortField::Born),
            KeyAction::ToggleOrder => self.view.toggle_order(),
            KeyAction::Reset => {
                self.view.reset();
                self.clamp_cursor();
            }
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => return true,
        }
        false
    }

    /// Handle a keystroke while the search input has focus.
    ///
    /// Printable characters edit the query live; Backspace deletes the
    /// last character. The cursor is re-clamped since the visible list
    /// shrinks or grows with every edit.
    pub fn handle_search_char(&mut self, ch: char) {
        self.view.push_query_char(ch);
        self.clamp_cursor();
    }

    /// Delete the last query character while the search input has focus.
    pub fn handle_search_backspace(&mut self) {
        self.view.pop_query_char();
        self.clamp_cursor();
    }

    fn set_sex_filter(&mut self, filter: SexFilter) {
        self.view.set_sex_filter(filter);
        self.clamp_cursor();
    }

    fn toggle_sort(&mut self, field: SortField) {
        self.view.toggle_sort(field);
        // Sorting reorders but never shrinks the list; the cursor index
        // stays valid and keeps pointing at the same row position.
    }

    /// Re-establish `cursor < visible().len()` after a filter change.
    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
