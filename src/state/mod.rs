//! Pure UI state: view filter/sort state, selection tracking, app state.
//!
//! Everything here is pure data with pure transitions. The impure shell
//! in `view/` owns the event loop and calls into this module.

pub mod app_state;
pub mod engine;
pub mod selection;
pub mod view_state;

pub use app_state::{AppState, FocusPane};
pub use engine::compute_visible;
pub use selection::{SelectionSet, EMPTY_CAPTION};
pub use view_state::{SexFilter, SortField, SortOrder, ViewState};
