//! Filter/sort view state and its transitions.
//!
//! ViewState is pure data driving what the engine makes visible. All
//! transitions are plain methods returning nothing; recomputation happens
//! in the shell's draw cycle after every event.

use std::fmt;

// ===== SexFilter =====

/// Sex filter control state. Sum type - exactly one.
///
/// The three states are mutually exclusive, mirroring the three filter
/// buttons in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SexFilter {
    /// Show everyone regardless of sex.
    #[default]
    All,
    /// Show only male people.
    Male,
    /// Show only female people.
    Female,
}

impl fmt::Display for SexFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SexFilter::All => "all",
            SexFilter::Male => "m",
            SexFilter::Female => "f",
        };
        f.write_str(label)
    }
}

// ===== SortField =====

/// Active sort column. `None` means dataset order is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// No sorting; identity order.
    #[default]
    None,
    /// Sort by name, case-insensitively.
    Name,
    /// Sort by sex code (f before m).
    Sex,
    /// Sort by birth year, numerically.
    Born,
}

impl SortField {
    /// Parse a configuration string, degrading unrecognized values to `None`.
    ///
    /// Malformed sort fields are not an error anywhere in the system; they
    /// fall back to identity order.
    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "name" => SortField::Name,
            "sex" => SortField::Sex,
            "born" => SortField::Born,
            _ => SortField::None,
        }
    }
}

// ===== SortOrder =====

/// Direction applied after the stable ascending sort.
///
/// Descending is implemented as a reversal of the ascending result, not as
/// an inverted comparator, so equal-key runs appear last-tie-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending (the stable sort's natural output).
    #[default]
    Asc,
    /// Descending: the ascending output reversed in full.
    Desc,
}

impl SortOrder {
    /// Parse a configuration string, degrading unrecognized values to `Asc`.
    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    /// The opposite order.
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

// ===== ViewState =====

/// The current filter/sort configuration driving what is visible.
///
/// Defaults: empty query, `All` sex filter, no sort field, ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Raw search query as typed; normalized (trim + lowercase) by the engine.
    pub query: String,
    /// Which sexes are visible.
    pub sex_filter: SexFilter,
    /// Which column drives the stable sort.
    pub sort_field: SortField,
    /// Direction applied to the sorted result.
    pub sort_order: SortOrder,
}

impl ViewState {
    /// Append a character to the query (live search editing).
    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    /// Delete the last character of the query; no-op when empty.
    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// Clear the query entirely.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Set the sex filter.
    pub fn set_sex_filter(&mut self, filter: SexFilter) {
        self.sex_filter = filter;
    }

    /// Activate a sort column. Activating the already-active column clears
    /// the sort back to identity order.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_field = SortField::None;
        } else {
            self.sort_field = field;
        }
    }

    /// Flip the sort order between ascending and descending.
    pub fn toggle_order(&mut self) {
        self.sort_order = self.sort_order.flipped();
    }

    /// Restore query, sex filter, and sort field to defaults.
    ///
    /// Sort order is left untouched; only `toggle_order` changes it.
    pub fn reset(&mut self) {
        self.query.clear();
        self.sex_filter = SexFilter::All;
        self.sort_field = SortField::None;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
