//! View filter/sort engine.
//!
//! Pure function from (records, view state) to the ordered visible list.
//! Never mutates the store, no side effects, deterministic for identical
//! inputs.

use crate::model::PersonRecord;
use crate::state::view_state::{SexFilter, SortField, SortOrder, ViewState};

/// Compute the visible list for the current view state.
///
/// Pipeline:
/// 1. Normalize the query (trim + lowercase); if non-empty, keep records
///    whose lowercased name contains it as a substring.
/// 2. If the sex filter is not `All`, keep records of that sex.
/// 3. If a sort field is active, stable-sort ascending by that field.
///    Ties preserve prior relative order.
/// 4. If the order is `Desc`, reverse the whole sequence. Reversal applies
///    even with no sort field active.
///
/// Returns borrows into the store; the input is never mutated.
pub fn compute_visible<'a>(
    records: &'a [PersonRecord],
    state: &ViewState,
) -> Vec<&'a PersonRecord> {
    let normalized_query = state.query.trim().to_lowercase();

    let mut visible: Vec<&PersonRecord> = records
        .iter()
        .filter(|person| {
            normalized_query.is_empty() || person.name.to_lowercase().contains(&normalized_query)
        })
        .filter(|person| match state.sex_filter {
            SexFilter::All => true,
            SexFilter::Male => person.sex == crate::model::Sex::Male,
            SexFilter::Female => person.sex == crate::model::Sex::Female,
        })
        .collect();

    match state.sort_field {
        SortField::None => {}
        SortField::Name => {
            // Case-insensitive; Vec::sort_by is stable so ties keep
            // their prior relative order.
            visible.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortField::Sex => visible.sort_by_key(|person| person.sex),
        SortField::Born => visible.sort_by_key(|person| person.born),
    }

    if state.sort_order == SortOrder::Desc {
        visible.reverse();
    }

    visible
}

// ===== Tests =====

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
