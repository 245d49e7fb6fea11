//! Selection tracker.
//!
//! An ordered set of selected people, keyed by slug. Order of addition is
//! preserved for the caption line; membership is always a keyed lookup,
//! never reference identity.

use crate::model::{PersonRecord, PersonSlug, PersonStore};

/// Placeholder caption shown when nothing is selected.
pub const EMPTY_CAPTION: &str = "---";

/// The user's chosen subset of records, order of addition preserved.
///
/// All operations are idempotent under repetition: adding a present
/// record and removing an absent one are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ordered: Vec<PersonSlug>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a record with the same slug is selected.
    pub fn is_selected(&self, person: &PersonRecord) -> bool {
        self.contains(&person.slug)
    }

    /// True iff the slug is selected.
    pub fn contains(&self, slug: &PersonSlug) -> bool {
        self.ordered.contains(slug)
    }

    /// Append the record to the selection if absent.
    ///
    /// Returns true if the selection changed. Never duplicates.
    pub fn add(&mut self, person: &PersonRecord) -> bool {
        if self.contains(&person.slug) {
            return false;
        }
        self.ordered.push(person.slug.clone());
        true
    }

    /// Remove the record with a matching slug from the selection.
    ///
    /// Returns true if the selection changed; no-op if absent.
    pub fn remove(&mut self, person: &PersonRecord) -> bool {
        let before = self.ordered.len();
        self.ordered.retain(|slug| slug != &person.slug);
        self.ordered.len() != before
    }

    /// Toggle membership of a record. Returns true if it is now selected.
    pub fn toggle(&mut self, person: &PersonRecord) -> bool {
        if self.remove(person) {
            false
        } else {
            self.add(person);
            true
        }
    }

    /// Number of selected people.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Selected slugs in order of addition.
    pub fn slugs(&self) -> &[PersonSlug] {
        &self.ordered
    }

    /// Joined names of all selected people in order of addition, or the
    /// placeholder when empty. Drives the caption line above the table.
    pub fn caption(&self, store: &PersonStore) -> String {
        if self.ordered.is_empty() {
            return EMPTY_CAPTION.to_string();
        }
        self.ordered
            .iter()
            .filter_map(|slug| store.get(slug))
            .map(|person| person.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
