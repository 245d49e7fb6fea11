//! Immutable person record store.
//!
//! The store is loaded once at startup and read-only thereafter. All
//! visible-list computation borrows from it; nothing ever mutates it.

use crate::model::person::{PersonRecord, PersonSlug};
use thiserror::Error;

/// The static, read-only source collection of person entries.
///
/// Construction validates that slugs are unique; identity within the
/// application is always the slug, never positional or reference identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonStore {
    records: Vec<PersonRecord>,
}

/// Error returned when a store fails validation at construction.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Two records share the same slug.
    #[error("Duplicate person slug in dataset: {0}")]
    DuplicateSlug(String),
}

impl PersonStore {
    /// Build a store from preloaded records, rejecting duplicate slugs.
    pub fn new(records: Vec<PersonRecord>) -> Result<Self, StoreError> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.slug.clone()) {
                return Err(StoreError::DuplicateSlug(record.slug.to_string()));
            }
        }
        Ok(Self { records })
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by slug.
    pub fn get(&self, slug: &PersonSlug) -> Option<&PersonRecord> {
        self.records.iter().find(|r| &r.slug == slug)
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::Sex;

    fn person(slug: &str, name: &str, sex: Sex, born: u16) -> PersonRecord {
        PersonRecord {
            slug: PersonSlug::new(slug).unwrap(),
            name: name.to_string(),
            sex,
            born,
        }
    }

    #[test]
    fn store_preserves_dataset_order() {
        let store = PersonStore::new(vec![
            person("b-1990", "Bill", Sex::Male, 1990),
            person("a-1985", "Anna", Sex::Female, 1985),
        ])
        .unwrap();

        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bill", "Anna"]);
    }

    #[test]
    fn store_rejects_duplicate_slugs() {
        let result = PersonStore::new(vec![
            person("same-1990", "Bill", Sex::Male, 1990),
            person("same-1990", "Anna", Sex::Female, 1985),
        ]);
        assert!(matches!(result, Err(StoreError::DuplicateSlug(_))));
    }

    #[test]
    fn get_finds_record_by_slug() {
        let store = PersonStore::new(vec![person("a-1985", "Anna", Sex::Female, 1985)]).unwrap();
        let slug = PersonSlug::new("a-1985").unwrap();
        assert_eq!(store.get(&slug).unwrap().name, "Anna");
    }

    #[test]
    fn get_returns_none_for_unknown_slug() {
        let store = PersonStore::new(vec![]).unwrap();
        let slug = PersonSlug::new("missing").unwrap();
        assert!(store.get(&slug).is_none());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
