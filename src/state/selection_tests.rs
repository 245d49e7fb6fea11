//! Unit tests for the selection tracker.

use super::*;
use crate::model::{PersonRecord, PersonSlug, Sex};

fn person(slug: &str, name: &str, sex: Sex, born: u16) -> PersonRecord {
    PersonRecord {
        slug: PersonSlug::new(slug).unwrap(),
        name: name.to_string(),
        sex,
        born,
    }
}

fn store() -> PersonStore {
    PersonStore::new(vec![
        person("bill-1990", "Bill", Sex::Male, 1990),
        person("anna-1985", "Anna", Sex::Female, 1985),
        person("carl-1985", "Carl", Sex::Male, 1985),
    ])
    .unwrap()
}

#[test]
fn add_then_is_selected_round_trip() {
    let store = store();
    let anna = &store.records()[1];
    let mut selection = SelectionSet::new();

    assert!(!selection.is_selected(anna));
    assert!(selection.add(anna));
    assert!(selection.is_selected(anna));

    assert!(selection.remove(anna));
    assert!(!selection.is_selected(anna));
}

#[test]
fn adding_twice_keeps_size_at_one() {
    let store = store();
    let bill = &store.records()[0];
    let mut selection = SelectionSet::new();

    assert!(selection.add(bill));
    assert!(!selection.add(bill), "Second add must be a no-op");
    assert_eq!(selection.len(), 1);
}

#[test]
fn removing_absent_record_is_a_no_op() {
    let store = store();
    let carl = &store.records()[2];
    let mut selection = SelectionSet::new();

    assert!(!selection.remove(carl));
    assert!(selection.is_empty());
}

#[test]
fn membership_is_keyed_by_slug_not_identity() {
    let store = store();
    let anna = &store.records()[1];
    let mut selection = SelectionSet::new();
    selection.add(anna);

    // A fresh clone with the same slug counts as the same person.
    let anna_clone = anna.clone();
    assert!(selection.is_selected(&anna_clone));
    assert!(selection.remove(&anna_clone));
    assert!(selection.is_empty());
}

#[test]
fn toggle_flips_membership() {
    let store = store();
    let bill = &store.records()[0];
    let mut selection = SelectionSet::new();

    assert!(selection.toggle(bill), "First toggle selects");
    assert!(!selection.toggle(bill), "Second toggle unselects");
    assert!(selection.is_empty());
}

#[test]
fn caption_is_placeholder_when_empty() {
    let store = store();
    let selection = SelectionSet::new();
    assert_eq!(selection.caption(&store), EMPTY_CAPTION);
}

#[test]
fn caption_joins_names_in_addition_order() {
    let store = store();
    let mut selection = SelectionSet::new();
    selection.add(&store.records()[2]); // Carl
    selection.add(&store.records()[1]); // Anna

    assert_eq!(selection.caption(&store), "Carl, Anna");
}

#[test]
fn caption_order_survives_remove_and_readd() {
    let store = store();
    let mut selection = SelectionSet::new();
    selection.add(&store.records()[0]); // Bill
    selection.add(&store.records()[1]); // Anna
    selection.remove(&store.records()[0]);
    selection.add(&store.records()[0]); // Bill again, now last

    assert_eq!(selection.caption(&store), "Anna, Bill");
}
