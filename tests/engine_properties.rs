//! Property-based tests for the view filter/sort engine.
//!
//! Tests validate:
//! 1. Query filtering is exactly normalized-substring containment
//! 2. Sex filtering keeps only the requested sex; ALL is a no-op
//! 3. Descending is reversal of the stable ascending sort
//! 4. The engine is deterministic and never mutates its input

use pplv::model::{PersonRecord, PersonSlug, Sex};
use pplv::state::{compute_visible, SexFilter, SortField, SortOrder, ViewState};
use proptest::prelude::*;

/// Strategy for a list of records with unique, index-derived slugs.
fn records_strategy() -> impl Strategy<Value = Vec<PersonRecord>> {
    prop::collection::vec(
        ("[A-Za-z ]{0,12}", any::<bool>(), 1600..2000u16),
        0..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(index, (name, male, born))| PersonRecord {
                slug: PersonSlug::new(format!("person-{index}")).unwrap(),
                name,
                sex: if male { Sex::Male } else { Sex::Female },
                born,
            })
            .collect()
    })
}

fn sex_filter_strategy() -> impl Strategy<Value = SexFilter> {
    prop_oneof![
        Just(SexFilter::All),
        Just(SexFilter::Male),
        Just(SexFilter::Female),
    ]
}

fn sort_field_strategy() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::None),
        Just(SortField::Name),
        Just(SortField::Sex),
        Just(SortField::Born),
    ]
}

// ===== Property 1: Query filtering =====

proptest! {
    #[test]
    fn query_filter_is_exactly_substring_containment(
        records in records_strategy(),
        query in "\\s{0,2}[A-Za-z]{0,6}\\s{0,2}",
    ) {
        let state = ViewState { query: query.clone(), ..ViewState::default() };
        let visible = compute_visible(&records, &state);

        let normalized = query.trim().to_lowercase();
        let visible_slugs: Vec<_> = visible.iter().map(|p| p.slug.clone()).collect();

        for person in &records {
            let matches = normalized.is_empty()
                || person.name.to_lowercase().contains(&normalized);
            let included = visible_slugs.contains(&person.slug);
            prop_assert_eq!(
                included, matches,
                "record {} inclusion must equal containment", person.slug
            );
        }
    }
}

// ===== Property 2: Sex filtering =====

proptest! {
    #[test]
    fn sex_filter_keeps_only_requested_sex(
        records in records_strategy(),
        filter in sex_filter_strategy(),
    ) {
        let state = ViewState { sex_filter: filter, ..ViewState::default() };
        let visible = compute_visible(&records, &state);

        match filter {
            SexFilter::All => prop_assert_eq!(visible.len(), records.len()),
            SexFilter::Male => {
                prop_assert!(visible.iter().all(|p| p.sex == Sex::Male));
                let males = records.iter().filter(|p| p.sex == Sex::Male).count();
                prop_assert_eq!(visible.len(), males);
            }
            SexFilter::Female => {
                prop_assert!(visible.iter().all(|p| p.sex == Sex::Female));
                let females = records.iter().filter(|p| p.sex == Sex::Female).count();
                prop_assert_eq!(visible.len(), females);
            }
        }
    }
}

// ===== Property 3: Desc is reversal, not an inverted comparator =====

proptest! {
    #[test]
    fn desc_is_reversal_of_stable_asc(
        records in records_strategy(),
        field in sort_field_strategy(),
    ) {
        let asc = ViewState { sort_field: field, ..ViewState::default() };
        let desc = ViewState {
            sort_field: field,
            sort_order: SortOrder::Desc,
            ..ViewState::default()
        };

        let mut expected: Vec<_> = compute_visible(&records, &asc)
            .iter()
            .map(|p| p.slug.clone())
            .collect();
        expected.reverse();

        let actual: Vec<_> = compute_visible(&records, &desc)
            .iter()
            .map(|p| p.slug.clone())
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn born_sort_is_non_decreasing(records in records_strategy()) {
        let state = ViewState { sort_field: SortField::Born, ..ViewState::default() };
        let visible = compute_visible(&records, &state);

        for pair in visible.windows(2) {
            prop_assert!(pair[0].born <= pair[1].born);
        }
    }
}

// ===== Property 4: Determinism and no mutation =====

proptest! {
    #[test]
    fn engine_is_deterministic_and_pure(
        records in records_strategy(),
        query in "[A-Za-z]{0,4}",
        filter in sex_filter_strategy(),
        field in sort_field_strategy(),
        desc in any::<bool>(),
    ) {
        let state = ViewState {
            query,
            sex_filter: filter,
            sort_field: field,
            sort_order: if desc { SortOrder::Desc } else { SortOrder::Asc },
        };

        let before = records.clone();
        let first: Vec<_> = compute_visible(&records, &state)
            .iter()
            .map(|p| p.slug.clone())
            .collect();
        let second: Vec<_> = compute_visible(&records, &state)
            .iter()
            .map(|p| p.slug.clone())
            .collect();

        prop_assert_eq!(first, second, "identical inputs must give identical output");
        prop_assert_eq!(records, before, "the store must never be mutated");
    }

    #[test]
    fn visible_is_always_a_subset_of_the_store(
        records in records_strategy(),
        query in "[A-Za-z]{0,4}",
        filter in sex_filter_strategy(),
        field in sort_field_strategy(),
    ) {
        let state = ViewState {
            query,
            sex_filter: filter,
            sort_field: field,
            ..ViewState::default()
        };

        let visible = compute_visible(&records, &state);
        prop_assert!(visible.len() <= records.len());
        for person in visible {
            prop_assert!(records.iter().any(|r| r.slug == person.slug));
        }
    }
}
