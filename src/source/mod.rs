//! Dataset loading.
//!
//! The dataset is a single JSON array of person objects, read once at
//! process start and parsed at the boundary into domain types. Unlike a
//! streaming input, a malformed dataset is fatal: there is no partial
//! content worth showing.

use crate::model::{DatasetError, PersonRecord, PersonStore};
use std::path::Path;
use tracing::info;

/// Embedded default dataset, compiled into the binary.
const DEFAULT_DATASET: &str = include_str!("../../data/people.json");

/// Load the person store from a dataset file, or the embedded default
/// when no path is given.
///
/// # Errors
///
/// Returns `DatasetError` if the file cannot be read, the JSON is
/// malformed, or the records fail store validation (duplicate slugs).
pub fn load_dataset(path: Option<&Path>) -> Result<PersonStore, DatasetError> {
    let store = match path {
        Some(path) => {
            let contents =
                std::fs::read_to_string(path).map_err(|e| DatasetError::Read {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            let store = parse_dataset(&contents)?;
            info!(path = %path.display(), records = store.len(), "Loaded dataset");
            store
        }
        None => {
            let store = parse_dataset(DEFAULT_DATASET)?;
            info!(records = store.len(), "Loaded embedded default dataset");
            store
        }
    };
    Ok(store)
}

/// Parse a JSON array of person objects into a validated store.
fn parse_dataset(contents: &str) -> Result<PersonStore, DatasetError> {
    let records: Vec<PersonRecord> = serde_json::from_str(contents)?;
    Ok(PersonStore::new(records)?)
}

// ===== Tests =====
