//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod person;
pub mod store;

// Re-export for convenience
pub use error::{AppError, DatasetError};
pub use key_action::KeyAction;
pub use person::{InvalidSlug, PersonRecord, PersonSlug, Sex};
pub use store::{PersonStore, StoreError};
