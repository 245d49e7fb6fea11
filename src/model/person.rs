//! Person domain types with smart constructors.
//!
//! `PersonSlug` validates non-empty strings at construction time.
//! The raw constructor is never exported - use the smart constructor only.

use serde::Deserialize;
use std::fmt;

/// Unique identifier for a person within the store (e.g., "emma-de-milliano-1876").
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct PersonSlug(String);

impl PersonSlug {
    /// Smart constructor: validates non-empty slug.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSlug> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidSlug::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonSlug {
    type Error = InvalidSlug;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

/// Error returned when a slug fails validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidSlug {
    /// Slug was empty or whitespace-only.
    #[error("Person slug cannot be empty")]
    Empty,
}

/// Biological sex as recorded in the dataset. Sum type - exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Sex {
    /// Female, serialized as "f". Sorts before `Male` by sex code.
    #[serde(rename = "f")]
    Female,
    /// Male, serialized as "m".
    #[serde(rename = "m")]
    Male,
}

impl Sex {
    /// Single-letter code as it appears in the dataset and the table column.
    pub fn code(self) -> &'static str {
        match self {
            Sex::Female => "f",
            Sex::Male => "m",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single person entry in the record store.
///
/// Immutable once loaded; identity is the slug. All other fields are
/// display data driving the table columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonRecord {
    /// Unique identifier within the store.
    pub slug: PersonSlug,
    /// Display name; also the target of the substring filter.
    pub name: String,
    /// Sex code driving the M/F filter and the sex sort column.
    pub sex: Sex,
    /// Birth year driving the born sort column.
    pub born: u16,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rejects_empty_string() {
        assert!(PersonSlug::new("").is_err());
    }

    #[test]
    fn slug_rejects_whitespace_only() {
        assert!(PersonSlug::new("   ").is_err());
    }

    #[test]
    fn slug_accepts_and_preserves_value() {
        let slug = PersonSlug::new("anna-1985").unwrap();
        assert_eq!(slug.as_str(), "anna-1985");
        assert_eq!(slug.to_string(), "anna-1985");
    }

    #[test]
    fn sex_deserializes_from_single_letter_codes() {
        let f: Sex = serde_json::from_str("\"f\"").unwrap();
        let m: Sex = serde_json::from_str("\"m\"").unwrap();
        assert_eq!(f, Sex::Female);
        assert_eq!(m, Sex::Male);
    }

    #[test]
    fn sex_rejects_unknown_code() {
        let result: Result<Sex, _> = serde_json::from_str("\"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn female_sorts_before_male_by_code() {
        assert!(Sex::Female < Sex::Male);
        assert!(Sex::Female.code() < Sex::Male.code());
    }

    #[test]
    fn person_record_deserializes_from_dataset_shape() {
        let json = r#"{"slug": "bill-1990", "name": "Bill", "sex": "m", "born": 1990}"#;
        let person: PersonRecord = serde_json::from_str(json).unwrap();
        assert_eq!(person.name, "Bill");
        assert_eq!(person.sex, Sex::Male);
        assert_eq!(person.born, 1990);
    }

    #[test]
    fn person_record_rejects_unknown_fields() {
        let json = r#"{"slug": "x-1", "name": "X", "sex": "m", "born": 1990, "died": 2050}"#;
        let result: Result<PersonRecord, _> = serde_json::from_str(json);
        assert!(result.is_err(), "deny_unknown_fields should reject 'died'");
    }
}
