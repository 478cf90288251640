// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant identity value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::invariants::{messages, ValidationError, ValidationResult, Violations};

const HYPHENATED_LEN: usize = 36;

/// Identity of a restaurant aggregate
///
/// Always a syntactically valid UUID, rendered in canonical hyphenated form.
/// Fresh ids are UUID v7 so they sort by registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(Uuid);

impl RestaurantId {
    /// Generate a new identity
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse an identity received from a caller or from storage
    ///
    /// # Invariants
    /// - Non-empty
    /// - Hyphenated UUID syntax (`8-4-4-4-12` hex digits, either case)
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        match Uuid::parse_str(raw) {
            Ok(uuid) if raw.len() == HYPHENATED_LEN => Ok(Self(uuid)),
            _ => {
                let mut violations = Violations::new();
                violations.text("id", raw).required();
                violations.push("id", messages::UUID);
                Err(violations.into_error())
            }
        }
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for RestaurantId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for RestaurantId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RestaurantId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct_uuids() {
        let first = RestaurantId::generate();
        let second = RestaurantId::generate();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first.to_string()).is_ok());
    }

    #[test]
    fn test_parse_round_trip() {
        let raw = "01934f4a-1000-7000-8000-000000001000";
        let id = RestaurantId::parse(raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn test_parse_canonicalizes_case() {
        let id = RestaurantId::parse("01934F4A-1000-7000-8000-00000000ABCD").unwrap();
        assert_eq!(id.to_string(), "01934f4a-1000-7000-8000-00000000abcd");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let error = RestaurantId::parse("not-a-uuid").unwrap_err();
        assert_eq!(error.messages_for("id"), vec!["must be a UUID"]);
    }

    #[test]
    fn test_parse_rejects_non_hyphenated_forms() {
        for raw in [
            "01934f4a100070008000000000001000",
            "{01934f4a-1000-7000-8000-000000001000}",
            "urn:uuid:01934f4a-1000-7000-8000-000000001000",
        ] {
            let error = RestaurantId::parse(raw).unwrap_err();
            assert_eq!(error.messages_for("id"), vec!["must be a UUID"], "{raw}");
        }
    }

    #[test]
    fn test_parse_rejects_empty_with_both_rules() {
        let error = RestaurantId::parse("").unwrap_err();
        assert_eq!(error.messages_for("id"), vec!["must be filled", "must be a UUID"]);
    }
}
