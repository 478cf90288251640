// Copyright (c) 2025 - Cowboy AI, Inc.

//! Key layout of the restaurant bucket
//!
//! Two kinds of entries share one key-value bucket:
//!
//! ```text
//! restaurant.{uuid}   JSON RestaurantRecord
//! name.{hex}          owning restaurant id, one per registered name
//! ```
//!
//! Names may contain spaces and accents, which KV keys do not allow, so name
//! claims use the lowercase hex of the name's UTF-8 bytes. Distinct names
//! always give distinct keys.
//!
//! # Examples
//!
//! ```rust
//! use restaurant_registry::repository::keys::{BucketKey, KeyKind};
//!
//! let key = BucketKey::name_claim("Bar");
//! assert_eq!(key.to_string(), "name.426172");
//! assert_eq!(BucketKey::parse("name.426172").unwrap().kind(), KeyKind::NameClaim);
//! ```

use std::fmt;

use crate::domain::RestaurantId;

/// Prefix of record keys
pub const RECORD_ROOT: &str = "restaurant";

/// Prefix of name claim keys
pub const NAME_ROOT: &str = "name";

/// What an entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// A serialized restaurant
    Record,
    /// The id owning a name
    NameClaim,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Record => write!(f, "{RECORD_ROOT}"),
            KeyKind::NameClaim => write!(f, "{NAME_ROOT}"),
        }
    }
}

/// A fully formed bucket key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    kind: KeyKind,
    token: String,
}

impl BucketKey {
    /// Key holding a restaurant record
    pub fn record(id: &RestaurantId) -> Self {
        Self {
            kind: KeyKind::Record,
            token: id.to_string(),
        }
    }

    /// Key claiming a restaurant name
    pub fn name_claim(name: &str) -> Self {
        let token = name.bytes().map(|b| format!("{b:02x}")).collect();
        Self {
            kind: KeyKind::NameClaim,
            token,
        }
    }

    /// Split a key read back from the bucket
    pub fn parse(raw: &str) -> Option<Self> {
        let (root, token) = raw.split_once('.')?;
        let kind = match root {
            RECORD_ROOT => KeyKind::Record,
            NAME_ROOT => KeyKind::NameClaim,
            _ => return None,
        };
        if token.is_empty() {
            return None;
        }

        Some(Self {
            kind,
            token: token.to_string(),
        })
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Part after the root
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_record_key() {
        let id = RestaurantId::from(Uuid::parse_str("01932c07-a000-7000-8000-000000000001").unwrap());
        assert_eq!(
            BucketKey::record(&id).to_string(),
            "restaurant.01932c07-a000-7000-8000-000000000001"
        );
    }

    #[test]
    fn test_name_claim_is_key_safe() {
        let key = BucketKey::name_claim("Comida Boa Paraíso").to_string();
        assert!(key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.'));
    }

    #[test]
    fn test_name_claim_is_case_sensitive() {
        assert_ne!(BucketKey::name_claim("Bar"), BucketKey::name_claim("BAR"));
    }

    #[test]
    fn test_parse_round() {
        for raw in ["restaurant.abc", "name.426172"] {
            assert_eq!(BucketKey::parse(raw).unwrap().to_string(), raw);
        }
        assert!(BucketKey::parse("menu.1").is_none());
        assert!(BucketKey::parse("restaurant.").is_none());
        assert!(BucketKey::parse("restaurant").is_none());
    }
}
