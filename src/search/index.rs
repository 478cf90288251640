// Copyright (c) 2025 - Cowboy AI, Inc.
//! Denormalized search string
//!
//! Every restaurant is stored with one composite string holding the fields a
//! query may look at. Queries never touch the aggregate itself; they only test
//! this string for substrings.
//!
//! # Layout
//!
//! ```text
//! NAME_STREET_NUMBER_DETAILS_NEIGHBORHOOD_CITY_STATE_CUISINE_CUISINE...
//! ```
//!
//! Absent additional details leave an empty segment. Every segment is
//! uppercased, and [`normalize`] applies the same folding to query filters,
//! so matching ignores case for free text and enumerated tags alike.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Restaurant;

/// Separator placed between segments
pub const SEGMENT_DELIMITER: char = '_';

/// Fold text the way index segments are folded
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
}

/// Composite search string derived from a restaurant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex(String);

impl SearchIndex {
    /// Derive the search string
    ///
    /// Pure and deterministic: equal restaurants give equal strings.
    pub fn build(restaurant: &Restaurant) -> Self {
        let address = restaurant.address();

        let mut segments = vec![
            normalize(restaurant.name()),
            normalize(address.street()),
            address.number().to_string(),
            normalize(address.additional_details().unwrap_or_default()),
            normalize(address.neighborhood()),
            normalize(address.city()),
            address.state().code().to_string(),
        ];
        segments.extend(restaurant.cuisines().iter().map(|c| c.as_str().to_string()));

        Self(segments.join(&SEGMENT_DELIMITER.to_string()))
    }

    /// Wrap a string previously produced by [`SearchIndex::build`]
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment against an already normalized needle
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
