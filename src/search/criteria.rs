// Copyright (c) 2025 - Cowboy AI, Inc.
//! Multi-criteria matching over search strings
//!
//! A query carries up to three filters: a name fragment, a location fragment
//! and a list of cuisine tags. A stored restaurant matches when its search
//! string contains every supplied filter. Matching is plain substring
//! containment, so `"SH"` matches `"FISH"`.

use std::fmt;

use super::index::{normalize, SearchIndex};
use crate::domain::Cuisine;

/// Normalized query filters
///
/// Empty strings and an empty cuisine list count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    name: Option<String>,
    location: Option<String>,
    cuisines: Vec<Cuisine>,
}

impl SearchCriteria {
    pub fn new(name: Option<&str>, location: Option<&str>, cuisines: &[Cuisine]) -> Self {
        let mut unique = Vec::with_capacity(cuisines.len());
        for cuisine in cuisines {
            if !unique.contains(cuisine) {
                unique.push(*cuisine);
            }
        }

        Self {
            name: present(name),
            location: present(location),
            cuisines: unique,
        }
    }

    /// True when no filter was supplied
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.cuisines.is_empty()
    }

    /// AND of every supplied filter
    ///
    /// An unconstrained criteria matches everything; callers that forbid
    /// listing everything check [`SearchCriteria::is_unconstrained`] first.
    pub fn matches(&self, index: &SearchIndex) -> bool {
        let name = self.name.as_deref().map_or(true, |n| index.contains(n));
        let location = self.location.as_deref().map_or(true, |l| index.contains(l));
        let cuisines = self.cuisines.iter().all(|c| index.contains(c.as_str()));

        name && location && cuisines
    }

    /// Normalized name filter
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Normalized location filter
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn cuisines(&self) -> &[Cuisine] {
        &self.cuisines
    }
}

fn present(filter: Option<&str>) -> Option<String> {
    filter.filter(|f| !f.is_empty()).map(normalize)
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(name) = &self.name {
            parts.push(format!("name~{name}"));
        }
        if let Some(location) = &self.location {
            parts.push(format!("location~{location}"));
        }
        if !self.cuisines.is_empty() {
            let tags = self
                .cuisines
                .iter()
                .map(Cuisine::as_str)
                .collect::<Vec<_>>()
                .join(",");
            parts.push(format!("cuisines~[{tags}]"));
        }

        if parts.is_empty() {
            write!(f, "<none>")
        } else {
            write!(f, "{}", parts.join(" AND "))
        }
    }
}
