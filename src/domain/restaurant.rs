// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant Aggregate
//!
//! The restaurant owns its address, opening hours and cuisines. All of them
//! are validated and persisted as one unit.
//!
//! # Lifecycle
//!
//! ```text
//! RestaurantDetails ──register()──▶ Restaurant (fresh id + timestamp)
//! stored id/timestamp ─rehydrate()─▶ Restaurant (same id + timestamp)
//! Restaurant + details ──revise()──▶ Restaurant (same id, new attributes)
//! ```
//!
//! There are no setters. Changing a restaurant means building a new value and
//! replacing the stored one under the same id.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::invariants::{ValidationResult, Violations};
use super::{Address, Cuisine, OpeningHour, RestaurantId};

/// Attributes supplied by a caller, minus identity and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDetails {
    pub name: String,
    pub address: Address,
    pub opening_hours: Vec<OpeningHour>,
    pub cuisines: Vec<Cuisine>,
    pub tables: i32,
}

impl RestaurantDetails {
    /// Check the aggregate-level field rules
    ///
    /// Address, opening hours and cuisines are value objects and were
    /// validated when they were built.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut violations = Violations::new();
        self.collect_violations(&mut violations);
        violations.finish()
    }

    pub(crate) fn collect_violations(&self, violations: &mut Violations) {
        collect_own_field_violations(violations, &self.name, self.tables);
    }
}

/// Rules on the fields the aggregate holds directly
pub(crate) fn collect_own_field_violations(violations: &mut Violations, name: &str, tables: i32) {
    violations
        .text("name", name)
        .required()
        .length(Restaurant::NAME_MIN_LENGTH, Restaurant::NAME_MAX_LENGTH);
    violations.positive("tables", tables);
}

/// Restaurant aggregate root
///
/// # Invariants
/// - name: required, 3 to 100 characters (uniqueness is enforced by the service)
/// - tables: greater than zero
/// - id and registration timestamp never change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
    tables: i32,
    registered_at: DateTime<Utc>,
    address: Address,
    opening_hours: Vec<OpeningHour>,
    cuisines: Vec<Cuisine>,
}

impl Restaurant {
    pub const NAME_MIN_LENGTH: usize = 3;
    pub const NAME_MAX_LENGTH: usize = 100;

    /// Register a new restaurant with a fresh id and the current time
    pub fn register(details: RestaurantDetails) -> ValidationResult<Self> {
        details.validate()?;
        Ok(Self::assemble(RestaurantId::generate(), Utc::now(), details))
    }

    /// Rebuild a restaurant previously read from storage
    ///
    /// Runs the same field rules as [`Restaurant::register`] and additionally
    /// checks the stored id.
    pub fn rehydrate(
        id: &str,
        registered_at: DateTime<Utc>,
        details: RestaurantDetails,
    ) -> ValidationResult<Self> {
        let mut violations = Violations::new();
        let id = violations.absorb("restaurant", RestaurantId::parse(id));
        details.collect_violations(&mut violations);

        match id {
            Some(id) if violations.is_empty() => Ok(Self::assemble(id, registered_at, details)),
            _ => Err(violations.into_error()),
        }
    }

    /// Build the replacement value for this restaurant
    ///
    /// Keeps id and registration timestamp.
    pub fn revise(&self, details: RestaurantDetails) -> ValidationResult<Self> {
        details.validate()?;
        Ok(Self::assemble(self.id, self.registered_at, details))
    }

    fn assemble(id: RestaurantId, registered_at: DateTime<Utc>, details: RestaurantDetails) -> Self {
        Self {
            id,
            name: details.name,
            tables: details.tables,
            registered_at,
            address: details.address,
            opening_hours: details.opening_hours,
            cuisines: details.cuisines,
        }
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tables(&self) -> i32 {
        self.tables
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn opening_hours(&self) -> &[OpeningHour] {
        &self.opening_hours
    }

    pub fn cuisines(&self) -> &[Cuisine] {
        &self.cuisines
    }

    /// Current attributes, for building a revision
    pub fn details(&self) -> RestaurantDetails {
        RestaurantDetails {
            name: self.name.clone(),
            address: self.address.clone(),
            opening_hours: self.opening_hours.clone(),
            cuisines: self.cuisines.clone(),
            tables: self.tables,
        }
    }
}
