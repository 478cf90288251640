// Copyright (c) 2025 - Cowboy AI, Inc.
//! Caller Input for the Registry
//!
//! Commands carry raw, untrusted values exactly as a caller sent them (JSON
//! import files, CLI flags). Turning a command into domain values reports
//! every problem at once, each under a dotted path into the command:
//!
//! ```text
//! name
//! address.street
//! opening_hours[2].day_of_week
//! cuisines[0]
//! ```
//!
//! Relationship failures (an opening hour ending before it starts) are only
//! reported when no field rule failed.

use serde::{Deserialize, Serialize};

use crate::domain::invariants::{messages, Violations};
use crate::domain::restaurant::collect_own_field_violations;
use crate::domain::{
    Address, Cuisine, DomainError, LogicalConstraintError, OpeningHour, RestaurantDetails,
    ValidationResult,
};
use crate::search::SearchCriteria;

/// Raw address as supplied by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInput {
    pub street: String,
    pub number: i32,
    pub additional_details: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Raw opening window; times as `HH:MM` or `HH:MM:SS`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHourInput {
    pub day_of_week: String,
    pub start: String,
    pub end: String,
}

/// Command to register a new restaurant (or describe its replacement)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRestaurant {
    pub name: String,
    pub tables: i32,
    pub address: AddressInput,
    pub opening_hours: Vec<OpeningHourInput>,
    pub cuisines: Vec<String>,
}

impl RegisterRestaurant {
    /// Validate every field and build the restaurant attributes
    pub fn into_details(self) -> Result<RestaurantDetails, DomainError> {
        let mut violations = Violations::new();
        let mut logical: Option<LogicalConstraintError> = None;

        collect_own_field_violations(&mut violations, &self.name, self.tables);

        let address = violations.absorb(
            "address",
            Address::new(
                self.address.street,
                self.address.number,
                self.address.additional_details,
                self.address.neighborhood,
                self.address.city,
                &self.address.state,
            ),
        );

        let mut opening_hours = Vec::with_capacity(self.opening_hours.len());
        for (i, hour) in self.opening_hours.iter().enumerate() {
            let path = format!("opening_hours[{i}]");
            match OpeningHour::parse(&hour.day_of_week, &hour.start, &hour.end) {
                Ok(hour) => opening_hours.push(hour),
                Err(DomainError::Validation(e)) => {
                    violations.absorb::<()>(&path, Err(e));
                }
                Err(DomainError::LogicalConstraint(e)) => {
                    logical.get_or_insert(e.prefixed(&path));
                }
            }
        }

        let mut cuisines = Vec::with_capacity(self.cuisines.len());
        for (i, raw) in self.cuisines.iter().enumerate() {
            let path = format!("cuisines[{i}]");
            if let Some(cuisine) = violations.member::<Cuisine>(&path, raw, messages::CUISINE) {
                cuisines.push(cuisine);
            }
        }

        let address = match address {
            Some(address) if violations.is_empty() => address,
            _ => return Err(violations.into_error().into()),
        };
        if let Some(error) = logical {
            return Err(error.into());
        }

        Ok(RestaurantDetails {
            name: self.name,
            address,
            opening_hours,
            cuisines,
            tables: self.tables,
        })
    }
}

/// Search request with optional filters
///
/// Cuisine tags are raw text; unknown tags are a validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantQuery {
    pub name: Option<String>,
    pub location: Option<String>,
    pub cuisines: Vec<String>,
}

impl RestaurantQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn located_in(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisines.push(cuisine.as_str().to_string());
        self
    }

    /// Parse cuisine tags and normalize the filters
    pub fn to_criteria(&self) -> ValidationResult<SearchCriteria> {
        let mut violations = Violations::new();
        let cuisines: Vec<Cuisine> = self
            .cuisines
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| {
                violations.member::<Cuisine>(&format!("cuisines[{i}]"), raw, messages::CUISINE)
            })
            .collect();
        violations.finish()?;

        Ok(SearchCriteria::new(
            self.name.as_deref(),
            self.location.as_deref(),
            &cuisines,
        ))
    }
}
