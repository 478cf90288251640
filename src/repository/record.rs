// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stored form of a restaurant
//!
//! Records are plain data: enumerations are kept as their canonical text and
//! nothing is trusted on the way back in. [`RestaurantRecord::into_restaurant`]
//! runs every value object and aggregate rule again, so a record edited behind
//! the registry's back surfaces as [`RepositoryError::CorruptRecord`] instead
//! of an invalid aggregate.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Address, Cuisine, OpeningHour, Restaurant, RestaurantDetails};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::search::SearchIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub street: String,
    pub number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHourRecord {
    pub day_of_week: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One stored restaurant plus its search string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
    pub tables: i32,
    pub registered_at: DateTime<Utc>,
    pub address: AddressRecord,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHourRecord>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    pub search_index: SearchIndex,
}

impl RestaurantRecord {
    /// Capture a restaurant and derive its search string
    pub fn from_restaurant(restaurant: &Restaurant) -> Self {
        let address = restaurant.address();

        Self {
            id: restaurant.id().to_string(),
            name: restaurant.name().to_string(),
            tables: restaurant.tables(),
            registered_at: restaurant.registered_at(),
            address: AddressRecord {
                street: address.street().to_string(),
                number: address.number(),
                additional_details: address.additional_details().map(str::to_string),
                neighborhood: address.neighborhood().to_string(),
                city: address.city().to_string(),
                state: address.state().code().to_string(),
            },
            opening_hours: restaurant
                .opening_hours()
                .iter()
                .map(|hour| OpeningHourRecord {
                    day_of_week: hour.day_of_week().as_str().to_string(),
                    start: hour.start(),
                    end: hour.end(),
                })
                .collect(),
            cuisines: restaurant
                .cuisines()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            search_index: SearchIndex::build(restaurant),
        }
    }

    /// Rebuild the aggregate, re-validating every field
    pub fn into_restaurant(self) -> RepositoryResult<Restaurant> {
        let id = self.id;
        let corrupt = |reason: String| RepositoryError::CorruptRecord {
            id: id.clone(),
            reason,
        };

        let address = Address::new(
            self.address.street,
            self.address.number,
            self.address.additional_details,
            self.address.neighborhood,
            self.address.city,
            &self.address.state,
        )
        .map_err(|e| corrupt(e.prefixed("address").to_string()))?;

        let opening_hours = self
            .opening_hours
            .iter()
            .enumerate()
            .map(|(i, hour)| {
                OpeningHour::new(&hour.day_of_week, hour.start, hour.end)
                    .map_err(|e| corrupt(e.prefixed(&format!("opening_hours[{i}]")).to_string()))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        let cuisines = self
            .cuisines
            .iter()
            .map(|raw| Cuisine::new(raw).map_err(|e| corrupt(e.to_string())))
            .collect::<RepositoryResult<Vec<_>>>()?;

        let details = RestaurantDetails {
            name: self.name,
            address,
            opening_hours,
            cuisines,
            tables: self.tables,
        };

        Restaurant::rehydrate(&id, self.registered_at, details).map_err(|e| corrupt(e.to_string()))
    }
}
