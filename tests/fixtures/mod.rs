// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for restaurant-registry
//!
//! Deterministic restaurants, commands and stored records. Ids and timestamps
//! are fixed constants so stored records compare byte for byte.
#![allow(dead_code)]

use chrono::{DateTime, NaiveTime, Utc};
use uuid::Uuid;

use restaurant_registry::domain::{Address, Cuisine, OpeningHour, Restaurant, RestaurantDetails};
use restaurant_registry::repository::record::{AddressRecord, OpeningHourRecord, RestaurantRecord};
use restaurant_registry::search::SearchIndex;
use restaurant_registry::service::{AddressInput, OpeningHourInput, RegisterRestaurant};

// Fixed test UUIDs (UUID v7 format, but deterministic for testing)
pub const RESTAURANT_ID_1: &str = "01934f4a-1000-7000-8000-000000001000";
pub const RESTAURANT_ID_2: &str = "01934f4a-2000-7000-8000-000000002000";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("Invalid time in test fixture")
}

/// "Avenida Paraíso" 100, Centro, São Paulo/SP
pub fn paraiso_address() -> Address {
    Address::new("Avenida Paraíso", 100, None, "Centro", "São Paulo", "SP")
        .expect("Invalid address in test fixture")
}

/// COMIDA BOA, BRAZILIAN, open Monday 09:00-18:00
pub fn comida_boa_details() -> RestaurantDetails {
    details_named("COMIDA BOA")
}

pub fn details_named(name: &str) -> RestaurantDetails {
    RestaurantDetails {
        name: name.to_string(),
        address: paraiso_address(),
        opening_hours: vec![OpeningHour::new("MONDAY", time(9, 0), time(18, 0))
            .expect("Invalid opening hour in test fixture")],
        cuisines: vec![Cuisine::Brazilian],
        tables: 10,
    }
}

/// A second, unrelated restaurant
pub fn sabor_do_mar_details() -> RestaurantDetails {
    RestaurantDetails {
        name: "Sabor do Mar".to_string(),
        address: Address::new(
            "Rua do Porto Velho",
            12,
            Some("Loja 3".to_string()),
            "Ribeira",
            "Natal",
            "RN",
        )
        .expect("Invalid address in test fixture"),
        opening_hours: Vec::new(),
        cuisines: vec![Cuisine::Seafood, Cuisine::Brazilian],
        tables: 20,
    }
}

/// COMIDA BOA rebuilt with fixed id and timestamp
pub fn comida_boa_restaurant() -> Restaurant {
    Restaurant::rehydrate(RESTAURANT_ID_1, fixed_timestamp(), comida_boa_details())
        .expect("Invalid restaurant in test fixture")
}

/// Stored form of [`comida_boa_restaurant`]
pub fn comida_boa_record() -> RestaurantRecord {
    RestaurantRecord {
        id: RESTAURANT_ID_1.to_string(),
        name: "COMIDA BOA".to_string(),
        tables: 10,
        registered_at: fixed_timestamp(),
        address: AddressRecord {
            street: "Avenida Paraíso".to_string(),
            number: 100,
            additional_details: None,
            neighborhood: "Centro".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
        },
        opening_hours: vec![OpeningHourRecord {
            day_of_week: "MONDAY".to_string(),
            start: time(9, 0),
            end: time(18, 0),
        }],
        cuisines: vec!["BRAZILIAN".to_string()],
        search_index: SearchIndex::from_stored(
            "COMIDA BOA_AVENIDA PARAÍSO_100__CENTRO_SÃO PAULO_SP_BRAZILIAN",
        ),
    }
}

/// Raw command equivalent to [`comida_boa_details`]
pub fn comida_boa_command() -> RegisterRestaurant {
    RegisterRestaurant {
        name: "COMIDA BOA".to_string(),
        tables: 10,
        address: AddressInput {
            street: "Avenida Paraíso".to_string(),
            number: 100,
            additional_details: None,
            neighborhood: "Centro".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
        },
        opening_hours: vec![OpeningHourInput {
            day_of_week: "MONDAY".to_string(),
            start: "09:00".to_string(),
            end: "18:00".to_string(),
        }],
        cuisines: vec!["BRAZILIAN".to_string()],
    }
}
