// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Value Objects

use chrono::NaiveTime;
use proptest::prelude::*;
use restaurant_registry::domain::{
    Address, Cuisine, DayOfWeek, DomainError, OpeningHour, RestaurantId, State,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Text of exactly `min..=max` characters, accents included
fn text(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'Z', 'ã', 'é', ' ', '7', 'ç']), min..=max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn state() -> impl Strategy<Value = State> {
    prop::sample::select(State::ALL.to_vec())
}

fn day() -> impl Strategy<Value = DayOfWeek> {
    prop::sample::select(DayOfWeek::ALL.to_vec())
}

fn time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Valid address inputs come back unchanged through accessors
    #[test]
    fn prop_address_round_trips(
        street in text(10, 150),
        number in 1i32..100_000,
        details in prop::option::of(text(0, 150)),
        neighborhood in text(3, 30),
        city in text(3, 60),
        state in state(),
    ) {
        let address = Address::new(
            street.clone(),
            number,
            details.clone(),
            neighborhood.clone(),
            city.clone(),
            &state.code().to_lowercase(),
        )
        .unwrap();

        prop_assert_eq!(address.street(), street.as_str());
        prop_assert_eq!(address.number(), number);
        prop_assert_eq!(address.additional_details(), details.as_deref());
        prop_assert_eq!(address.neighborhood(), neighborhood.as_str());
        prop_assert_eq!(address.city(), city.as_str());
        prop_assert_eq!(address.state(), state);
    }

    /// Property: Non-positive street numbers are always rejected
    #[test]
    fn prop_non_positive_number_rejected(number in i32::MIN..=0) {
        let error = Address::new("Avenida Paraíso", number, None, "Centro", "Recife", "PE").unwrap_err();
        prop_assert_eq!(error.messages_for("number"), vec!["must be greater than zero (0)"]);
    }

    /// Property: An opening hour is valid exactly when end is after start
    #[test]
    fn prop_opening_hour_requires_end_after_start(day in day(), start in time(), end in time()) {
        let result = OpeningHour::from_parts(day, start, end);

        if end > start {
            let hour = result.unwrap();
            prop_assert_eq!(hour.day_of_week(), day);
            prop_assert_eq!(hour.start(), start);
            prop_assert_eq!(hour.end(), end);
        } else {
            prop_assert!(matches!(result, Err(DomainError::LogicalConstraint(_))));
        }
    }

    /// Property: Cuisine tags parse in any letter case
    #[test]
    fn prop_cuisine_parse_ignores_case(cuisine in prop::sample::select(Cuisine::ALL.to_vec()), lower in any::<bool>()) {
        let raw = if lower { cuisine.as_str().to_lowercase() } else { cuisine.as_str().to_string() };
        prop_assert_eq!(Cuisine::new(&raw).unwrap(), cuisine);
    }

    /// Property: Ids render in canonical form and parse back
    #[test]
    fn prop_restaurant_id_round_trips(bytes in any::<[u8; 16]>()) {
        let id = RestaurantId::from(uuid::Uuid::from_bytes(bytes));
        let rendered = id.to_string();

        prop_assert_eq!(rendered.clone(), rendered.to_lowercase());
        prop_assert_eq!(RestaurantId::parse(&rendered).unwrap(), id);
    }
}

#[test]
fn test_generated_ids_are_distinct() {
    let ids: std::collections::HashSet<_> = (0..1000).map(|_| RestaurantId::generate()).collect();
    assert_eq!(ids.len(), 1000);
}
