// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Search String and Criteria

use proptest::prelude::*;
use restaurant_registry::domain::{Address, Cuisine, Restaurant, RestaurantDetails};
use restaurant_registry::search::{SearchCriteria, SearchIndex};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn word(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'B', 'í', 'Ç', 'o', ' ', 'x']), min..=max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn cuisines() -> impl Strategy<Value = Vec<Cuisine>> {
    prop::collection::vec(prop::sample::select(Cuisine::ALL.to_vec()), 0..5)
}

fn restaurant() -> impl Strategy<Value = Restaurant> {
    (word(3, 40), word(10, 40), 1i32..5000, word(3, 30), word(3, 30), cuisines()).prop_map(
        |(name, street, number, neighborhood, city, cuisines)| {
            Restaurant::register(RestaurantDetails {
                name,
                address: Address::new(street, number, None, neighborhood, city, "BA").unwrap(),
                opening_hours: Vec::new(),
                cuisines,
                tables: 1,
            })
            .unwrap()
        },
    )
}

/// Any character window of `text`
fn fragment_of(text: &str, start: usize, len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = start % chars.len();
    let end = (start + len).min(chars.len());
    chars[start..end].iter().collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Deriving the search string twice gives the same string
    #[test]
    fn prop_index_is_idempotent(restaurant in restaurant()) {
        prop_assert_eq!(SearchIndex::build(&restaurant), SearchIndex::build(&restaurant));
    }

    /// Property: Any fragment of the name, in any case, finds the restaurant
    #[test]
    fn prop_name_fragment_matches(
        restaurant in restaurant(),
        start in 0usize..100,
        len in 1usize..10,
        lower in any::<bool>(),
    ) {
        let fragment = fragment_of(restaurant.name(), start, len);
        let fragment = if lower { fragment.to_lowercase() } else { fragment };

        let criteria = SearchCriteria::new(Some(&fragment), None, &[]);
        prop_assert!(criteria.matches(&SearchIndex::build(&restaurant)));
    }

    /// Property: Any fragment of the city finds the restaurant by location
    #[test]
    fn prop_city_fragment_matches(restaurant in restaurant(), start in 0usize..100, len in 1usize..10) {
        let fragment = fragment_of(restaurant.address().city(), start, len);

        let criteria = SearchCriteria::new(None, Some(&fragment), &[]);
        prop_assert!(criteria.matches(&SearchIndex::build(&restaurant)));
    }

    /// Property: Every cuisine a restaurant carries finds it
    #[test]
    fn prop_own_cuisines_match(restaurant in restaurant()) {
        let criteria = SearchCriteria::new(None, None, restaurant.cuisines());
        prop_assert!(criteria.matches(&SearchIndex::build(&restaurant)));
    }

    /// Property: Adding a filter never widens the result
    #[test]
    fn prop_extra_filter_only_narrows(
        restaurant in restaurant(),
        name in word(1, 5),
        location in word(1, 5),
        tags in cuisines(),
    ) {
        let index = SearchIndex::build(&restaurant);
        let narrow = SearchCriteria::new(Some(&name), Some(&location), &tags);
        let wide = SearchCriteria::new(Some(&name), None, &tags);

        if narrow.matches(&index) {
            prop_assert!(wide.matches(&index));
        }
    }

    /// Property: A name absent from every field never matches
    #[test]
    fn prop_foreign_name_never_matches(restaurant in restaurant()) {
        // '#' is outside the generated alphabet
        let criteria = SearchCriteria::new(Some("#NENHUM#"), None, &[]);
        prop_assert!(!criteria.matches(&SearchIndex::build(&restaurant)));
    }
}
