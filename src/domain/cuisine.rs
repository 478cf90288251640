// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cuisine Taxonomy
//!
//! Defines the fixed vocabulary of cuisine tags a restaurant can carry. Tags
//! are the enumerated part of the search index and are always uppercase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::{messages, ValidationError, ValidationResult};

/// Recognized cuisine tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cuisine {
    American,
    Italian,
    French,
    Spanish,
    Mexican,
    Chinese,
    Japanese,
    Indian,
    Thai,
    Brazilian,
    Portuguese,
    Mediterranean,
    Arabic,
    Greek,
    Korean,
    Vietnamese,
    Peruvian,
    Argentinian,
    Caribbean,
    African,
    Fusion,
    VegetarianVegan,
    Organic,
    Seafood,
    Steakhouse,
    FoodTruck,
    FastFood,
    Cafeteria,
    IceCreamShop,
    Bakery,
}

impl Cuisine {
    pub const ALL: [Cuisine; 30] = [
        Self::American,
        Self::Italian,
        Self::French,
        Self::Spanish,
        Self::Mexican,
        Self::Chinese,
        Self::Japanese,
        Self::Indian,
        Self::Thai,
        Self::Brazilian,
        Self::Portuguese,
        Self::Mediterranean,
        Self::Arabic,
        Self::Greek,
        Self::Korean,
        Self::Vietnamese,
        Self::Peruvian,
        Self::Argentinian,
        Self::Caribbean,
        Self::African,
        Self::Fusion,
        Self::VegetarianVegan,
        Self::Organic,
        Self::Seafood,
        Self::Steakhouse,
        Self::FoodTruck,
        Self::FastFood,
        Self::Cafeteria,
        Self::IceCreamShop,
        Self::Bakery,
    ];

    /// Validate a raw tag
    ///
    /// Matching is case-insensitive; `"brazilian"` yields [`Cuisine::Brazilian`].
    pub fn new(raw: &str) -> ValidationResult<Self> {
        raw.parse()
            .map_err(|_| ValidationError::single("cuisine", messages::CUISINE))
    }

    /// Canonical tag (`FAST_FOOD`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::American => "AMERICAN",
            Self::Italian => "ITALIAN",
            Self::French => "FRENCH",
            Self::Spanish => "SPANISH",
            Self::Mexican => "MEXICAN",
            Self::Chinese => "CHINESE",
            Self::Japanese => "JAPANESE",
            Self::Indian => "INDIAN",
            Self::Thai => "THAI",
            Self::Brazilian => "BRAZILIAN",
            Self::Portuguese => "PORTUGUESE",
            Self::Mediterranean => "MEDITERRANEAN",
            Self::Arabic => "ARABIC",
            Self::Greek => "GREEK",
            Self::Korean => "KOREAN",
            Self::Vietnamese => "VIETNAMESE",
            Self::Peruvian => "PERUVIAN",
            Self::Argentinian => "ARGENTINIAN",
            Self::Caribbean => "CARIBBEAN",
            Self::African => "AFRICAN",
            Self::Fusion => "FUSION",
            Self::VegetarianVegan => "VEGETARIAN_VEGAN",
            Self::Organic => "ORGANIC",
            Self::Seafood => "SEAFOOD",
            Self::Steakhouse => "STEAKHOUSE",
            Self::FoodTruck => "FOOD_TRUCK",
            Self::FastFood => "FAST_FOOD",
            Self::Cafeteria => "CAFETERIA",
            Self::IceCreamShop => "ICE_CREAM_SHOP",
            Self::Bakery => "BAKERY",
        }
    }

    /// Display label (`FAST FOOD`)
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raised when text is not a recognized cuisine tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cuisine: {0}")]
pub struct UnknownCuisine(pub String);

impl FromStr for Cuisine {
    type Err = UnknownCuisine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cuisine| cuisine.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCuisine(s.to_string()))
    }
}
