// Copyright (c) 2025 - Cowboy AI, Inc.
//! Search over stored restaurants
//!
//! ```text
//! Restaurant ──SearchIndex::build()──▶ search string (stored with the record)
//!                                            │
//! RestaurantQuery ──SearchCriteria──▶ matches(search string) ──▶ bool
//! ```
//!
//! Both halves are pure. Persistence adapters call them; nothing here touches
//! storage.

pub mod criteria;
pub mod index;

pub use criteria::SearchCriteria;
pub use index::{normalize, SearchIndex, SEGMENT_DELIMITER};
