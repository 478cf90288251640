// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant Domain Models
//!
//! Value objects and the restaurant aggregate. Everything here is immutable,
//! validates itself on construction and performs no I/O.
//!
//! # Value Objects with Invariants
//!
//! - [`RestaurantId`] - UUID identity
//! - [`Address`] - Postal address with length rules and a [`State`] code
//! - [`OpeningHour`] - Day of week plus a start/end window (end after start)
//! - [`Cuisine`] - Fixed cuisine taxonomy
//!
//! # Aggregate
//!
//! - [`Restaurant`] - Owns one address, its opening hours and cuisines
//!
//! # Errors
//!
//! Field rule failures are collected into a [`ValidationError`]; a broken
//! relationship between valid fields is a [`LogicalConstraintError`].

pub mod address;
pub mod cuisine;
pub mod invariants;
pub mod opening_hour;
pub mod restaurant;
pub mod restaurant_id;

pub use address::{Address, State};
pub use cuisine::Cuisine;
pub use invariants::{
    DomainError, FieldViolation, LogicalConstraintError, ValidationError, ValidationResult,
};
pub use opening_hour::{DayOfWeek, OpeningHour};
pub use restaurant::{Restaurant, RestaurantDetails};
pub use restaurant_id::RestaurantId;
