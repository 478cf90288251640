// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for the Restaurant Registry
//!
//! Orchestrates domain validation, duplicate-name enforcement and the
//! persistence port.
//!
//! # Architecture
//!
//! ```text
//! Caller (CLI, import file)
//!     ↓
//! Commands (raw input → validated domain values)
//!     ↓
//! RestaurantService (this module)
//!     ↓
//! Restaurant aggregate + SearchIndex
//!     ↓
//! RestaurantRepository (memory | NATS KV)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use restaurant_registry::repository::InMemoryRestaurantRepository;
//! use restaurant_registry::service::{RegistryService, RestaurantQuery, RestaurantService};
//!
//! let service = RegistryService::new(InMemoryRestaurantRepository::new());
//! let id = service.create(details).await?;
//! let found = service.find_all_by(RestaurantQuery::new().named("boa")).await?;
//! ```

pub mod commands;
pub mod restaurant;

pub use commands::{AddressInput, OpeningHourInput, RegisterRestaurant, RestaurantQuery};
pub use restaurant::{RegistryService, RestaurantService};

use crate::domain::{DomainError, LogicalConstraintError, ValidationError};
use crate::errors::RepositoryError;

/// Service layer result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service layer errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// One or more field rules failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Valid fields in an invalid combination
    #[error("Logical constraint error: {0}")]
    LogicalConstraint(#[from] LogicalConstraintError),

    /// The request as a whole is unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Name already held by another restaurant
    #[error("Restaurant name already registered: {0}")]
    DuplicateName(String),

    /// Nothing found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage failure
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => ServiceError::Validation(e),
            DomainError::LogicalConstraint(e) => ServiceError::LogicalConstraint(e),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateName(name) => ServiceError::DuplicateName(name),
            other => ServiceError::Repository(other),
        }
    }
}
