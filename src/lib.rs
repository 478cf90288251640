//! Restaurant registry
//!
//! Registers restaurants (address, weekly opening hours, table count, cuisine
//! tags) and answers multi-criteria searches over a denormalized search
//! string, without a search engine.
//!
//! - [`domain`]: self-validating value objects and the restaurant aggregate
//! - [`search`]: search string builder and criteria matcher
//! - [`repository`]: persistence port with in-memory and NATS KV adapters
//! - [`service`]: caller-facing operations and duplicate-name enforcement
//! - [`config`], [`nats`], [`errors`]: infrastructure plumbing

pub mod config;
pub mod domain;
pub mod errors;
pub mod nats;
pub mod repository;
pub mod search;
pub mod service;

// Re-export commonly used types
pub use config::{RegistryConfig, StorageBackend};
pub use domain::{
    Address, Cuisine, DayOfWeek, DomainError, OpeningHour, Restaurant, RestaurantDetails,
    RestaurantId, State,
};
pub use errors::{RepositoryError, RepositoryResult};
pub use nats::{NatsClient, NatsConfig};
pub use repository::{InMemoryRestaurantRepository, NatsKvRestaurantRepository, RestaurantRepository};
pub use search::{SearchCriteria, SearchIndex};
pub use service::{
    RegisterRestaurant, RegistryService, RestaurantQuery, RestaurantService, ServiceError,
    ServiceResult,
};
