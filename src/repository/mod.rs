// Copyright (c) 2025 - Cowboy AI, Inc.
//! Persistence port for restaurants
//!
//! The registry service only talks to [`RestaurantRepository`]. Adapters
//! store each restaurant together with its search string, recompute that
//! string on every save and enforce name uniqueness at save time.
//!
//! # Adapters
//!
//! - [`InMemoryRestaurantRepository`] - process-local, used by tests and the
//!   `memory` backend
//! - [`NatsKvRestaurantRepository`] - JetStream key-value bucket

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Restaurant, RestaurantId};
use crate::errors::RepositoryResult;
use crate::search::SearchCriteria;

pub mod keys;
pub mod memory;
pub mod nats_kv;
pub mod record;

pub use memory::InMemoryRestaurantRepository;
pub use nats_kv::NatsKvRestaurantRepository;
pub use record::RestaurantRecord;

/// Storage operations the registry needs
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Check whether a restaurant with exactly this name is stored
    async fn exists_by_name(&self, name: &str) -> RepositoryResult<bool>;

    /// Insert or replace a restaurant and its search string
    ///
    /// Fails with `DuplicateName` when a different restaurant holds the name.
    async fn save(&self, restaurant: &Restaurant) -> RepositoryResult<Restaurant>;

    async fn find_by_id(&self, id: &RestaurantId) -> RepositoryResult<Option<Restaurant>>;

    /// Every restaurant whose search string satisfies `criteria`
    async fn find_by_criteria(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<Restaurant>>;
}

#[async_trait]
impl<T> RestaurantRepository for Arc<T>
where
    T: RestaurantRepository + ?Sized,
{
    async fn exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        (**self).exists_by_name(name).await
    }

    async fn save(&self, restaurant: &Restaurant) -> RepositoryResult<Restaurant> {
        (**self).save(restaurant).await
    }

    async fn find_by_id(&self, id: &RestaurantId) -> RepositoryResult<Option<Restaurant>> {
        (**self).find_by_id(id).await
    }

    async fn find_by_criteria(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<Restaurant>> {
        (**self).find_by_criteria(criteria).await
    }
}
