// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory restaurant storage

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::RestaurantRepository;
use crate::domain::{Restaurant, RestaurantId};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::search::{SearchCriteria, SearchIndex};

/// Restaurants held in a shared map, ordered by id
///
/// Ids are time ordered, so listings come back in registration order.
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRestaurantRepository {
    entries: Arc<RwLock<BTreeMap<RestaurantId, (Restaurant, SearchIndex)>>>,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored restaurants
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Stored search string for a restaurant
    pub async fn search_index(&self, id: &RestaurantId) -> Option<SearchIndex> {
        self.entries.read().await.get(id).map(|(_, index)| index.clone())
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        let entries = self.entries.read().await;
        Ok(entries.values().any(|(r, _)| r.name() == name))
    }

    async fn save(&self, restaurant: &Restaurant) -> RepositoryResult<Restaurant> {
        let mut entries = self.entries.write().await;

        let taken = entries
            .values()
            .any(|(r, _)| r.name() == restaurant.name() && r.id() != restaurant.id());
        if taken {
            return Err(RepositoryError::DuplicateName(restaurant.name().to_string()));
        }

        let index = SearchIndex::build(restaurant);
        debug!(restaurant_id = %restaurant.id(), search_index = %index, "Stored restaurant in memory");
        entries.insert(restaurant.id(), (restaurant.clone(), index));

        Ok(restaurant.clone())
    }

    async fn find_by_id(&self, id: &RestaurantId) -> RepositoryResult<Option<Restaurant>> {
        let entries = self.entries.read().await;
        Ok(entries.get(id).map(|(r, _)| r.clone()))
    }

    async fn find_by_criteria(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<Restaurant>> {
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .filter(|(_, index)| criteria.matches(index))
            .map(|(r, _)| r.clone())
            .collect())
    }
}
