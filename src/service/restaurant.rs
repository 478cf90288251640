// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant Registry Service
//!
//! Caller-facing operations over the persistence port.
//!
//! # Operation Semantics
//!
//! ```text
//! create      details ──validate──▶ name free? ──▶ register ──▶ save ──▶ id
//! find_by_id  text id ──parse──▶ load ──▶ restaurant | NotFound
//! find_all_by query ──criteria──▶ any filter? ──▶ scan ──▶ matches | NotFound
//! replace     text id + details ──▶ load ──▶ name free? ──▶ revise ──▶ save
//! ```
//!
//! The name check is a fast path. Adapters enforce uniqueness again at save
//! time, and their conflict maps to the same [`ServiceError::DuplicateName`].

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::commands::RestaurantQuery;
use super::{ServiceError, ServiceResult};
use crate::domain::{Restaurant, RestaurantDetails, RestaurantId};
use crate::repository::RestaurantRepository;

/// Restaurant registry operations
#[async_trait]
pub trait RestaurantService: Send + Sync {
    /// Register a new restaurant
    ///
    /// # Returns
    /// - Id assigned to the new restaurant
    ///
    /// # Errors
    /// - `Validation` when a field rule fails
    /// - `DuplicateName` when the name is already registered
    async fn create(&self, details: RestaurantDetails) -> ServiceResult<RestaurantId>;

    /// Load one restaurant by its textual id
    async fn find_by_id(&self, id: &str) -> ServiceResult<Restaurant>;

    /// Search restaurants by optional name, location and cuisines
    ///
    /// At least one filter is required, and an empty result is `NotFound`.
    async fn find_all_by(&self, query: RestaurantQuery) -> ServiceResult<Vec<Restaurant>>;

    /// Replace the attributes of an existing restaurant
    ///
    /// Id and registration timestamp are kept and the search string is
    /// rebuilt.
    async fn replace(&self, id: &str, details: RestaurantDetails) -> ServiceResult<Restaurant>;
}

/// [`RestaurantService`] over any repository adapter
pub struct RegistryService<R> {
    repository: R,
}

impl<R: RestaurantRepository> RegistryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    async fn ensure_name_free(&self, name: &str) -> ServiceResult<()> {
        if self.repository.exists_by_name(name).await? {
            warn!(name, "Rejected duplicate restaurant name");
            return Err(ServiceError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    async fn load(&self, id: &RestaurantId) -> ServiceResult<Restaurant> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("restaurant {id}")))
    }
}

#[async_trait]
impl<R: RestaurantRepository> RestaurantService for RegistryService<R> {
    async fn create(&self, details: RestaurantDetails) -> ServiceResult<RestaurantId> {
        details.validate()?;
        self.ensure_name_free(&details.name).await?;

        let restaurant = Restaurant::register(details)?;
        let saved = self.repository.save(&restaurant).await?;

        info!(
            restaurant_id = %saved.id(),
            name = %saved.name(),
            "Restaurant registered"
        );

        Ok(saved.id())
    }

    async fn find_by_id(&self, id: &str) -> ServiceResult<Restaurant> {
        let id = RestaurantId::parse(id)?;
        self.load(&id).await
    }

    async fn find_all_by(&self, query: RestaurantQuery) -> ServiceResult<Vec<Restaurant>> {
        let criteria = query.to_criteria()?;
        if criteria.is_unconstrained() {
            return Err(ServiceError::InvalidArgument(
                "at least one of name, location or cuisines must be given".to_string(),
            ));
        }

        let found = self.repository.find_by_criteria(&criteria).await?;
        debug!(criteria = %criteria, matched = found.len(), "Restaurant search finished");

        if found.is_empty() {
            return Err(ServiceError::NotFound(format!("no restaurant matches {criteria}")));
        }
        Ok(found)
    }

    async fn replace(&self, id: &str, details: RestaurantDetails) -> ServiceResult<Restaurant> {
        let id = RestaurantId::parse(id)?;
        details.validate()?;

        let current = self.load(&id).await?;
        if details.name != current.name() {
            self.ensure_name_free(&details.name).await?;
        }

        let revised = current.revise(details)?;
        let saved = self.repository.save(&revised).await?;

        info!(
            restaurant_id = %saved.id(),
            name = %saved.name(),
            "Restaurant replaced"
        );

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Cuisine};
    use crate::repository::InMemoryRestaurantRepository;

    fn details(name: &str) -> RestaurantDetails {
        RestaurantDetails {
            name: name.to_string(),
            address: Address::new("Rua da Aurora", 15, None, "Boa Vista", "Recife", "PE").unwrap(),
            opening_hours: Vec::new(),
            cuisines: vec![Cuisine::Italian],
            tables: 6,
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let service = RegistryService::new(InMemoryRestaurantRepository::new());
        let id = service.create(details("Cantina Nona")).await.unwrap();

        let found = service.find_by_id(&id.to_string()).await.unwrap();
        assert_eq!(found.id(), id);
        assert_eq!(found.name(), "Cantina Nona");
    }

    #[tokio::test]
    async fn test_create_invalid_details_saves_nothing() {
        let repository = InMemoryRestaurantRepository::new();
        let service = RegistryService::new(repository.clone());

        let result = service.create(details("AB")).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_by_malformed_id() {
        let service = RegistryService::new(InMemoryRestaurantRepository::new());
        let result = service.find_by_id("not-a-uuid").await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_find_by_unknown_id() {
        let service = RegistryService::new(InMemoryRestaurantRepository::new());
        let result = service.find_by_id(&RestaurantId::generate().to_string()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_replace_unknown_id() {
        let service = RegistryService::new(InMemoryRestaurantRepository::new());
        let result = service
            .replace(&RestaurantId::generate().to_string(), details("Cantina Nona"))
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
