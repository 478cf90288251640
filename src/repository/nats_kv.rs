// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS JetStream key-value restaurant storage
//!
//! Records and name claims live in one bucket (see [`super::keys`]). Saving
//! a restaurant first claims its name with a revision-checked `update`, so two
//! processes racing for the same name cannot both win.
//!
//! # Name claims
//!
//! ```text
//! no entry / deleted / purged  ──update(rev)──▶  claimed
//! claimed by a renamed record  ──update(rev)──▶  claimed (stale claim taken over)
//! claimed by a record with the name            ──▶  DuplicateName
//! ```
//!
//! A claim left behind by a rename whose release failed is recognised by
//! reading the owning record, so it never blocks the name for good.

use async_nats::jetstream::kv::{Operation, Store as KvStore};
use async_trait::async_trait;
use futures::TryStreamExt;
use tracing::{debug, info, warn};

use super::keys::{BucketKey, KeyKind};
use super::record::RestaurantRecord;
use super::RestaurantRepository;
use crate::domain::{Restaurant, RestaurantId};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::nats::NatsClient;
use crate::search::SearchCriteria;

/// Current state of one name claim entry
#[derive(Debug, Clone, PartialEq, Eq)]
enum ClaimState {
    /// Nothing live; a claim must update against `revision` (0 when never written)
    Vacant { revision: u64 },
    /// Held by a restaurant that carries the name, or is still being stored
    Held { owner: String },
    /// Held by a restaurant whose stored name is now different
    Stale { owner: String, revision: u64 },
}

fn kv_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::KvStore(err.to_string())
}

/// Restaurant storage backed by a KV bucket
#[derive(Clone)]
pub struct NatsKvRestaurantRepository {
    store: KvStore,
}

impl NatsKvRestaurantRepository {
    /// Wrap an already opened bucket
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Open (or create) `bucket` on the connected server
    pub async fn connect(client: &NatsClient, bucket: &str) -> RepositoryResult<Self> {
        let store = client.key_value(bucket).await?;
        info!(bucket, "Restaurant repository ready");
        Ok(Self::new(store))
    }

    async fn load(&self, key: &BucketKey) -> RepositoryResult<Option<RestaurantRecord>> {
        match self.store.get(key.to_string()).await {
            Ok(Some(entry)) => Ok(Some(serde_json::from_slice(&entry)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(kv_error(e)),
        }
    }

    async fn claim_state(&self, name: &str) -> RepositoryResult<ClaimState> {
        let key = BucketKey::name_claim(name);
        let entry = match self.store.entry(key.to_string()).await.map_err(kv_error)? {
            None => return Ok(ClaimState::Vacant { revision: 0 }),
            Some(entry) if entry.operation != Operation::Put => {
                return Ok(ClaimState::Vacant {
                    revision: entry.revision,
                })
            }
            Some(entry) => entry,
        };

        let owner = String::from_utf8_lossy(&entry.value).into_owned();
        let holder = match RestaurantId::parse(&owner) {
            Ok(id) => self.load(&BucketKey::record(&id)).await?,
            Err(_) => None,
        };

        match holder {
            Some(record) if record.name != name => Ok(ClaimState::Stale {
                owner,
                revision: entry.revision,
            }),
            _ => Ok(ClaimState::Held { owner }),
        }
    }

    /// Claim `name` for `id`
    ///
    /// Returns true when the claim was written by this call, false when `id`
    /// already held it.
    async fn claim_name(&self, name: &str, id: &RestaurantId) -> RepositoryResult<bool> {
        let owner = id.to_string();

        let revision = match self.claim_state(name).await? {
            ClaimState::Held { owner: holder } if holder == owner => return Ok(false),
            ClaimState::Held { .. } => {
                return Err(RepositoryError::DuplicateName(name.to_string()))
            }
            ClaimState::Stale {
                owner: holder,
                revision,
            } => {
                warn!(name, previous_owner = %holder, "Taking over stale name claim");
                revision
            }
            ClaimState::Vacant { revision } => revision,
        };

        let key = BucketKey::name_claim(name).to_string();
        match self.store.update(key, owner.into_bytes().into(), revision).await {
            Ok(_) => Ok(true),
            Err(e) => match self.claim_state(name).await? {
                // lost the race to another writer
                ClaimState::Held { .. } => Err(RepositoryError::DuplicateName(name.to_string())),
                _ => Err(kv_error(e)),
            },
        }
    }

    async fn release_name(&self, name: &str) -> RepositoryResult<()> {
        let key = BucketKey::name_claim(name).to_string();
        self.store.purge(key).await.map_err(kv_error)
    }
}

#[async_trait]
impl RestaurantRepository for NatsKvRestaurantRepository {
    async fn exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        Ok(matches!(self.claim_state(name).await?, ClaimState::Held { .. }))
    }

    async fn save(&self, restaurant: &Restaurant) -> RepositoryResult<Restaurant> {
        let record_key = BucketKey::record(&restaurant.id());
        let previous = self.load(&record_key).await?;

        let fresh_claim = self.claim_name(restaurant.name(), &restaurant.id()).await?;

        let record = RestaurantRecord::from_restaurant(restaurant);
        let payload = serde_json::to_vec(&record)?;
        if let Err(e) = self.store.put(record_key.to_string(), payload.into()).await {
            if fresh_claim {
                if let Err(release) = self.release_name(restaurant.name()).await {
                    return Err(kv_error(format!(
                        "{e}; releasing name claim also failed: {release}"
                    )));
                }
            }
            return Err(kv_error(e));
        }

        if let Some(previous) = previous {
            if previous.name != restaurant.name() {
                // a claim left in place is recognised as stale on the next claim
                if let Err(e) = self.release_name(&previous.name).await {
                    warn!(name = %previous.name, error = %e, "Old name claim left in place");
                }
            }
        }

        debug!(
            restaurant_id = %restaurant.id(),
            search_index = %record.search_index,
            "Stored restaurant record"
        );

        Ok(restaurant.clone())
    }

    async fn find_by_id(&self, id: &RestaurantId) -> RepositoryResult<Option<Restaurant>> {
        self.load(&BucketKey::record(id))
            .await?
            .map(RestaurantRecord::into_restaurant)
            .transpose()
    }

    async fn find_by_criteria(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<Restaurant>> {
        let keys: Vec<String> = self
            .store
            .keys()
            .await
            .map_err(kv_error)?
            .try_collect()
            .await
            .map_err(kv_error)?;

        let mut record_keys: Vec<BucketKey> = keys
            .iter()
            .filter_map(|raw| BucketKey::parse(raw))
            .filter(|key| key.kind() == KeyKind::Record)
            .collect();
        record_keys.sort_by(|a, b| a.token().cmp(b.token()));

        let mut matches = Vec::new();
        for key in &record_keys {
            // deleted between listing and reading
            let Some(record) = self.load(key).await? else {
                continue;
            };
            if criteria.matches(&record.search_index) {
                matches.push(record.into_restaurant()?);
            }
        }

        debug!(
            criteria = %criteria,
            scanned = record_keys.len(),
            matched = matches.len(),
            "Scanned restaurant records"
        );

        Ok(matches)
    }
}
