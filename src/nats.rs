//! NATS client used by the key-value repository

use async_nats::jetstream::{self, kv};
use async_nats::{Client, ConnectOptions};
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::{RepositoryError, RepositoryResult};

/// Configuration for NATS connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatsConfig {
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Client name
    pub name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            name: "restaurant-registry".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Connected NATS client with JetStream access
#[derive(Clone)]
pub struct NatsClient {
    client: Client,
    jetstream: jetstream::Context,
}

impl NatsClient {
    /// Connect with the given configuration
    pub async fn new(config: NatsConfig) -> RepositoryResult<Self> {
        let connect_options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout)
            .request_timeout(Some(config.request_timeout));

        let client = async_nats::connect_with_options(config.servers.join(","), connect_options)
            .await
            .map_err(|e| RepositoryError::NatsConnection(e.to_string()))?;

        info!(servers = ?config.servers, "Connected to NATS");

        let jetstream = jetstream::new(client.clone());
        Ok(Self { client, jetstream })
    }

    /// Open a key-value bucket, creating it on first use
    ///
    /// The bucket keeps one revision per key.
    pub async fn key_value(&self, bucket: &str) -> RepositoryResult<kv::Store> {
        if let Ok(store) = self.jetstream.get_key_value(bucket).await {
            debug!(bucket, "Opened existing KV bucket");
            return Ok(store);
        }

        let store = self
            .jetstream
            .create_key_value(kv::Config {
                bucket: bucket.to_string(),
                history: 1,
                ..Default::default()
            })
            .await
            .map_err(|e| RepositoryError::KvStore(e.to_string()))?;

        info!(bucket, "Created KV bucket");
        Ok(store)
    }

    /// Get the underlying NATS client for advanced operations
    pub fn inner(&self) -> &Client {
        &self.client
    }
}
