// Copyright (c) 2025 - Cowboy AI, Inc.
//! Registry configuration
//!
//! Loaded from environment variables:
//!
//! | Variable | Default |
//! |---|---|
//! | `REGISTRY_BACKEND` | `memory` (or `nats`) |
//! | `NATS_URL` | `nats://localhost:4222` (comma separated list allowed) |
//! | `NATS_CLIENT_NAME` | `restaurant-registry` |
//! | `REGISTRY_BUCKET` | `RESTAURANTS` |
//! | `NATS_CONNECT_TIMEOUT_SECS` | `10` |
//! | `NATS_REQUEST_TIMEOUT_SECS` | `5` |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{RepositoryError, RepositoryResult};
use crate::nats::NatsConfig;

/// Default KV bucket holding restaurant records
pub const DEFAULT_BUCKET: &str = "RESTAURANTS";

/// Where restaurants are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local map, lost on exit
    #[default]
    Memory,
    /// NATS JetStream key-value bucket
    Nats,
}

impl FromStr for StorageBackend {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "nats" => Ok(Self::Nats),
            other => Err(RepositoryError::Configuration(format!(
                "REGISTRY_BACKEND must be 'memory' or 'nats', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Nats => write!(f, "nats"),
        }
    }
}

/// Settings for one registry process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub backend: StorageBackend,
    pub nats: NatsConfig,
    pub bucket: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            nats: NatsConfig::default(),
            bucket: DEFAULT_BUCKET.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> RepositoryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> RepositoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let backend = match lookup("REGISTRY_BACKEND") {
            Some(raw) => raw.parse()?,
            None => defaults.backend,
        };

        let servers = match lookup("NATS_URL") {
            Some(raw) => {
                let servers: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if servers.is_empty() {
                    return Err(RepositoryError::Configuration(
                        "NATS_URL must name at least one server".to_string(),
                    ));
                }
                servers
            }
            None => defaults.nats.servers,
        };

        let nats = NatsConfig {
            servers,
            name: lookup("NATS_CLIENT_NAME").unwrap_or(defaults.nats.name),
            connect_timeout: seconds(&lookup, "NATS_CONNECT_TIMEOUT_SECS", defaults.nats.connect_timeout)?,
            request_timeout: seconds(&lookup, "NATS_REQUEST_TIMEOUT_SECS", defaults.nats.request_timeout)?,
        };

        let bucket = lookup("REGISTRY_BUCKET").unwrap_or(defaults.bucket);
        if bucket.is_empty() {
            return Err(RepositoryError::Configuration(
                "REGISTRY_BUCKET must not be empty".to_string(),
            ));
        }

        Ok(Self {
            backend,
            nats,
            bucket,
        })
    }
}

fn seconds<F>(lookup: &F, key: &str, default: Duration) -> RepositoryResult<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
            RepositoryError::Configuration(format!("{key} must be a whole number of seconds, got '{raw}'"))
        }),
        None => Ok(default),
    }
}
