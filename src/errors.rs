//! Error types for persistence operations

use thiserror::Error;

/// Errors raised by repository adapters and their infrastructure
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Another restaurant already holds this name
    #[error("Restaurant name already registered: {0}")]
    DuplicateName(String),

    /// NATS connection error
    #[error("NATS connection error: {0}")]
    NatsConnection(String),

    /// Key-value bucket operation failed
    #[error("KV store error: {0}")]
    KvStore(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A stored record no longer satisfies the domain rules
    #[error("Corrupt record {id}: {reason}")]
    CorruptRecord { id: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for persistence operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}
