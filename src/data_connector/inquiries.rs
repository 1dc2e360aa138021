use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated lead submission, ready to persist. Ids and timestamps are
/// assigned by the storage backend, never by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    pub service: String,
    pub message: String,
}

/// Stored inquiry row. Append-only; rows are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    pub service: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn from_parts(id: i64, created_at: DateTime<Utc>, input: NewInquiry) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            postcode: input.postcode,
            service: input.service,
            message: input.message,
            created_at,
        }
    }
}

/// Result alias for inquiry storage operations
pub type Result<T> = std::result::Result<T, InquiryStorageError>;

/// Error type for inquiry storage operations
#[derive(Debug, thiserror::Error)]
pub enum InquiryStorageError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Trait describing the append interface for inquiry storage backends
#[async_trait]
pub trait InquiryStorage: Send + Sync + 'static {
    /// Atomically append one inquiry, assigning its id and creation timestamp.
    async fn insert(&self, input: NewInquiry) -> Result<Inquiry>;
}

/// Shared pointer alias for inquiry storage
pub type SharedInquiryStorage = Arc<dyn InquiryStorage>;
