// Factory function to create the inquiry storage backend from configuration.

use std::sync::Arc;

use log::info;

use super::{
    inquiries::{InquiryStorageError, Result, SharedInquiryStorage},
    inquiry_memory_store::MemoryInquiryStorage,
    inquiry_postgres_store::PostgresInquiryStorage,
};
use crate::config::{GatewayConfig, PersistenceBackend};

/// Create the inquiry storage backend selected by the configuration.
/// Callers receive the same trait object either way and cannot tell which
/// backend is active.
pub async fn create_inquiry_storage(config: &GatewayConfig) -> Result<SharedInquiryStorage> {
    match config.persistence_backend {
        PersistenceBackend::Memory => {
            info!("Initializing inquiry storage: memory");
            Ok(Arc::new(MemoryInquiryStorage::new()))
        }
        PersistenceBackend::Postgres => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                InquiryStorageError::StorageError(
                    "database_url is required when persistence_backend=postgres".to_string(),
                )
            })?;
            info!("Initializing inquiry storage: postgres");
            let storage = PostgresInquiryStorage::connect(url).await?;
            info!("Inquiry storage initialized successfully: postgres");
            Ok(Arc::new(storage))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_builds_without_database() {
        let config = GatewayConfig::default();
        assert!(create_inquiry_storage(&config).await.is_ok());
    }

    #[tokio::test]
    async fn postgres_backend_without_url_is_an_error() {
        let config = GatewayConfig {
            persistence_backend: PersistenceBackend::Postgres,
            database_url: None,
            ..GatewayConfig::default()
        };
        assert!(create_inquiry_storage(&config).await.is_err());
    }
}
