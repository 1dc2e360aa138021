use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::NoTls;

use super::inquiries::{Inquiry, InquiryStorage, InquiryStorageError, NewInquiry, Result};

const POOL_MAX: usize = 16;

/// Postgres-backed inquiry storage used in deployed environments.
pub struct PostgresInquiryStorage {
    pool: Pool,
}

impl PostgresInquiryStorage {
    /// Build the connection pool and make sure the inquiries table exists.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pg_config = tokio_postgres::Config::from_str(database_url)
            .map_err(|e| InquiryStorageError::StorageError(e.to_string()))?;
        let mgr_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };
        let mgr = Manager::from_config(pg_config, NoTls, mgr_config);
        let pool = Pool::builder(mgr)
            .max_size(POOL_MAX)
            .build()
            .map_err(|e| InquiryStorageError::StorageError(e.to_string()))?;

        let storage = Self { pool };
        storage.initialize_schema().await?;
        Ok(storage)
    }

    async fn initialize_schema(&self) -> Result<()> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| InquiryStorageError::StorageError(e.to_string()))?;
        client
            .batch_execute(
                "
            CREATE TABLE IF NOT EXISTS inquiries (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                postcode TEXT,
                service TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );",
            )
            .await
            .map_err(|e| InquiryStorageError::StorageError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl InquiryStorage for PostgresInquiryStorage {
    async fn insert(&self, input: NewInquiry) -> Result<Inquiry> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| InquiryStorageError::StorageError(e.to_string()))?;
        let row = client
            .query_one(
                "INSERT INTO inquiries (name, email, phone, postcode, service, message)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 RETURNING id, created_at",
                &[
                    &input.name,
                    &input.email,
                    &input.phone,
                    &input.postcode,
                    &input.service,
                    &input.message,
                ],
            )
            .await
            .map_err(|e| InquiryStorageError::StorageError(e.to_string()))?;

        let id: i64 = row
            .try_get(0)
            .map_err(|e| InquiryStorageError::StorageError(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get(1)
            .map_err(|e| InquiryStorageError::StorageError(e.to_string()))?;

        Ok(Inquiry::from_parts(id, created_at, input))
    }
}
