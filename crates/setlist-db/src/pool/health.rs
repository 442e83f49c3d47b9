//! Readiness probe for the PostgreSQL backend

use async_trait::async_trait;
use setlist_core::traits::{RepoResult, StorageHealth};
use sqlx::PgPool;

use crate::repositories::map_db_error;

#[derive(Clone)]
pub struct PgStorageHealth {
    pool: PgPool,
}

impl PgStorageHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageHealth for PgStorageHealth {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
