//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{CreateOutcome, MappingStore, StoreError};

/// PostgreSQL store for mappings.
///
/// The conditional create is a single `INSERT ... ON CONFLICT (code) DO NOTHING`
/// statement, so the primary key constraint provides the atomicity guarantee
/// without a read-then-write round trip.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
}

impl PgMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    code: String,
    target_url: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.code, row.target_url, row.created_at)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn create_if_absent(&self, new_mapping: NewMapping) -> Result<CreateOutcome, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO mappings (code, target_url, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, target_url, created_at
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.target_url)
        .bind(new_mapping.created_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(match row {
            Some(row) => CreateOutcome::Created(row.into()),
            None => CreateOutcome::AlreadyExists,
        })
    }

    async fn get(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT code, target_url, created_at
            FROM mappings
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
