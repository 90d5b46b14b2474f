//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link storage and retrieval.
///
/// Queries are bound at runtime so the crate builds without a database
/// connection; the schema lives in `migrations/`. The `urls.url` unique
/// constraint is the arbiter for concurrent registrations — a violated
/// insert surfaces as [`AppError::Conflict`] and is recovered by the
/// service layer, never reported to callers.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_row(row: PgRow) -> Result<ShortLink, sqlx::Error> {
    Ok(ShortLink::new(
        row.try_get("id")?,
        row.try_get("url")?,
        row.try_get("created")?,
        row.try_get("accessed")?,
        row.try_get("hits")?,
    ))
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert(&self, url: &str, created_at: DateTime<Utc>) -> Result<i64, AppError> {
        let row = sqlx::query("INSERT INTO urls (url, created) VALUES ($1, $2) RETURNING id")
            .bind(url)
            .bind(created_at)
            .fetch_one(self.pool.as_ref())
            .await?;

        row.try_get("id").map_err(AppError::from)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query("SELECT id, url, created, accessed, hits FROM urls WHERE url = $1")
            .bind(url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(map_row).transpose().map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query("SELECT id, url, created, accessed, hits FROM urls WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(map_row).transpose().map_err(AppError::from)
    }

    async fn record_hit(&self, id: i64, accessed_at: DateTime<Utc>) -> Result<(), AppError> {
        // Zero affected rows means the record vanished; per contract this
        // is not an error.
        sqlx::query("UPDATE urls SET hits = hits + 1, accessed = $1 WHERE id = $2")
            .bind(accessed_at)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
