//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl, parse_short_code};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for short URL mappings.
///
/// Uniqueness of `short` is enforced by the `short_urls_short_key` constraint.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    original: String,
    short: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl::new(r.id, r.original, r.short, r.created_at)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (original, short)
            VALUES ($1, $2)
            RETURNING id, original, short, created_at
            "#,
        )
        .bind(&new_url.original)
        .bind(new_url.short)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Vec<ShortUrl>, AppError> {
        // Non-canonical codes can never equal a stored value.
        let Some(short) = parse_short_code(short_code) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original, short, created_at
            FROM short_urls
            WHERE short = $1
            ORDER BY id
            "#,
        )
        .bind(short)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original, short, created_at
            FROM short_urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }
}
