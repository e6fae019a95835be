//! PostgreSQL implementation of the counter repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Counter;
use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// PostgreSQL repository for named sequences.
///
/// Increments are a single upsert so concurrent callers serialize on the row lock.
pub struct PgCounterRepository {
    pool: Arc<PgPool>,
}

impl PgCounterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CounterRow {
    name: String,
    seq: i64,
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    async fn increment(&self, name: &str) -> Result<i64, AppError> {
        let seq = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO counters (name, seq)
            VALUES ($1, 1)
            ON CONFLICT (name) DO UPDATE SET seq = counters.seq + 1
            RETURNING seq
            "#,
        )
        .bind(name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(seq)
    }

    async fn current(&self, name: &str) -> Result<Option<Counter>, AppError> {
        let row = sqlx::query_as::<_, CounterRow>("SELECT name, seq FROM counters WHERE name = $1")
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(|r| Counter::new(r.name, r.seq)))
    }
}
