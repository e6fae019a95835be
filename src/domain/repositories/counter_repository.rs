//! Repository trait for named sequence counters.

use crate::domain::entities::Counter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for atomically incremented sequences.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCounterRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Increments the sequence `name` and returns the new value.
    ///
    /// Creates the sequence on first use so that the first value returned is `1`.
    /// The read-modify-write happens in a single statement: concurrent callers
    /// never observe the same value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment(&self, name: &str) -> Result<i64, AppError>;

    /// Reads the sequence without modifying it.
    ///
    /// Returns `Ok(None)` if the sequence has never been incremented.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn current(&self, name: &str) -> Result<Option<Counter>, AppError>;
}
