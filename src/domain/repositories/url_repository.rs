//! Repository trait for short URL mappings.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for immutable short URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if `short` is already taken.
    /// Returns [`AppError::Storage`] on database errors.
    async fn save(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds every mapping whose short code matches `short_code`.
    ///
    /// The code is compared against the decimal rendering of the stored value,
    /// so only canonical codes match (see [`crate::domain::entities::parse_short_code`]).
    /// Returns an empty vector when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Vec<ShortUrl>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists the most recently created mappings, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError>;
}
