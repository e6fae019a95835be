//! Short URL creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{Counter, NewShortUrl, SHORT_URL_SEQUENCE, ShortUrl};
use crate::domain::HostResolver;
use crate::domain::repositories::{CounterRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::host::extract_host;
use crate::utils::url_validator::is_valid_format;

/// Service for creating and resolving sequential short URLs.
///
/// Creation is a linear pipeline: format check, host resolution, counter
/// increment, store write. The first failing step ends the pipeline; nothing is
/// written unless the URL passed both checks.
pub struct ShortUrlService {
    counter_repository: Arc<dyn CounterRepository>,
    url_repository: Arc<dyn UrlRepository>,
    resolver: Arc<dyn HostResolver>,
}

impl ShortUrlService {
    /// Creates a new short URL service.
    pub fn new(
        counter_repository: Arc<dyn CounterRepository>,
        url_repository: Arc<dyn UrlRepository>,
        resolver: Arc<dyn HostResolver>,
    ) -> Self {
        Self {
            counter_repository,
            url_repository,
            resolver,
        }
    }

    /// Validates `original` and assigns it the next short code.
    ///
    /// The same URL submitted twice gets two distinct codes.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is malformed
    /// - [`AppError::UnresolvableHost`] if its host does not resolve
    /// - [`AppError::Storage`] / [`AppError::DuplicateKey`] if persisting fails
    pub async fn create_short_url(&self, original: &str) -> Result<ShortUrl, AppError> {
        if !is_valid_format(original) {
            return Err(AppError::validation(format!(
                "`{original}` is not an absolute http(s) URL"
            )));
        }
        debug!("Valid URL format");

        let host = extract_host(original)
            .ok_or_else(|| AppError::validation("URL has no host segment"))?;

        let resolved = self.resolver.lookup(host).await?;
        debug!(
            %host,
            address = %resolved.address,
            family = resolved.family,
            "Posted URL is reachable"
        );

        let short = self.counter_repository.increment(SHORT_URL_SEQUENCE).await?;

        let short_url = self
            .url_repository
            .save(NewShortUrl {
                original: original.to_string(),
                short,
            })
            .await?;

        info!(short = short_url.short, original = %short_url.original, "New short URL");

        Ok(short_url)
    }

    /// Looks up the mapping for `short_code`.
    ///
    /// If the store returns several records, the first one wins.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no mapping matches
    /// - [`AppError::Storage`] on database errors
    pub async fn resolve(&self, short_code: &str) -> Result<ShortUrl, AppError> {
        let records = self.url_repository.find_by_short_code(short_code).await?;
        debug!(short_code, matches = records.len(), "Short URL lookup");

        records
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(short_code))
    }

    /// Returns the state of the short URL sequence.
    ///
    /// Doubles as a storage connectivity probe for the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn sequence_state(&self) -> Result<Option<Counter>, AppError> {
        self.counter_repository.current(SHORT_URL_SEQUENCE).await
    }
}
