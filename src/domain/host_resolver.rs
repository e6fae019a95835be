//! Host reachability port.

use crate::error::AppError;
use async_trait::async_trait;
use std::net::IpAddr;

/// First address returned for a resolved host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHost {
    pub address: IpAddr,
    /// IP family, `4` or `6`.
    pub family: u8,
}

impl From<IpAddr> for ResolvedHost {
    fn from(address: IpAddr) -> Self {
        let family = match address {
            IpAddr::V4(_) => 4,
            IpAddr::V6(_) => 6,
        };
        Self { address, family }
    }
}

/// Resolves host names to check that a submitted URL points somewhere real.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - OS resolver via Tokio
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` and returns its first address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnresolvableHost`] if the lookup fails, times out or
    /// yields no addresses.
    async fn lookup(&self, host: &str) -> Result<ResolvedHost, AppError>;
}
