//! Host resolution through the operating system resolver.

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tokio::time::timeout;

use crate::domain::{HostResolver, ResolvedHost};
use crate::error::AppError;

/// Resolves hosts with `getaddrinfo` via [`tokio::net::lookup_host`].
///
/// The host string is passed through unchanged, so a segment carrying a port
/// (`example.com:8080`) or userinfo is looked up as a literal name and fails.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    /// Creates a resolver that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> Result<ResolvedHost, AppError> {
        let mut addrs = match timeout(self.timeout, lookup_host((host, 0))).await {
            Ok(Ok(addrs)) => addrs,
            Ok(Err(e)) => return Err(AppError::unresolvable_host(host, e.to_string())),
            Err(_) => {
                return Err(AppError::unresolvable_host(
                    host,
                    format!("lookup timed out after {:?}", self.timeout),
                ));
            }
        };

        let resolved = addrs
            .next()
            .map(|addr| ResolvedHost::from(addr.ip()))
            .ok_or_else(|| AppError::unresolvable_host(host, "no addresses returned"))?;

        tracing::debug!(
            %host,
            address = %resolved.address,
            family = resolved.family,
            "Host resolved"
        );

        Ok(resolved)
    }
}
