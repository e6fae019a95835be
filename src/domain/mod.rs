//! Domain layer containing business entities and ports.
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`host_resolver`] - Host reachability trait
//!
//! Business flows live in [`crate::application::services`].

pub mod entities;
pub mod host_resolver;
pub mod repositories;

pub use host_resolver::{HostResolver, ResolvedHost};

#[cfg(test)]
pub use host_resolver::MockHostResolver;
