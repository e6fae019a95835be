//! DNS-backed implementation of [`crate::domain::HostResolver`].

mod system_resolver;

pub use system_resolver::SystemResolver;
