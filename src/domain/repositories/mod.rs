//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by concrete
//! repositories in the infrastructure layer.
//!
//! # Available Repositories
//!
//! - [`CounterRepository`] - Atomic sequence counters
//! - [`UrlRepository`] - Short URL mapping storage
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod counter_repository;
pub mod url_repository;

pub use counter_repository::CounterRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use counter_repository::MockCounterRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
