//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCounterRepository`] - Atomic sequence counters
//! - [`PgUrlRepository`] - Short URL mapping storage

pub mod pg_counter_repository;
pub mod pg_url_repository;

pub use pg_counter_repository::PgCounterRepository;
pub use pg_url_repository::PgUrlRepository;
