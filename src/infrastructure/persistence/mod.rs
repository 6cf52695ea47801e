//! Concrete implementations of the URL repository trait.
//!
//! - [`PgUrlRepository`] - PostgreSQL via SQLx
//! - [`MemoryUrlRepository`] - in-process store for tests and local dev

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
