//! Repository trait definitions for the domain layer.
//!
//! Traits here define the contracts for data access following the Repository
//! pattern; concrete implementations live in `crate::infrastructure`. Mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! - [`UrlRepository`] - shortened-URL CRUD and resolution
//! - [`BlobStore`] - QR image uploads

pub mod blob_store;
pub mod url_repository;

pub use blob_store::BlobStore;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use blob_store::MockBlobStore;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
