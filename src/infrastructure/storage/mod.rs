//! Concrete implementations of the blob store trait.
//!
//! - [`HttpBlobStore`] - hosted storage REST API
//! - [`MemoryBlobStore`] - in-process store for tests and local dev

pub mod http_blob_store;
pub mod memory_blob_store;

pub use http_blob_store::HttpBlobStore;
pub use memory_blob_store::MemoryBlobStore;
