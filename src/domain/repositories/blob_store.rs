//! Blob-store trait for QR code image uploads.

use crate::error::AppError;
use async_trait::async_trait;

/// Upload-by-key interface over the hosted blob store's `qrs` bucket.
///
/// Unlike the relational operations, a failed upload propagates the storage
/// backend's own message via [`AppError::Storage`] rather than a fixed
/// generic one.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::HttpBlobStore`] - hosted storage REST API
/// - [`crate::infrastructure::storage::MemoryBlobStore`] - in-process store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads `bytes` under `file_name` and returns the public URL of the
    /// stored object.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] with the backend's message on failure.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError>;
}
