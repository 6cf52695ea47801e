//! Repository trait for shortened-URL data access.

use crate::domain::entities::{NewUrl, ResolvedUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Capability interface over the hosted relational store's `urls` table.
///
/// Each operation is a single round trip with no client-side locking or
/// ordering between calls; callers may issue operations concurrently. Backend
/// failure detail is logged by implementations and collapsed into the fixed
/// per-operation [`AppError`] variant, so "not found" and "backend down" are
/// indistinguishable to the caller by design.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process
///   store for tests and local development
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Lists every URL owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LoadUrls`] on any backend error.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<UrlRecord>, AppError>;

    /// Deletes the URL with the given id. Deleting an id that does not exist
    /// is a no-op acknowledged by the backend, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeleteUrl`] on any backend error.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Inserts a new row with the already-chosen short code and QR public
    /// URL, returning the created record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CreateUrl`] if the insert fails, including when
    /// the store's uniqueness constraint rejects the short or custom code.
    async fn insert(
        &self,
        new_url: NewUrl,
        short_url: String,
        qr: String,
    ) -> Result<UrlRecord, AppError>;

    /// Resolves a short or custom code to its target, expecting exactly one
    /// match across the `short_url` and `custom_url` columns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchShortLink`] on zero matches, more than one
    /// match, or any backend error.
    async fn resolve_short_url(&self, code: &str) -> Result<ResolvedUrl, AppError>;

    /// Fetches a single URL by id, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlNotFound`] if no row matches the id, the owner
    /// does not match, or the backend fails.
    async fn get_by_id_for_user(&self, id: i64, user_id: &str) -> Result<UrlRecord, AppError>;

    /// Reports whether `code` is already taken as either a short or a custom
    /// code. Supports the bounded-retry code generation in the service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CreateUrl`] on any backend error.
    async fn short_code_exists(&self, code: &str) -> Result<bool, AppError>;
}
