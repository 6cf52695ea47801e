//! Error taxonomy for repository and storage operations.
//!
//! Each repository operation surfaces a single fixed message on failure; the
//! backend's own detail is logged at the call site and never propagated, so a
//! caller cannot distinguish "not found" from "backend down". Blob-store
//! failures are the exception: they carry the storage backend's message
//! verbatim.

use thiserror::Error;

/// Application-level error returned by repository and service operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Listing a user's URLs failed.
    #[error("Unable to load URLs")]
    LoadUrls,

    /// Deleting a URL by id failed.
    #[error("Unable to delete URL")]
    DeleteUrl,

    /// Inserting a new URL row failed.
    #[error("Error creating short URL")]
    CreateUrl,

    /// Resolving a short or custom code failed: backend error, zero matches,
    /// or more than one match.
    #[error("Error fetching short link")]
    FetchShortLink,

    /// Lookup by id and owner matched nothing.
    #[error("Short URL not found")]
    UrlNotFound,

    /// Blob upload failed. Carries the storage backend's own message.
    #[error("{0}")]
    Storage(String),

    /// Short-code generation exhausted its retry budget without finding a
    /// free code.
    #[error("Could not find a free short code after {attempts} attempts")]
    CodeExhausted { attempts: usize },

    /// Input rejected before any backend round trip.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
