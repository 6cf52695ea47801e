//! Orchestration of the URL repository facade operations.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::domain::entities::{NewUrl, ResolvedUrl, UrlRecord};
use crate::domain::repositories::{BlobStore, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};

/// How many random codes creation will try before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Service over the hosted store and blob store.
///
/// Four of the five operations are straight passthroughs to the repository;
/// creation adds validation, bounded short-code generation, and the QR blob
/// upload that must succeed before any row is inserted.
pub struct UrlService<R: UrlRepository, B: BlobStore> {
    url_repository: Arc<R>,
    blob_store: Arc<B>,
}

impl<R: UrlRepository, B: BlobStore> UrlService<R, B> {
    /// Creates a new URL service.
    pub fn new(url_repository: Arc<R>, blob_store: Arc<B>) -> Self {
        Self {
            url_repository,
            blob_store,
        }
    }

    /// Lists every URL owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LoadUrls`] on any backend error.
    pub async fn list_urls(&self, user_id: &str) -> Result<Vec<UrlRecord>, AppError> {
        self.url_repository.list_by_user(user_id).await
    }

    /// Deletes the URL with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeleteUrl`] on any backend error.
    pub async fn delete_url(&self, id: i64) -> Result<(), AppError> {
        self.url_repository.delete_by_id(id).await
    }

    /// Resolves a short or custom code to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchShortLink`] unless exactly one row matches.
    pub async fn resolve(&self, code: &str) -> Result<ResolvedUrl, AppError> {
        self.url_repository.resolve_short_url(code).await
    }

    /// Fetches a single URL by id, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlNotFound`] on no match or ownership mismatch.
    pub async fn get_url(&self, id: i64, user_id: &str) -> Result<UrlRecord, AppError> {
        self.url_repository.get_by_id_for_user(id, user_id).await
    }

    /// Creates a shortened URL.
    ///
    /// The caller supplies the QR image bytes (see
    /// [`crate::utils::qr::generate_png`]). The blob is uploaded as
    /// `qr-{short_code}` before the row is inserted, so an upload failure
    /// leaves no orphaned metadata. An insert failure after a successful
    /// upload leaves an orphaned blob; there is no compensation step.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - unparseable long URL, malformed custom
    ///   alias, or an alias that is already taken
    /// - [`AppError::CodeExhausted`] - no free short code within
    ///   `MAX_CODE_ATTEMPTS` draws
    /// - [`AppError::Storage`] - blob upload failed (backend's own message)
    /// - [`AppError::CreateUrl`] - the insert itself failed
    pub async fn create_url(
        &self,
        new_url: NewUrl,
        qr_png: Vec<u8>,
    ) -> Result<UrlRecord, AppError> {
        Url::parse(&new_url.long_url)
            .map_err(|e| AppError::validation(format!("Invalid URL: {e}")))?;

        if let Some(custom) = &new_url.custom_url {
            validate_custom_code(custom)?;

            if self.url_repository.short_code_exists(custom).await? {
                return Err(AppError::validation("Custom alias is already taken"));
            }
        }

        let short_code = self.generate_unique_code().await?;

        let file_name = format!("qr-{short_code}");
        let qr = self.blob_store.upload(&file_name, qr_png).await?;
        debug!(%qr, "uploaded QR code");

        self.url_repository.insert(new_url, short_code, qr).await
    }

    /// Draws random 4-character codes until one is free in the store.
    ///
    /// Each draw is probed via `short_code_exists`; the store's uniqueness
    /// constraint still backstops the race between probe and insert.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code();

            if !self.url_repository.short_code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::CodeExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }
}
