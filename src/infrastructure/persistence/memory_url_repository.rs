//! In-process implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use crate::domain::entities::{NewUrl, ResolvedUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// A URL repository backed by process memory.
///
/// Implements the same contract as the hosted store, including its
/// uniqueness constraint on short and custom codes and the newest-first
/// listing order.
///
/// # Use Cases
///
/// - Integration tests that need a real (non-mock) backend
/// - Local development without a database
pub struct MemoryUrlRepository {
    rows: Mutex<Vec<UrlRecord>>,
    next_id: AtomicI64,
}

impl MemoryUrlRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        debug!("Using MemoryUrlRepository (in-process store)");
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Stages a pre-built row without going through `insert`.
    ///
    /// Bypasses the uniqueness check on purpose: tests use this to reproduce
    /// states the hosted store can already contain (rows written by other
    /// clients, or degenerate data such as a short code of one row colliding
    /// with the custom alias of another).
    ///
    /// # Panics
    ///
    /// Panics if the repository lock is poisoned.
    pub fn seed(&self, record: UrlRecord) {
        let mut rows = self.rows.lock().expect("repository lock poisoned");

        let next = self.next_id.load(Ordering::Relaxed);
        if record.id >= next {
            self.next_id.store(record.id + 1, Ordering::Relaxed);
        }

        rows.push(record);
    }

    fn code_taken(rows: &[UrlRecord], code: &str) -> bool {
        rows.iter()
            .any(|r| r.short_url == code || r.custom_url.as_deref() == Some(code))
    }
}

impl Default for MemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<UrlRecord>, AppError> {
        let rows = self.rows.lock().map_err(|_| AppError::LoadUrls)?;

        let mut urls: Vec<UrlRecord> = rows
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        // Newest first, matching the hosted store's ORDER BY created_at DESC;
        // id breaks ties for rows stamped in the same instant.
        urls.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(urls)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.lock().map_err(|_| AppError::DeleteUrl)?;
        rows.retain(|r| r.id != id);
        Ok(())
    }

    async fn insert(
        &self,
        new_url: NewUrl,
        short_url: String,
        qr: String,
    ) -> Result<UrlRecord, AppError> {
        let mut rows = self.rows.lock().map_err(|_| AppError::CreateUrl)?;

        // Uniqueness constraint across both code columns, as in the store.
        if Self::code_taken(&rows, &short_url) {
            return Err(AppError::CreateUrl);
        }
        if let Some(custom) = &new_url.custom_url {
            if Self::code_taken(&rows, custom) {
                return Err(AppError::CreateUrl);
            }
        }

        let record = UrlRecord::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_url.title,
            new_url.long_url,
            short_url,
            new_url.custom_url,
            qr,
            new_url.user_id,
            Utc::now(),
        );

        rows.push(record.clone());
        Ok(record)
    }

    async fn resolve_short_url(&self, code: &str) -> Result<ResolvedUrl, AppError> {
        let rows = self.rows.lock().map_err(|_| AppError::FetchShortLink)?;

        let matches: Vec<&UrlRecord> = rows
            .iter()
            .filter(|r| r.short_url == code || r.custom_url.as_deref() == Some(code))
            .collect();

        match matches.as_slice() {
            [row] => Ok(ResolvedUrl {
                id: row.id,
                original_url: row.original_url.clone(),
            }),
            _ => Err(AppError::FetchShortLink),
        }
    }

    async fn get_by_id_for_user(&self, id: i64, user_id: &str) -> Result<UrlRecord, AppError> {
        let rows = self.rows.lock().map_err(|_| AppError::UrlNotFound)?;

        rows.iter()
            .find(|r| r.id == id && r.user_id == user_id)
            .cloned()
            .ok_or(AppError::UrlNotFound)
    }

    async fn short_code_exists(&self, code: &str) -> Result<bool, AppError> {
        let rows = self.rows.lock().map_err(|_| AppError::CreateUrl)?;
        Ok(Self::code_taken(&rows, code))
    }
}
