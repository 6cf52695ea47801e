//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;

use crate::domain::entities::{NewUrl, ResolvedUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    title: String,
    original_url: String,
    short_url: String,
    custom_url: Option<String>,
    qr: String,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(
            row.id,
            row.title,
            row.original_url,
            row.short_url,
            row.custom_url,
            row.qr,
            row.user_id,
            row.created_at,
        )
    }
}

const SELECT_COLUMNS: &str =
    "id, title, original_url, short_url, custom_url, qr, user_id, created_at";

/// PostgreSQL repository for the `urls` table.
///
/// Queries are bound at runtime so the crate builds without a live database.
/// Backend error detail is logged here; callers receive only the fixed
/// per-operation error.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM urls WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, user_id, "listing urls failed");
            AppError::LoadUrls
        })?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                error!(error = %e, id, "deleting url failed");
                AppError::DeleteUrl
            })?;

        Ok(())
    }

    async fn insert(
        &self,
        new_url: NewUrl,
        short_url: String,
        qr: String,
    ) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!(
            "INSERT INTO urls (title, user_id, original_url, custom_url, short_url, qr) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&new_url.title)
        .bind(&new_url.user_id)
        .bind(&new_url.long_url)
        .bind(&new_url.custom_url)
        .bind(&short_url)
        .bind(&qr)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, %short_url, "inserting url failed");
            AppError::CreateUrl
        })?;

        Ok(row.into())
    }

    async fn resolve_short_url(&self, code: &str) -> Result<ResolvedUrl, AppError> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, original_url FROM urls WHERE short_url = $1 OR custom_url = $1",
        )
        .bind(code)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, code, "resolving short url failed");
            AppError::FetchShortLink
        })?;

        // Exactly one match expected; zero and multiple collapse into the
        // same error the caller sees for backend failures.
        match rows.as_slice() {
            [(id, original_url)] => Ok(ResolvedUrl {
                id: *id,
                original_url: original_url.clone(),
            }),
            _ => {
                error!(code, matches = rows.len(), "short url resolution was not unique");
                Err(AppError::FetchShortLink)
            }
        }
    }

    async fn get_by_id_for_user(&self, id: i64, user_id: &str) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM urls WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, id, user_id, "fetching url failed");
            AppError::UrlNotFound
        })?;

        row.map(UrlRecord::from).ok_or(AppError::UrlNotFound)
    }

    async fn short_code_exists(&self, code: &str) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM urls WHERE short_url = $1 OR custom_url = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, code, "short code existence probe failed");
            AppError::CreateUrl
        })
    }
}
