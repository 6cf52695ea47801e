//! URL entity representing a shortened link row in the hosted store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL with its metadata, as stored in the `urls` table.
///
/// Exactly one of `short_url` / `custom_url` matches during resolution; both
/// are unique within the store. `qr` holds the public URL of the uploaded QR
/// code image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub id: i64,
    pub title: String,
    pub original_url: String,
    pub short_url: String,
    pub custom_url: Option<String>,
    pub qr: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        original_url: String,
        short_url: String,
        custom_url: Option<String>,
        qr: String,
        user_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            original_url,
            short_url,
            custom_url,
            qr,
            user_id,
            created_at,
        }
    }

    /// Returns the code a visitor would use to reach this URL: the custom
    /// alias when one is set, the generated short code otherwise.
    pub fn effective_code(&self) -> &str {
        self.custom_url.as_deref().unwrap_or(&self.short_url)
    }
}

/// Input data for creating a new shortened URL.
///
/// The short code and QR public URL are filled in by the service during
/// creation, not supplied by the caller.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub title: String,
    pub long_url: String,
    pub custom_url: Option<String>,
    pub user_id: String,
}

/// Projection returned when resolving a short or custom code to its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUrl {
    pub id: i64,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_record(custom_url: Option<&str>) -> UrlRecord {
        UrlRecord::new(
            1,
            "Docs".to_string(),
            "https://example.com/docs".to_string(),
            "ab3x".to_string(),
            custom_url.map(str::to_string),
            "https://store.test/storage/v1/object/public/qrs/qr-ab3x".to_string(),
            "user-1".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_url_record_creation() {
        let record = sample_record(None);
        assert_eq!(record.id, 1);
        assert_eq!(record.short_url, "ab3x");
        assert!(record.custom_url.is_none());
        assert_eq!(record.user_id, "user-1");
    }

    #[test]
    fn test_effective_code_prefers_custom() {
        let record = sample_record(Some("my-docs"));
        assert_eq!(record.effective_code(), "my-docs");
    }

    #[test]
    fn test_effective_code_falls_back_to_short() {
        let record = sample_record(None);
        assert_eq!(record.effective_code(), "ab3x");
    }

    #[test]
    fn test_new_url_creation() {
        let new_url = NewUrl {
            title: "Rust".to_string(),
            long_url: "https://rust-lang.org".to_string(),
            custom_url: None,
            user_id: "user-9".to_string(),
        };

        assert_eq!(new_url.title, "Rust");
        assert_eq!(new_url.long_url, "https://rust-lang.org");
        assert!(new_url.custom_url.is_none());
    }
}
