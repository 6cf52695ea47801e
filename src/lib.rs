//! # Snaplink
//!
//! Data-access layer for a URL-shortener application, plus the click-location
//! statistics behind its dashboard chart.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture layering:
//!
//! - **Domain Layer** ([`domain`]) - entities and repository traits
//! - **Application Layer** ([`application`]) - the URL service and the pure
//!   location-statistics aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and
//!   hosted-storage backends, with in-process equivalents for tests
//! - **DTOs** ([`dto`]) - serializable view models such as the location
//!   line chart
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use snaplink::config::Config;
//! use snaplink::infrastructure::persistence::PgUrlRepository;
//! use snaplink::infrastructure::storage::HttpBlobStore;
//! use snaplink::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let pool = Arc::new(config.connect_pool().await?);
//!
//! let service = UrlService::new(
//!     Arc::new(PgUrlRepository::new(pool)),
//!     Arc::new(HttpBlobStore::new(
//!         config.storage_base_url.clone(),
//!         config.storage_api_key.clone(),
//!     )?),
//! );
//!
//! let urls = service.list_urls("user-1").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Location statistics
//!
//! ```
//! use snaplink::application::services::location_stats::aggregate_by_city;
//! use snaplink::domain::entities::ClickRecord;
//! use snaplink::dto::LocationChart;
//!
//! let clicks = vec![
//!     ClickRecord::from_city("Paris"),
//!     ClickRecord::from_city("Paris"),
//!     ClickRecord::from_city("Rome"),
//! ];
//!
//! let chart = LocationChart::from_counts(&aggregate_by_city(&clicks));
//! assert_eq!(chart.x_axis.categories, ["Paris", "Rome"]);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::application::services::location_stats::{aggregate_by_city, top_n};
    pub use crate::domain::entities::{CityCount, ClickRecord, NewUrl, ResolvedUrl, UrlRecord};
    pub use crate::domain::repositories::{BlobStore, UrlRepository};
    pub use crate::dto::LocationChart;
    pub use crate::error::AppError;
}
