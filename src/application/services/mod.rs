//! Application services orchestrating domain operations.
//!
//! - [`UrlService`] - the five facade operations over store + blob storage
//! - [`location_stats`] - pure per-city click aggregation

pub mod location_stats;
pub mod url_service;

pub use url_service::UrlService;
