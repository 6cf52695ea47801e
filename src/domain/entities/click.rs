//! Click entity representing a single resolution of a short link.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A click event recorded when a shortened link is accessed.
///
/// Produced by the click-tracking subsystem and read-only here. `city` is
/// always present; an empty string is a legal value and aggregates as its own
/// bucket. The optional metadata fields are carried through but ignored by
/// the location aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickRecord {
    pub city: String,
    pub country: Option<String>,
    pub device: Option<String>,
    pub clicked_at: Option<DateTime<Utc>>,
}

impl ClickRecord {
    /// Creates a click record with city only, the minimum the aggregation
    /// contract requires.
    pub fn from_city(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: None,
            device: None,
            clicked_at: None,
        }
    }
}

/// Number of clicks observed for one distinct city value.
///
/// Derived per aggregation call, never persisted. `count` is at least 1: a
/// city only gets an entry once it has been seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: u64,
}
