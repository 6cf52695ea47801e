//! Core domain entities representing the business data model.
//!
//! Plain data structures without business logic:
//!
//! - [`UrlRecord`] - A shortened URL row in the hosted store
//! - [`ClickRecord`] - A click event on a shortened link
//! - [`CityCount`] - Per-city click tally derived by the aggregator
//!
//! Creation inputs get their own structs (`NewUrl`), following the
//! entity/new-entity split used across the repository traits.

pub mod click;
pub mod url;

pub use click::{CityCount, ClickRecord};
pub use url::{NewUrl, ResolvedUrl, UrlRecord};
