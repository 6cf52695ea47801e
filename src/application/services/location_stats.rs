//! Per-city click aggregation for the location statistics view.
//!
//! Pure, synchronous, infallible: the same record sequence always produces
//! the same series, and empty input produces empty output.

use std::collections::HashMap;

use crate::domain::entities::{CityCount, ClickRecord};

/// Counts clicks per distinct city value in a single pass.
///
/// The returned series is ordered by first appearance of each city in
/// `records`, not by count and not alphabetically. That ordering decides
/// which cities survive [`top_n`] truncation, so it is part of the contract.
/// An empty `city` string counts as a city of its own.
pub fn aggregate_by_city(records: &[ClickRecord]) -> Vec<CityCount> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut counts: Vec<CityCount> = Vec::new();

    for record in records {
        match index.get(record.city.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(record.city.as_str(), counts.len());
                counts.push(CityCount {
                    city: record.city.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Returns the first `n` entries of `series` in their existing order.
///
/// Truncation only: the series is NOT re-sorted by count, so with more than
/// `n` distinct cities this yields the first `n` cities encountered rather
/// than the `n` busiest ones. `n = 0` yields an empty series; `n` at or past
/// the end returns the series unchanged.
pub fn top_n(mut series: Vec<CityCount>, n: usize) -> Vec<CityCount> {
    series.truncate(n);
    series
}
