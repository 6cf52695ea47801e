//! Line-chart view model for the location statistics component.
//!
//! A pure view over an aggregated city series: building the chart never
//! mutates its input and identical input yields an identical chart, so the
//! frontend can render it deterministically.

use serde::Serialize;

use crate::application::services::location_stats::top_n;
use crate::domain::entities::CityCount;

/// How many cities the chart shows.
///
/// Truncation happens in first-seen order (see
/// [`top_n`](crate::application::services::location_stats::top_n)), so this
/// is "the first five distinct cities", not "the five busiest".
pub const CHART_WINDOW: usize = 5;

/// Fixed chart height in pixels; width adapts to the container.
pub const CHART_HEIGHT: u32 = 300;

/// Categorical X axis: one tick per city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityAxis {
    pub data_key: &'static str,
    pub categories: Vec<String>,
}

/// Numeric Y series: one point per city, aligned with the X categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountSeries {
    pub data_key: &'static str,
    pub line_type: &'static str,
    pub stroke: &'static str,
    pub points: Vec<u64>,
}

/// Tooltip configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub label_color: &'static str,
}

/// Serializable line-chart description of a per-city click series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationChart {
    /// Width is container-driven; only the height is fixed.
    pub responsive: bool,
    pub height: u32,
    pub x_axis: CityAxis,
    pub series: CountSeries,
    pub legend: bool,
    pub tooltip: Tooltip,
}

impl LocationChart {
    /// Builds the chart from an aggregated series, keeping only the first
    /// [`CHART_WINDOW`] entries.
    pub fn from_counts(counts: &[CityCount]) -> Self {
        let window = top_n(counts.to_vec(), CHART_WINDOW);

        Self {
            responsive: true,
            height: CHART_HEIGHT,
            x_axis: CityAxis {
                data_key: "city",
                categories: window.iter().map(|c| c.city.clone()).collect(),
            },
            series: CountSeries {
                data_key: "count",
                line_type: "monotone",
                stroke: "#82ca9d",
                points: window.iter().map(|c| c.count).collect(),
            },
            legend: true,
            tooltip: Tooltip {
                label_color: "green",
            },
        }
    }
}
