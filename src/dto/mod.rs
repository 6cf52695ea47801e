//! Serializable view models consumed by frontends.

pub mod location_chart;

pub use location_chart::LocationChart;
