//! Specialized widgets for the trends dashboard

pub mod trend_chart;

pub use trend_chart::{series_points, trend_chart};
