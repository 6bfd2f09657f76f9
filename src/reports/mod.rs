//! Reports built on top of filtered, aggregated expenses

pub mod category_breakdown;

pub use category_breakdown::{CategoryBreakdownReport, CategoryShare, ChartSlice, CHART_PALETTE};
