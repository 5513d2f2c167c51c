//! Aggregation engine
//!
//! Turns a flat, already-filtered record collection into the named
//! summary tables the dashboard front-end renders. Small pure pieces
//! (grouping, bucketing, geo join, ranking) combined by an orchestrator.

mod bucket;
mod cancel;
mod geo;
mod group;
mod orchestrator;
mod rank;
mod types;

pub use cancel::CancelToken;
pub use orchestrator::{run_all, run_all_with};
pub use rank::{Rankable, top_n};
pub use types::{
    Diagnostics, DimensionAggregate, GeoAggregate, Metric, MonthAggregate, RankedEntry, TableSet,
};
