//! Aggregate types produced by the engine
//!
//! All aggregates are derived, read-only and recomputed from scratch on
//! every orchestrator run; nothing here is updated incrementally.

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::Coordinates;
use crate::utils::{month_end, month_name};

/// Metric a table or ranking is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Sum of record prices (revenue).
    Sum,
    /// Number of records (sales volume).
    Count,
}

/// Sum/count totals for one distinct value of a grouping dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionAggregate {
    pub key: String,
    pub sum: f64,
    pub count: i64,
}

impl DimensionAggregate {
    pub fn new(key: String) -> Self {
        DimensionAggregate {
            key,
            sum: 0.0,
            count: 0,
        }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sum => self.sum,
            Metric::Count => self.count as f64,
        }
    }
}

/// State aggregate enriched with the state's first-seen coordinates.
///
/// `coordinates` stays `None` for a state none of whose records carried a
/// coordinate pair; the join never substitutes (0, 0).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoAggregate {
    pub key: String,
    pub sum: f64,
    pub count: i64,
    pub coordinates: Option<Coordinates>,
}

impl GeoAggregate {
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sum => self.sum,
            Metric::Count => self.count as f64,
        }
    }
}

/// Sum/count totals for one (year, calendar month) bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthAggregate {
    pub year: i32,
    pub month: u32,
    /// Last day of the bucket's calendar month.
    pub month_end: NaiveDate,
    /// English month name, a pure function of `month`.
    pub label: String,
    pub sum: f64,
    pub count: i64,
}

impl MonthAggregate {
    pub fn new(year: i32, month: u32) -> Self {
        MonthAggregate {
            year,
            month,
            month_end: month_end(year, month),
            label: month_name(month).to_string(),
            sum: 0.0,
            count: 0,
        }
    }
}

/// One entry of a ranked (top-N) list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub key: String,
    pub value: f64,
}

/// Per-record exclusion counters for one orchestrator run.
///
/// Every record the engine drops from a table is counted here; nothing is
/// excluded silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Records whose purchase date could not be resolved (excluded from
    /// month buckets only).
    pub invalid_dates: u64,
    pub missing_state: u64,
    pub missing_category: u64,
    pub missing_seller: u64,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        *self == Diagnostics::default()
    }
}

/// The complete set of named tables produced by one orchestrator run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSet {
    pub revenue_by_state: Vec<GeoAggregate>,
    pub revenue_by_month: Vec<MonthAggregate>,
    pub revenue_by_category: Vec<DimensionAggregate>,
    pub sales_count_by_state: Vec<GeoAggregate>,
    pub sales_count_by_month: Vec<MonthAggregate>,
    pub sales_count_by_category: Vec<DimensionAggregate>,
    pub seller_stats: Vec<DimensionAggregate>,
    pub diagnostics: Diagnostics,
}

impl TableSet {
    pub const TABLE_NAMES: [&'static str; 7] = [
        "revenue_by_state",
        "revenue_by_month",
        "revenue_by_category",
        "sales_count_by_state",
        "sales_count_by_month",
        "sales_count_by_category",
        "seller_stats",
    ];
}
