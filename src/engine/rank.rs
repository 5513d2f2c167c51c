//! Ranking
//!
//! Descending top-N over any aggregate collection, parameterized by
//! metric. The input is never mutated; ranking builds its own list.

use std::cmp::Ordering;

use crate::engine::types::{DimensionAggregate, GeoAggregate, Metric, RankedEntry};

/// Aggregates a ranked list can be built from.
pub trait Rankable {
    fn key(&self) -> &str;
    fn metric(&self, metric: Metric) -> f64;
}

impl Rankable for DimensionAggregate {
    fn key(&self) -> &str {
        &self.key
    }

    fn metric(&self, metric: Metric) -> f64 {
        DimensionAggregate::metric(self, metric)
    }
}

impl Rankable for GeoAggregate {
    fn key(&self) -> &str {
        &self.key
    }

    fn metric(&self, metric: Metric) -> f64 {
        GeoAggregate::metric(self, metric)
    }
}

/// Descending metric compare; NaN sorts last.
pub fn compare_metric_desc(a: f64, b: f64) -> Ordering {
    if a.is_nan() && b.is_nan() {
        Ordering::Equal
    } else if a.is_nan() {
        Ordering::Greater
    } else if b.is_nan() {
        Ordering::Less
    } else {
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    }
}

/// Top `n` aggregates by the chosen metric.
///
/// Stable sort: entries with equal metric values keep the first-seen
/// order of `aggregates`. `n = 0` yields an empty list.
pub fn top_n<T: Rankable>(aggregates: &[T], metric: Metric, n: usize) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = aggregates
        .iter()
        .map(|agg| RankedEntry {
            key: agg.key().to_string(),
            value: agg.metric(metric),
        })
        .collect();
    ranked.sort_by(|a, b| compare_metric_desc(a.value, b.value));
    ranked.truncate(n);
    ranked
}

/// Sort a freshly built table descending by the chosen metric, in place.
/// Same stable-tie contract as `top_n`, without the truncation.
pub fn sort_desc<T: Rankable>(items: &mut [T], metric: Metric) {
    items.sort_by(|a, b| compare_metric_desc(a.metric(metric), b.metric(metric)));
}
