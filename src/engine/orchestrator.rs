//! Aggregation orchestrator
//!
//! Runs the full pipeline once per invocation over one immutable record
//! collection. The seven output tables are mutually independent, so they
//! are computed as a parallel fan-out (one task per table) and joined
//! before returning. The only mutable state is each task's private
//! accumulator; the shared input is borrowed read-only.

use crate::data::TransactionRecord;
use crate::engine::bucket::bucket_by_month;
use crate::engine::cancel::CancelToken;
use crate::engine::geo::attach_geo;
use crate::engine::group::{category_of, group_by, seller_of, state_of};
use crate::engine::rank::sort_desc;
use crate::engine::types::{
    Diagnostics, DimensionAggregate, GeoAggregate, Metric, MonthAggregate, TableSet,
};
use crate::error::EngineError;

/// Compute the complete table set from one record collection.
pub fn run_all(records: &[TransactionRecord]) -> Result<TableSet, EngineError> {
    run_all_with(records, &CancelToken::new())
}

/// `run_all` with a caller-supplied cancellation token. Cancellation
/// aborts the whole call; partial results are discarded.
pub fn run_all_with(
    records: &[TransactionRecord],
    cancel: &CancelToken,
) -> Result<TableSet, EngineError> {
    cancel.ensure_active()?;

    let (left, right) = rayon::join(
        || {
            let (revenue_by_state, revenue_by_month) = rayon::join(
                || state_table(records, Metric::Sum, cancel),
                || month_table(records, cancel),
            );
            let (revenue_by_category, sales_count_by_state) = rayon::join(
                || category_table(records, Metric::Sum, cancel),
                || state_table(records, Metric::Count, cancel),
            );
            (
                revenue_by_state,
                revenue_by_month,
                revenue_by_category,
                sales_count_by_state,
            )
        },
        || {
            let (sales_count_by_month, sales_count_by_category) = rayon::join(
                || month_table(records, cancel),
                || category_table(records, Metric::Count, cancel),
            );
            let (seller_stats, diagnostics) = rayon::join(
                || seller_table(records, cancel),
                || diagnostics_pass(records, cancel),
            );
            (
                sales_count_by_month,
                sales_count_by_category,
                seller_stats,
                diagnostics,
            )
        },
    );

    let (revenue_by_state, revenue_by_month, revenue_by_category, sales_count_by_state) = left;
    let (sales_count_by_month, sales_count_by_category, seller_stats, diagnostics) = right;

    Ok(TableSet {
        revenue_by_state: revenue_by_state?,
        revenue_by_month: revenue_by_month?,
        revenue_by_category: revenue_by_category?,
        sales_count_by_state: sales_count_by_state?,
        sales_count_by_month: sales_count_by_month?,
        sales_count_by_category: sales_count_by_category?,
        seller_stats: seller_stats?,
        diagnostics: diagnostics?,
    })
}

/// State aggregates enriched with coordinates, sorted descending by `metric`.
fn state_table(
    records: &[TransactionRecord],
    metric: Metric,
    cancel: &CancelToken,
) -> Result<Vec<GeoAggregate>, EngineError> {
    cancel.ensure_active()?;
    let grouped = group_by(records, state_of);
    cancel.ensure_active()?;
    let mut table = attach_geo(grouped, records);
    sort_desc(&mut table, metric);
    Ok(table)
}

fn category_table(
    records: &[TransactionRecord],
    metric: Metric,
    cancel: &CancelToken,
) -> Result<Vec<DimensionAggregate>, EngineError> {
    cancel.ensure_active()?;
    let mut table = group_by(records, category_of);
    sort_desc(&mut table, metric);
    Ok(table)
}

/// Seller aggregates in first-seen order; both metrics are exposed and
/// ranked on demand by the caller.
fn seller_table(
    records: &[TransactionRecord],
    cancel: &CancelToken,
) -> Result<Vec<DimensionAggregate>, EngineError> {
    cancel.ensure_active()?;
    Ok(group_by(records, seller_of))
}

fn month_table(
    records: &[TransactionRecord],
    cancel: &CancelToken,
) -> Result<Vec<MonthAggregate>, EngineError> {
    cancel.ensure_active()?;
    Ok(bucket_by_month(records))
}

/// Count every per-record exclusion the table tasks perform.
fn diagnostics_pass(
    records: &[TransactionRecord],
    cancel: &CancelToken,
) -> Result<Diagnostics, EngineError> {
    cancel.ensure_active()?;
    let mut diagnostics = Diagnostics::default();
    for record in records {
        if record.purchase_date.is_none() {
            diagnostics.invalid_dates += 1;
        }
        if record.state.is_none() {
            diagnostics.missing_state += 1;
        }
        if record.category.is_none() {
            diagnostics.missing_category += 1;
        }
        if record.seller.is_none() {
            diagnostics.missing_seller += 1;
        }
    }
    Ok(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Coordinates;
    use chrono::NaiveDate;

    struct Fixture {
        date: Option<(i32, u32, u32)>,
        price: f64,
        state: Option<&'static str>,
        category: Option<&'static str>,
        seller: Option<&'static str>,
        coords: Option<(f64, f64)>,
    }

    fn record(f: Fixture) -> TransactionRecord {
        TransactionRecord {
            purchase_date: f.date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            price: f.price,
            state: f.state.map(str::to_string),
            category: f.category.map(str::to_string),
            seller: f.seller.map(str::to_string),
            coordinates: f.coords.map(|(lat, lon)| Coordinates { lat, lon }),
        }
    }

    fn fixture_records() -> Vec<TransactionRecord> {
        vec![
            record(Fixture {
                date: Some((2022, 1, 10)),
                price: 100.0,
                state: Some("SP"),
                category: Some("eletronicos"),
                seller: Some("Ana"),
                coords: Some((-23.55, -46.63)),
            }),
            record(Fixture {
                date: Some((2022, 1, 20)),
                price: 50.0,
                state: Some("SP"),
                category: Some("livros"),
                seller: Some("Beatriz"),
                coords: Some((-23.55, -46.63)),
            }),
            record(Fixture {
                date: Some((2022, 2, 5)),
                price: 30.0,
                state: Some("RJ"),
                category: Some("livros"),
                seller: Some("Ana"),
                coords: Some((-22.91, -43.17)),
            }),
            // Unparsable date upstream: counts toward invalid_dates, still
            // present in every dimension table.
            record(Fixture {
                date: None,
                price: 70.0,
                state: Some("MG"),
                category: Some("eletronicos"),
                seller: Some("Caio"),
                coords: None,
            }),
            // No state: excluded from the state tables only.
            record(Fixture {
                date: Some((2022, 2, 25)),
                price: 20.0,
                state: None,
                category: Some("moveis"),
                seller: Some("Beatriz"),
                coords: None,
            }),
        ]
    }

    #[test]
    fn state_revenue_total_matches_records_with_state() {
        let records = fixture_records();
        let tables = run_all(&records).unwrap();
        let table_total: f64 = tables.revenue_by_state.iter().map(|a| a.sum).sum();
        let record_total: f64 = records
            .iter()
            .filter(|r| r.state.is_some())
            .map(|r| r.price)
            .sum();
        assert_eq!(table_total, record_total);
        assert_eq!(table_total, 250.0);
    }

    #[test]
    fn month_totals_exclude_dateless_records_and_count_them() {
        let records = fixture_records();
        let tables = run_all(&records).unwrap();
        let month_total: f64 = tables.revenue_by_month.iter().map(|b| b.sum).sum();
        assert_eq!(month_total, 200.0);
        assert_eq!(tables.diagnostics.invalid_dates, 1);
        assert_eq!(tables.diagnostics.missing_state, 1);
        assert_eq!(tables.diagnostics.missing_category, 0);
        assert_eq!(tables.diagnostics.missing_seller, 0);
    }

    #[test]
    fn revenue_tables_sort_descending_by_sum() {
        let tables = run_all(&fixture_records()).unwrap();
        let sums: Vec<f64> = tables.revenue_by_state.iter().map(|a| a.sum).collect();
        assert!(sums.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(tables.revenue_by_state[0].key, "SP");
        let cat_sums: Vec<f64> = tables.revenue_by_category.iter().map(|a| a.sum).collect();
        assert!(cat_sums.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn count_tables_sort_descending_by_count() {
        let tables = run_all(&fixture_records()).unwrap();
        let counts: Vec<i64> = tables.sales_count_by_state.iter().map(|a| a.count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(tables.sales_count_by_state[0].key, "SP");
        assert_eq!(tables.sales_count_by_state[0].count, 2);
    }

    #[test]
    fn month_tables_carry_both_metrics() {
        let tables = run_all(&fixture_records()).unwrap();
        assert_eq!(tables.revenue_by_month.len(), 2);
        assert_eq!(tables.revenue_by_month[0].label, "January");
        assert_eq!(tables.revenue_by_month[0].sum, 150.0);
        assert_eq!(tables.sales_count_by_month[1].count, 2);
    }

    #[test]
    fn geo_join_keeps_stateless_coordinates_missing() {
        let tables = run_all(&fixture_records()).unwrap();
        let mg = tables
            .revenue_by_state
            .iter()
            .find(|a| a.key == "MG")
            .unwrap();
        assert!(!mg.has_coordinates());
        let sp = tables
            .revenue_by_state
            .iter()
            .find(|a| a.key == "SP")
            .unwrap();
        assert_eq!(sp.coordinates, Some(Coordinates { lat: -23.55, lon: -46.63 }));
    }

    #[test]
    fn seller_stats_expose_both_metrics_in_first_seen_order() {
        let tables = run_all(&fixture_records()).unwrap();
        let keys: Vec<&str> = tables.seller_stats.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["Ana", "Beatriz", "Caio"]);
        let ana = &tables.seller_stats[0];
        assert_eq!(ana.sum, 130.0);
        assert_eq!(ana.count, 2);
    }

    #[test]
    fn run_all_is_idempotent_byte_for_byte() {
        let records = fixture_records();
        let first = run_all(&records).unwrap();
        let second = run_all(&records).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn empty_input_yields_empty_tables_and_clean_diagnostics() {
        let tables = run_all(&[]).unwrap();
        assert!(tables.revenue_by_state.is_empty());
        assert!(tables.revenue_by_month.is_empty());
        assert!(tables.revenue_by_category.is_empty());
        assert!(tables.sales_count_by_state.is_empty());
        assert!(tables.sales_count_by_month.is_empty());
        assert!(tables.sales_count_by_category.is_empty());
        assert!(tables.seller_stats.is_empty());
        assert!(tables.diagnostics.is_clean());
    }

    #[test]
    fn cancelled_token_aborts_the_run() {
        let token = CancelToken::new();
        token.cancel();
        let result = run_all_with(&fixture_records(), &token);
        assert!(matches!(result, Err(EngineError::Cancelled)));
    }

    #[test]
    fn table_names_cover_all_seven_tables() {
        assert_eq!(TableSet::TABLE_NAMES.len(), 7);
    }
}
