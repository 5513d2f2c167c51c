//! Calendar-month time bucketing

use indexmap::IndexMap;

use crate::data::TransactionRecord;
use crate::engine::types::MonthAggregate;
use crate::utils::year_month;

/// Bucket records by (year, calendar month), accumulating price sum and
/// record count per bucket.
///
/// Records without a resolvable purchase date are excluded here; the
/// orchestrator counts them in diagnostics so the exclusion is visible.
/// Output is sorted chronologically by the bucket key, never by the
/// month label.
pub fn bucket_by_month(records: &[TransactionRecord]) -> Vec<MonthAggregate> {
    let mut buckets: IndexMap<(i32, u32), MonthAggregate> = IndexMap::new();
    for record in records {
        let Some(date) = record.purchase_date else {
            continue;
        };
        let (year, month) = year_month(date);
        let agg = buckets
            .entry((year, month))
            .or_insert_with(|| MonthAggregate::new(year, month));
        agg.sum += record.price;
        agg.count += 1;
    }
    let mut out: Vec<MonthAggregate> = buckets.into_values().collect();
    out.sort_by_key(|b| (b.year, b.month));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: Option<(i32, u32, u32)>, price: f64) -> TransactionRecord {
        TransactionRecord {
            purchase_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            price,
            state: None,
            category: None,
            seller: None,
            coordinates: None,
        }
    }

    #[test]
    fn accumulates_per_year_month_pair() {
        let records = vec![
            record(Some((2022, 3, 1)), 10.0),
            record(Some((2022, 3, 29)), 20.0),
            record(Some((2022, 4, 2)), 5.0),
        ];
        let buckets = bucket_by_month(&records);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "March");
        assert_eq!(buckets[0].sum, 30.0);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].label, "April");
        assert_eq!(buckets[1].count, 1);
    }

    #[test]
    fn sorts_chronologically_not_by_label() {
        // "August 2021" sorts after "April 2021" but before "February 2022";
        // lexical label order would say otherwise.
        let records = vec![
            record(Some((2022, 2, 1)), 1.0),
            record(Some((2021, 8, 1)), 1.0),
            record(Some((2021, 4, 1)), 1.0),
        ];
        let labels: Vec<(i32, String)> = bucket_by_month(&records)
            .into_iter()
            .map(|b| (b.year, b.label))
            .collect();
        assert_eq!(
            labels,
            [
                (2021, "April".to_string()),
                (2021, "August".to_string()),
                (2022, "February".to_string()),
            ]
        );
    }

    #[test]
    fn same_month_different_years_stay_separate() {
        let records = vec![
            record(Some((2021, 6, 10)), 10.0),
            record(Some((2022, 6, 10)), 20.0),
        ];
        let buckets = bucket_by_month(&records);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].year, 2021);
        assert_eq!(buckets[1].year, 2022);
    }

    #[test]
    fn bucket_key_is_the_month_end() {
        let buckets = bucket_by_month(&[record(Some((2022, 2, 3)), 1.0)]);
        assert_eq!(
            buckets[0].month_end,
            NaiveDate::from_ymd_opt(2022, 2, 28).unwrap()
        );
    }

    #[test]
    fn dateless_records_are_excluded() {
        let records = vec![
            record(Some((2022, 1, 1)), 10.0),
            record(None, 99.0),
        ];
        let buckets = bucket_by_month(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].sum, 10.0);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(bucket_by_month(&[]).is_empty());
    }
}
