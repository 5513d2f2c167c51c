//! Dimension grouping
//!
//! Generic sum/count reduction keyed by a categorical record attribute.

use indexmap::IndexMap;

use crate::data::TransactionRecord;
use crate::engine::types::DimensionAggregate;

/// Group records by a categorical dimension, accumulating price sum and
/// record count per distinct value.
///
/// Records where the selector returns `None` are excluded from the output
/// entirely; they never form an empty-key bucket. Output order is the
/// first-seen order of keys, which downstream ranking relies on for
/// stable tie-breaks. Prices are accumulated as-is: a negative or
/// non-finite price is the upstream feed's problem, not rejected here.
pub fn group_by<F>(records: &[TransactionRecord], selector: F) -> Vec<DimensionAggregate>
where
    F: Fn(&TransactionRecord) -> Option<&str>,
{
    let mut groups: IndexMap<String, DimensionAggregate> = IndexMap::new();
    for record in records {
        let Some(key) = selector(record) else {
            continue;
        };
        let agg = groups
            .entry(key.to_string())
            .or_insert_with(|| DimensionAggregate::new(key.to_string()));
        agg.sum += record.price;
        agg.count += 1;
    }
    groups.into_values().collect()
}

pub fn state_of(record: &TransactionRecord) -> Option<&str> {
    record.state.as_deref()
}

pub fn category_of(record: &TransactionRecord) -> Option<&str> {
    record.category.as_deref()
}

pub fn seller_of(record: &TransactionRecord) -> Option<&str> {
    record.seller.as_deref()
}
