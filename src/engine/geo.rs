//! Geo enrichment join

use std::collections::HashMap;

use crate::data::{Coordinates, TransactionRecord};
use crate::engine::types::{DimensionAggregate, GeoAggregate};

/// Attach one coordinate pair per state to the state aggregates.
///
/// Left join: every input aggregate survives. The pair is taken from the
/// first record in input order that carries both the state and
/// coordinates; later, possibly conflicting pairs for the same state are
/// discarded. A state with no coordinate-bearing record keeps `None`.
pub fn attach_geo(
    aggregates: Vec<DimensionAggregate>,
    records: &[TransactionRecord],
) -> Vec<GeoAggregate> {
    let mut first_seen: HashMap<&str, Coordinates> = HashMap::new();
    for record in records {
        if let (Some(state), Some(coords)) = (record.state.as_deref(), record.coordinates) {
            first_seen.entry(state).or_insert(coords);
        }
    }

    aggregates
        .into_iter()
        .map(|agg| {
            let coordinates = first_seen.get(agg.key.as_str()).copied();
            GeoAggregate {
                key: agg.key,
                sum: agg.sum,
                count: agg.count,
                coordinates,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, coords: Option<(f64, f64)>) -> TransactionRecord {
        TransactionRecord {
            purchase_date: None,
            price: 1.0,
            state: Some(state.to_string()),
            category: None,
            seller: None,
            coordinates: coords.map(|(lat, lon)| Coordinates { lat, lon }),
        }
    }

    fn agg(key: &str) -> DimensionAggregate {
        DimensionAggregate {
            key: key.to_string(),
            sum: 10.0,
            count: 1,
        }
    }

    #[test]
    fn first_occurrence_wins_over_conflicts() {
        let records = vec![
            record("SP", Some((-23.55, -46.63))),
            record("SP", Some((-1.0, -1.0))),
        ];
        let out = attach_geo(vec![agg("SP")], &records);
        assert_eq!(out[0].coordinates, Some(Coordinates { lat: -23.55, lon: -46.63 }));
    }

    #[test]
    fn missing_coordinates_stay_missing() {
        let records = vec![record("AC", None)];
        let out = attach_geo(vec![agg("AC")], &records);
        assert_eq!(out.len(), 1);
        assert!(!out[0].has_coordinates());
        assert_eq!(out[0].sum, 10.0);
    }

    #[test]
    fn coordinates_skip_records_without_a_pair() {
        // The first SP record has no coordinates; the join takes the pair
        // from the first record that actually carries one.
        let records = vec![record("SP", None), record("SP", Some((-23.55, -46.63)))];
        let out = attach_geo(vec![agg("SP")], &records);
        assert!(out[0].has_coordinates());
    }

    #[test]
    fn join_is_left_preserving() {
        let records = vec![record("SP", Some((-23.55, -46.63)))];
        let out = attach_geo(vec![agg("SP"), agg("RJ")], &records);
        assert_eq!(out.len(), 2);
        assert!(out[0].has_coordinates());
        assert!(!out[1].has_coordinates());
    }

    #[test]
    fn literal_zero_zero_is_not_a_sentinel() {
        // (0, 0) from the input is a real coordinate and must survive.
        let records = vec![record("XX", Some((0.0, 0.0)))];
        let out = attach_geo(vec![agg("XX")], &records);
        assert_eq!(out[0].coordinates, Some(Coordinates { lat: 0.0, lon: 0.0 }));
        assert!(out[0].has_coordinates());
    }
}
