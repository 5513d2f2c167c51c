//! Transaction record model
//!
//! The wire shape mirrors the upstream sales feed export; the normalized
//! shape is what the aggregation engine operates on.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::parse_purchase_date;

/// One record as exported by the upstream retrieval service.
///
/// Canonical keys are snake_case; the feed's native column names are
/// accepted as aliases so a raw API dump can be ingested unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct WireRecord {
    #[serde(default, alias = "Data da Compra")]
    pub purchase_date: Option<String>,
    #[serde(default, alias = "Preço")]
    pub price: Option<f64>,
    #[serde(default, alias = "Local da compra")]
    pub state: Option<String>,
    #[serde(default, alias = "Categoria do Produto")]
    pub category: Option<String>,
    #[serde(default, alias = "Vendedor")]
    pub seller: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// A latitude/longitude pair attached to a record or a state aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Normalized transaction record.
///
/// Immutable once ingested; the orchestrator borrows the collection
/// read-only for one computation pass. `purchase_date` is `None` when the
/// wire date was absent or unparsable; such records stay in dimension
/// tables but are excluded from month buckets and counted in diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub purchase_date: Option<NaiveDate>,
    pub price: f64,
    pub state: Option<String>,
    pub category: Option<String>,
    pub seller: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl WireRecord {
    /// Normalize a wire record. A missing price rejects the record;
    /// an unparsable date is recovered as `None`.
    pub fn normalize(self) -> Option<TransactionRecord> {
        let price = self.price?;
        let purchase_date = self
            .purchase_date
            .as_deref()
            .and_then(|s| parse_purchase_date(s).ok());
        let coordinates = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            _ => None,
        };
        Some(TransactionRecord {
            purchase_date,
            price,
            state: self.state,
            category: self.category,
            seller: self.seller,
            coordinates,
        })
    }
}

/// Upstream filters the dashboard applies before aggregating.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub year: Option<i32>,
    pub sellers: Vec<String>,
}

impl RecordFilter {
    pub fn new(year: Option<i32>, sellers: Vec<String>) -> Self {
        Self { year, sellers }
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.sellers.is_empty()
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if let Some(year) = self.year {
            // Records without a resolvable date cannot prove they belong
            // to the requested year.
            match record.purchase_date {
                Some(date) if date.year() == year => {}
                _ => return false,
            }
        }
        if !self.sellers.is_empty() {
            match &record.seller {
                Some(seller) if self.sellers.iter().any(|s| s == seller) => {}
                _ => return false,
            }
        }
        true
    }
}
