//! Record ingestion
//!
//! Reads one exported JSON array of transaction records, normalizes it
//! into the engine's record model and applies the upstream filters.

use std::fs;
use std::path::Path;

use crate::data::types::{RecordFilter, TransactionRecord, WireRecord};
use crate::error::{AppError, EngineError};

/// Result of one ingestion pass.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub records: Vec<TransactionRecord>,
    /// Records present in the input file before filtering.
    pub total: usize,
    /// Records removed by the year/seller filters (not an error).
    pub filtered_out: usize,
}

/// Load and normalize records from an exported JSON file.
///
/// Structural failures (unreadable file, input that is not a JSON array,
/// a record without a price) abort the whole load; per-record date
/// problems are recovered during normalization and surface later in the
/// engine's diagnostics.
pub fn load_records(path: &Path, filter: &RecordFilter) -> Result<LoadSummary, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = parse_records(&content, filter)?;
    Ok(summary)
}

/// Parse a JSON export into filtered, normalized records.
pub fn parse_records(
    content: &str,
    filter: &RecordFilter,
) -> Result<LoadSummary, EngineError> {
    let wire: Vec<WireRecord> = serde_json::from_str(content)
        .map_err(|e| EngineError::invalid_input(format!("expected a JSON array of records: {e}")))?;

    let total = wire.len();
    let mut records = Vec::with_capacity(total);
    for (index, record) in wire.into_iter().enumerate() {
        let record = record.normalize().ok_or_else(|| {
            EngineError::invalid_input(format!("record {index} has no price"))
        })?;
        records.push(record);
    }

    let kept: Vec<TransactionRecord> = if filter.is_empty() {
        records
    } else {
        records.into_iter().filter(|r| filter.matches(r)).collect()
    };
    let filtered_out = total - kept.len();

    Ok(LoadSummary {
        records: kept,
        total,
        filtered_out,
    })
}
