use chrono::{Datelike, NaiveDate};

use crate::error::EngineError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse an upstream purchase date (DD/MM/YYYY, DD-MM-YYYY also accepted).
pub fn parse_purchase_date(s: &str) -> Result<NaiveDate, EngineError> {
    // Try DD/MM/YYYY
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Ok(d);
    }
    // Try DD-MM-YYYY
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d-%m-%Y") {
        return Ok(d);
    }
    Err(EngineError::InvalidDate {
        input: s.to_string(),
    })
}

/// English month name for a 1-based month number.
///
/// Pure function of the month number: no locale or timezone state.
pub fn month_name(month: u32) -> &'static str {
    (month as usize)
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("Unknown")
}

/// Last day of the given calendar month.
pub fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or(NaiveDate::MAX);
    first_of_next.pred_opt().unwrap_or(NaiveDate::MAX)
}

/// (year, month) key of a date, in chronological order when compared as tuples.
pub fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
