//! Scalar token decoding shared by the CSV and JSON importers
//!
//! Errors are plain messages; each importer attaches its own position.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::OperationKind;

/// Date layouts accepted on import, tried in order
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an exact decimal; plain or scientific notation
pub fn parse_decimal(s: &str) -> Result<Decimal, String> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| format!("invalid decimal '{}'", s))
}

/// Parse a timestamp; a bare date means midnight
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();

    for format in DATETIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid date '{}'", s))
}

/// Parse an income/expense marker by name or legacy index
pub fn parse_kind(s: &str) -> Result<OperationKind, String> {
    let s = s.trim();
    OperationKind::parse(s)
        .or_else(|| s.parse::<i64>().ok().and_then(OperationKind::from_index))
        .ok_or_else(|| format!("invalid operation type '{}'", s))
}

/// Parse a legacy integer kind
pub fn kind_from_index(index: i64) -> Result<OperationKind, String> {
    OperationKind::from_index(index).ok_or_else(|| format!("invalid operation type '{}'", index))
}

/// Normalize an optional identity token; blank means absent
pub fn id_token(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
