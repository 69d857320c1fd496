// src/core/date.rs
use chrono::{Duration, NaiveDate};

use crate::config::consts::{DUE_DATE_IN_FMT, DUE_DATE_OUT_FMT};

/// "May 12, 2025" → "05/12/2025". Unparseable input passes through
/// unchanged; downstream keeps whatever the page said.
pub fn format_due_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), DUE_DATE_IN_FMT) {
        Ok(d) => d.format(DUE_DATE_OUT_FMT).to_string(),
        Err(_) => s!(raw),
    }
}

/// The calendar day after an "MM/DD/YYYY" date. Pass-through on failure,
/// so an empty due date yields an empty delinquent date.
pub fn next_day(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DUE_DATE_OUT_FMT) {
        Ok(d) => (d + Duration::days(1)).format(DUE_DATE_OUT_FMT).to_string(),
        Err(_) => s!(date),
    }
}
