// src/parse/due_dates.rs
//
// The due-dates section lists up to two long-form dates ("May 12, 2025"
// then "November 10, 2025"). Each becomes a numeric due date; the
// matching delinquent date is the following calendar day.

use crate::core::date;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DueDates {
    pub due1: String,
    pub due2: String,
    pub delinquent1: String,
    pub delinquent2: String,
}

fn is_year_token(tok: &str) -> Option<&str> {
    if tok.len() >= 4 && tok.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        Some(&tok[..4])
    } else {
        None
    }
}

fn is_day_token(tok: &str) -> Option<&str> {
    let day = tok.strip_suffix(',')?;
    if (1..=2).contains(&day.len()) && day.bytes().all(|b| b.is_ascii_digit()) {
        Some(day)
    } else {
        None
    }
}

/// All `Month DD, YYYY` shaped token triples, in order, re-joined with
/// canonical spacing.
pub fn find_long_dates(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut out = Vec::new();
    for w in words.windows(3) {
        if !w[0].chars().all(char::is_alphabetic) {
            continue;
        }
        let (Some(day), Some(year)) = (is_day_token(w[1]), is_year_token(w[2])) else {
            continue;
        };
        out.push(format!("{} {}, {}", w[0], day, year));
    }
    out
}

/// Resolve the two due dates and their delinquency-start dates. A
/// missing due date stays empty, and so does its delinquent date (the
/// day-after transform passes unparseable input through).
pub fn resolve(section: &str) -> DueDates {
    let dates = find_long_dates(section);
    let due1 = dates.first().map(|d| date::format_due_date(d)).unwrap_or_default();
    let due2 = dates.get(1).map(|d| date::format_due_date(d)).unwrap_or_default();
    let delinquent1 = date::next_day(&due1);
    let delinquent2 = date::next_day(&due2);
    DueDates { due1, due2, delinquent1, delinquent2 }
}
