// src/output.rs
//
// The intermediate persisted format: one "--- Record N ---" block per
// parcel, wrapping a {"parcels": [...]} envelope serialized with 4-space
// indentation, each block closed by an 80-dash divider line.

use std::error::Error;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::config::consts::{RECORD_DIVIDER, RECORD_HEADER_PREFIX, RECORD_HEADER_SUFFIX};
use crate::record::{ParcelEnvelope, ParcelRecord};

fn to_json_indent4<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    let fmt = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, fmt);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Render the full output file for a batch of records.
pub fn render_records(records: &[ParcelRecord]) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    for (idx, record) in records.iter().enumerate() {
        let envelope = ParcelEnvelope { parcels: vec![record.clone()] };
        let json = to_json_indent4(&envelope)?;
        out.push_str(RECORD_HEADER_PREFIX);
        out.push_str(&(idx + 1).to_string());
        out.push_str(RECORD_HEADER_SUFFIX);
        out.push('\n');
        out.push_str(&json);
        out.push_str("\n\n");
        out.push_str(RECORD_DIVIDER);
        out.push_str("\n\n");
    }
    Ok(out)
}

/// Split on "--- Record <digits> ---" headers. The slice before the
/// first header (usually empty) is included, matching a split.
fn split_record_blocks(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut chunk_start = 0usize;
    let mut cursor = 0usize;

    while let Some(rel) = text[cursor..].find(RECORD_HEADER_PREFIX) {
        let header = cursor + rel;
        let digits = header + RECORD_HEADER_PREFIX.len();
        let digits_end = text[digits..]
            .find(|c: char| !c.is_ascii_digit())
            .map(|i| digits + i)
            .unwrap_or(text.len());
        if digits_end > digits && text[digits_end..].starts_with(RECORD_HEADER_SUFFIX) {
            parts.push(&text[chunk_start..header]);
            chunk_start = digits_end + RECORD_HEADER_SUFFIX.len();
            cursor = chunk_start;
        } else {
            cursor = digits;
        }
    }
    parts.push(&text[chunk_start..]);
    parts
}

/// Parse a persisted output file back into one envelope per record
/// block. Blocks that fail to parse are logged and skipped; the batch
/// never aborts.
pub fn parse_records(text: &str) -> Vec<Value> {
    let mut out = Vec::new();
    for chunk in split_record_blocks(text) {
        let chunk = chunk.trim();
        if chunk.is_empty() || chunk.starts_with(RECORD_DIVIDER) {
            continue;
        }
        // the closing brace is searched after the opening one, so a
        // stray '}' before any '{' cannot invert the span
        let Some(open) = chunk.find('{') else { continue };
        let Some(len) = chunk[open..].rfind('}') else { continue };
        match serde_json::from_str::<Value>(&chunk[open..=open + len]) {
            Ok(v) => out.push(v),
            Err(e) => loge!("output: JSON parsing error in one record: {}", e),
        }
    }
    logf!("output: found {} persisted record(s)", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Agency, DelinquencyEntry};

    fn record(parcel: &str) -> ParcelRecord {
        ParcelRecord {
            parcel_number: s!(parcel),
            tax_year: s!("2024"),
            agencies: vec![Agency::default()],
            delinquencies: vec![DelinquencyEntry {
                payoff_amount: s!("$75.00"),
                tax_year: s!("2023"),
            }],
            delinquent_notes: Vec::new(),
        }
    }

    #[test]
    fn render_layout() {
        let text = render_records(&[record("P-1"), record("P-2")]).unwrap();
        assert!(text.starts_with("--- Record 1 ---\n{\n    \"parcels\": ["));
        assert!(text.contains("--- Record 2 ---"));
        assert_eq!(text.matches(RECORD_DIVIDER).count(), 2);
        assert!(text.contains("\"parcelNumber\": \"P-1\""));
    }

    #[test]
    fn roundtrip() {
        let text = render_records(&[record("P-1"), record("P-2")]).unwrap();
        let parsed = parse_records(&text);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["parcels"][0]["parcelNumber"], "P-1");
        assert_eq!(parsed[1]["parcels"][0]["parcelNumber"], "P-2");
        assert_eq!(parsed[0]["parcels"][0]["delinquencies"][0]["payoffAmount"], "$75.00");
    }

    #[test]
    fn malformed_block_is_skipped_not_fatal() {
        let text = join!(
            "--- Record 1 ---\n{\"parcels\": [{\"parcelNumber\": \"OK\"}]}\n\n",
            RECORD_DIVIDER,
            "\n\n--- Record 2 ---\n{ this is not json }\n\n",
            RECORD_DIVIDER,
            "\n\n--- Record 3 ---\n{\"parcels\": []}\n\n",
            RECORD_DIVIDER,
            "\n\n"
        );
        let parsed = parse_records(&text);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["parcels"][0]["parcelNumber"], "OK");
    }

    #[test]
    fn inverted_braces_are_skipped_not_fatal() {
        // '}' before any '{': no JSON span exists in that block
        let text = join!(
            "--- Record 1 ---\n} corrupted {\n\n",
            RECORD_DIVIDER,
            "\n\n--- Record 2 ---\n{\"parcels\": []}\n\n",
            RECORD_DIVIDER,
            "\n\n"
        );
        let parsed = parse_records(&text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["parcels"], serde_json::json!([]));
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("no record headers at all").is_empty());
    }
}
