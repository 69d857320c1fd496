// src/parse/fields.rs
//
// Leaf field extraction from one parcel's raw block. Everything here is
// best-effort: a missing label means an empty string, never an error —
// downstream treats empty as "unknown".

use crate::config::consts::PARCEL_NUMBER_LABEL;

/// All text following the first occurrence of `label` through the end of
/// the block, trimmed. Empty string when the label is absent.
pub fn section_after<'a>(block: &'a str, label: &str) -> &'a str {
    match block.find(label) {
        Some(i) => block[i + label.len()..].trim(),
        None => "",
    }
}

/// The first non-empty line after the "Parcel Number" label, trimmed.
/// The label must end its own line; a value on the same line is not a
/// parcel number.
pub fn parcel_number(block: &str) -> String {
    let Some(i) = block.find(PARCEL_NUMBER_LABEL) else {
        return s!();
    };
    let rest = &block[i + PARCEL_NUMBER_LABEL.len()..];
    let mut lines = rest.lines();
    match lines.next() {
        Some(tail) if tail.trim().is_empty() => {}
        _ => return s!(),
    }
    lines
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(String::from)
        .unwrap_or_default()
}
