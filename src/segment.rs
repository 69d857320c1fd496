// src/segment.rs
//
// Splits one raw multi-parcel dump into per-parcel blocks. A block runs
// from the start marker through the end of the boundary phrase chain,
// both inclusive. Text outside any block is dropped silently.

use crate::config::options::Anchors;

/// One parcel's unparsed scraped text. Produced only here; consumed,
/// never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawParcelBlock(pub String);

impl RawParcelBlock {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Find the next position where every phrase matches in order, phrases
/// separated by whitespace only. Returns (start of first phrase, end of
/// last phrase).
fn find_phrase_chain(text: &str, from: usize, phrases: &[String]) -> Option<(usize, usize)> {
    let first = phrases.first()?;
    let mut search = from;
    'outer: while let Some(rel) = text.get(search..)?.find(first.as_str()) {
        let start = search + rel;
        let mut pos = start + first.len();
        for phrase in &phrases[1..] {
            let after_ws = pos + text[pos..]
                .char_indices()
                .find(|(_, c)| !c.is_whitespace())
                .map(|(i, _)| i)
                .unwrap_or(text.len() - pos);
            if text[after_ws..].starts_with(phrase.as_str()) {
                pos = after_ws + phrase.len();
            } else {
                // chain broken; retry from the next occurrence of the
                // first phrase
                search = start + first.chars().next().map_or(1, char::len_utf8);
                continue 'outer;
            }
        }
        return Some((start, pos));
    }
    None
}

/// Split a raw dump into ordered parcel blocks. Zero matches yields an
/// empty vec, not an error.
pub fn split_records(dump: &str, anchors: &Anchors) -> Vec<RawParcelBlock> {
    let mut blocks = Vec::new();
    if anchors.start.is_empty() || anchors.end.is_empty() {
        return blocks;
    }

    let mut pos = 0usize;
    while let Some(rel) = dump[pos..].find(anchors.start.as_str()) {
        let start = pos + rel;
        let Some((_, end)) = find_phrase_chain(dump, start + anchors.start.len(), &anchors.end)
        else {
            break;
        };
        blocks.push(RawParcelBlock(s!(&dump[start..end])));
        pos = end;
    }

    logd!("segment: {} record block(s)", blocks.len());
    blocks
}
