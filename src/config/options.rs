// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageKind {
    /// Raw text → parsed parcel records (output file)
    Output,
    /// Raw text + output file → instruction dataset (JSON)
    Dataset,
    /// Both stages back to back
    All,
}

/// Textual anchors delimiting one record inside the raw dump.
/// Configurable because the upstream page text is the only contract:
/// if the county reworks its wording, records silently stop matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchors {
    /// Literal start marker, e.g. "Property Information:"
    pub start: String,
    /// Phrase chain closing a record, matched in order with arbitrary
    /// whitespace between phrases
    pub end: Vec<String>,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            start: s!(RECORD_START),
            end: RECORD_END_PHRASES.iter().map(|p| s!(*p)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    pub raw: PathBuf,     // scraped raw text, input to both stages
    pub output: PathBuf,  // record blocks, written by Output / read by Dataset
    pub dataset: PathBuf, // final dataset JSON
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            raw: PathBuf::from(DEFAULT_RAW_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dataset: PathBuf::from(DEFAULT_DATASET_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub stage: StageKind,
    pub anchors: Anchors,
    pub paths: Paths,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            stage: StageKind::All,
            anchors: Anchors::default(),
            paths: Paths::default(),
        }
    }
}
