// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::config::options::{AppOptions, StageKind};
use crate::{assemble, dataset, file, output, segment};

/// Optional progress sink for the CLI (or any other frontend).
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, _index: usize) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Summary of what a run produced. Counts are reported, never enforced:
/// a short batch is still a successful batch.
pub struct RunSummary {
    pub records_found: usize,
    pub records_parsed: usize,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: dispatch on stage kind and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    match opts.stage {
        StageKind::Output => run_output(opts, &mut progress),
        StageKind::Dataset => run_dataset(opts, &mut progress),
        StageKind::All => {
            let mut summary = run_output(opts, &mut progress)?;
            let second = run_dataset(opts, &mut progress)?;
            summary.files_written.extend(second.files_written);
            Ok(summary)
        }
    }
}

/* ---------------- Output stage ---------------- */

fn run_output(
    opts: &AppOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let raw = file::read_text(&opts.paths.raw)?;
    let blocks = segment::split_records(&raw, &opts.anchors);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(blocks.len());
    }

    let mut records = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing record #{} ...", i + 1));
        }
        records.push(assemble::assemble(block));
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i);
        }
    }

    let text = output::render_records(&records)?;
    file::write_text(&opts.paths.output, &text)?;
    logf!(
        "output stage: {} record(s) → {}",
        records.len(),
        opts.paths.output.display()
    );

    Ok(RunSummary {
        records_found: blocks.len(),
        records_parsed: records.len(),
        files_written: vec![opts.paths.output.clone()],
    })
}

/* ---------------- Dataset stage ---------------- */

fn run_dataset(
    opts: &AppOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let raw = file::read_text(&opts.paths.raw)?;
    let blocks = segment::split_records(&raw, &opts.anchors);

    let output_text = file::read_text(&opts.paths.output)?;
    let outputs = output::parse_records(&output_text);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} raw text records.", blocks.len()));
        p.log(&format!("Found {} output records.", outputs.len()));
    }

    let found = blocks.len();
    let examples = dataset::build(&blocks, outputs);
    let json = dataset::render(&examples)?;
    file::write_text(&opts.paths.dataset, &json)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Created dataset with {} records.", examples.len()));
    }
    logf!(
        "dataset stage: {} example(s) → {}",
        examples.len(),
        opts.paths.dataset.display()
    );

    Ok(RunSummary {
        records_found: found,
        records_parsed: examples.len(),
        files_written: vec![opts.paths.dataset.clone()],
    })
}
