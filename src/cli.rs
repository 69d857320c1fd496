// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{AppOptions, StageKind};
use crate::runner::{self, Progress};

/// Prints progress lines as they happen.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = AppOptions::default();
    parse_cli(&mut opts)?;

    let mut progress = CliProgress;
    let summary = runner::run(&opts, Some(&mut progress))?;

    println!(
        "\nSuccessfully processed {} of {} record(s).",
        summary.records_parsed, summary.records_found
    );
    for path in &summary.files_written {
        println!("Saved to: {}", path.display());
    }
    Ok(())
}

fn parse_cli(opts: &mut AppOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--stage" => {
                let v = args.next().ok_or("Missing value for --stage")?;
                opts.stage = match v.to_ascii_lowercase().as_str() {
                    "output" => StageKind::Output,
                    "dataset" => StageKind::Dataset,
                    "all" => StageKind::All,
                    other => return Err(format!("Unknown stage: {}", other).into()),
                };
            }
            "-r" | "--raw" => {
                opts.paths.raw = PathBuf::from(args.next().ok_or("Missing raw text path")?);
            }
            "-o" | "--out" => {
                opts.paths.output = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "-d" | "--dataset" => {
                opts.paths.dataset = PathBuf::from(args.next().ok_or("Missing dataset path")?);
            }
            "--start" => opts.anchors.start = args.next().ok_or("Missing value for --start")?,
            "--end" => {
                let v = args.next().ok_or("Missing value for --end")?;
                opts.anchors.end = parse_end_phrases(&v)?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Boundary phrases separated by "||", e.g.
/// "Due Dates:||May 12, 2025||November 10, 2025" is three phrases.
fn parse_end_phrases(s: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let out: Vec<String> = s
        .split("||")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();
    if out.is_empty() {
        return Err("Empty value for --end".into());
    }
    Ok(out)
}
