mod core;
mod report;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use crate::core::{CLOSE_RESEMBLANCE_THRESHOLD, RankingSession, list_candidates};
use crate::report::{render_json, render_text};

#[derive(Parser, Debug)]
#[command(
    name = "picsim",
    version,
    about = "Visually compares the pictures in a directory against a reference picture\n\
             and reports the ones closest to it"
)]
struct Cli {
    /// Write the report to <FILE> instead of standard output
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Distance at or below which a picture counts as identical/close resemblance
    #[arg(long, value_name = "DISTANCE", default_value_t = CLOSE_RESEMBLANCE_THRESHOLD)]
    threshold: f64,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Reference picture
    #[arg(value_name = "FILE")]
    reference: PathBuf,

    /// Directory with the pictures to compare
    #[arg(value_name = "DIR")]
    directory: PathBuf,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(_) => {
            // A usage mistake is answered with the usage text, not a failure.
            print!("{}", Cli::command().render_help());
            return Ok(());
        }
    };

    let candidates = match list_candidates(&cli.directory) {
        Ok(candidates) => candidates,
        Err(err) => {
            // An unreadable directory still produces the (empty) report.
            eprintln!("{err}");
            Vec::new()
        }
    };

    let session = RankingSession::new().with_threshold(cli.threshold);

    let bar = ProgressBar::new(candidates.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40.green} {pos}/{len} {msg}",
    )?);
    bar.set_message("Comparing pictures…");
    let outcome = session.run_with_progress(&cli.reference, &candidates, |_| bar.inc(1))?;
    bar.finish_and_clear();

    let reference = cli.reference.display().to_string();
    let rendered = if cli.json {
        render_json(&reference, cli.threshold, &outcome)?
    } else {
        render_text(&reference, &outcome)
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write report to {:?}", path))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
