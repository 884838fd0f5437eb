// originality/src/cli.rs
//! Command-line interface definition for `originality-score`.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "originality-score",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute a human signal score for one or more text files",
    long_about = "Compute a human signal score for one or more text files. Each file is one document; the score reflects how lexically and semantically diverse the combined content is, from 0 (duplicated or degenerate) to 1.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// One or more text files to evaluate.
    #[arg(value_name = "FILE", required = true, help = "One or more text files to evaluate.")]
    pub paths: Vec<PathBuf>,

    /// Weight overrides, e.g. `-w entropy=0.7 -w diversity=0.3` or `-w entropy=0.7,diversity=0.3`.
    #[arg(
        long = "weight",
        short = 'w',
        value_name = "KEY=VALUE",
        help = "Override component weights, e.g. entropy=0.7,diversity=0.3. Weights are normalised automatically."
    )]
    pub weights: Vec<String>,

    /// YAML file mapping metric names to weights; `-w` overrides apply on top.
    #[arg(long = "weights-file", value_name = "FILE", env = "ORIGINALITY_WEIGHTS_FILE", help = "Load weights from a YAML file (metric: weight).")]
    pub weights_file: Option<PathBuf>,

    /// Print the full report as JSON.
    #[arg(long = "json", help = "Print the full report as JSON to stdout.")]
    pub json: bool,

    /// Exit with code 2 when the score is below this value.
    #[arg(long = "fail-under", value_name = "SCORE", value_parser = parse_unit_interval, help = "Exit with code 2 if the human signal score is below SCORE (0..=1).")]
    pub fail_under: Option<f64>,

    /// Suppress all logging.
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

fn parse_unit_interval(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is outside 0..=1", value))
    }
}
