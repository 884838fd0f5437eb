//! The scoring command: read files, resolve weights, analyze, print.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use originality_core::{analyze, parse_override_pairs, read_weight_file, tokenize, ScoreReport, WeightConfig};

use crate::ui::output_format;

/// Options for one scoring run, decoupled from `clap`.
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    pub paths: Vec<PathBuf>,
    pub weight_overrides: Vec<String>,
    pub weights_file: Option<PathBuf>,
    pub json: bool,
    pub fail_under: Option<f64>,
}

/// How the run ended, for choosing the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    Passed,
    BelowThreshold,
}

/// Reads every file into one document each, in argument order.
pub fn read_documents(paths: &[PathBuf]) -> Result<Vec<String>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        if !path.exists() {
            bail!("File not found: {}", path.display());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display()))?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        documents.push(text);
    }
    Ok(documents)
}

/// Builds the weight configuration: defaults, or the weights file, with `-w` overrides on top.
pub fn resolve_weights(weights_file: Option<&Path>, overrides: &[String]) -> Result<WeightConfig> {
    let override_pairs = parse_override_pairs(overrides)?;

    let mut pairs = match weights_file {
        Some(path) => read_weight_file(path)?,
        None if override_pairs.is_empty() => return Ok(WeightConfig::default()),
        None => Vec::new(),
    };
    pairs.extend(override_pairs);

    let weights = WeightConfig::from_pairs(pairs).context("Invalid weight configuration")?;
    info!("Using weights: {:?}", weights.normalized());
    Ok(weights)
}

/// The main operation runner for the CLI.
pub fn run_score<W: Write>(opts: &ScoreOptions, out: &mut W) -> Result<ScoreOutcome> {
    info!("Scoring {} files.", opts.paths.len());

    let weights = resolve_weights(opts.weights_file.as_deref(), &opts.weight_overrides)?;
    let documents = read_documents(&opts.paths)?;
    warn_empty_documents(&opts.paths, &documents);
    let report = analyze(&documents, &weights);

    write_report(&report, opts.json, out)?;

    let outcome = match opts.fail_under {
        Some(threshold) if report.human_signal_score < threshold => {
            info!(
                "Score {:.4} is below the required {:.4}.",
                report.human_signal_score, threshold
            );
            ScoreOutcome::BelowThreshold
        }
        _ => ScoreOutcome::Passed,
    };
    Ok(outcome)
}

/// Paths whose document yields no tokens (empty, whitespace or punctuation only).
fn token_less_paths<'a>(paths: &'a [PathBuf], documents: &[String]) -> Vec<&'a PathBuf> {
    paths
        .iter()
        .zip(documents)
        .filter(|(_, doc)| tokenize(doc).is_empty())
        .map(|(path, _)| path)
        .collect()
}

fn warn_empty_documents(paths: &[PathBuf], documents: &[String]) {
    let stderr_supports_color = io::stderr().is_terminal();
    for path in token_less_paths(paths, documents) {
        output_format::print_warn_message(
            &mut io::stderr(),
            &format!("{} contributes no tokens.", path.display()),
            stderr_supports_color,
        )
        .ok(); // stderr closed; nothing more to do
    }
}

fn write_report<W: Write>(report: &ScoreReport, json: bool, out: &mut W) -> Result<()> {
    if json {
        let text = report.to_json().context("Failed to serialize report")?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(out, "{}", output_format::render_report_table(report))?;
    }
    Ok(())
}
