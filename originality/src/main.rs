// originality/src/main.rs
//! `originality-score` entry point.
//!
//! Exit codes: `0` success, `1` any error (bad arguments, unreadable files,
//! invalid weights), `2` score below `--fail-under`.

use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use originality::cli::Cli;
use originality::commands::score::{run_score, ScoreOptions, ScoreOutcome};
use originality::logger;
use originality::ui::output_format;

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let opts = ScoreOptions {
        paths: args.paths,
        weight_overrides: args.weights,
        weights_file: args.weights_file,
        json: args.json,
        fail_under: args.fail_under,
    };

    let stdout = io::stdout();
    match run_score(&opts, &mut stdout.lock()) {
        Ok(ScoreOutcome::Passed) => ExitCode::SUCCESS,
        Ok(ScoreOutcome::BelowThreshold) => ExitCode::from(2),
        Err(e) => {
            output_format::print_error_message(
                &mut io::stderr(),
                &format!("{:#}", e),
                io::stderr().is_terminal(),
            )
            .ok(); // stderr closed; nothing more to do
            ExitCode::FAILURE
        }
    }
}
