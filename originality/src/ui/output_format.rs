//! Console rendering for score reports and status messages.

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, CellAlignment, Color, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use originality_core::ScoreReport;

/// Scores at or above this are shown as healthy.
const HEALTHY_SCORE: f64 = 0.7;
/// Scores below this are shown as low.
const LOW_SCORE: f64 = 0.4;

fn score_color(score: f64) -> Color {
    if score >= HEALTHY_SCORE {
        Color::Green
    } else if score >= LOW_SCORE {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn value_cell(value: f64) -> Cell {
    Cell::new(format!("{:.4}", value)).set_alignment(CellAlignment::Right)
}

/// Renders the metrics and score as a table, four decimals per value.
pub fn render_report_table(report: &ScoreReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        Cell::new("Documents"),
        Cell::new(report.documents).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![Cell::new("Token entropy (normalized)"), value_cell(report.entropy)]);
    table.add_row(vec![Cell::new("Perplexity"), value_cell(report.perplexity)]);
    table.add_row(vec![Cell::new("Perplexity (normalized)"), value_cell(report.normalized_perplexity)]);
    table.add_row(vec![Cell::new("Embedding diversity"), value_cell(report.diversity)]);
    table.add_row(vec![
        Cell::new("Human Signal Score").add_attribute(Attribute::Bold),
        value_cell(report.human_signal_score)
            .fg(score_color(report.human_signal_score))
            .add_attribute(Attribute::Bold),
    ]);

    table.to_string()
}

/// Writes an error message, in red when `supports_color` is set.
pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), message)
    } else {
        writeln!(writer, "Error: {}", message)
    }
}

/// Writes a warning message, in yellow when `supports_color` is set.
pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), message)
    } else {
        writeln!(writer, "Warning: {}", message)
    }
}
