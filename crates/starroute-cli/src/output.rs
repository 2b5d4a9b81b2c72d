//! Output formatting for route rendering.
//!
//! Route calculations and jump estimates are rendered either as text (plain
//! or Markdown) or as JSON for scripting.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use starroute_lib::{
    HistoryRow, JumpEstimate, RangeLimit, RenderMode, RouteCalculation, RouteHistory, RouteReport,
};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Markdown tables.
    Rich,
    /// Machine-readable JSON.
    Json,
}

#[derive(Serialize)]
struct RouteOutput<'a> {
    entered: &'a RouteReport,
    optimized: &'a RouteReport,
    history: Vec<HistoryRow>,
}

#[derive(Serialize)]
struct JumpOutput {
    distance: f64,
    jump_range: RangeLimit,
    jumps: JumpEstimate,
}

/// Render a route calculation followed by the session's history.
pub fn render_calculation(
    calculation: &RouteCalculation,
    history: &RouteHistory,
    format: OutputFormat,
) -> Result<String> {
    let rows: Vec<HistoryRow> = history.records().iter().map(HistoryRow::from_record).collect();

    let mode = match format {
        OutputFormat::Json => {
            let output = RouteOutput {
                entered: &calculation.entered,
                optimized: &calculation.optimized,
                history: rows,
            };
            return Ok(serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => RenderMode::PlainText,
        OutputFormat::Rich => RenderMode::RichText,
    };

    let mut buffer = String::new();
    buffer.push_str(&calculation.entered.render(mode));
    buffer.push('\n');
    buffer.push_str(&calculation.optimized.render(mode));
    buffer.push('\n');
    buffer.push_str(&render_history(&rows, mode));
    Ok(buffer)
}

fn render_history(rows: &[HistoryRow], mode: RenderMode) -> String {
    let mut buffer = String::new();
    match mode {
        RenderMode::PlainText => {
            let _ = writeln!(buffer, "Route History:");
            for row in rows {
                let _ = writeln!(
                    buffer,
                    "{}  {}  {} Ly",
                    row.timestamp, row.systems, row.distance
                );
            }
        }
        RenderMode::RichText => {
            let _ = writeln!(buffer, "**Route History**");
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "| Time | Systems | Total Distance (Ly) |");
            let _ = writeln!(buffer, "|---|---|---:|");
            for row in rows {
                let _ = writeln!(
                    buffer,
                    "| {} | {} | {} |",
                    row.timestamp, row.systems, row.distance
                );
            }
        }
    }
    buffer
}

/// Render a single jump estimate.
pub fn render_jump_estimate(
    distance: f64,
    range: RangeLimit,
    estimate: JumpEstimate,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let output = JumpOutput {
                distance,
                jump_range: range,
                jumps: estimate,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Text | OutputFormat::Rich => Ok(format!(
            "Estimated Jumps: {estimate} ({distance:.2} Ly at {:.2} Ly per jump)\n",
            range.light_years()
        )),
    }
}
