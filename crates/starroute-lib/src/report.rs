use std::fmt::Write;

use serde::Serialize;

use crate::history::RouteRecord;
use crate::jumps::{estimate_jumps, estimate_route_jumps, JumpEstimate, RangeLimit};
use crate::route::RouteEvaluation;

/// Timestamp layout used when rendering history entries.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Classifies which ordering of the session's systems a report describes.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Systems in the order they were entered.
    Entered,
    /// Shortest tour from the first entered system.
    Optimized,
}

impl RouteKind {
    /// Human-readable heading shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteKind::Entered => "Entered Route Details",
            RouteKind::Optimized => "Optimized Route Details",
        }
    }

    fn total_prefix(self) -> &'static str {
        match self {
            RouteKind::Entered => "",
            RouteKind::Optimized => "Optimized ",
        }
    }
}

/// Presentation style for turning a [`RouteReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    RichText,
}

/// One leg of a report with its jump estimate.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegReport {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub jumps: JumpEstimate,
}

/// Structured representation of an evaluated route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteReport {
    pub kind: RouteKind,
    pub legs: Vec<LegReport>,
    pub total_distance: f64,
    pub total_jumps: JumpEstimate,
}

impl RouteReport {
    /// Attach jump estimates for `range` to an evaluated route.
    pub fn from_evaluation(kind: RouteKind, evaluation: &RouteEvaluation, range: RangeLimit) -> Self {
        let legs = evaluation
            .legs
            .iter()
            .map(|leg| LegReport {
                from: leg.from.clone(),
                to: leg.to.clone(),
                distance: leg.distance,
                jumps: estimate_jumps(leg.distance, range),
            })
            .collect();

        Self {
            kind,
            legs,
            total_distance: evaluation.total_distance,
            total_jumps: estimate_route_jumps(evaluation, range),
        }
    }

    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}:", self.kind.label());
        for (index, leg) in self.legs.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{:>3}: {} -> {} ({:.2} Ly, est. jumps: {})",
                index + 1,
                leg.from,
                leg.to,
                leg.distance,
                leg.jumps
            );
        }
        let _ = writeln!(
            buffer,
            "{}Total Distance: {:.2} Ly",
            self.kind.total_prefix(),
            self.total_distance
        );
        let _ = writeln!(buffer, "Estimated Jumps: {}", self.total_jumps);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "**{}**", self.kind.label());
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "| From | To | Distance (Ly) | Est. Jumps |");
        let _ = writeln!(buffer, "|---|---|---:|---:|");
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "| {} | {} | {:.2} | {} |",
                leg.from, leg.to, leg.distance, leg.jumps
            );
        }
        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "_{}Total Distance: {:.2} Ly, Estimated Jumps: {}_",
            self.kind.total_prefix(),
            self.total_distance,
            self.total_jumps
        );
        buffer
    }
}

/// Display-ready view of a [`RouteRecord`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryRow {
    pub timestamp: String,
    pub systems: String,
    pub distance: String,
}

impl HistoryRow {
    pub fn from_record(record: &RouteRecord) -> Self {
        Self {
            timestamp: record
                .timestamp
                .format(HISTORY_TIMESTAMP_FORMAT)
                .to_string(),
            systems: record.systems.join(" → "),
            distance: format!("{:.2}", record.total_distance),
        }
    }
}
