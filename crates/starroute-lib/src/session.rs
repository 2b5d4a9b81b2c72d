//! Route calculation session.
//!
//! A [`RouteSession`] owns the systems a user has entered, the ship's jump
//! range and the history of every route computed so far. Each consumer keeps
//! its own session; sessions share no state.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::csv_codec;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::history::RouteHistory;
use crate::jumps::RangeLimit;
use crate::optimizer::{optimize, tour_count};
use crate::report::{RouteKind, RouteReport};
use crate::route::evaluate_legs;

/// Reports produced by a single [`RouteSession::calculate`] call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteCalculation {
    pub entered: RouteReport,
    pub optimized: RouteReport,
    /// Systems in optimized visiting order.
    pub optimized_order: Vec<Point>,
}

/// Mutable state for one user's route planning.
#[derive(Debug, Clone, Default)]
pub struct RouteSession {
    systems: Vec<Point>,
    jump_range: RangeLimit,
    history: RouteHistory,
    config: SessionConfig,
}

impl RouteSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            systems: Vec::new(),
            jump_range: config.jump_range,
            history: RouteHistory::new(),
            config,
        }
    }

    /// Systems in the order they were entered.
    pub fn systems(&self) -> &[Point] {
        &self.systems
    }

    pub fn history(&self) -> &RouteHistory {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn jump_range(&self) -> RangeLimit {
        self.jump_range
    }

    pub fn set_jump_range(&mut self, range: RangeLimit) {
        self.jump_range = range;
    }

    /// Append an already-resolved system to the route.
    pub fn add_system(&mut self, point: Point) {
        self.systems.push(point);
    }

    /// Decode route CSV and append every system it contains.
    ///
    /// Nothing is appended when decoding fails. Returns the number of systems
    /// imported.
    pub fn import_csv(&mut self, text: &str) -> Result<usize> {
        let imported = csv_codec::decode(text)?;
        let count = imported.len();
        self.systems.extend(imported);
        info!(imported = count, total = self.systems.len(), "imported systems");
        Ok(count)
    }

    /// Encode the current route as CSV, or `None` when there is nothing to export.
    pub fn export_csv(&self) -> Result<Option<String>> {
        if self.systems.is_empty() {
            return Ok(None);
        }
        csv_codec::encode(&self.systems).map(Some)
    }

    /// Remove every entered system. History is kept.
    pub fn clear(&mut self) {
        self.systems.clear();
    }

    /// Evaluate the entered route and its optimized counterpart.
    ///
    /// Both routes are appended to the history on every call. Returns
    /// `Ok(None)` without recording anything when fewer than two systems have
    /// been entered. Routes larger than the configured optimizer bound fail
    /// with [`Error::RouteTooLarge`] after the entered route is recorded.
    pub fn calculate(&mut self) -> Result<Option<RouteCalculation>> {
        if self.systems.len() < 2 {
            return Ok(None);
        }

        let entered_evaluation = evaluate_legs(&self.systems);
        self.history
            .record(&self.systems, entered_evaluation.total_distance);
        let entered =
            RouteReport::from_evaluation(RouteKind::Entered, &entered_evaluation, self.jump_range);

        let max = self.config.max_optimize_points;
        if self.systems.len() > max {
            warn!(
                systems = self.systems.len(),
                max,
                tours = ?tour_count(self.systems.len()),
                "route too large for exact optimization"
            );
            return Err(Error::RouteTooLarge {
                len: self.systems.len(),
                max,
            });
        }

        let optimized_order = optimize(&self.systems);
        let optimized_evaluation = evaluate_legs(&optimized_order);
        self.history
            .record(&optimized_order, optimized_evaluation.total_distance);
        let optimized = RouteReport::from_evaluation(
            RouteKind::Optimized,
            &optimized_evaluation,
            self.jump_range,
        );

        info!(
            systems = self.systems.len(),
            entered_distance = entered.total_distance,
            optimized_distance = optimized.total_distance,
            "calculated route"
        );

        Ok(Some(RouteCalculation {
            entered,
            optimized,
            optimized_order,
        }))
    }
}
