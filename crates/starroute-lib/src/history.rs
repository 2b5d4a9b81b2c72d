//! Append-only log of computed routes.

use chrono::{DateTime, Local, SubsecRound};
use serde::Serialize;
use tracing::debug;

use crate::geometry::Point;

/// A single computed route, captured when it was calculated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    pub timestamp: DateTime<Local>,
    pub systems: Vec<String>,
    pub total_distance: f64,
}

/// Chronological record of every route computed in a session.
///
/// Entries are never removed or reordered. Recording the same route twice
/// yields two entries.
#[derive(Debug, Clone, Default)]
pub struct RouteHistory {
    records: Vec<RouteRecord>,
}

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for `route` stamped with the current local time.
    pub fn record(&mut self, route: &[Point], total_distance: f64) -> &RouteRecord {
        self.record_at(route, total_distance, Local::now().trunc_subsecs(0))
    }

    /// Append a record for `route` with an explicit timestamp.
    pub fn record_at(
        &mut self,
        route: &[Point],
        total_distance: f64,
        timestamp: DateTime<Local>,
    ) -> &RouteRecord {
        let systems = route.iter().map(|point| point.name.clone()).collect();
        self.records.push(RouteRecord {
            timestamp,
            systems,
            total_distance,
        });
        debug!(entries = self.records.len(), total_distance, "recorded route");
        &self.records[self.records.len() - 1]
    }

    /// Records in the order they were appended.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
