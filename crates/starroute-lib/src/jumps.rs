//! Jump count estimates for a ship with a fixed jump range.
//!
//! Estimates use a pure ceiling-division model: covering `distance` with legs
//! no longer than the range takes `ceil(distance / range)` jumps, assuming a
//! stop can be placed anywhere along the way. Whole routes sum the per-leg
//! estimates instead of dividing the total distance, since ceilings do not
//! distribute over addition.
//!
//! Counts saturate at `u64::MAX`, both per leg and when summed over a route.
//! An undefined (NaN) distance has no estimate and reports `NotAvailable`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::route::RouteEvaluation;

/// Maximum distance a ship covers in a single jump, in light-years.
///
/// Zero or negative values mean the range is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeLimit(pub f64);

impl RangeLimit {
    pub fn new(light_years: f64) -> Self {
        Self(light_years)
    }

    /// Whether jump estimates can be produced with this range.
    pub fn is_available(self) -> bool {
        self.0 > 0.0
    }

    pub fn light_years(self) -> f64 {
        self.0
    }
}

impl From<f64> for RangeLimit {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Result of a jump estimate.
///
/// `NotAvailable` is distinct from zero jumps: it reports that no range was
/// supplied, not that no travel is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JumpEstimate {
    Jumps(u64),
    NotAvailable,
}

impl JumpEstimate {
    pub fn jumps(self) -> Option<u64> {
        match self {
            JumpEstimate::Jumps(count) => Some(count),
            JumpEstimate::NotAvailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, JumpEstimate::Jumps(_))
    }
}

impl fmt::Display for JumpEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpEstimate::Jumps(count) => write!(f, "{count}"),
            JumpEstimate::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// Estimate the jumps needed to cover `distance` with the given range.
pub fn estimate_jumps(distance: f64, range: RangeLimit) -> JumpEstimate {
    if !range.is_available() {
        return JumpEstimate::NotAvailable;
    }

    let ratio = (distance / range.light_years()).ceil();
    if ratio.is_nan() {
        return JumpEstimate::NotAvailable;
    }
    // Float-to-int casts saturate, so an infinite ratio maps to `u64::MAX`.
    JumpEstimate::Jumps(ratio as u64)
}

/// Estimate the jumps for a whole route by summing per-leg estimates.
///
/// Any leg without an estimate makes the whole route `NotAvailable`.
pub fn estimate_route_jumps(evaluation: &RouteEvaluation, range: RangeLimit) -> JumpEstimate {
    if !range.is_available() {
        return JumpEstimate::NotAvailable;
    }

    evaluation
        .legs
        .iter()
        .try_fold(0u64, |total, leg| {
            estimate_jumps(leg.distance, range)
                .jumps()
                .map(|jumps| total.saturating_add(jumps))
        })
        .map_or(JumpEstimate::NotAvailable, JumpEstimate::Jumps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_available_renders_as_na() {
        assert_eq!(JumpEstimate::NotAvailable.to_string(), "N/A");
        assert_eq!(JumpEstimate::Jumps(3).to_string(), "3");
    }

    #[test]
    fn estimates_serialize_as_number_or_null() {
        let json = serde_json::to_string(&[JumpEstimate::Jumps(2), JumpEstimate::NotAvailable])
            .expect("serialize estimates");
        assert_eq!(json, "[2,null]");
    }

    #[test]
    fn nan_distance_has_no_estimate() {
        assert_eq!(
            estimate_jumps(f64::NAN, RangeLimit::new(5.0)),
            JumpEstimate::NotAvailable
        );
    }

    #[test]
    fn infinite_distance_saturates() {
        assert_eq!(
            estimate_jumps(f64::INFINITY, RangeLimit::new(5.0)),
            JumpEstimate::Jumps(u64::MAX)
        );
    }

    #[test]
    fn exact_multiple_of_range_needs_no_extra_jump() {
        assert_eq!(
            estimate_jumps(10.0, RangeLimit::new(5.0)),
            JumpEstimate::Jumps(2)
        );
    }
}
