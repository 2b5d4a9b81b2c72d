use serde::Serialize;
use tracing::debug;

use crate::geometry::{distance, Point};

/// One consecutive point-to-point segment of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Legs of an ordered route together with their summed distance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteEvaluation {
    pub legs: Vec<Leg>,
    pub total_distance: f64,
}

impl RouteEvaluation {
    /// Number of legs in the route.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }
}

/// Compute consecutive-leg distances for `route` in input order.
///
/// The total is accumulated strictly left to right so repeated evaluations
/// (and the optimizer, which uses the same rule) round identically. Routes
/// with fewer than two points have no legs and a total of zero.
pub fn evaluate_legs(route: &[Point]) -> RouteEvaluation {
    let mut legs = Vec::with_capacity(route.len().saturating_sub(1));
    let mut total_distance = 0.0;

    for pair in route.windows(2) {
        let leg_distance = distance(&pair[0], &pair[1]);
        total_distance += leg_distance;
        legs.push(Leg {
            from: pair[0].name.clone(),
            to: pair[1].name.clone(),
            distance: leg_distance,
        });
    }

    debug!(legs = legs.len(), total_distance, "evaluated route legs");

    RouteEvaluation {
        legs,
        total_distance,
    }
}

/// Sum of leg distances over `stops`, without building the leg list.
pub(crate) fn tour_length<'a, I>(stops: I) -> f64
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut stops = stops.into_iter();
    let Some(mut previous) = stops.next() else {
        return 0.0;
    };

    let mut total = 0.0;
    for stop in stops {
        total += distance(previous, stop);
        previous = stop;
    }
    total
}
