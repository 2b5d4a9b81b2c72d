//! Exact shortest-tour search with a pinned start.
//!
//! [`optimize`] keeps the first system in place and scores every ordering of
//! the remaining systems, returning the one with the smallest total distance.
//! This is a brute-force solver: a route of `n` systems examines `(n - 1)!`
//! tours, each costing `O(n)`. Ten systems already means 362 880 tours and
//! every additional system multiplies the work again, so callers must bound
//! the input size before calling (see [`crate::SessionConfig`]).

use tracing::debug;

use crate::geometry::Point;
use crate::route::tour_length;

/// Find the shortest tour over `route` that starts at `route[0]`.
///
/// Orderings of the remaining systems are enumerated lexicographically by
/// their input position; the first ordering reaching the minimum distance
/// wins ties. Routes with fewer than two systems are returned unchanged. The
/// input slice is never modified.
pub fn optimize(route: &[Point]) -> Vec<Point> {
    if route.len() < 2 {
        return route.to_vec();
    }

    let start = &route[0];
    let mut order: Vec<usize> = (1..route.len()).collect();
    let mut best_order = order.clone();
    let mut best_distance = f64::INFINITY;
    let mut examined: u64 = 0;

    loop {
        let length =
            tour_length(std::iter::once(start).chain(order.iter().map(|&index| &route[index])));
        examined += 1;

        if length < best_distance {
            best_distance = length;
            best_order.clone_from(&order);
        }

        if !next_permutation(&mut order) {
            break;
        }
    }

    debug!(
        systems = route.len(),
        tours = examined,
        best_distance,
        "optimized route"
    );

    std::iter::once(start)
        .chain(best_order.iter().map(|&index| &route[index]))
        .cloned()
        .collect()
}

/// Number of tours [`optimize`] scores for a route of `len` systems.
///
/// Returns `None` when the count does not fit in a `u128`.
pub fn tour_count(len: usize) -> Option<u128> {
    if len < 2 {
        return Some(0);
    }
    (1..len as u128).try_fold(1u128, |acc, factor| acc.checked_mul(factor))
}

/// Advance `order` to its lexicographic successor.
///
/// Returns `false` once `order` is the last (descending) permutation.
fn next_permutation(order: &mut [usize]) -> bool {
    let Some(pivot) = order.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };

    let mut successor = order.len() - 1;
    while order[successor] <= order[pivot] {
        successor -= 1;
    }

    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_permutation_walks_lexicographic_order() {
        let mut order = vec![1, 2, 3];
        let mut seen = vec![order.clone()];
        while next_permutation(&mut order) {
            seen.push(order.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn single_element_has_no_successor() {
        let mut order = vec![1];
        assert!(!next_permutation(&mut order));
        assert_eq!(order, vec![1]);
    }

    #[test]
    fn tour_count_is_factorial_of_remaining_systems() {
        assert_eq!(tour_count(0), Some(0));
        assert_eq!(tour_count(1), Some(0));
        assert_eq!(tour_count(2), Some(1));
        assert_eq!(tour_count(4), Some(6));
        assert_eq!(tour_count(11), Some(3_628_800));
        assert_eq!(tour_count(200), None);
    }

    #[test]
    fn equal_tours_keep_first_enumerated_order() {
        // B and C mirror each other around A, so A-B-C and A-C-B tie.
        let route = vec![
            Point::new("A", 0.0, 0.0, 0.0),
            Point::new("B", 1.0, 0.0, 0.0),
            Point::new("C", -1.0, 0.0, 0.0),
        ];
        let tour = optimize(&route);
        let names: Vec<&str> = tour.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
