//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use starroute_lib::Point;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The right-angle route used throughout the examples: legs of 3 and 4 Ly.
#[allow(dead_code)]
pub fn right_angle_route() -> Vec<Point> {
    vec![
        Point::new("A", 0.0, 0.0, 0.0),
        Point::new("B", 3.0, 0.0, 0.0),
        Point::new("C", 3.0, 4.0, 0.0),
    ]
}

/// Deterministic, irregularly spaced systems for optimizer checks.
#[allow(dead_code)]
pub fn scattered_route(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            Point::new(
                format!("S{i}"),
                (t * 7.31).sin() * 50.0 + t,
                (t * 3.17).cos() * 40.0,
                (t * 1.93).sin() * 30.0 - t * 0.5,
            )
        })
        .collect()
}

/// Names of `route` in order.
#[allow(dead_code)]
pub fn names(route: &[Point]) -> Vec<&str> {
    route.iter().map(|point| point.name.as_str()).collect()
}
