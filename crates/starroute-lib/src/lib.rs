//! Star route library entry points.
//!
//! This crate exposes the route distance engine: Euclidean distances between
//! star systems, per-leg route evaluation, an exact shortest-tour optimizer
//! with a pinned start, jump estimates for a given ship range, an in-memory
//! route history and the CSV route format. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod csv_codec;
pub mod error;
pub mod geometry;
pub mod history;
pub mod jumps;
pub mod optimizer;
pub mod report;
pub mod route;
pub mod session;

pub use config::SessionConfig;
pub use csv_codec::{decode, decode_reader, encode, CSV_HEADER};
pub use error::{Error, Result};
pub use geometry::{distance, Point};
pub use history::{RouteHistory, RouteRecord};
pub use jumps::{estimate_jumps, estimate_route_jumps, JumpEstimate, RangeLimit};
pub use optimizer::{optimize, tour_count};
pub use report::{HistoryRow, LegReport, RenderMode, RouteKind, RouteReport};
pub use route::{evaluate_legs, Leg, RouteEvaluation};
pub use session::{RouteCalculation, RouteSession};
