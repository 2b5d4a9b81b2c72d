//! Session configuration.
//!
//! # Environment Variables
//!
//! - `STARROUTE_MAX_OPTIMIZE_POINTS`: largest route the exact optimizer accepts (default: `10`)
//! - `STARROUTE_JUMP_RANGE`: ship jump range in light-years (default: `0`, not available)

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::jumps::RangeLimit;

/// Default bound on route size for exhaustive optimization.
///
/// Ten systems means 9! = 362 880 candidate tours.
pub const DEFAULT_MAX_OPTIMIZE_POINTS: usize = 10;

pub const MAX_OPTIMIZE_POINTS_ENV: &str = "STARROUTE_MAX_OPTIMIZE_POINTS";
pub const JUMP_RANGE_ENV: &str = "STARROUTE_JUMP_RANGE";

/// Configuration for a [`crate::RouteSession`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Routes longer than this are rejected before optimization.
    pub max_optimize_points: usize,
    /// Jump range used for estimates until the session changes it.
    pub jump_range: RangeLimit,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_optimize_points: DEFAULT_MAX_OPTIMIZE_POINTS,
            jump_range: RangeLimit::default(),
        }
    }
}

impl SessionConfig {
    /// Create configuration from environment variables.
    ///
    /// Unset variables keep their defaults; unparsable ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = parse_var::<usize>(&lookup, MAX_OPTIMIZE_POINTS_ENV) {
            config.max_optimize_points = value;
        }
        if let Some(value) = parse_var::<f64>(&lookup, JUMP_RANGE_ENV) {
            config.jump_range = RangeLimit::new(value);
        }
        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_optimize_points == 0 {
            return Err(Error::InvalidConfig {
                message: "max_optimize_points must be at least 1".to_string(),
            });
        }

        if !self.jump_range.light_years().is_finite() {
            return Err(Error::InvalidConfig {
                message: format!(
                    "jump_range must be finite, got {}",
                    self.jump_range.light_years()
                ),
            });
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}
