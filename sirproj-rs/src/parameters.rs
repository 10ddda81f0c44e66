use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Population {
    Known(u64),
    Unknown,
}

impl Population {
    pub const SENTINEL: i64 = -1;

    /// Accepts any integer; negative values are treated as the sentinel.
    pub fn from_raw(raw: i64) -> Population {
        u64::try_from(raw).map_or(Population::Unknown, Population::Known)
    }

    pub fn as_raw(&self) -> i64 {
        match self {
            Population::Known(n) => i64::try_from(*n).unwrap_or(i64::MAX),
            Population::Unknown => Population::SENTINEL,
        }
    }

    pub fn count(&self) -> Option<u64> {
        match self {
            Population::Known(n) => Some(*n),
            Population::Unknown => None,
        }
    }
}

/// Per-day transmission (`beta`) and recovery (`gamma`) rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpidemicParameters {
    pub beta: f64,
    pub gamma: f64,
}

impl EpidemicParameters {
    pub fn is_finite(&self) -> bool {
        self.beta.is_finite() && self.gamma.is_finite()
    }
}

fn default_projection_horizon_days() -> usize {
    365
}

fn default_fit_window_days() -> usize {
    30
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default = "default_projection_horizon_days")]
    pub projection_horizon_days: usize,
    #[serde(default = "default_fit_window_days")]
    pub fit_window_days: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            projection_horizon_days: default_projection_horizon_days(),
            fit_window_days: default_fit_window_days(),
        }
    }
}

impl ProjectionConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
