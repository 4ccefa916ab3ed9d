//! Game balance tuning
//!
//! Every gameplay constant lives here so a run can be rebalanced from a JSON
//! file without a rebuild. Missing fields fall back to the defaults.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, TuningError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds on the clock when a run starts
    pub start_time: f32,
    /// Seconds added for every landed hit
    pub time_bonus: f32,
    /// Shuttle speed at the start of a run (radians/sec)
    pub initial_speed: f32,
    /// Speed gained for every landed hit (radians/sec)
    pub speed_increment: f32,
    /// Speed change per manual adjust input (radians/sec)
    pub speed_step: f32,
    /// Shuttle angle when a session is reset (radians)
    pub start_angle: f32,
    /// Closest a regenerated obstacle may land to the shuttle (radians)
    pub obstacle_min_offset: f32,
    /// Width of the window past the minimal offset where obstacles land (radians)
    pub obstacle_spread: f32,
    /// Angular distance at which the approach circle starts to fade in (radians)
    pub approach_trigger: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_time: 15.0,
            time_bonus: 1.5,
            initial_speed: 1.2,
            speed_increment: 0.15,
            speed_step: 0.25,
            start_angle: FRAC_PI_2,
            obstacle_min_offset: FRAC_PI_4,
            obstacle_spread: FRAC_PI_2,
            approach_trigger: FRAC_PI_6,
        }
    }
}

impl Tuning {
    /// Reject values that would make a run degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("start_time", self.start_time),
            ("approach_trigger", self.approach_trigger),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive { field });
            }
        }

        let non_negative = [
            ("time_bonus", self.time_bonus),
            ("initial_speed", self.initial_speed),
            ("speed_increment", self.speed_increment),
            ("speed_step", self.speed_step),
            ("obstacle_min_offset", self.obstacle_min_offset),
            ("obstacle_spread", self.obstacle_spread),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative { field });
            }
        }

        Ok(())
    }

    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
