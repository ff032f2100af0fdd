//! Data-driven game balance
//!
//! Defaults reproduce the original per-tick rates, which are coupled to the
//! ~33 Hz frame cadence; a driver running at a different rate can rebalance
//! by loading a tunables file instead of editing code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay rates and thresholds, all per-tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Ship translation per tick while a direction key is held
    pub ship_speed: f32,
    /// Projectile upward translation per tick
    pub projectile_speed: f32,
    /// Enemy downward translation per tick
    pub enemy_speed: f32,
    /// Per-tick Bernoulli spawn probability
    pub spawn_chance: f64,
    /// Inclusive horizontal spawn range
    pub spawn_x_min: u32,
    pub spawn_x_max: u32,
    /// Axis-aligned proximity threshold for a hit
    pub hit_range: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            ship_speed: SHIP_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            enemy_speed: ENEMY_SPEED,
            spawn_chance: SPAWN_CHANCE,
            spawn_x_min: SPAWN_X_MIN,
            spawn_x_max: SPAWN_X_MAX,
            hit_range: HIT_RANGE,
        }
    }
}

impl Tunables {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tunables from a JSON file, falling back to defaults if the file
    /// is missing or does not parse
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tunables) => {
                    log::info!("loaded tunables from {}", path.display());
                    tunables
                }
                Err(err) => {
                    log::warn!("bad tunables file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("no tunables file at {}: {err}", path.display());
                Self::default()
            }
        }
    }
}
