//! Enemy spawn policy
//!
//! Bernoulli-per-tick spawning: each tick independently signals a spawn with
//! fixed probability, yielding a geometric inter-arrival distribution. The
//! random source is injected so tests can drive it with a seeded RNG.

use rand::Rng;

use crate::consts::{SPAWN_CHANCE, SPAWN_X_MAX, SPAWN_X_MIN};
use crate::tunables::Tunables;

/// Decides, once per tick, whether an enemy spawns and at what x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPolicy {
    /// Per-tick spawn probability
    pub chance: f64,
    /// Inclusive horizontal range, integer positions
    pub x_min: u32,
    pub x_max: u32,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            chance: SPAWN_CHANCE,
            x_min: SPAWN_X_MIN,
            x_max: SPAWN_X_MAX,
        }
    }
}

impl SpawnPolicy {
    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self {
            chance: tunables.spawn_chance,
            x_min: tunables.spawn_x_min,
            x_max: tunables.spawn_x_max,
        }
    }

    /// Roll the per-tick spawn check; on success yields the spawn x.
    ///
    /// Draws once from the RNG for the check and once more only when it
    /// succeeds, so the consumed stream stays stable across non-spawning
    /// ticks.
    pub fn maybe_spawn<R: Rng>(&self, rng: &mut R) -> Option<f32> {
        if rng.random::<f64>() < self.chance {
            Some(rng.random_range(self.x_min..=self.x_max) as f32)
        } else {
            None
        }
    }
}
