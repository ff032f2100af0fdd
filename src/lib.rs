//! Skyraid - a fixed-tick vertical arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, entities, spawning, collisions, game loop)
//! - `render`: Scene assembly for an external render sink
//! - `tunables`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tunables;

pub use tunables::Tunables;

/// Game configuration constants
pub mod consts {
    /// Target frame-driver cadence in milliseconds (~33 ticks/second)
    pub const TICK_INTERVAL_MS: u64 = 30;

    /// Play field bounds (both axes)
    pub const FIELD_MIN: f32 = 0.0;
    pub const FIELD_MAX: f32 = 100.0;

    /// Ship geometry: nose at (x, SHIP_HEIGHT), base corners at (x ± SHIP_HALF_WIDTH, 0)
    pub const SHIP_HALF_WIDTH: f32 = 3.0;
    pub const SHIP_HEIGHT: f32 = 5.0;
    pub const SHIP_START_X: f32 = 50.0;
    /// Ship translation per tick while a direction key is held
    pub const SHIP_SPEED: f32 = 1.0;

    /// Projectile geometry: anchored at (ship.x + PROJECTILE_X_OFFSET, PROJECTILE_SPAWN_Y)
    pub const PROJECTILE_X_OFFSET: f32 = -1.0;
    pub const PROJECTILE_SPAWN_Y: f32 = 6.0;
    pub const PROJECTILE_WIDTH: f32 = 2.0;
    pub const PROJECTILE_HEIGHT: f32 = 6.0;
    /// Upward translation per tick
    pub const PROJECTILE_SPEED: f32 = 2.0;

    /// Enemy display radius
    pub const ENEMY_RADIUS: f32 = 4.0;
    /// Downward translation per tick
    pub const ENEMY_SPEED: f32 = 0.3;

    /// Per-tick Bernoulli spawn probability
    pub const SPAWN_CHANCE: f64 = 0.02;
    /// Inclusive horizontal spawn range
    pub const SPAWN_X_MIN: u32 = 10;
    pub const SPAWN_X_MAX: u32 = 90;

    /// Axis-aligned proximity threshold for a projectile-enemy hit
    pub const HIT_RANGE: f32 = 4.0;
}
