//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here, including the
//! RNG. Entity collections keep stable, never-reused `u32` ids so removals
//! during a tick can be expressed by identity rather than by index.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// An enemy reached the bottom; world is frozen until reset
    GameOver,
}

/// The player's ship, a fixed triangular silhouette positioned by its nose x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Horizontal reference (nose x), in field units
    pub x: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self { x: SHIP_START_X }
    }
}

impl Ship {
    /// Triangle outline: nose first, then the two base corners
    pub fn outline(&self) -> [Vec2; 3] {
        [
            Vec2::new(self.x, SHIP_HEIGHT),
            Vec2::new(self.x - SHIP_HALF_WIDTH, 0.0),
            Vec2::new(self.x + SHIP_HALF_WIDTH, 0.0),
        ]
    }

    /// Anchor point for a newly fired projectile
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.x + PROJECTILE_X_OFFSET, PROJECTILE_SPAWN_Y)
    }
}

/// An upward-moving projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Rectangle anchor (lower-left corner)
    pub pos: Vec2,
}

/// A descending enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Center point
    pub pos: Vec2,
}

/// Authoritative collections of live projectiles and enemies.
///
/// Pure container: no movement or collision logic. Ids are allocated from a
/// monotone counter and never reused, so a removed entity's handle can never
/// alias a later one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore {
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Next entity ID
    next_id: u32,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self {
            projectiles: Vec::new(),
            enemies: Vec::new(),
            next_id: 1,
        }
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_projectile(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile { id, pos });
        id
    }

    pub fn add_enemy(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy { id, pos });
        id
    }

    pub fn remove_projectile(&mut self, id: u32) {
        self.projectiles.retain(|p| p.id != id);
    }

    pub fn remove_enemy(&mut self, id: u32) {
        self.enemies.retain(|e| e.id != id);
    }

    /// Remove all live entities; the id counter keeps running
    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.enemies.clear();
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG, advanced only by the spawn policy
    pub rng: Pcg32,
    /// Enemies destroyed this session
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player ship
    pub ship: Ship,
    /// Live projectiles and enemies
    pub entities: EntityStore,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            ship: Ship::default(),
            entities: EntityStore::new(),
        }
    }

    /// Clear entities and score, recenter the ship, return to Playing.
    ///
    /// The RNG stream is not reseeded; restarting mid-run continues the
    /// session's random sequence.
    pub fn reset(&mut self) {
        self.entities.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.ship = Ship::default();
    }

    /// Fire a projectile from the ship's current position
    pub fn spawn_projectile(&mut self) -> u32 {
        self.entities.add_projectile(self.ship.muzzle())
    }

    /// Create an enemy at the top boundary at the given x
    pub fn spawn_enemy(&mut self, x: f32) -> u32 {
        self.entities.add_enemy(Vec2::new(x, FIELD_MAX))
    }
}
