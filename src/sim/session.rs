//! Top-level game session
//!
//! Wraps the game state, the held-key set, and the tunables behind the four
//! entry points the external collaborators need: key events from the input
//! source, `advance` from the frame driver, `reset` from the restart control,
//! and read-only state for the render sink.

use serde::{Deserialize, Serialize};

use crate::sim::input::{InputState, Key};
use crate::sim::state::{Enemy, GamePhase, GameState, Projectile, Ship};
use crate::sim::tick::{TickInput, tick};
use crate::tunables::Tunables;

/// A running game: state machine over Playing/GameOver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    state: GameState,
    keys: InputState,
    tunables: Tunables,
}

impl GameSession {
    /// Start a fresh session with default tunables
    pub fn new(seed: u64) -> Self {
        Self::with_tunables(seed, Tunables::default())
    }

    pub fn with_tunables(seed: u64, tunables: Tunables) -> Self {
        log::info!("new session, seed {seed}");
        Self {
            state: GameState::new(seed),
            keys: InputState::new(),
            tunables,
        }
    }

    /// Key-press entry point for the input source
    pub fn on_key_down(&mut self, key: Key) {
        self.keys.press(key);
    }

    /// Key-release entry point for the input source
    pub fn on_key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Advance the world by one tick. Called by the frame driver on a fixed
    /// interval; a pure no-op while the session is over.
    pub fn advance(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        let input = TickInput::sample(&mut self.keys);
        tick(&mut self.state, &input, &self.tunables);
    }

    /// Return to a fresh Playing state: no entities, no held keys, score 0,
    /// ship centered. The only transition out of GameOver, callable at any
    /// time.
    pub fn reset(&mut self) {
        log::info!("session reset from {:?}", self.state.phase);
        self.keys.clear();
        self.state.reset();
    }

    /// Whether the restart affordance should be surfaced
    pub fn is_game_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn ship(&self) -> Ship {
        self.state.ship
    }

    /// Ordered live projectiles, for the render sink
    pub fn projectiles(&self) -> &[Projectile] {
        &self.state.entities.projectiles
    }

    /// Ordered live enemies, for the render sink
    pub fn enemies(&self) -> &[Enemy] {
        &self.state.entities.enemies
    }

    /// Full state snapshot (read-only)
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SHIP_START_X;

    fn quiet_session(seed: u64) -> GameSession {
        GameSession::with_tunables(
            seed,
            Tunables {
                spawn_chance: 0.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_key_events_drive_movement() {
        let mut session = quiet_session(5);
        session.on_key_down(Key::Left);
        session.advance();
        session.advance();
        assert_eq!(session.ship().x, SHIP_START_X - 2.0);

        session.on_key_up(Key::Left);
        session.advance();
        assert_eq!(session.ship().x, SHIP_START_X - 2.0);
    }

    #[test]
    fn test_fire_through_session_is_one_shot() {
        let mut session = quiet_session(5);
        session.on_key_down(Key::Fire);
        session.advance();
        session.advance();
        assert_eq!(session.projectiles().len(), 1);
    }

    #[test]
    fn test_game_over_and_reset() {
        let mut session = quiet_session(5);
        // Force a loss by dropping an enemy in near the bottom
        session.state.entities.add_enemy(glam::Vec2::new(40.0, 0.1));
        session.advance();
        assert!(session.is_game_over());

        // Frozen: advancing does nothing
        session.on_key_down(Key::Right);
        let x = session.ship().x;
        session.advance();
        assert_eq!(session.ship().x, x);

        session.reset();
        assert!(!session.is_game_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.ship().x, SHIP_START_X);
        assert!(session.projectiles().is_empty());
        assert!(session.enemies().is_empty());

        // Held keys were cleared by reset, not carried into the new run
        session.advance();
        assert_eq!(session.ship().x, SHIP_START_X);
    }

    #[test]
    fn test_reset_keeps_rng_stream() {
        // reset() does not reseed: the session's random sequence picks up
        // where it left off instead of replaying from the seed.
        let mut session = GameSession::new(11);
        let fresh_rng = session.state.rng.clone();

        for _ in 0..50 {
            session.advance();
        }
        let advanced_rng = session.state.rng.clone();
        assert_ne!(advanced_rng, fresh_rng, "spawn rolls advance the stream");

        session.reset();
        assert_eq!(session.state.rng, advanced_rng);
        assert_ne!(session.state.rng, fresh_rng);
    }

    #[test]
    fn test_reset_while_playing() {
        let mut session = quiet_session(5);
        session.on_key_down(Key::Fire);
        session.advance();
        assert_eq!(session.projectiles().len(), 1);

        session.reset();
        assert!(session.projectiles().is_empty());
        assert_eq!(session.phase(), GamePhase::Playing);
    }
}
