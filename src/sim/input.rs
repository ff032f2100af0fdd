//! Held-key input state
//!
//! Press/release events arrive from the windowing collaborator and only ever
//! mutate this set; the game loop reads a snapshot at the start of each tick.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical input keys understood by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Fire,
}

/// Set of currently-held logical keys
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held (idempotent)
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    /// Mark a key as released (idempotent, no-op if absent)
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Atomically remove a key and report whether it was held.
    ///
    /// Used for triggers that must fire at most once per physical press: the
    /// trigger is re-armed only by the frame that consumes it, not by the
    /// hardware continuing to report the key as down.
    pub fn consume_one_shot(&mut self, key: Key) -> bool {
        self.held.remove(&key)
    }

    /// Drop all held keys (on session reset)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
