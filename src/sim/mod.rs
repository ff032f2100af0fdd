//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one tick)
//! - Seeded RNG only, injected explicitly
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{below_bottom, past_top, resolve_hits, within_hit_range};
pub use input::{InputState, Key};
pub use session::GameSession;
pub use spawn::SpawnPolicy;
pub use state::{Enemy, EntityStore, GamePhase, GameState, Projectile, Ship};
pub use tick::{TickInput, tick};
