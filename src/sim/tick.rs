//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by exactly one tick, in a fixed
//! step order: ship movement, fire, projectile advance, enemy spawn, enemy
//! advance (loss check), collision resolution.

use crate::consts::{FIELD_MAX, FIELD_MIN, SHIP_HALF_WIDTH};
use crate::sim::collision::{below_bottom, past_top, resolve_hits};
use crate::sim::input::{InputState, Key};
use crate::sim::spawn::SpawnPolicy;
use crate::sim::state::{GamePhase, GameState};
use crate::tunables::Tunables;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Fire trigger, already one-shot-consumed from the held-key set
    pub fire: bool,
}

impl TickInput {
    /// Snapshot the held keys for one tick.
    ///
    /// Direction keys are level-checked; the fire key is consumed, so a
    /// physical press fires exactly once until the key is pressed again.
    pub fn sample(keys: &mut InputState) -> Self {
        Self {
            move_left: keys.is_held(Key::Left),
            move_right: keys.is_held(Key::Right),
            fire: keys.consume_one_shot(Key::Fire),
        }
    }
}

/// Advance the game state by one tick. No-op unless the phase is Playing.
pub fn tick(state: &mut GameState, input: &TickInput, tunables: &Tunables) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // 1. Ship movement. Both checks read the pre-move position, so holding
    //    left and right together nets zero (the original behaves this way;
    //    kept as-is, see the tests).
    let pre_move_x = state.ship.x;
    if input.move_left && pre_move_x > FIELD_MIN {
        state.ship.x -= tunables.ship_speed;
    }
    if input.move_right && pre_move_x + SHIP_HALF_WIDTH < FIELD_MAX {
        state.ship.x += tunables.ship_speed;
    }

    // 2. Fire: at most one projectile per tick, gated by the one-shot trigger
    if input.fire {
        state.spawn_projectile();
    }

    // 3. Projectile advance; cull anything past the top boundary
    for projectile in &mut state.entities.projectiles {
        projectile.pos.y += tunables.projectile_speed;
    }
    state
        .entities
        .projectiles
        .retain(|p| !past_top(p.pos.y));

    // 4. Enemy spawn
    let policy = SpawnPolicy::from_tunables(tunables);
    if let Some(x) = policy.maybe_spawn(&mut state.rng) {
        state.spawn_enemy(x);
    }

    // 5. Enemy advance. The first enemy to cross the bottom ends the game;
    //    enemies after it in the scan are left where they are.
    for enemy in &mut state.entities.enemies {
        enemy.pos.y -= tunables.enemy_speed;
        if below_bottom(enemy.pos.y) {
            state.phase = GamePhase::GameOver;
            log::info!(
                "enemy {} reached the bottom at tick {}, final score {}",
                enemy.id,
                state.time_ticks,
                state.score
            );
            break;
        }
    }
    if state.phase == GamePhase::GameOver {
        return;
    }

    // 6. Collision resolution: remove both halves of each hit, score one each
    let hits = resolve_hits(
        &state.entities.projectiles,
        &state.entities.enemies,
        tunables.hit_range,
    );
    for (projectile_id, enemy_id) in hits {
        state.entities.remove_projectile(projectile_id);
        state.entities.remove_enemy(enemy_id);
        state.score += 1;
    }
}
