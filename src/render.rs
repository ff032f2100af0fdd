//! Scene assembly for the render sink
//!
//! Turns the read-only simulation state into draw primitives: the ship
//! triangle, one rectangle per projectile, one circle per enemy, plus the
//! score and game-over flag. The sink draws these however it likes; the core
//! has no opinion on the surface.

use glam::Vec2;

use crate::consts::{ENEMY_RADIUS, PROJECTILE_HEIGHT, PROJECTILE_WIDTH};
use crate::sim::state::{GamePhase, GameState};

/// Axis-aligned rectangle, anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// One frame's worth of draw data
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Ship triangle: nose first, then base corners
    pub ship: [Vec2; 3],
    /// Projectile rectangles, in spawn order
    pub projectiles: Vec<Rect>,
    /// Enemy circles, in spawn order
    pub enemies: Vec<Circle>,
    pub score: u32,
    /// Whether the game-over overlay (and restart affordance) should show
    pub game_over: bool,
}

/// Build the scene for the current state
pub fn build_scene(state: &GameState) -> Scene {
    Scene {
        ship: state.ship.outline(),
        projectiles: state
            .entities
            .projectiles
            .iter()
            .map(|p| Rect {
                min: p.pos,
                size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            })
            .collect(),
        enemies: state
            .entities
            .enemies
            .iter()
            .map(|e| Circle {
                center: e.pos,
                radius: ENEMY_RADIUS,
            })
            .collect(),
        score: state.score,
        game_over: state.phase == GamePhase::GameOver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_geometry() {
        let mut state = GameState::new(3);
        state.ship.x = 50.0;
        state.spawn_projectile();
        state.spawn_enemy(25.0);

        let scene = build_scene(&state);
        assert_eq!(scene.ship[0], Vec2::new(50.0, 5.0));
        assert_eq!(scene.ship[1], Vec2::new(47.0, 0.0));
        assert_eq!(scene.ship[2], Vec2::new(53.0, 0.0));

        assert_eq!(scene.projectiles.len(), 1);
        assert_eq!(scene.projectiles[0].min, Vec2::new(49.0, 6.0));
        assert_eq!(scene.projectiles[0].size, Vec2::new(2.0, 6.0));

        assert_eq!(scene.enemies.len(), 1);
        assert_eq!(scene.enemies[0].center, Vec2::new(25.0, 100.0));
        assert_eq!(scene.enemies[0].radius, 4.0);

        assert_eq!(scene.score, 0);
        assert!(!scene.game_over);
    }

    #[test]
    fn test_game_over_flag() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::GameOver;
        assert!(build_scene(&state).game_over);
    }
}
