//! Collision detection
//!
//! Pairwise axis-aligned proximity tests between projectiles and enemies,
//! plus field-boundary predicates. Resolution (removal, scoring) is applied
//! by the tick loop from the pairs reported here.

use glam::Vec2;

use crate::consts::{FIELD_MAX, FIELD_MIN};
use crate::sim::state::{Enemy, Projectile};

/// Axis-aligned proximity test: both horizontal and vertical separations
/// must be strictly below `range`
pub fn within_hit_range(projectile: Vec2, enemy: Vec2, range: f32) -> bool {
    (projectile.x - enemy.x).abs() < range && (projectile.y - enemy.y).abs() < range
}

/// True once a projectile has left the field through the top
pub fn past_top(y: f32) -> bool {
    y > FIELD_MAX
}

/// True once an enemy has crossed below the bottom boundary (the loss trigger)
pub fn below_bottom(y: f32) -> bool {
    y < FIELD_MIN
}

/// Pair up hits for one tick: for each projectile in order, the first enemy
/// within range claims it.
///
/// A projectile hits at most one enemy, and a claimed enemy cannot be matched
/// again by a later projectile in the same pass. Returns
/// (projectile id, enemy id) pairs for the caller to remove and score.
pub fn resolve_hits(projectiles: &[Projectile], enemies: &[Enemy], range: f32) -> Vec<(u32, u32)> {
    let mut hits = Vec::new();
    let mut claimed: Vec<u32> = Vec::new();

    for projectile in projectiles {
        for enemy in enemies {
            if claimed.contains(&enemy.id) {
                continue;
            }
            if within_hit_range(projectile.pos, enemy.pos, range) {
                hits.push((projectile.id, enemy.id));
                claimed.push(enemy.id);
                break; // first match wins for this projectile
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HIT_RANGE;

    fn projectile(id: u32, x: f32, y: f32) -> Projectile {
        Projectile {
            id,
            pos: Vec2::new(x, y),
        }
    }

    fn enemy(id: u32, x: f32, y: f32) -> Enemy {
        Enemy {
            id,
            pos: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_within_hit_range() {
        let e = Vec2::new(50.0, 80.0);
        assert!(within_hit_range(Vec2::new(49.0, 82.0), e, HIT_RANGE));
        assert!(within_hit_range(Vec2::new(53.9, 80.0), e, HIT_RANGE));
        // Separation must be below the threshold on BOTH axes
        assert!(!within_hit_range(Vec2::new(54.0, 80.0), e, HIT_RANGE));
        assert!(!within_hit_range(Vec2::new(50.0, 84.0), e, HIT_RANGE));
        assert!(!within_hit_range(Vec2::new(55.0, 85.0), e, HIT_RANGE));
    }

    #[test]
    fn test_boundary_predicates() {
        assert!(!past_top(100.0));
        assert!(past_top(100.5));
        assert!(!below_bottom(0.0));
        assert!(below_bottom(-0.1));
    }

    #[test]
    fn test_first_match_wins_per_projectile() {
        // One projectile between two enemies: only the first enemy in order is hit
        let projectiles = [projectile(1, 50.0, 80.0)];
        let enemies = [enemy(2, 49.0, 81.0), enemy(3, 51.0, 79.0)];
        let hits = resolve_hits(&projectiles, &enemies, HIT_RANGE);
        assert_eq!(hits, vec![(1, 2)]);
    }

    #[test]
    fn test_claimed_enemy_not_rematched() {
        // Two projectiles near the same enemy: the second projectile misses
        let projectiles = [projectile(1, 50.0, 80.0), projectile(2, 51.0, 80.0)];
        let enemies = [enemy(3, 50.0, 81.0)];
        let hits = resolve_hits(&projectiles, &enemies, HIT_RANGE);
        assert_eq!(hits, vec![(1, 3)]);
    }

    #[test]
    fn test_multiple_independent_hits() {
        let projectiles = [projectile(1, 20.0, 70.0), projectile(2, 60.0, 40.0)];
        let enemies = [enemy(3, 61.0, 41.0), enemy(4, 21.0, 69.0)];
        let hits = resolve_hits(&projectiles, &enemies, HIT_RANGE);
        assert_eq!(hits, vec![(1, 4), (2, 3)]);
    }

    #[test]
    fn test_no_hits_when_apart() {
        let projectiles = [projectile(1, 10.0, 10.0)];
        let enemies = [enemy(2, 90.0, 90.0)];
        assert!(resolve_hits(&projectiles, &enemies, HIT_RANGE).is_empty());
    }
}
