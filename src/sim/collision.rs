//! Collision detection and response
//!
//! Static geometry uses circle-vs-AABB tests through [`MapProvider`]; entity
//! pairs use circle-circle overlap. Movement resolves each axis on its own so
//! entities slide along walls instead of sticking to them.

use glam::Vec2;

use super::bullet::Bullet;
use super::enemy::Enemy;
use super::entity::Entity;
use super::map::MapProvider;
use super::pickup::Pickup;
use super::player::Player;

/// Outcome of an axis-separated move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Position after resolving both axes
    pub pos: Vec2,
    pub blocked_x: bool,
    pub blocked_y: bool,
}

impl MoveResult {
    pub fn blocked(&self) -> bool {
        self.blocked_x || self.blocked_y
    }
}

/// Strict circle-circle overlap (touching circles do not collide)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Move a circle by `delta`, testing the X step and then the Y step
///
/// An axis whose step would collide is left unchanged; the other axis still
/// advances. Zero components are never reported as blocked.
pub fn move_axis_separated<M: MapProvider + ?Sized>(
    map: &M,
    pos: Vec2,
    delta: Vec2,
    radius: f32,
) -> MoveResult {
    let mut result = MoveResult {
        pos,
        blocked_x: false,
        blocked_y: false,
    };

    if delta.x != 0.0 {
        let candidate = Vec2::new(result.pos.x + delta.x, result.pos.y);
        if map.check_collision(candidate, radius) {
            result.blocked_x = true;
        } else {
            result.pos = candidate;
        }
    }

    if delta.y != 0.0 {
        let candidate = Vec2::new(result.pos.x, result.pos.y + delta.y);
        if map.check_collision(candidate, radius) {
            result.blocked_y = true;
        } else {
            result.pos = candidate;
        }
    }

    result
}

/// Player bullets against enemies
///
/// Each active player bullet is tested against every enemy in insertion
/// order and damages all of them it overlaps; the bullet is spent on the
/// first hit. Several bullets may hit the same enemy in one pass. Returns
/// the number of hits landed.
pub fn bullets_vs_enemies(bullets: &mut [Bullet], enemies: &mut [Enemy]) -> usize {
    let mut hits = 0;
    for bullet in bullets.iter_mut().filter(|b| b.active && b.from_player) {
        for enemy in enemies.iter_mut() {
            if bullet.overlaps(&*enemy) {
                bullet.active = false;
                enemy.take_damage(bullet.damage);
                hits += 1;
            }
        }
    }
    hits
}

/// Enemy bullets against the player, returns the number of hits
pub fn bullets_vs_player(bullets: &mut [Bullet], player: &mut Player) -> usize {
    let mut hits = 0;
    for bullet in bullets.iter_mut().filter(|b| b.active && !b.from_player) {
        if bullet.overlaps(&*player) {
            bullet.active = false;
            player.take_damage(bullet.damage);
            hits += 1;
        }
    }
    hits
}

/// Remove and return every pickup the player is touching, in insertion order
pub fn player_vs_pickups(player: &Player, pickups: &mut Vec<Pickup>) -> Vec<Pickup> {
    let mut collected = Vec::new();
    pickups.retain(|p| {
        if player.overlaps(p) {
            collected.push(*p);
            false
        } else {
            true
        }
    });
    collected
}
