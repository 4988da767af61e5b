//! Enemy behavior state machine
//!
//! Two states: `Wander` (initial) drifts at half speed on random headings,
//! `Engage` locks onto the player, closes to the standoff distance and fires
//! on a fixed cooldown. The transition depends only on the distance to the
//! player this step.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::collision::move_axis_separated;
use super::enemy::Enemy;
use super::map::MapProvider;
use crate::consts::*;
use crate::{angle_to, heading};

/// Enemy behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Behavior {
    #[default]
    Wander,
    Engage,
}

impl Behavior {
    /// State for an enemy `distance` away from the player
    pub fn for_distance(distance: f32) -> Self {
        if distance < ENEMY_DETECTION_RANGE {
            Behavior::Engage
        } else {
            Behavior::Wander
        }
    }
}

/// Advance one enemy by `dt` toward or around `target` (the player position)
///
/// Returns a bullet when the enemy fires this step.
pub fn update_enemy<M, R>(
    enemy: &mut Enemy,
    dt: f32,
    target: Vec2,
    map: &M,
    rng: &mut R,
) -> Option<Bullet>
where
    M: MapProvider + ?Sized,
    R: Rng + ?Sized,
{
    if enemy.shoot_cooldown > 0.0 {
        enemy.shoot_cooldown = (enemy.shoot_cooldown - dt).max(0.0);
    }

    let distance = enemy.pos.distance(target);
    enemy.behavior = Behavior::for_distance(distance);

    match enemy.behavior {
        Behavior::Engage => engage(enemy, dt, target, distance, map),
        Behavior::Wander => {
            wander(enemy, dt, map, rng);
            None
        }
    }
}

fn engage<M: MapProvider + ?Sized>(
    enemy: &mut Enemy,
    dt: f32,
    target: Vec2,
    distance: f32,
    map: &M,
) -> Option<Bullet> {
    enemy.facing = angle_to(enemy.pos, target);

    if distance > ENEMY_ENGAGE_STANDOFF {
        let step = heading(enemy.facing) * enemy.speed * dt;
        enemy.pos = move_axis_separated(map, enemy.pos, step, enemy.radius).pos;
    }

    if enemy.shoot_cooldown <= 0.0 {
        enemy.shoot_cooldown = ENEMY_SHOOT_DELAY;
        return Some(enemy.shoot());
    }
    None
}

fn wander<M, R>(enemy: &mut Enemy, dt: f32, map: &M, rng: &mut R)
where
    M: MapProvider + ?Sized,
    R: Rng + ?Sized,
{
    enemy.wander_timer -= dt;
    if enemy.wander_timer <= 0.0 {
        redirect(enemy, rng);
    }

    let step = heading(enemy.wander_heading) * enemy.speed * ENEMY_WANDER_SPEED_FACTOR * dt;
    let moved = move_axis_separated(map, enemy.pos, step, enemy.radius);
    enemy.pos = moved.pos;
    enemy.facing = enemy.wander_heading;

    // A blocked axis means we are pressed against something; turn away now
    if moved.blocked() {
        redirect(enemy, rng);
    }
}

fn redirect<R: Rng + ?Sized>(enemy: &mut Enemy, rng: &mut R) {
    enemy.wander_heading = rng.random_range(0.0..TAU);
    enemy.wander_timer = ENEMY_WANDER_DELAY;
}
