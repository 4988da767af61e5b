//! Hostile agents

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ai::Behavior;
use super::bullet::Bullet;
use super::entity::{Entity, EntityKind};
use crate::consts::*;
use crate::heading;

/// An enemy agent
///
/// Health clamps at zero; the simulation notices dead enemies and removes
/// them, so there is no death callback here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub facing: f32,
    pub health: f32,
    pub max_health: f32,
    pub behavior: Behavior,
    /// Seconds until the next shot
    pub shoot_cooldown: f32,
    /// Seconds until the next random heading while wandering
    pub wander_timer: f32,
    pub wander_heading: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: ENEMY_RADIUS,
            speed: ENEMY_SPEED,
            facing: 0.0,
            health: ENEMY_MAX_HEALTH,
            max_health: ENEMY_MAX_HEALTH,
            behavior: Behavior::Wander,
            shoot_cooldown: ENEMY_SHOOT_DELAY,
            // Zero forces a fresh heading on the first wander step
            wander_timer: 0.0,
            wander_heading: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Fire along the facing angle (enemies never run out of ammo)
    ///
    /// The returned bullet carries id 0; the simulation assigns the real id.
    pub fn shoot(&self) -> Bullet {
        let muzzle = self.pos + heading(self.facing) * (self.radius + MUZZLE_OFFSET);
        Bullet::new(0, muzzle, self.facing, false)
    }
}

impl Entity for Enemy {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Enemy
    }

    fn facing(&self) -> f32 {
        self.facing
    }

    fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }
}
