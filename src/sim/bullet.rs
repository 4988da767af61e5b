//! Projectiles fired by the player and by enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::map::MapProvider;
use crate::consts::*;
use crate::heading;

/// A bullet travelling in a straight line
///
/// Deactivation is a one-way flag; the simulation removes inactive bullets
/// in its end-of-step filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    /// Travel direction (radians)
    pub angle: f32,
    pub from_player: bool,
    pub speed: f32,
    pub damage: f32,
    pub radius: f32,
    /// Seconds since spawn
    pub age: f32,
    pub lifetime: f32,
    pub active: bool,
}

impl Bullet {
    pub fn new(id: u32, pos: Vec2, angle: f32, from_player: bool) -> Self {
        Self {
            id,
            pos,
            angle,
            from_player,
            speed: BULLET_SPEED,
            damage: BULLET_DAMAGE,
            radius: BULLET_RADIUS,
            age: 0.0,
            lifetime: BULLET_LIFETIME,
            active: true,
        }
    }

    /// Fly, age, and stop on expiry or on solid geometry
    pub fn update<M: MapProvider + ?Sized>(&mut self, dt: f32, map: &M) {
        if !self.active {
            return;
        }
        self.pos += heading(self.angle) * self.speed * dt;
        self.age += dt;

        if self.age >= self.lifetime || map.check_collision(self.pos, self.radius) {
            self.active = false;
        }
    }
}

impl Entity for Bullet {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Bullet {
            from_player: self.from_player,
        }
    }

    fn facing(&self) -> f32 {
        self.angle
    }
}
