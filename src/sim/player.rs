//! The player avatar

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::collision::move_axis_separated;
use super::entity::{Entity, EntityKind};
use super::map::MapProvider;
use crate::consts::*;
use crate::{angle_to, heading};

/// The player's avatar
///
/// Owned by the simulation for the whole session. Reaching zero health ends
/// the session; the avatar itself is never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Aim direction (radians), independent of movement
    pub facing: f32,
    pub health: f32,
    pub max_health: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            facing: 0.0,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            ammo: PLAYER_START_AMMO,
            max_ammo: PLAYER_MAX_AMMO,
            shoot_cooldown: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Advance one step: cool down the weapon, move, re-aim
    ///
    /// `movement` is normalized when non-zero so diagonals are not faster.
    /// `aim` is the pointer position in world coordinates; without one the
    /// previous facing is kept.
    pub fn update<M: MapProvider + ?Sized>(
        &mut self,
        dt: f32,
        movement: Vec2,
        aim: Option<Vec2>,
        map: &M,
    ) {
        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown = (self.shoot_cooldown - dt).max(0.0);
        }

        let dir = movement.normalize_or_zero();
        if dir != Vec2::ZERO {
            let step = move_axis_separated(map, self.pos, dir * self.speed * dt, self.radius);
            self.pos = step.pos;
        }

        if let Some(target) = aim {
            if target != self.pos {
                self.facing = angle_to(self.pos, target);
            }
        }
    }

    /// Fire along the facing angle
    ///
    /// Does nothing while cooling down or with an empty magazine. The returned
    /// bullet carries id 0; the simulation assigns the real id on insertion.
    pub fn shoot(&mut self) -> Option<Bullet> {
        if self.shoot_cooldown > 0.0 || self.ammo == 0 {
            return None;
        }
        self.ammo -= 1;
        self.shoot_cooldown = PLAYER_SHOOT_DELAY;

        let muzzle = self.pos + heading(self.facing) * (self.radius + MUZZLE_OFFSET);
        Some(Bullet::new(0, muzzle, self.facing, true))
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).clamp(0.0, self.max_health);
    }

    pub fn add_ammo(&mut self, amount: u32) {
        self.ammo = self.ammo.saturating_add(amount).min(self.max_ammo);
    }
}

impl Entity for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::map::{Obstacle, ObstacleKind, World};

    fn open_world() -> World {
        World::new(1000.0, 1000.0, Vec::new())
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let world = open_world();
        let mut player = Player::new(Vec2::new(500.0, 500.0));
        player.update(0.1, Vec2::new(1.0, 1.0), None, &world);
        let moved = player.pos.distance(Vec2::new(500.0, 500.0));
        assert!((moved - PLAYER_SPEED * 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_zero_input_stays_put() {
        let world = open_world();
        let mut player = Player::new(Vec2::new(500.0, 500.0));
        player.update(0.1, Vec2::ZERO, None, &world);
        assert_eq!(player.pos, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_slides_along_wall() {
        let world = World::new(
            200.0,
            200.0,
            vec![Obstacle::new(15.0, 0.0, 10.0, 20.0, ObstacleKind::Wall)],
        );
        let mut player = Player::new(Vec2::new(9.0, 10.0));
        player.radius = 5.0;
        player.update(0.01, Vec2::new(1.0, 1.0), None, &world);
        assert_eq!(player.pos.x, 9.0);
        assert!(player.pos.y > 10.0);
    }

    #[test]
    fn test_facing_follows_aim_not_movement() {
        let world = open_world();
        let mut player = Player::new(Vec2::new(500.0, 500.0));
        player.update(0.0, Vec2::new(1.0, 0.0), Some(Vec2::new(500.0, 600.0)), &world);
        assert!((player.facing - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_shoot_spawns_at_muzzle() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.facing = angle_to(player.pos, Vec2::new(200.0, 100.0));
        let bullet = player.shoot().unwrap();
        assert!(bullet.from_player);
        assert!((bullet.pos.x - 115.0).abs() < 1e-4);
        assert!((bullet.pos.y - 100.0).abs() < 1e-4);
        assert_eq!(bullet.angle, 0.0);
        assert_eq!(player.ammo, PLAYER_START_AMMO - 1);
    }

    #[test]
    fn test_cooldown_allows_one_shot() {
        let world = open_world();
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        assert!(player.shoot().is_some());
        assert!(player.shoot().is_none());

        player.update(PLAYER_SHOOT_DELAY / 2.0, Vec2::ZERO, None, &world);
        assert!(player.shoot().is_none());
        player.update(PLAYER_SHOOT_DELAY / 2.0 + 0.001, Vec2::ZERO, None, &world);
        assert!(player.shoot().is_some());
        assert_eq!(player.ammo, PLAYER_START_AMMO - 2);
    }

    #[test]
    fn test_empty_magazine_is_silent() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.ammo = 0;
        assert!(player.shoot().is_none());
        assert_eq!(player.shoot_cooldown, 0.0);
    }

    #[test]
    fn test_health_and_ammo_clamps() {
        let mut player = Player::new(Vec2::ZERO);
        player.take_damage(10.0);
        player.heal(1000.0);
        assert_eq!(player.health, 100.0);

        player.take_damage(1000.0);
        assert_eq!(player.health, 0.0);
        assert!(!player.is_alive());

        player.add_ammo(1000);
        assert_eq!(player.ammo, PLAYER_MAX_AMMO);
    }
}
