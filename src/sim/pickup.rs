//! Collectible pickups

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::player::Player;
use crate::consts::*;

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Money,
    Ammo,
    Health,
}

/// A pickup lying on the ground
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PickupKind,
    pub radius: f32,
}

impl Pickup {
    pub fn new(id: u32, pos: Vec2, kind: PickupKind) -> Self {
        Self {
            id,
            pos,
            kind,
            radius: PICKUP_RADIUS,
        }
    }

    /// Apply this pickup's effect, consuming it
    ///
    /// Returns the score awarded (only Money pays out score).
    pub fn collect(self, player: &mut Player) -> u64 {
        match self.kind {
            PickupKind::Money => PICKUP_MONEY_SCORE,
            PickupKind::Ammo => {
                player.add_ammo(PICKUP_AMMO_AMOUNT);
                0
            }
            PickupKind::Health => {
                player.heal(PICKUP_HEALTH_AMOUNT);
                0
            }
        }
    }
}

impl Entity for Pickup {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Pickup(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_applies_one_effect() {
        let mut player = Player::new(Vec2::ZERO);
        player.health = 50.0;
        player.ammo = 10;

        let money = Pickup::new(1, Vec2::ZERO, PickupKind::Money).collect(&mut player);
        assert_eq!(money, PICKUP_MONEY_SCORE);
        assert_eq!(player.health, 50.0);
        assert_eq!(player.ammo, 10);

        let ammo = Pickup::new(2, Vec2::ZERO, PickupKind::Ammo).collect(&mut player);
        assert_eq!(ammo, 0);
        assert_eq!(player.ammo, 10 + PICKUP_AMMO_AMOUNT);

        Pickup::new(3, Vec2::ZERO, PickupKind::Health).collect(&mut player);
        assert_eq!(player.health, 50.0 + PICKUP_HEALTH_AMOUNT);
    }

    #[test]
    fn test_health_pickup_clamps() {
        let mut player = Player::new(Vec2::ZERO);
        player.health = 90.0;
        Pickup::new(1, Vec2::ZERO, PickupKind::Health).collect(&mut player);
        assert_eq!(player.health, player.max_health);
    }
}
