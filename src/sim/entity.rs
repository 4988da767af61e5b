//! Capabilities shared by every dynamic entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Entity variant tag, used by the render snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Bullet { from_player: bool },
    Pickup(super::pickup::PickupKind),
}

/// Common position/radius view over players, enemies, bullets and pickups
pub trait Entity {
    fn position(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn kind(&self) -> EntityKind;

    /// Facing angle in radians
    fn facing(&self) -> f32 {
        0.0
    }

    /// Remaining health as a 0-1 fraction (1 for entities without health)
    fn health_fraction(&self) -> f32 {
        1.0
    }

    /// Circle-circle overlap with another entity
    fn overlaps(&self, other: &dyn Entity) -> bool {
        super::collision::circles_overlap(
            self.position(),
            self.radius(),
            other.position(),
            other.radius(),
        )
    }
}
