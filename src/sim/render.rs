//! Render request snapshot
//!
//! The core never draws. Each frame the host asks for a [`RenderFrame`] and
//! hands it to whatever renderer it owns (it serializes cleanly to JSON for a
//! browser front end).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::map::Obstacle;
use super::state::{GamePhase, SimulationState};

/// One entity to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderCommand {
    pub kind: EntityKind,
    pub pos: Vec2,
    pub angle: f32,
    pub radius: f32,
    pub health_fraction: f32,
}

impl RenderCommand {
    pub fn from_entity(entity: &dyn Entity) -> Self {
        Self {
            kind: entity.kind(),
            pos: entity.position(),
            angle: entity.facing(),
            radius: entity.radius(),
            health_fraction: entity.health_fraction(),
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub camera: Vec2,
    pub viewport: Vec2,
    pub world_size: Vec2,
    pub phase: GamePhase,
    /// Static geometry, decorative obstacles included
    pub obstacles: Vec<Obstacle>,
    /// Pickups first, then enemies, bullets and the player on top
    pub entities: Vec<RenderCommand>,
}

/// Snapshot the state for drawing
pub fn render_frame(state: &SimulationState) -> RenderFrame {
    let mut entities = Vec::with_capacity(
        state.pickups.len() + state.enemies.len() + state.bullets.len() + 1,
    );
    entities.extend(state.pickups.iter().map(|p| RenderCommand::from_entity(p)));
    entities.extend(state.enemies.iter().map(|e| RenderCommand::from_entity(e)));
    entities.extend(
        state
            .bullets
            .iter()
            .filter(|b| b.active)
            .map(|b| RenderCommand::from_entity(b)),
    );
    entities.push(RenderCommand::from_entity(&state.player));

    RenderFrame {
        camera: state.camera.offset,
        viewport: state.camera.viewport,
        world_size: state.layout.world_size(),
        phase: state.phase,
        obstacles: state.layout.world.obstacles.clone(),
        entities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::map::MapKind;

    #[test]
    fn test_frame_lists_every_entity() {
        let state = SimulationState::new(
            MapKind::StreetGrid,
            3,
            Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        )
        .unwrap();
        let frame = render_frame(&state);

        assert_eq!(
            frame.entities.len(),
            state.pickups.len() + state.enemies.len() + 1
        );
        let player = frame.entities.last().unwrap();
        assert_eq!(player.kind, EntityKind::Player);
        assert_eq!(player.pos, state.player.pos);
        assert_eq!(player.health_fraction, 1.0);
        assert_eq!(frame.world_size, Vec2::new(2400.0, 2400.0));
        assert_eq!(frame.obstacles.len(), state.layout.world.obstacles.len());
    }

    #[test]
    fn test_enemy_health_fraction() {
        let mut state = SimulationState::new(
            MapKind::IndustrialYard,
            3,
            Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        )
        .unwrap();
        state.enemies[0].take_damage(BULLET_DAMAGE);
        let frame = render_frame(&state);
        let enemy = frame
            .entities
            .iter()
            .find(|c| c.kind == EntityKind::Enemy)
            .unwrap();
        assert_eq!(enemy.health_fraction, 0.5);
    }

    #[test]
    fn test_frame_serializes() {
        let state = SimulationState::new(
            MapKind::StreetGrid,
            3,
            Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        )
        .unwrap();
        let json = serde_json::to_string(&render_frame(&state)).unwrap();
        assert!(json.contains("\"Player\""));
        assert!(json.contains("\"Lamp\""));
    }
}
