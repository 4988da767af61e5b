//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (carried in `SimulationState`)
//! - Stable iteration order (entity insertion order)
//! - Removal only in end-of-step sweeps
//! - No rendering or platform dependencies

pub mod ai;
pub mod bullet;
pub mod camera;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod map;
pub mod pickup;
pub mod player;
pub mod render;
pub mod state;
pub mod tick;

pub use ai::{Behavior, update_enemy};
pub use bullet::Bullet;
pub use camera::{Camera, clamp_offset};
pub use collision::{MoveResult, circles_overlap, move_axis_separated};
pub use enemy::Enemy;
pub use entity::{Entity, EntityKind};
pub use map::{MapKind, MapLayout, MapProvider, Obstacle, ObstacleKind, PickupSpawn, World};
pub use pickup::{Pickup, PickupKind};
pub use player::Player;
pub use render::{RenderCommand, RenderFrame, render_frame};
pub use state::{GameEvent, GamePhase, SimulationState};
pub use tick::{TickInput, clamp_dt, tick};
