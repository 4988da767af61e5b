//! Street Shooter - top-down shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, AI, collisions, session state)
//! - `settings`: Session configuration
//! - `error`: Configuration errors rejected at session start
//!
//! Rendering, input capture and UI live in the host; the core consumes an
//! input snapshot per tick and hands back a render frame plus HUD events.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest simulation step accepted from the host (seconds)
    pub const MAX_DT: f32 = 0.1;
    /// Per-tick chance of spawning an enemy once the map is cleared
    pub const RESPAWN_CHANCE: f64 = 0.01;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 10.0;
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    pub const PLAYER_START_AMMO: u32 = 30;
    pub const PLAYER_MAX_AMMO: u32 = 90;
    /// Seconds between player shots
    pub const PLAYER_SHOOT_DELAY: f32 = 0.2;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 12.0;
    pub const ENEMY_SPEED: f32 = 100.0;
    pub const ENEMY_MAX_HEALTH: f32 = 50.0;
    /// Distance at which an enemy notices the player
    pub const ENEMY_DETECTION_RANGE: f32 = 400.0;
    /// Engaged enemies stop advancing inside this distance
    pub const ENEMY_ENGAGE_STANDOFF: f32 = 200.0;
    pub const ENEMY_SHOOT_DELAY: f32 = 2.0;
    /// Seconds between random heading changes while wandering
    pub const ENEMY_WANDER_DELAY: f32 = 2.0;
    /// Wandering enemies move at this fraction of their speed
    pub const ENEMY_WANDER_SPEED_FACTOR: f32 = 0.5;
    pub const ENEMY_KILL_SCORE: u64 = 100;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_SPEED: f32 = 600.0;
    pub const BULLET_LIFETIME: f32 = 2.0;
    pub const BULLET_DAMAGE: f32 = 25.0;
    /// Gap between the shooter's edge and a freshly spawned bullet
    pub const MUZZLE_OFFSET: f32 = 5.0;

    /// Pickup defaults
    pub const PICKUP_RADIUS: f32 = 12.0;
    pub const PICKUP_MONEY_SCORE: u64 = 50;
    pub const PICKUP_AMMO_AMOUNT: u32 = 15;
    pub const PICKUP_HEALTH_AMOUNT: f32 = 30.0;
    /// Chance that a killed enemy leaves an ammo pickup behind
    pub const PICKUP_DROP_CHANCE: f64 = 0.3;

    /// Default viewport size
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
}

/// Angle (radians) of the direction from `from` toward `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit vector pointing along `angle`
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
