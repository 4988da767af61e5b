//! Configuration errors
//!
//! The simulation itself never fails once running; everything that can go
//! wrong is caught while loading settings or starting a session.

use thiserror::Error;

/// Errors raised while loading configuration or validating a map layout.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("map '{map}' has empty world dimensions {width}x{height}")]
    EmptyWorld { map: String, width: f32, height: f32 },

    #[error("map '{map}' has no enemy spawn points")]
    NoEnemySpawns { map: String },

    #[error("map '{map}' obstacle #{index} is solid but has zero area")]
    DegenerateObstacle { map: String, index: usize },

    #[error("map '{map}' {what} spawn at ({x}, {y}) is blocked or out of bounds")]
    BlockedSpawn {
        map: String,
        what: &'static str,
        x: f32,
        y: f32,
    },

    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("unknown map '{0}'")]
    UnknownMap(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
