//! Session settings
//!
//! Stored as JSON next to the binary; anything missing falls back to the
//! defaults below.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::error::ConfigError;
use crate::sim::{MapKind, SimulationState};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width in world units
    pub viewport_width: f32,
    /// Viewport height in world units
    pub viewport_height: f32,
    /// Which built-in map to play
    pub map: MapKind,
    /// Fixed RNG seed (None = random per session)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            map: MapKind::StreetGrid,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width > 0.0 && self.viewport_height > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            })
        }
    }

    /// The configured seed, or a fresh random one
    pub fn session_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Start a session with these settings
    pub fn start_session(&self) -> Result<SimulationState, ConfigError> {
        self.validate()?;
        SimulationState::new(self.map, self.session_seed(), self.viewport())
    }
}
