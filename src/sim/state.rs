//! Simulation state and session control
//!
//! Everything one session needs lives in [`SimulationState`]: the map, every
//! entity collection, the RNG stream and the pending HUD events. Nothing is
//! global, so tests can build a minimal state and step it deterministically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::camera::Camera;
use super::enemy::Enemy;
use super::map::{MapKind, MapLayout};
use super::pickup::{Pickup, PickupKind};
use super::player::Player;
use crate::error::ConfigError;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player health reached zero
    GameOver,
}

/// Signals for the HUD and UI layer, drained once per frame by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { delta: u64, total: u64 },
    HealthChanged { fraction: f32 },
    AmmoChanged { ammo: u32 },
    EnemySpawned { id: u32, pos: Vec2 },
    EnemyKilled { id: u32, pos: Vec2 },
    PickupDropped { kind: PickupKind, pos: Vec2 },
    PickupCollected { kind: PickupKind },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Seed the RNG stream was created from
    pub seed: u64,
    /// Source for wander headings, respawn and drop rolls
    pub rng: Pcg32,
    pub layout: MapLayout,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds since session start
    pub elapsed: f32,
    pub player: Player,
    /// Active enemies (insertion order)
    pub enemies: Vec<Enemy>,
    /// Active bullets (insertion order)
    pub bullets: Vec<Bullet>,
    /// Active pickups (insertion order)
    pub pickups: Vec<Pickup>,
    pub camera: Camera,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl SimulationState {
    /// Start a session on a built-in map
    pub fn new(selection: MapKind, seed: u64, viewport: Vec2) -> Result<Self, ConfigError> {
        Self::with_layout(selection.layout(), seed, viewport)
    }

    /// Start a session on any layout; the layout is validated first
    pub fn with_layout(layout: MapLayout, seed: u64, viewport: Vec2) -> Result<Self, ConfigError> {
        if !(viewport.x > 0.0 && viewport.y > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: viewport.x,
                height: viewport.y,
            });
        }
        layout.validate()?;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(layout.player_spawn),
            layout,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            elapsed: 0.0,
            enemies: Vec::new(),
            bullets: Vec::new(),
            pickups: Vec::new(),
            camera: Camera::new(viewport),
            events: Vec::new(),
            next_id: 1,
        };
        state.reset();
        Ok(state)
    }

    /// Restart on a (possibly different) built-in map
    ///
    /// The RNG stream carries on, so consecutive sessions differ.
    pub fn start(&mut self, selection: MapKind) -> Result<(), ConfigError> {
        let layout = selection.layout();
        layout.validate()?;
        self.layout = layout;
        self.reset();
        Ok(())
    }

    /// Repopulate every collection from the layout's spawn tables
    fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.time_ticks = 0;
        self.elapsed = 0.0;
        self.player = Player::new(self.layout.player_spawn);
        self.enemies.clear();
        self.bullets.clear();
        self.pickups.clear();
        self.events.clear();

        let enemy_spawns = self.layout.enemy_spawns.clone();
        for pos in enemy_spawns {
            self.spawn_enemy(pos);
        }
        let pickup_spawns = self.layout.pickup_spawns.clone();
        for spawn in pickup_spawns {
            self.spawn_pickup(spawn.pos, spawn.kind);
        }
        self.camera.follow(self.player.pos, self.layout.world_size());

        log::info!(
            "Session started on '{}': {} enemies, {} pickups, seed {}",
            self.layout.name,
            self.enemies.len(),
            self.pickups.len(),
            self.seed
        );
    }

    /// Allocate a new entity ID
    ///
    /// Wraps after `u32::MAX` allocations; by then every early id has long
    /// since left the collections. 0 is skipped, it marks unassigned bullets.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn spawn_enemy(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, pos));
        self.emit(GameEvent::EnemySpawned { id, pos });
        id
    }

    pub fn spawn_pickup(&mut self, pos: Vec2, kind: PickupKind) -> u32 {
        let id = self.next_entity_id();
        self.pickups.push(Pickup::new(id, pos, kind));
        id
    }

    /// Insert a freshly fired bullet, assigning its id
    pub fn add_bullet(&mut self, mut bullet: Bullet) -> u32 {
        let id = self.next_entity_id();
        bullet.id = id;
        self.bullets.push(bullet);
        id
    }

    pub fn award_score(&mut self, delta: u64) {
        if delta == 0 {
            return;
        }
        self.score += delta;
        self.emit(GameEvent::ScoreChanged {
            delta,
            total: self.score,
        });
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn viewport() -> Vec2 {
        Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }

    #[test]
    fn test_new_populates_from_spawn_table() {
        let state = SimulationState::new(MapKind::StreetGrid, 42, viewport()).unwrap();
        let layout = MapLayout::street_grid();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies.len(), layout.enemy_spawns.len());
        assert_eq!(state.pickups.len(), layout.pickup_spawns.len());
        assert_eq!(state.player.pos, layout.player_spawn);
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let state = SimulationState::new(MapKind::IndustrialYard, 1, viewport()).unwrap();
        let mut ids: Vec<u32> = state
            .enemies
            .iter()
            .map(|e| e.id)
            .chain(state.pickups.iter().map(|p| p.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_entity_ids_wrap_without_zero() {
        let mut state = SimulationState::new(MapKind::StreetGrid, 1, viewport()).unwrap();
        state.next_id = u32::MAX;
        assert_eq!(state.next_entity_id(), u32::MAX);
        assert_eq!(state.next_entity_id(), 1);
        assert_eq!(state.next_entity_id(), 2);
    }

    #[test]
    fn test_start_switches_map_and_resets() {
        let mut state = SimulationState::new(MapKind::StreetGrid, 42, viewport()).unwrap();
        state.award_score(500);
        state.enemies.clear();
        state.phase = GamePhase::GameOver;

        state.start(MapKind::IndustrialYard).unwrap();
        assert_eq!(state.layout.name, MapKind::IndustrialYard.as_str());
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(
            state.enemies.len(),
            MapLayout::industrial_yard().enemy_spawns.len()
        );
        assert_eq!(state.player.pos, MapLayout::industrial_yard().player_spawn);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        let mut layout = MapLayout::street_grid();
        layout.enemy_spawns.clear();
        assert!(matches!(
            SimulationState::with_layout(layout, 1, viewport()),
            Err(ConfigError::NoEnemySpawns { .. })
        ));

        assert!(matches!(
            SimulationState::new(MapKind::StreetGrid, 1, Vec2::new(0.0, 600.0)),
            Err(ConfigError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_score_events() {
        let mut state = SimulationState::new(MapKind::StreetGrid, 1, viewport()).unwrap();
        state.drain_events();
        state.award_score(0);
        assert!(state.events().is_empty());
        state.award_score(ENEMY_KILL_SCORE);
        state.award_score(PICKUP_MONEY_SCORE);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::ScoreChanged {
                    delta: 100,
                    total: 100
                },
                GameEvent::ScoreChanged {
                    delta: 50,
                    total: 150
                },
            ]
        );
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_same_seed_same_rng() {
        use rand::Rng;
        let mut a = SimulationState::new(MapKind::StreetGrid, 9, viewport()).unwrap();
        let mut b = SimulationState::new(MapKind::StreetGrid, 9, viewport()).unwrap();
        let xs: Vec<u32> = (0..4).map(|_| a.rng.random()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.rng.random()).collect();
        assert_eq!(xs, ys);
    }
}
