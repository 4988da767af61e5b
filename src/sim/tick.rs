//! Variable-step simulation tick
//!
//! Core game loop. The host calls [`tick`] once per display refresh with the
//! wall-clock time since the previous call; the step is clamped so a long
//! frame hitch cannot tunnel entities through walls.
//!
//! Update order is fixed: player, enemies, dead-enemy sweep, bullets,
//! inactive-bullet sweep, collision passes, respawn roll, camera. Collections
//! are never resized while being iterated; removal always happens in a sweep.

use glam::Vec2;
use rand::Rng;

use super::ai::update_enemy;
use super::collision::{bullets_vs_enemies, bullets_vs_player, player_vs_pickups};
use super::pickup::PickupKind;
use super::state::{GameEvent, GamePhase, SimulationState};
use crate::consts::*;

/// Input snapshot for a single tick, built by the host's input layer
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired movement direction (any length; normalized by the player)
    pub movement: Vec2,
    /// Pointer position in world coordinates
    pub aim: Option<Vec2>,
    /// Fire button held
    pub fire: bool,
}

impl TickInput {
    /// Build the movement vector from four direction keys (+y is down)
    pub fn from_keys(up: bool, down: bool, left: bool, right: bool) -> Self {
        let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) as f32;
        Self {
            movement: Vec2::new(axis(left, right), axis(up, down)),
            ..Default::default()
        }
    }
}

/// Clamp host-supplied elapsed time to `[0, MAX_DT]`; non-finite becomes 0
#[inline]
pub fn clamp_dt(elapsed: f32) -> f32 {
    if elapsed.is_finite() {
        elapsed.clamp(0.0, MAX_DT)
    } else {
        0.0
    }
}

/// Advance the session by `elapsed` seconds (clamped)
pub fn tick(state: &mut SimulationState, input: &TickInput, elapsed: f32) {
    if state.is_over() {
        return;
    }

    let dt = clamp_dt(elapsed);
    let health_before = state.player.health;
    let ammo_before = state.player.ammo;

    state.time_ticks += 1;
    state.elapsed += dt;

    // Player
    state
        .player
        .update(dt, input.movement, input.aim, &state.layout.world);
    if input.fire {
        if let Some(bullet) = state.player.shoot() {
            state.add_bullet(bullet);
        }
    }

    // Enemies target where the player ended up this tick
    let target = state.player.pos;
    let mut fired = Vec::new();
    for enemy in &mut state.enemies {
        if let Some(bullet) = update_enemy(enemy, dt, target, &state.layout.world, &mut state.rng) {
            fired.push(bullet);
        }
    }
    for bullet in fired {
        state.add_bullet(bullet);
    }
    reap_enemies(state);

    // Bullets
    for bullet in &mut state.bullets {
        bullet.update(dt, &state.layout.world);
    }
    state.bullets.retain(|b| b.active);

    // Entity-vs-entity passes
    bullets_vs_enemies(&mut state.bullets, &mut state.enemies);
    bullets_vs_player(&mut state.bullets, &mut state.player);
    state.bullets.retain(|b| b.active);
    for pickup in player_vs_pickups(&state.player, &mut state.pickups) {
        let kind = pickup.kind;
        let score = pickup.collect(&mut state.player);
        state.award_score(score);
        state.emit(GameEvent::PickupCollected { kind });
    }
    reap_enemies(state);

    maybe_respawn(state);

    let world_size = state.layout.world_size();
    state.camera.follow(state.player.pos, world_size);

    // HUD signals
    if state.player.health != health_before {
        let fraction = state.player.health / state.player.max_health;
        state.emit(GameEvent::HealthChanged { fraction });
    }
    if state.player.ammo != ammo_before {
        let ammo = state.player.ammo;
        state.emit(GameEvent::AmmoChanged { ammo });
    }

    if !state.player.is_alive() {
        state.phase = GamePhase::GameOver;
        let score = state.score;
        state.emit(GameEvent::GameOver { score });
        log::info!(
            "Game over after {} ticks ({:.1}s), final score {}",
            state.time_ticks,
            state.elapsed,
            score
        );
    }
}

/// Remove dead enemies, paying out score and rolling for an ammo drop
fn reap_enemies(state: &mut SimulationState) {
    let dead: Vec<(u32, Vec2)> = state
        .enemies
        .iter()
        .filter(|e| !e.is_alive())
        .map(|e| (e.id, e.pos))
        .collect();
    if dead.is_empty() {
        return;
    }
    state.enemies.retain(|e| e.is_alive());

    for (id, pos) in dead {
        state.award_score(ENEMY_KILL_SCORE);
        state.emit(GameEvent::EnemyKilled { id, pos });
        log::debug!("Enemy {} killed at ({:.0}, {:.0})", id, pos.x, pos.y);

        if state.rng.random_bool(PICKUP_DROP_CHANCE) {
            state.spawn_pickup(pos, PickupKind::Ammo);
            state.emit(GameEvent::PickupDropped {
                kind: PickupKind::Ammo,
                pos,
            });
            log::debug!("Enemy {} dropped ammo", id);
        }
    }
}

/// Once the map is clear, each tick has an independent chance to spawn one
/// enemy at a random spawn point
fn maybe_respawn(state: &mut SimulationState) {
    if !state.enemies.is_empty() || state.layout.enemy_spawns.is_empty() {
        return;
    }
    if !state.rng.random_bool(RESPAWN_CHANCE) {
        return;
    }
    let index = state.rng.random_range(0..state.layout.enemy_spawns.len());
    let pos = state.layout.enemy_spawns[index];
    let id = state.spawn_enemy(pos);
    log::debug!("Enemy {} respawned at ({:.0}, {:.0})", id, pos.x, pos.y);
}
