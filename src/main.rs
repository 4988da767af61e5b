//! Street Shooter headless host
//!
//! Runs a session at 60 Hz with a simple autopilot standing in for the
//! player's input and prints the HUD event stream. Useful for soak-testing
//! the simulation without a renderer.
//!
//! Usage: `street-shooter [street|industrial] [seconds]`
//! Settings are read from `$STREET_SHOOTER_SETTINGS` (default `settings.json`).

use std::process::ExitCode;

use glam::Vec2;

use street_shooter::{ConfigError, Settings};
use street_shooter::sim::{
    GameEvent, MapKind, PickupKind, SimulationState, TickInput, render_frame, tick,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 60.0;

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let settings_path =
        std::env::var("STREET_SHOOTER_SETTINGS").unwrap_or_else(|_| "settings.json".to_string());
    let mut settings = Settings::load_or_default(&settings_path);

    let mut args = std::env::args().skip(1);
    if let Some(name) = args.next() {
        match MapKind::parse(&name) {
            Some(map) => settings.map = map,
            None => {
                eprintln!("{}", ConfigError::UnknownMap(name));
                return ExitCode::FAILURE;
            }
        }
    }
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let mut state = match settings.start_session() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Cannot start session: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Street Shooter (headless) on {}", settings.map.as_str());
    state.drain_events();

    let frames = (seconds / FRAME_DT) as u64;
    for _ in 0..frames {
        let input = autopilot(&state);
        tick(&mut state, &input, FRAME_DT);
        for event in state.drain_events() {
            report(&state, &event);
        }
        if state.is_over() {
            break;
        }
    }

    let frame = render_frame(&state);
    println!(
        "\n{}: score {}, health {:.0}, ammo {}, {} enemies left, camera ({:.0}, {:.0}), {:.1}s simulated",
        state.layout.name,
        state.score,
        state.player.health,
        state.player.ammo,
        state.enemies.len(),
        frame.camera.x,
        frame.camera.y,
        state.elapsed
    );
    ExitCode::SUCCESS
}

/// Chase the nearest enemy and shoot once in range; go for ammo when dry
fn autopilot(state: &SimulationState) -> TickInput {
    let me = state.player.pos;
    let nearest = |points: &mut dyn Iterator<Item = Vec2>| {
        points.min_by(|a, b| {
            a.distance_squared(me)
                .partial_cmp(&b.distance_squared(me))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    };

    if state.player.ammo == 0 {
        let ammo = nearest(
            &mut state
                .pickups
                .iter()
                .filter(|p| p.kind == PickupKind::Ammo)
                .map(|p| p.pos),
        );
        if let Some(target) = ammo {
            return TickInput {
                movement: target - me,
                aim: Some(target),
                fire: false,
            };
        }
    }

    match nearest(&mut state.enemies.iter().map(|e| e.pos)) {
        Some(target) => {
            let distance = target.distance(me);
            TickInput {
                movement: if distance > 250.0 { target - me } else { Vec2::ZERO },
                aim: Some(target),
                fire: distance < 350.0,
            }
        }
        None => TickInput::default(),
    }
}

fn report(state: &SimulationState, event: &GameEvent) {
    let t = state.elapsed;
    match event {
        GameEvent::ScoreChanged { delta, total } => {
            println!("[{:6.2}s] score +{} = {}", t, delta, total)
        }
        GameEvent::HealthChanged { fraction } => {
            println!("[{:6.2}s] health {:.0}%", t, fraction * 100.0)
        }
        GameEvent::AmmoChanged { .. } => {}
        GameEvent::EnemySpawned { id, pos } => {
            println!("[{:6.2}s] enemy #{} spawned at ({:.0}, {:.0})", t, id, pos.x, pos.y)
        }
        GameEvent::EnemyKilled { id, .. } => println!("[{:6.2}s] enemy #{} down", t, id),
        GameEvent::PickupDropped { kind, .. } => println!("[{:6.2}s] {:?} dropped", t, kind),
        GameEvent::PickupCollected { kind } => println!("[{:6.2}s] picked up {:?}", t, kind),
        GameEvent::GameOver { score } => println!("[{:6.2}s] GAME OVER, final score {}", t, score),
    }
}
