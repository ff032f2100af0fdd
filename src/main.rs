//! Skyraid entry point
//!
//! Headless demo driver: stands in for the frame scheduler and input source,
//! advancing a session at the target cadence while a small autopilot plays.
//!
//! Usage: `skyraid [seed] [tunables.json]`

use std::cmp::Ordering;
use std::path::Path;
use std::thread;
use std::time::Duration;

use skyraid::Tunables;
use skyraid::consts::TICK_INTERVAL_MS;
use skyraid::render::build_scene;
use skyraid::sim::{GameSession, Key};

/// Demo run length cap (~5 minutes at the 30 ms cadence)
const MAX_DEMO_TICKS: u64 = 10_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    let tunables = match args.next() {
        Some(path) => Tunables::load(Path::new(&path)),
        None => Tunables::default(),
    };

    let mut session = GameSession::with_tunables(seed, tunables);

    for ticks in 0..MAX_DEMO_TICKS {
        autopilot(&mut session);
        session.advance();

        if ticks % 500 == 0 {
            let scene = build_scene(session.state());
            log::info!(
                "tick {ticks}: score {}, {} projectiles, {} enemies",
                scene.score,
                scene.projectiles.len(),
                scene.enemies.len()
            );
        }

        if session.is_game_over() {
            break;
        }
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }

    log::info!("final score: {}", session.score());
    println!("seed {seed}: final score {}", session.score());
}

/// Steer under the lowest enemy and keep the trigger pressed.
///
/// Fire is a one-shot consume in the simulation, so it must be re-pressed
/// every tick to sustain a stream of shots.
fn autopilot(session: &mut GameSession) {
    let ship_x = session.ship().x;
    let target = session
        .enemies()
        .iter()
        .min_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal))
        .map(|e| e.pos.x);

    session.on_key_up(Key::Left);
    session.on_key_up(Key::Right);
    if let Some(target_x) = target {
        if target_x < ship_x - 1.0 {
            session.on_key_down(Key::Left);
        } else if target_x > ship_x + 1.0 {
            session.on_key_down(Key::Right);
        }
    }

    session.on_key_down(Key::Fire);
}
