//! Letterfall headless demo
//!
//! Runs the simulation with a scripted player: rotates now and then,
//! drops on a cadence, and reports the final score. Time is synthesized
//! from the tick counter, so a given seed always replays the same run.
//!
//! Usage: `letterfall [seed] [ticks]`

use std::time::{Duration, Instant};

use glam::Vec2;

use letterfall::physics::PhysicsWorld;
use letterfall::sim::{Phase, Session, Viewport};
use letterfall::tuning::Tuning;

/// One simulated minute at 60 Hz
const DEFAULT_TICKS: u64 = 60 * 60;
/// Drop every 2.5 seconds of sim time
const DROP_INTERVAL_TICKS: u64 = 150;
const ROTATE_INTERVAL_TICKS: u64 = 220;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(12345);
    let ticks: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let tuning = Tuning::load("tuning.json");
    let dt = tuning.dt;
    let viewport = Viewport::new(800.0, 600.0);

    log::info!("Letterfall demo starting with seed: {}", seed);

    let mut world = PhysicsWorld::new(Vec2::new(0.0, tuning.gravity), dt);
    let start = Instant::now();
    let mut session = Session::new(&mut world, tuning, viewport, seed, start);

    let mut ticks_run = 0;
    for tick in 0..ticks {
        let now = start + Duration::from_secs_f64(tick as f64 * dt as f64);

        session.pump(now);

        if session.phase() == Phase::Active && tick > 0 {
            if tick % ROTATE_INTERVAL_TICKS == 0 {
                session.rotate();
            }
            if tick % DROP_INTERVAL_TICKS == 0 {
                session.drop_active(&mut world, now);
            }
        }

        session.before_step(&mut world);
        world.step();

        ticks_run += 1;
        if session.state().is_game_over {
            break;
        }
    }

    let pile: String = session.committed().map(|(_, spec)| spec.letter).collect();
    log::info!("Pile letters (unordered): {}", pile);

    let state = session.state();
    println!(
        "seed {} ran {} ticks: score {}, {} spawned, game over: {}",
        session.seed(),
        ticks_run,
        state.score,
        state.block_counter,
        state.is_game_over
    );
}
