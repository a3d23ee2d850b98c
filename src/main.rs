//! Star Strafe headless demo driver
//!
//! Runs the full engine loop without a display: a scripted pilot holds
//! fire from the title screen, the simulation advances at 60 Hz through
//! a `ManualScheduler`, and the outcome is logged. Useful as a smoke run
//! and as a reference for how a host wires the engine up.

use std::time::{SystemTime, UNIX_EPOCH};

use star_strafe::platform::{run, CancelToken, Engine, ManualScheduler};
use star_strafe::render::NullSurface;
use star_strafe::{Key, Tuning};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut engine = Engine::new(seed, Tuning::default());
    // Space starts the run and keeps the trigger held
    engine.input_mut().press(Key::Fire);

    // Ten simulated seconds at 60 fps
    let token = CancelToken::new();
    let mut scheduler = ManualScheduler::at_fps(600, 60.0, token);
    let mut surface = NullSurface;
    run(&mut engine, &mut scheduler, &mut surface);

    let state = engine.state();
    log::info!(
        "demo finished in phase {:?}: score {}, wave {}, {} enemies and {} bosses destroyed",
        state.phase,
        state.stats.score,
        state.stats.wave,
        state.stats.enemies_killed,
        state.stats.bosses_killed,
    );
}
