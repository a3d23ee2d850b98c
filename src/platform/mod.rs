//! Platform seams and the driving loop
//!
//! The host owns frame pacing and teardown; the engine only sees:
//! - [`Clock`]: monotonic milliseconds for the shot cooldown
//! - [`Scheduler`]: yields frame timestamps until cancelled
//! - [`CancelToken`]: flips the scheduler off on component teardown; the
//!   in-flight frame still completes, the next one never runs
//!
//! [`Engine`] pairs a `GameState` with an `InputState` and a fixed-step
//! accumulator, so a variable-rate frame callback always advances the
//! simulation in `SIM_DT` steps (capped at `MAX_SUBSTEPS` to avoid the
//! spiral of death after a long stall).

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::input::InputState;
use crate::render::{render, Surface};
use crate::sim::{tick, GameState};
use crate::tuning::Tuning;

/// Monotonic clock, milliseconds since an arbitrary origin.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by `Instant`.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Cooperative cancellation handle shared between the host and a
/// scheduler. Cloning hands out another reference to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent any further scheduled frame from running.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Frame source: the host's animation-frame pacing behind a seam the
/// tests can drive synthetically.
pub trait Scheduler {
    /// Yield the next frame timestamp in milliseconds, or `None` once
    /// cancelled (or out of frames).
    fn next_frame(&mut self) -> Option<f64>;
}

/// Paces frames at a fixed rate on the system clock. The native stand-in
/// for `requestAnimationFrame`.
#[derive(Debug)]
pub struct IntervalScheduler {
    clock: SystemClock,
    period: Duration,
    token: CancelToken,
    next_due: Option<Instant>,
}

impl IntervalScheduler {
    pub fn new(fps: f32, token: CancelToken) -> Self {
        Self {
            clock: SystemClock::default(),
            period: Duration::from_secs_f64(1.0 / fps.max(1.0) as f64),
            token,
            next_due: None,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if self.token.is_cancelled() {
            return None;
        }
        let due = self.next_due.unwrap_or_else(Instant::now);
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
        self.next_due = Some(due.max(now) + self.period);
        Some(self.clock.now_ms())
    }
}

/// Replays a scripted list of frame timestamps. Lets tests and headless
/// demos step the loop without a display.
#[derive(Debug)]
pub struct ManualScheduler {
    frames: std::vec::IntoIter<f64>,
    token: CancelToken,
}

impl ManualScheduler {
    pub fn new(frames: Vec<f64>, token: CancelToken) -> Self {
        Self {
            frames: frames.into_iter(),
            token,
        }
    }

    /// Evenly spaced timestamps for `count` frames at `fps`.
    pub fn at_fps(count: usize, fps: f64, token: CancelToken) -> Self {
        let period = 1000.0 / fps;
        Self::new((0..count).map(|i| i as f64 * period).collect(), token)
    }
}

impl Scheduler for ManualScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if self.token.is_cancelled() {
            return None;
        }
        self.frames.next()
    }
}

/// Game state plus the per-frame plumbing around it.
#[derive(Debug)]
pub struct Engine {
    state: GameState,
    input: InputState,
    accumulator: f32,
    last_time_ms: f64,
}

impl Engine {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("engine initialized with seed {seed}");
        Self {
            state: GameState::new(seed, tuning),
            input: InputState::new(),
            accumulator: 0.0,
            last_time_ms: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Input sink for the host's key handlers.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Advance the simulation to `now_ms` in fixed steps, then paint.
    ///
    /// One-shot inputs are cleared after the substep that consumed them,
    /// so a single confirm press triggers exactly one start/restart no
    /// matter how many substeps the frame runs.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) {
        let dt = if self.last_time_ms > 0.0 {
            (((now_ms - self.last_time_ms) / 1000.0) as f32).clamp(0.0, 0.1)
        } else {
            SIM_DT
        };
        self.last_time_ms = now_ms;
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, now_ms, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.input.confirm = false;
        }

        render(&self.state, surface);
    }
}

/// The explicit driving loop: update then render, once per scheduled
/// frame, until the scheduler is cancelled or exhausted.
pub fn run(engine: &mut Engine, scheduler: &mut impl Scheduler, surface: &mut impl Surface) {
    while let Some(now_ms) = scheduler.next_frame() {
        engine.frame(now_ms, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::render::NullSurface;
    use crate::sim::GamePhase;

    #[test]
    fn test_manual_scheduler_replays_then_ends() {
        let token = CancelToken::new();
        let mut scheduler = ManualScheduler::new(vec![0.0, 16.0, 32.0], token);
        assert_eq!(scheduler.next_frame(), Some(0.0));
        assert_eq!(scheduler.next_frame(), Some(16.0));
        assert_eq!(scheduler.next_frame(), Some(32.0));
        assert_eq!(scheduler.next_frame(), None);
    }

    #[test]
    fn test_cancel_prevents_next_frame() {
        let token = CancelToken::new();
        let mut scheduler = ManualScheduler::at_fps(100, 60.0, token.clone());
        assert!(scheduler.next_frame().is_some());
        token.cancel();
        assert_eq!(scheduler.next_frame(), None);
    }

    #[test]
    fn test_run_drives_engine_until_cancelled() {
        let token = CancelToken::new();
        let mut scheduler = ManualScheduler::at_fps(10, 60.0, token);
        let mut engine = Engine::new(3, Tuning::default());
        engine.input_mut().confirm = true;
        let mut surface = NullSurface;
        run(&mut engine, &mut scheduler, &mut surface);
        assert_eq!(engine.state().phase, GamePhase::Playing);
        assert!(engine.state().time_ticks > 0);
    }

    #[test]
    fn test_frame_caps_substeps_after_stall() {
        let mut engine = Engine::new(3, Tuning::default());
        engine.input_mut().confirm = true;
        let mut surface = NullSurface;
        engine.frame(16.0, &mut surface);
        let ticks_before = engine.state().time_ticks;

        // A two-second stall must not replay two seconds of simulation
        engine.frame(2016.0, &mut surface);
        let replayed = engine.state().time_ticks - ticks_before;
        assert!(replayed <= MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_confirm_is_one_shot_per_frame() {
        let mut engine = Engine::new(3, Tuning::default());
        let mut surface = NullSurface;
        engine.input_mut().confirm = true;
        engine.frame(0.0, &mut surface);
        assert_eq!(engine.state().phase, GamePhase::Playing);
        assert!(!engine.input.confirm, "consumed after the substep");
    }

    #[test]
    fn test_held_keys_persist_across_frames() {
        let mut engine = Engine::new(3, Tuning::default());
        let mut surface = NullSurface;
        engine.input_mut().press(Key::Right);
        engine.input_mut().confirm = false;
        // Not playing yet: movement keys are ignored on the menu
        engine.frame(0.0, &mut surface);
        assert_eq!(engine.state().phase, GamePhase::Menu);
        assert!(engine.input.is_held(Key::Right));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::default();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
