//! Star Strafe - a wave-based top-down arcade shooter engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: State presentation onto an abstract drawing surface
//! - `input`: Held-key tracking fed by the host
//! - `platform`: Clock/scheduler seams and the driving loop
//! - `tuning`: Data-driven game balance
//!
//! The engine is self-contained and in-memory: the host owns the canvas,
//! the keyboard listeners, and the animation-frame pacing, and talks to
//! the engine only through `InputState`, the `Surface` trait, and the
//! `Clock`/`Scheduler` traits. That keeps the whole game headlessly
//! testable: construct a `GameState`, script an `InputState`, and call
//! `tick` with synthetic timestamps.

pub mod input;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use input::{InputState, Key};
pub use platform::{CancelToken, Clock, Engine, Scheduler};
pub use render::{render, Surface};
pub use sim::{tick, GamePhase, GameState};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Player speed in pixels/second (5 px/frame at 60 Hz in the classic build)
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: u32 = 3;
    /// Minimum wall-clock interval between shots (milliseconds)
    pub const SHOOT_COOLDOWN_MS: f64 = 150.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    /// Upward bullet speed in pixels/second
    pub const BULLET_SPEED: f32 = 420.0;

    /// Vertical slack outside the canvas before a bullet is culled
    pub const BULLET_CULL_MARGIN: f32 = 20.0;
    /// Slack past the bottom edge before an enemy is culled
    pub const ENEMY_CULL_MARGIN: f32 = 50.0;

    /// Particles per explosion burst
    pub const EXPLOSION_PARTICLES: usize = 15;
    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE_TICKS: u32 = 30;
}
