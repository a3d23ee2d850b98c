//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - dt-scaled motion driven at a fixed timestep
//! - Seeded RNG only
//! - Stable iteration order (insertion order; first match wins)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{
    Boss, Bullet, Enemy, GamePhase, GameState, GameStats, Particle, Player,
};
pub use tick::{spawn_wave, tick};
