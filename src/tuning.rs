//! Data-driven game balance
//!
//! Every balance number the simulation consumes lives here so tests can
//! stage scenarios without patching constants, and so a host can ship a
//! rebalanced table as plain JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance table for a run. `Default` carries the classic values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Play area dimensions in pixels
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Player hitbox edge length (square)
    pub player_size: f32,
    /// Player speed in pixels/second
    pub player_speed: f32,
    pub player_max_health: u32,
    /// Minimum wall-clock interval between shots, milliseconds
    pub shoot_cooldown_ms: f64,

    /// Bullet hitbox and upward speed (pixels/second)
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,

    /// Enemy hitbox edge length (square)
    pub enemy_size: f32,
    /// Downward speed of a wave-1 enemy, pixels/second
    pub enemy_base_speed: f32,
    /// Extra downward speed per wave, pixels/second
    pub enemy_speed_per_wave: f32,
    /// Enemies gain one hit point every this many waves
    pub enemy_health_wave_div: u32,
    /// Score value per wave number
    pub enemy_points_per_wave: u64,

    /// Boss hitbox
    pub boss_width: f32,
    pub boss_height: f32,
    /// Boss hit points: base + per_wave * wave
    pub boss_base_health: u32,
    pub boss_health_per_wave: u32,
    pub boss_points_per_wave: u64,
    /// Horizontal patrol amplitude as a fraction of the canvas half-width
    pub boss_sweep_fraction: f32,
    /// Patrol oscillation rate, radians/second
    pub boss_sweep_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_max_health: PLAYER_MAX_HEALTH,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,

            enemy_size: 30.0,
            enemy_base_speed: 60.0,
            enemy_speed_per_wave: 30.0,
            enemy_health_wave_div: 3,
            enemy_points_per_wave: 10,

            boss_width: 120.0,
            boss_height: 80.0,
            boss_base_health: 20,
            boss_health_per_wave: 10,
            boss_points_per_wave: 100,
            boss_sweep_fraction: 0.6,
            boss_sweep_rate: 1.5,
        }
    }
}

impl Tuning {
    /// Parse a tuning table from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::debug!(
            "loaded tuning table ({}x{} canvas)",
            tuning.canvas_width,
            tuning.canvas_height
        );
        Ok(tuning)
    }

    /// Enemy count for a wave: `5 + wave * 2`.
    pub fn wave_enemy_count(&self, wave: u32) -> u32 {
        5 + wave * 2
    }

    /// Whether the given wave is a boss wave (every fifth).
    pub fn is_boss_wave(&self, wave: u32) -> bool {
        wave % 5 == 0
    }
}
