//! State presentation onto an abstract drawing surface
//!
//! `render` is a pure read of the world: it never mutates game entities
//! and must be total over every reachable state, including an empty
//! world and a missing boss. The host supplies the actual canvas by
//! implementing [`Surface`]; the engine only issues 2D-context style
//! commands (fill/stroke rects, aligned text, global alpha).

use crate::sim::{GamePhase, GameState};

/// Horizontal text alignment, canvas-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Minimal 2D drawing surface the host must provide.
///
/// Mirrors the subset of a canvas 2D context the game uses. Colors are
/// CSS-style hex strings.
pub trait Surface {
    fn fill_style(&mut self, color: &str);
    fn stroke_style(&mut self, color: &str);
    /// Alpha applied to subsequent fills, in [0, 1].
    fn global_alpha(&mut self, alpha: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, align: TextAlign);
}

/// Surface that draws nothing. Used by headless drivers and tests.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn fill_style(&mut self, _color: &str) {}
    fn stroke_style(&mut self, _color: &str) {}
    fn global_alpha(&mut self, _alpha: f32) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
    fn stroke_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32, _size_px: f32, _align: TextAlign) {}
}

/// Paint the current world state.
pub fn render(state: &GameState, surface: &mut impl Surface) {
    let w = state.tuning.canvas_width;
    let h = state.tuning.canvas_height;

    // Background
    surface.fill_style("#000011");
    surface.fill_rect(0.0, 0.0, w, h);

    // Decorative starfield, derived from the tick counter so it scrolls
    // without any persisted state
    surface.fill_style("#ffffff");
    let scroll = state.time_ticks as f32 * 0.6;
    for i in 0..50 {
        let x = (i as f32 * 37.0).rem_euclid(w);
        let y = (i as f32 * 23.0 + scroll).rem_euclid(h);
        surface.fill_rect(x, y, 1.0, 1.0);
    }

    match state.phase {
        GamePhase::Playing => render_world(state, surface),
        GamePhase::Menu => render_menu(state, surface),
        GamePhase::GameOver => render_game_over(state, surface),
    }
}

fn render_world(state: &GameState, surface: &mut impl Surface) {
    let w = state.tuning.canvas_width;

    // Player: hull with an inset cockpit
    let p = &state.player;
    surface.fill_style("#00aaff");
    surface.fill_rect(p.pos.x, p.pos.y, p.size.x, p.size.y);
    surface.fill_style("#0088ff");
    surface.fill_rect(
        p.pos.x + 5.0,
        p.pos.y + 5.0,
        p.size.x - 10.0,
        p.size.y - 10.0,
    );

    surface.fill_style("#ffff00");
    for bullet in &state.bullets {
        if bullet.active {
            surface.fill_rect(bullet.pos.x, bullet.pos.y, bullet.size.x, bullet.size.y);
        }
    }

    surface.fill_style("#ff0000");
    for enemy in &state.enemies {
        if enemy.active {
            surface.fill_rect(enemy.pos.x, enemy.pos.y, enemy.size.x, enemy.size.y);
        }
    }

    if let Some(boss) = state.boss.as_ref() {
        if boss.active {
            surface.fill_style("#ff00ff");
            surface.fill_rect(boss.pos.x, boss.pos.y, boss.size.x, boss.size.y);
            surface.fill_style("#cc00cc");
            surface.fill_rect(
                boss.pos.x + 5.0,
                boss.pos.y + 5.0,
                boss.size.x - 10.0,
                boss.size.y - 10.0,
            );

            // Boss health bar hovers above the hull
            let fraction = health_fraction(boss.health, boss.max_health);
            surface.fill_style("#ff0000");
            surface.fill_rect(boss.pos.x, boss.pos.y - 10.0, boss.size.x, 5.0);
            surface.fill_style("#00ff00");
            surface.fill_rect(boss.pos.x, boss.pos.y - 10.0, boss.size.x * fraction, 5.0);
        }
    }

    for particle in &state.particles {
        let alpha = particle.life as f32 / particle.max_life.max(1) as f32;
        surface.fill_style(particle.color);
        surface.global_alpha(alpha.clamp(0.0, 1.0));
        surface.fill_rect(particle.pos.x, particle.pos.y, particle.size, particle.size);
        surface.global_alpha(1.0);
    }

    // HUD
    surface.fill_style("#ffffff");
    surface.fill_text(
        &format!("Score: {}", state.stats.score),
        10.0,
        30.0,
        20.0,
        TextAlign::Left,
    );
    surface.fill_text(
        &format!("Wave: {}", state.stats.wave),
        10.0,
        60.0,
        20.0,
        TextAlign::Left,
    );
    surface.fill_text(
        &format!("Health: {}", p.health.min(p.max_health)),
        10.0,
        90.0,
        20.0,
        TextAlign::Left,
    );

    // Player health bar, top right
    let bar_w = 200.0;
    let bar_h = 20.0;
    let fraction = health_fraction(p.health, p.max_health);
    surface.fill_style("#ff0000");
    surface.fill_rect(w - bar_w - 10.0, 10.0, bar_w, bar_h);
    surface.fill_style("#00ff00");
    surface.fill_rect(w - bar_w - 10.0, 10.0, bar_w * fraction, bar_h);
    surface.stroke_style("#ffffff");
    surface.stroke_rect(w - bar_w - 10.0, 10.0, bar_w, bar_h);
}

fn render_menu(state: &GameState, surface: &mut impl Surface) {
    let cx = state.tuning.canvas_width / 2.0;
    let cy = state.tuning.canvas_height / 2.0;
    surface.fill_style("#ffffff");
    surface.fill_text("STAR STRAFE", cx, cy - 50.0, 48.0, TextAlign::Center);
    surface.fill_text("Press SPACE to Start", cx, cy + 20.0, 24.0, TextAlign::Center);
    surface.fill_text(
        "WASD or Arrow Keys to Move",
        cx,
        cy + 60.0,
        24.0,
        TextAlign::Center,
    );
    surface.fill_text("SPACE to Shoot", cx, cy + 100.0, 24.0, TextAlign::Center);
}

fn render_game_over(state: &GameState, surface: &mut impl Surface) {
    let cx = state.tuning.canvas_width / 2.0;
    let cy = state.tuning.canvas_height / 2.0;
    surface.fill_style("#ffffff");
    surface.fill_text("GAME OVER", cx, cy - 50.0, 48.0, TextAlign::Center);
    surface.fill_text(
        &format!("Final Score: {}", state.stats.score),
        cx,
        cy + 20.0,
        24.0,
        TextAlign::Center,
    );
    surface.fill_text(
        &format!("Waves Survived: {}", state.stats.wave),
        cx,
        cy + 60.0,
        24.0,
        TextAlign::Center,
    );
    surface.fill_text(
        "Press SPACE to Restart",
        cx,
        cy + 120.0,
        24.0,
        TextAlign::Center,
    );
}

/// Display fraction for a health bar, clamped so a momentarily
/// out-of-range value can never draw outside the bar.
fn health_fraction(health: u32, max_health: u32) -> f32 {
    (health as f32 / max_health.max(1) as f32).clamp(0.0, 1.0)
}
