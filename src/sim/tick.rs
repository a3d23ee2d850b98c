//! Fixed timestep simulation tick
//!
//! Advances the whole world one tick. The order of effects is part of
//! the contract and must not be reshuffled: input sampling, shooting,
//! kinematic integration, particle aging, bullet collisions, player
//! collisions, wave completion.

use glam::Vec2;
use rand::Rng;

use super::state::{Boss, Bullet, Enemy, GamePhase, GameState, Particle};
use crate::consts::{BULLET_CULL_MARGIN, ENEMY_CULL_MARGIN, EXPLOSION_PARTICLES, PARTICLE_LIFE_TICKS};
use crate::input::{InputState, Key};

/// Burst color for enemy deaths
const ENEMY_BLAST: &str = "#ff0000";
/// Burst color for boss impacts and death
const BOSS_BLAST: &str = "#ff00ff";

/// Advance the game state by one timestep.
///
/// `now_ms` is a monotonic wall-clock reading used only for the shot
/// cooldown, so fire rate is independent of frame rate. `dt` is the
/// elapsed simulation time in seconds; all motion is dt-scaled.
///
/// In `Menu` and `GameOver` the world is inert; only the tick counter
/// advances (it drives the background scroll on every screen) and the
/// confirm edge resets the world into wave 1.
pub fn tick(state: &mut GameState, input: &InputState, now_ms: f64, dt: f32) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            if input.confirm {
                state.start_game();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    move_player(state, input, dt);
    handle_shooting(state, input, now_ms);
    integrate(state, dt);
    age_particles(state, dt);
    resolve_bullet_hits(state);
    resolve_player_hits(state);
    check_wave_completion(state);
}

/// Per-axis player movement, clamped to the canvas minus the hitbox.
fn move_player(state: &mut GameState, input: &InputState, dt: f32) {
    let step = state.player.speed * dt;
    let p = &mut state.player;
    p.pos.x += input.axis_x() * step;
    p.pos.y += input.axis_y() * step;
    p.pos.x = p.pos.x.clamp(0.0, state.tuning.canvas_width - p.size.x);
    p.pos.y = p.pos.y.clamp(0.0, state.tuning.canvas_height - p.size.y);
}

/// Spawn a bullet at the muzzle when fire is held and the wall-clock
/// cooldown has elapsed.
fn handle_shooting(state: &mut GameState, input: &InputState, now_ms: f64) {
    if !input.is_held(Key::Fire) {
        return;
    }
    let p = &state.player;
    if now_ms - p.last_shot_ms > p.shoot_cooldown_ms {
        let muzzle_x = p.pos.x + p.size.x / 2.0;
        let bullet = Bullet::spawn(muzzle_x, p.pos.y, &state.tuning);
        state.bullets.push(bullet);
        state.player.last_shot_ms = now_ms;
    }
}

/// Advance every bullet, enemy, and the boss by its velocity; cull
/// entities that leave the play band.
fn integrate(state: &mut GameState, dt: f32) {
    let height = state.tuning.canvas_height;

    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel * dt;
        if bullet.pos.y < -BULLET_CULL_MARGIN || bullet.pos.y > height + BULLET_CULL_MARGIN {
            bullet.active = false;
        }
    }
    state.bullets.retain(|b| b.active);

    for enemy in &mut state.enemies {
        enemy.pos += enemy.vel * dt;
        if enemy.pos.y > height + ENEMY_CULL_MARGIN {
            enemy.active = false;
        }
    }
    state.enemies.retain(|e| e.active);

    if let Some(boss) = state.boss.as_mut() {
        boss.advance(dt, state.tuning.canvas_width, &state.tuning);
    }
}

/// Age particles one tick each and drop the dead ones.
fn age_particles(state: &mut GameState, dt: f32) {
    for particle in &mut state.particles {
        particle.pos += particle.vel * dt;
        particle.life = particle.life.saturating_sub(1);
    }
    state.particles.retain(|p| p.life > 0);
}

/// Bullet -> enemy, then bullet -> boss collisions.
///
/// Each bullet resolves against the first colliding enemy in iteration
/// order (no distance tie-break) and is consumed on any hit. The boss is
/// only tested when no enemy was hit.
fn resolve_bullet_hits(state: &mut GameState) {
    let mut bursts: Vec<(Vec2, &'static str)> = Vec::new();
    let mut boss_killed = false;

    for bullet in &mut state.bullets {
        if !bullet.active {
            continue;
        }
        let brect = bullet.rect();

        if let Some(enemy) = state
            .enemies
            .iter_mut()
            .find(|e| e.active && brect.intersects(&e.rect()))
        {
            enemy.health = enemy.health.saturating_sub(1);
            if enemy.health == 0 {
                enemy.active = false;
                bursts.push((enemy.rect().center(), ENEMY_BLAST));
                state.stats.score += enemy.points;
                state.stats.enemies_killed += 1;
            }
            bullet.active = false;
            continue;
        }

        if let Some(boss) = state.boss.as_mut() {
            if boss.active && brect.intersects(&boss.rect()) {
                // Every boss impact sparks, not just the killing blow
                bursts.push((brect.center(), BOSS_BLAST));
                boss.health = boss.health.saturating_sub(1);
                if boss.health == 0 {
                    bursts.push((boss.rect().center(), BOSS_BLAST));
                    state.stats.score += boss.points;
                    state.stats.bosses_killed += 1;
                    boss_killed = true;
                }
                bullet.active = false;
            }
        }
    }

    if boss_killed {
        state.boss = None;
        log::info!("boss destroyed (wave {})", state.stats.wave);
    }

    state.bullets.retain(|b| b.active);
    state.enemies.retain(|e| e.active);

    for (center, color) in bursts {
        spawn_explosion(state, center, color);
    }
}

/// Enemy/boss -> player collisions.
///
/// A colliding enemy is destroyed without awarding points; the boss
/// survives contact. Either costs the player one health, and depletion
/// transitions to `GameOver` within the same tick.
fn resolve_player_hits(state: &mut GameState) {
    let prect = state.player.rect();
    let mut hit = false;
    let mut burst_at: Option<Vec2> = None;

    if let Some(enemy) = state
        .enemies
        .iter_mut()
        .find(|e| e.active && prect.intersects(&e.rect()))
    {
        enemy.active = false;
        burst_at = Some(enemy.rect().center());
        hit = true;
    } else if let Some(boss) = state.boss.as_ref() {
        if boss.active && prect.intersects(&boss.rect()) {
            hit = true;
        }
    }

    if let Some(center) = burst_at {
        spawn_explosion(state, center, ENEMY_BLAST);
        state.enemies.retain(|e| e.active);
    }

    if hit {
        state.player.health = state.player.health.saturating_sub(1);
        if state.player.health == 0 {
            state.phase = GamePhase::GameOver;
            log::info!(
                "game over: score {} wave {}",
                state.stats.score,
                state.stats.wave
            );
        }
    }
}

/// Advance the wave once nothing hostile remains: every fifth wave gets
/// a boss instead of a regular batch, never both.
fn check_wave_completion(state: &mut GameState) {
    if !state.wave_cleared() {
        return;
    }
    let next = state.stats.wave + 1;
    state.stats.wave = next;
    if state.tuning.is_boss_wave(next) {
        let boss = Boss::spawn(state.tuning.canvas_width, next, &state.tuning);
        log::info!("wave {next}: boss with {} health", boss.health);
        state.boss = Some(boss);
    } else {
        spawn_wave(state, next);
    }
}

/// Spawn the regular enemy batch for `wave`: `5 + wave * 2` enemies at
/// random positions above the canvas.
pub fn spawn_wave(state: &mut GameState, wave: u32) {
    let count = state.tuning.wave_enemy_count(wave);
    state.enemies.clear();
    for _ in 0..count {
        let x = state
            .rng
            .random_range(50.0..=state.tuning.canvas_width - 50.0);
        let y = state.rng.random_range(-200.0..=-50.0_f32);
        let enemy = Enemy::spawn(x, y, wave, &state.tuning);
        state.enemies.push(enemy);
    }
    log::debug!("wave {wave}: spawned {count} enemies");
}

/// Burst of cosmetic particles at an explosion site.
fn spawn_explosion(state: &mut GameState, center: Vec2, color: &'static str) {
    for _ in 0..EXPLOSION_PARTICLES {
        let vel = Vec2::new(
            state.rng.random_range(-180.0..180.0),
            state.rng.random_range(-180.0..180.0),
        );
        let size = state.rng.random_range(2.0..5.0);
        state.particles.push(Particle {
            pos: center,
            vel,
            life: PARTICLE_LIFE_TICKS,
            max_life: PARTICLE_LIFE_TICKS,
            size,
            color,
        });
    }
}
