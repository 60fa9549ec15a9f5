//! Pure game-logic functions for the shooter.
//!
//! Every public function takes an immutable reference to the current
//! `ShooterState` (and, where needed, an RNG handle) and returns a brand-new
//! `ShooterState`. Side effects are limited to the injected RNG.

use log::{debug, info};
use rand::Rng;

use crate::config::ShooterConfig;
use crate::shooter::entities::{
    direction, distance, Beam, Bullet, BulletOwner, Command, Controls, GameStatus, Player,
    PowerUp, PowerUpKind, ShooterState,
};
use crate::shooter::spawner;

// ── Constructors ─────────────────────────────────────────────────────────────

fn spawn_point(width: f64, height: f64) -> Player {
    Player::new((width / 2.0).floor(), height - 80.0)
}

/// Menu screen for a field described by `config`.
pub fn init_state(config: &ShooterConfig, high_score: u32) -> ShooterState {
    let (width, height) = config.field_size();
    ShooterState {
        status: GameStatus::Menu,
        player: spawn_point(width, height),
        bullets: Vec::new(),
        enemies: Vec::new(),
        powerups: Vec::new(),
        beams: Vec::new(),
        level: 1.0,
        wave: 1,
        spawn_interval_ms: config.spawn_interval_ms,
        spawn_timer_ms: 0,
        elapsed_ms: 0,
        high_score,
        width,
        height,
    }
}

/// Fresh round on the same field; only the high score carries over.
pub fn new_round(state: &ShooterState, config: &ShooterConfig) -> ShooterState {
    ShooterState {
        status: GameStatus::Playing,
        ..init_state(config, state.high_score)
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn handle_command(
    state: &ShooterState,
    command: Command,
    config: &ShooterConfig,
) -> ShooterState {
    match (command, state.status) {
        (Command::Start, GameStatus::Menu | GameStatus::GameOver) => {
            info!("round started");
            new_round(state, config)
        }
        (Command::TogglePause, GameStatus::Playing) => ShooterState {
            status: GameStatus::Paused,
            ..state.clone()
        },
        (Command::TogglePause, GameStatus::Paused) => ShooterState {
            status: GameStatus::Playing,
            ..state.clone()
        },
        (Command::FireBeam, GameStatus::Playing) => fire_beam(state),
        _ => state.clone(),
    }
}

/// Launch a beam if its cooldown has expired.
pub fn fire_beam(state: &ShooterState) -> ShooterState {
    if state.player.beam_cooldown_ms > 0 {
        return state.clone();
    }
    let mut beams = state.beams.clone();
    beams.push(Beam::new(state.player.x, state.player.y));
    ShooterState {
        player: Player {
            beam_cooldown_ms: ShooterConfig::BEAM_COOLDOWN_MS,
            ..state.player.clone()
        },
        beams,
        ..state.clone()
    }
}

/// Fire toward `aim` (straight up when `None`) if the fire cooldown allows.
pub fn player_shoot(state: &ShooterState, aim: Option<(f64, f64)>) -> ShooterState {
    let p = &state.player;
    if !p.can_fire(state.elapsed_ms) {
        return state.clone();
    }
    let (tx, ty) = aim.unwrap_or((p.x, 0.0));
    let (nx, ny) = direction(p.x, p.y, tx, ty);
    let speed = if p.rapid_ms > 0 {
        ShooterConfig::BULLET_SPEED * ShooterConfig::RAPID_BULLET_FACTOR
    } else {
        ShooterConfig::BULLET_SPEED
    };

    let mut bullets = state.bullets.clone();
    bullets.push(Bullet::new(p.x, p.y, nx * speed, ny * speed, BulletOwner::Player));
    ShooterState {
        player: Player {
            last_shot_ms: Some(state.elapsed_ms),
            ..p.clone()
        },
        bullets,
        ..state.clone()
    }
}

pub fn apply_powerup(player: &Player, kind: PowerUpKind) -> Player {
    let mut p = player.clone();
    match kind {
        PowerUpKind::Health => {
            p.health = (p.health + ShooterConfig::HEALTH_PACK).clamp(0.0, p.max_health);
        }
        PowerUpKind::Rapid => p.rapid_ms += ShooterConfig::POWERUP_DURATION_MS,
        PowerUpKind::Shield => p.shield_ms += ShooterConfig::POWERUP_DURATION_MS,
        PowerUpKind::Score => p.score += ShooterConfig::SCORE_BONUS,
    }
    p
}

/// True when `next` is the tick on which the round ended.
pub fn just_ended(prev: &ShooterState, next: &ShooterState) -> bool {
    prev.status == GameStatus::Playing && next.status == GameStatus::GameOver
}

// ── Per-tick update (nearly pure, RNG is injected) ─────────────────────────

/// Advance the simulation by one tick of `dt_ms`. Does nothing unless a
/// round is in progress.
pub fn tick(
    state: &ShooterState,
    controls: &Controls,
    dt_ms: u64,
    rng: &mut impl Rng,
) -> ShooterState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let (w, h) = (state.width, state.height);
    let elapsed_ms = state.elapsed_ms + dt_ms;

    // ── 1. Input → velocity, held fire ───────────────────────────────────────
    let mut s = ShooterState { elapsed_ms, ..state.clone() };
    let (dx, dy) = controls.axis();
    s.player.steer(dx, dy);
    if controls.fire {
        s = player_shoot(&s, controls.aim);
    }

    // ── 2. Advance every entity ──────────────────────────────────────────────
    s.player.update(dt_ms, w, h);
    for b in &mut s.bullets {
        b.update(w, h);
    }

    let target = (s.player.x, s.player.y);
    let mut enemy_shots = Vec::new();
    for e in &mut s.enemies {
        e.update(target, elapsed_ms, w, h);
        if !e.dead && rng.gen_bool(e.shoot_prob.clamp(0.0, 1.0)) {
            let (nx, ny) = direction(e.x, e.y, target.0, target.1);
            let speed = 6.0 + e.level * 0.1;
            enemy_shots.push(Bullet::new(e.x, e.y, nx * speed, ny * speed, BulletOwner::Enemy));
        }
    }
    s.bullets.extend(enemy_shots);

    for p in &mut s.powerups {
        p.update(h);
    }

    // ── 3. Beams sweep their column ──────────────────────────────────────────
    let mut gained = 0;
    for beam in &mut s.beams {
        for e in s.enemies.iter_mut().filter(|e| !e.dead) {
            if beam.covers(e.x, e.y) && e.hit(ShooterConfig::BEAM_DAMAGE) {
                gained += e.beam_bounty();
            }
        }
        beam.update();
    }

    // ── 4. Collision: player bullets ↔ enemies, enemy bullets ↔ player ──────
    let mut drops = Vec::new();
    for b in s.bullets.iter_mut().filter(|b| !b.dead) {
        match b.owner {
            BulletOwner::Player => {
                let struck = s
                    .enemies
                    .iter_mut()
                    .filter(|e| !e.dead)
                    .find(|e| distance(b.x, b.y, e.x, e.y) < e.radius + b.radius);
                if let Some(e) = struck {
                    b.dead = true;
                    if e.hit(ShooterConfig::PLAYER_BULLET_DAMAGE) {
                        gained += e.bounty();
                        if rng.gen_bool(ShooterConfig::POWERUP_DROP_CHANCE) {
                            drops.push(PowerUp::new(e.x, e.y, spawner::random_powerup_kind(rng)));
                        }
                    }
                }
            }
            BulletOwner::Enemy => {
                let p = &mut s.player;
                if distance(b.x, b.y, p.x, p.y) < b.radius + p.radius() {
                    p.take_damage(ShooterConfig::ENEMY_BULLET_DAMAGE);
                    b.dead = true;
                }
            }
        }
    }
    s.powerups.extend(drops);

    // ── 5. Collision: enemies ↔ player, pickups ↔ player ─────────────────────
    for e in s.enemies.iter_mut().filter(|e| !e.dead) {
        if distance(e.x, e.y, s.player.x, s.player.y) < e.radius + s.player.radius() {
            s.player.take_damage(ShooterConfig::ENEMY_CONTACT_DAMAGE);
            e.dead = true;
        }
    }
    for pu in s.powerups.iter_mut().filter(|p| !p.dead) {
        if distance(pu.x, pu.y, s.player.x, s.player.y) < pu.radius + s.player.radius() {
            s.player = apply_powerup(&s.player, pu.kind);
            pu.dead = true;
        }
    }
    s.player.score += gained;

    // ── 6. Drop everything that died this tick ───────────────────────────────
    s.bullets.retain(|b| !b.dead);
    s.enemies.retain(|e| !e.dead);
    s.powerups.retain(|p| !p.dead);
    s.beams.retain(|b| !b.dead);

    // ── 7. Difficulty ramp ───────────────────────────────────────────────────
    if s.player.score > s.wave * ShooterConfig::WAVE_SCORE_STEP {
        s.wave += 1;
        s.spawn_interval_ms = s
            .spawn_interval_ms
            .saturating_sub(ShooterConfig::SPAWN_INTERVAL_STEP_MS)
            .max(ShooterConfig::MIN_SPAWN_INTERVAL_MS);
        debug!("wave {} (spawn every {} ms)", s.wave, s.spawn_interval_ms);
    }

    // ── 8. Game over, or keep the spawner running ────────────────────────────
    if s.player.dead || s.player.health <= 0.0 {
        s.player.dead = true;
        s.status = GameStatus::GameOver;
        s.high_score = s.high_score.max(s.player.score);
        info!("game over: score {} at wave {}", s.player.score, s.wave);
        return s;
    }
    spawner::advance(&s, dt_ms, rng)
}
