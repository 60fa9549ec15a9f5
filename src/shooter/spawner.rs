//! Timer-driven wave generator.

use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ShooterConfig;
use crate::shooter::entities::{Enemy, EnemyKind, PowerUp, PowerUpKind, ShooterState};

const KINDS: [EnemyKind; 3] = [EnemyKind::Scout, EnemyKind::Brute, EnemyKind::Tank];
const KIND_WEIGHTS: [u32; 3] = [60, 30, 10];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Top,
}

/// Number of enemies in the next wave for the given difficulty level.
pub fn wave_size(level: f64, rng: &mut impl Rng) -> u32 {
    let whole = level.floor().max(0.0) as u32;
    (4 + whole + rng.gen_range(0..=whole)).min(ShooterConfig::MAX_WAVE_SIZE)
}

pub fn random_powerup_kind(rng: &mut impl Rng) -> PowerUpKind {
    *PowerUpKind::ALL.choose(rng).unwrap_or(&PowerUpKind::Health)
}

/// Accumulate `dt_ms` on the spawn timer and release a wave once the
/// current interval has elapsed.
pub fn advance(state: &ShooterState, dt_ms: u64, rng: &mut impl Rng) -> ShooterState {
    let timer = state.spawn_timer_ms + dt_ms;
    if timer < state.spawn_interval_ms {
        return ShooterState { spawn_timer_ms: timer, ..state.clone() };
    }
    let spawned = spawn_wave(state, rng);
    ShooterState { spawn_timer_ms: 0, ..spawned }
}

/// Spawn one wave along the left, right or top edge, maybe drop a
/// power-up, and raise the difficulty level by half a step.
pub fn spawn_wave(state: &ShooterState, rng: &mut impl Rng) -> ShooterState {
    let (w, h) = (state.width, state.height);
    let count = wave_size(state.level, rng);
    let weights = WeightedIndex::new(KIND_WEIGHTS).ok();

    let mut enemies = state.enemies.clone();
    for _ in 0..count {
        let side = *[Side::Left, Side::Right, Side::Top]
            .choose(rng)
            .unwrap_or(&Side::Top);
        let (x, y) = match side {
            Side::Left => (rng.gen_range(-20.0..=60.0), rng.gen_range(20.0..=h / 2.0)),
            Side::Right => (rng.gen_range(w - 60.0..=w + 20.0), rng.gen_range(20.0..=h / 2.0)),
            Side::Top => (rng.gen_range(60.0..=w - 60.0), rng.gen_range(-80.0..=-20.0)),
        };
        let kind = weights
            .as_ref()
            .map(|dist| KINDS[dist.sample(rng)])
            .unwrap_or(EnemyKind::Scout);
        enemies.push(Enemy::new(kind, x, y, state.level));
    }

    let mut powerups = state.powerups.clone();
    if rng.gen_bool(ShooterConfig::POWERUP_WAVE_CHANCE) {
        let px = rng.gen_range(60.0..=w - 60.0);
        let py = rng.gen_range(-40.0..=20.0);
        powerups.push(PowerUp::new(px, py, random_powerup_kind(rng)));
    }

    debug!(
        "wave spawned: {} enemies at level {:.1}",
        count, state.level
    );

    ShooterState {
        enemies,
        powerups,
        level: state.level + 0.5,
        ..state.clone()
    }
}
