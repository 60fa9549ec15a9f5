//! Tunable parameters for both games.
//!
//! Compile-time constants sit on the config types as associated consts;
//! the runtime-tunable subset lives in the struct fields so tests and
//! front-ends can build variants without touching the simulation code.

use std::path::PathBuf;

/// Shooter playfield, speeds and timers. Distances are in field units,
/// times in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct ShooterConfig {
    pub width: f64,
    pub height: f64,
    /// Initial delay between enemy waves.
    pub spawn_interval_ms: u64,
    pub high_score_path: PathBuf,
}

impl ShooterConfig {
    pub const TICK_MS: u64 = 16;

    pub const PLAYER_SIZE: f64 = 28.0;
    pub const PLAYER_SPEED: f64 = 6.0;
    pub const PLAYER_MAX_HEALTH: f64 = 100.0;
    /// Player is kept this far away from every edge.
    pub const PLAYER_EDGE: f64 = 20.0;
    pub const FIRE_COOLDOWN_MS: u64 = 220;
    pub const BULLET_SPEED: f64 = 14.0;
    pub const RAPID_BULLET_FACTOR: f64 = 1.6;

    pub const ENEMY_BASE_SPEED: f64 = 2.0;
    pub const ENEMY_BULLET_DAMAGE: f64 = 10.0;
    pub const ENEMY_CONTACT_DAMAGE: f64 = 16.0;
    pub const PLAYER_BULLET_DAMAGE: f64 = 8.0;
    pub const MAX_WAVE_SIZE: u32 = 12;

    pub const WAVE_SCORE_STEP: u32 = 200;
    pub const SPAWN_INTERVAL_STEP_MS: u64 = 40;
    pub const MIN_SPAWN_INTERVAL_MS: u64 = 400;

    pub const POWERUP_WAVE_CHANCE: f64 = 0.12;
    pub const POWERUP_DROP_CHANCE: f64 = 0.18;
    pub const POWERUP_FALL_SPEED: f64 = 1.2;
    pub const POWERUP_DURATION_MS: u64 = 6_000;
    pub const HEALTH_PACK: f64 = 28.0;
    pub const SCORE_BONUS: u32 = 80;

    pub const BEAM_COOLDOWN_MS: u64 = 8_000;
    pub const BEAM_TICKS: u32 = 30;
    pub const BEAM_WIDTH: f64 = 40.0;
    pub const BEAM_DAMAGE: f64 = 50.0;

    pub const DEFAULT_WIDTH: f64 = 800.0;
    pub const DEFAULT_HEIGHT: f64 = 600.0;
    pub const DEFAULT_SPAWN_INTERVAL_MS: u64 = 1_200;
    /// Smallest field the spawner and the player clamp can work with.
    pub const MIN_WIDTH: f64 = 120.0;
    pub const MIN_HEIGHT: f64 = 40.0;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            spawn_interval_ms: Self::DEFAULT_SPAWN_INTERVAL_MS,
            high_score_path: default_high_score_path(),
        }
    }

    /// Field size actually used, with `width`/`height` raised to the minimum.
    pub fn field_size(&self) -> (f64, f64) {
        (self.width.max(Self::MIN_WIDTH), self.height.max(Self::MIN_HEIGHT))
    }
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_high_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".topdown_shooter_highscore")
}

/// RPG balance knobs and the save location.
#[derive(Clone, Debug, PartialEq)]
pub struct RpgConfig {
    pub save_path: PathBuf,
    pub starting_gold: u32,
}

impl RpgConfig {
    pub const MAX_CHARGE: u8 = 100;
    pub const ELEMENTAL_COST: u8 = 30;
    pub const CHARGE_PER_ATTACK: u8 = 10;
    pub const SPECIAL_COOLDOWN: u32 = 3;
    pub const BUFF_TURNS: u32 = 3;
    pub const ELIXIR_BONUS: u32 = 5;
    pub const FLEE_CHANCE: f64 = 0.7;
    pub const ENEMY_ELEMENTAL_CHANCE: f64 = 0.3;
    pub const ITEM_FIND_CHANCE: f64 = 0.3;
    pub const BOSS_EVERY_DAYS: u32 = 5;
    pub const EVENT_EVERY_DAYS: u32 = 7;
    pub const DRAGON_BOUNTY: u32 = 100;
    pub const FIRST_LEVEL_XP: u32 = 100;

    pub const DEFAULT_STARTING_GOLD: u32 = 50;

    pub fn new() -> Self {
        Self {
            save_path: PathBuf::from("rpg_save.json"),
            starting_gold: Self::DEFAULT_STARTING_GOLD,
        }
    }
}

impl Default for RpgConfig {
    fn default() -> Self {
        Self::new()
    }
}
