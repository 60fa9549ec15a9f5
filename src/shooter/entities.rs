//! Shooter entity types: plain data plus their per-tick `update` step.
//!
//! Positions are in field units (the default field is 800 × 600), times in
//! milliseconds. Entities are never removed while iterating: anything that
//! should go away is flagged `dead` and dropped by the next filtering pass.

use crate::config::ShooterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Small and quick, shoots rarely.
    Scout,
    /// Slow and sturdy.
    Brute,
    /// Big, fast and trigger-happy.
    Tank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Restores `HEALTH_PACK` health.
    Health,
    /// Faster bullets for `POWERUP_DURATION_MS`.
    Rapid,
    /// Ignores all damage for `POWERUP_DURATION_MS`.
    Shield,
    /// Flat `SCORE_BONUS` points.
    Score,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Rapid,
        PowerUpKind::Shield,
        PowerUpKind::Score,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (ax - bx).hypot(ay - by)
}

/// Unit vector from `(fx, fy)` toward `(tx, ty)`; zero when they coincide.
pub fn direction(fx: f64, fy: f64, tx: f64, ty: f64) -> (f64, f64) {
    let dx = tx - fx;
    let dy = ty - fy;
    let dist = dx.hypot(dy);
    if dist == 0.0 {
        (0.0, 0.0)
    } else {
        (dx / dist, dy / dist)
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub health: f64,
    pub max_health: f64,
    /// Simulation time of the last shot, `None` before the first one.
    pub last_shot_ms: Option<u64>,
    pub shield_ms: u64,
    pub rapid_ms: u64,
    pub beam_cooldown_ms: u64,
    pub score: u32,
    pub dead: bool,
}

impl Player {
    pub fn new(x: f64, y: f64) -> Self {
        Player {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            health: ShooterConfig::PLAYER_MAX_HEALTH,
            max_health: ShooterConfig::PLAYER_MAX_HEALTH,
            last_shot_ms: None,
            shield_ms: 0,
            rapid_ms: 0,
            beam_cooldown_ms: 0,
            score: 0,
            dead: false,
        }
    }

    pub fn radius(&self) -> f64 {
        ShooterConfig::PLAYER_SIZE / 2.0
    }

    /// Direction inputs are -1, 0 or 1 per axis.
    pub fn steer(&mut self, dx: i8, dy: i8) {
        self.vx = dx as f64 * ShooterConfig::PLAYER_SPEED;
        self.vy = dy as f64 * ShooterConfig::PLAYER_SPEED;
    }

    pub fn can_fire(&self, now_ms: u64) -> bool {
        match self.last_shot_ms {
            Some(last) => now_ms.saturating_sub(last) >= ShooterConfig::FIRE_COOLDOWN_MS,
            None => true,
        }
    }

    /// Shield absorbs everything; otherwise health drops and the player
    /// dies at zero.
    pub fn take_damage(&mut self, amount: f64) {
        if self.shield_ms > 0 {
            return;
        }
        self.health -= amount;
        if self.health <= 0.0 {
            self.dead = true;
        }
    }

    pub fn update(&mut self, dt_ms: u64, width: f64, height: f64) {
        self.shield_ms = self.shield_ms.saturating_sub(dt_ms);
        self.rapid_ms = self.rapid_ms.saturating_sub(dt_ms);
        self.beam_cooldown_ms = self.beam_cooldown_ms.saturating_sub(dt_ms);

        let edge = ShooterConfig::PLAYER_EDGE;
        self.x = (self.x + self.vx).clamp(edge, width - edge);
        self.y = (self.y + self.vy).clamp(edge, height - edge);
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub owner: BulletOwner,
    pub dead: bool,
}

impl Bullet {
    /// Off-field margin after which a bullet is discarded.
    pub const MARGIN: f64 = 50.0;

    pub fn new(x: f64, y: f64, vx: f64, vy: f64, owner: BulletOwner) -> Self {
        let radius = match owner {
            BulletOwner::Player => 4.0,
            BulletOwner::Enemy => 6.0,
        };
        Bullet { x, y, vx, vy, radius, owner, dead: false }
    }

    pub fn update(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < -Self::MARGIN
            || self.x > width + Self::MARGIN
            || self.y < -Self::MARGIN
            || self.y > height + Self::MARGIN
        {
            self.dead = true;
        }
    }
}

/// Vertical energy beam fired upward from where the player stood.
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    pub x: f64,
    pub y: f64,
    pub ticks_left: u32,
    pub dead: bool,
}

impl Beam {
    pub fn new(x: f64, y: f64) -> Self {
        Beam { x, y, ticks_left: ShooterConfig::BEAM_TICKS, dead: false }
    }

    /// Whether a point lies inside the beam column above its origin.
    pub fn covers(&self, x: f64, y: f64) -> bool {
        (x - self.x).abs() < ShooterConfig::BEAM_WIDTH && y < self.y
    }

    pub fn update(&mut self) {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left == 0 {
            self.dead = true;
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub kind: EnemyKind,
    /// Difficulty level at spawn time; fractional because the spawner ramps
    /// it in half steps.
    pub level: f64,
    pub health: f64,
    pub max_health: f64,
    pub speed: f64,
    pub radius: f64,
    /// Chance per tick of firing at the player.
    pub shoot_prob: f64,
    pub dead: bool,
}

impl Enemy {
    pub fn new(kind: EnemyKind, x: f64, y: f64, level: f64) -> Self {
        let base = ShooterConfig::ENEMY_BASE_SPEED;
        let (health, speed, radius, shoot_prob) = match kind {
            EnemyKind::Scout => (10.0 + level * 3.0, base + level * 0.12, 18.0, 0.02),
            EnemyKind::Brute => (18.0 + level * 5.0, (base - 0.6) + level * 0.08, 26.0, 0.045),
            EnemyKind::Tank => (30.0 + level * 8.0, (base + 0.6) + level * 0.15, 36.0, 0.06),
        };
        Enemy {
            x,
            y,
            kind,
            level,
            health,
            max_health: health,
            speed,
            radius,
            shoot_prob,
            dead: false,
        }
    }

    /// Points awarded for destroying this enemy.
    pub fn bounty(&self) -> u32 {
        (10.0 * (1.0 + self.level / 2.0)).floor() as u32
    }

    /// Points for a beam kill, double the bullet bounty.
    pub fn beam_bounty(&self) -> u32 {
        (20.0 * (1.0 + self.level / 2.0)).floor() as u32
    }

    /// Home toward the target with a sinusoidal wobble driven by the
    /// simulation clock.
    pub fn update(&mut self, target: (f64, f64), elapsed_ms: u64, width: f64, height: f64) {
        let (nx, ny) = direction(self.x, self.y, target.0, target.1);
        let t = elapsed_ms as f64 / 1000.0;
        let wobble = (t * 3.0 + self.level).sin() * 0.4;
        self.x += (nx + wobble * 0.2) * self.speed;
        self.y += (ny + wobble * 0.2) * self.speed;

        if self.x < -100.0 || self.x > width + 100.0 || self.y > height + 120.0 {
            self.dead = true;
        }
    }

    pub fn hit(&mut self, damage: f64) -> bool {
        self.health -= damage;
        if self.health <= 0.0 {
            self.dead = true;
        }
        self.dead
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f64,
    pub y: f64,
    pub kind: PowerUpKind,
    pub radius: f64,
    pub dead: bool,
}

impl PowerUp {
    pub fn new(x: f64, y: f64, kind: PowerUpKind) -> Self {
        PowerUp { x, y, kind, radius: 12.0, dead: false }
    }

    pub fn update(&mut self, height: f64) {
        self.y += ShooterConfig::POWERUP_FALL_SPEED;
        if self.y > height + 40.0 {
            self.dead = true;
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Held inputs sampled once per tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    /// Aim point; `None` fires straight up.
    pub aim: Option<(f64, f64)>,
}

impl Controls {
    pub fn axis(&self) -> (i8, i8) {
        let dx = self.right as i8 - self.left as i8;
        let dy = self.down as i8 - self.up as i8;
        (dx, dy)
    }
}

/// One-shot commands outside the held-key set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Begin a round from the menu or the game-over screen.
    Start,
    TogglePause,
    FireBeam,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire shooter state. Cloneable so the update functions can return
/// a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct ShooterState {
    pub status: GameStatus,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub beams: Vec<Beam>,
    /// Spawner difficulty; grows by 0.5 per wave spawned.
    pub level: f64,
    /// Score tier; advances every `WAVE_SCORE_STEP` points.
    pub wave: u32,
    pub spawn_interval_ms: u64,
    /// Time accumulated toward the next wave.
    pub spawn_timer_ms: u64,
    /// Simulation clock for the current round.
    pub elapsed_ms: u64,
    pub high_score: u32,
    pub width: f64,
    pub height: f64,
}
