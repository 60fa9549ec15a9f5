use elemental_arcade::config::ShooterConfig;
use elemental_arcade::shooter::compute::*;
use elemental_arcade::shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn config() -> ShooterConfig {
    ShooterConfig::new()
}

/// A round in progress with an empty field.
fn make_state() -> ShooterState {
    new_round(&init_state(&config(), 0), &config())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Enemy that never fires, so collision outcomes don't depend on the RNG.
fn quiet_enemy(kind: EnemyKind, x: f64, y: f64) -> Enemy {
    Enemy { shoot_prob: 0.0, ..Enemy::new(kind, x, y, 1.0) }
}

fn idle() -> Controls {
    Controls::default()
}

// ── init_state / commands ─────────────────────────────────────────────────────

#[test]
fn init_state_starts_at_menu() {
    let s = init_state(&config(), 77);
    assert_eq!(s.status, GameStatus::Menu);
    assert_eq!(s.player.x, 400.0); // floor(width / 2)
    assert_eq!(s.player.y, 520.0); // height - 80
    assert_eq!(s.player.health, 100.0);
    assert_eq!(s.level, 1.0);
    assert_eq!(s.wave, 1);
    assert_eq!(s.spawn_interval_ms, 1_200);
    assert_eq!(s.high_score, 77);
    assert!(s.enemies.is_empty());
}

#[test]
fn tiny_field_is_raised_to_minimum() {
    let config = ShooterConfig { width: 50.0, height: 10.0, ..ShooterConfig::new() };
    let s = new_round(&init_state(&config, 0), &config);
    assert_eq!((s.width, s.height), (ShooterConfig::MIN_WIDTH, ShooterConfig::MIN_HEIGHT));

    let mut rng = seeded_rng();
    let mut s = s;
    for _ in 0..200 {
        s = tick(&s, &idle(), 16, &mut rng);
    }
    assert!(s.elapsed_ms > 0);
}

#[test]
fn start_from_menu_begins_round() {
    let s = handle_command(&init_state(&config(), 5), Command::Start, &config());
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.high_score, 5);
}

#[test]
fn start_while_playing_is_ignored() {
    let mut s = make_state();
    s.player.score = 40;
    let s2 = handle_command(&s, Command::Start, &config());
    assert_eq!(s2, s);
}

#[test]
fn start_after_game_over_resets_round_but_keeps_high_score() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    s.player.score = 300;
    s.high_score = 300;
    s.wave = 3;
    let s2 = handle_command(&s, Command::Start, &config());
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.player.score, 0);
    assert_eq!(s2.wave, 1);
    assert_eq!(s2.high_score, 300);
}

#[test]
fn toggle_pause_round_trips() {
    let s = make_state();
    let paused = handle_command(&s, Command::TogglePause, &config());
    assert_eq!(paused.status, GameStatus::Paused);
    let resumed = handle_command(&paused, Command::TogglePause, &config());
    assert_eq!(resumed.status, GameStatus::Playing);
}

#[test]
fn toggle_pause_in_menu_does_nothing() {
    let s = init_state(&config(), 0);
    let s2 = handle_command(&s, Command::TogglePause, &config());
    assert_eq!(s2.status, GameStatus::Menu);
}

#[test]
fn tick_while_paused_is_a_no_op() {
    let s = handle_command(&make_state(), Command::TogglePause, &config());
    let controls = Controls { right: true, fire: true, ..idle() };
    let s2 = tick(&s, &controls, 16, &mut seeded_rng());
    assert_eq!(s2, s);
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn held_right_moves_player_by_speed() {
    let s = make_state();
    let s2 = tick(&s, &Controls { right: true, ..idle() }, 16, &mut seeded_rng());
    assert_eq!(s2.player.x, 406.0);
    assert_eq!(s2.player.y, 520.0);
}

#[test]
fn player_is_clamped_to_edge() {
    let mut s = make_state();
    s.player.x = 22.0;
    let s2 = tick(&s, &Controls { left: true, ..idle() }, 16, &mut seeded_rng());
    assert_eq!(s2.player.x, 20.0);
}

#[test]
fn opposite_keys_cancel() {
    let s = make_state();
    let controls = Controls { left: true, right: true, ..idle() };
    let s2 = tick(&s, &controls, 16, &mut seeded_rng());
    assert_eq!(s2.player.x, 400.0);
}

// ── shooting ──────────────────────────────────────────────────────────────────

#[test]
fn fire_without_aim_shoots_straight_up() {
    let s = make_state();
    let s2 = tick(&s, &Controls { fire: true, ..idle() }, 16, &mut seeded_rng());
    assert_eq!(s2.bullets.len(), 1);
    let b = &s2.bullets[0];
    assert_eq!(b.owner, BulletOwner::Player);
    assert_eq!(b.vx, 0.0);
    assert_eq!(b.vy, -14.0);
    assert_eq!(b.y, 520.0 - 14.0);
    assert_eq!(s2.player.last_shot_ms, Some(16));
}

#[test]
fn fire_respects_cooldown() {
    let mut s = make_state();
    let controls = Controls { fire: true, ..idle() };
    let mut rng = seeded_rng();
    // First shot at 16 ms, the next one once 220 ms have passed (tick 15).
    for _ in 0..14 {
        s = tick(&s, &controls, 16, &mut rng);
    }
    assert_eq!(s.bullets.len(), 1);
    s = tick(&s, &controls, 16, &mut rng);
    assert_eq!(s.bullets.len(), 2);
}

#[test]
fn rapid_fire_speeds_up_bullets() {
    let mut s = make_state();
    s.player.rapid_ms = 1_000;
    let s2 = player_shoot(&s, None);
    assert!((s2.bullets[0].vy + 14.0 * 1.6).abs() < 1e-9);
}

#[test]
fn aimed_shot_heads_for_aim_point() {
    let s = make_state();
    let s2 = player_shoot(&s, Some((500.0, 520.0)));
    let b = &s2.bullets[0];
    assert_eq!(b.vx, 14.0);
    assert_eq!(b.vy, 0.0);
}

// ── collisions ────────────────────────────────────────────────────────────────

#[test]
fn bullet_beyond_margin_is_dropped_without_colliding() {
    let mut s = make_state();
    s.bullets.push(Bullet::new(0.0, -45.0, 0.0, -10.0, BulletOwner::Player));
    s.enemies.push(quiet_enemy(EnemyKind::Scout, 0.0, -55.0));
    let health = s.enemies[0].health;

    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.bullets.is_empty());
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.enemies[0].health, health);
    assert_eq!(s2.player.score, 0);
}

#[test]
fn enemy_beyond_bound_is_dropped_without_colliding() {
    let mut s = make_state();
    // Wide enough that the bullet would overlap it if it were still live.
    s.enemies.push(Enemy { radius: 80.0, ..quiet_enemy(EnemyKind::Tank, -110.0, 300.0) });
    s.bullets.push(Bullet::new(-40.0, 300.0, 0.0, 0.0, BulletOwner::Player));

    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.enemies.is_empty());
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].x, -40.0);
    assert_eq!(s2.player.score, 0);
    assert_eq!(s2.player.health, 100.0);
}

#[test]
fn player_bullet_kills_enemy_and_scores_bounty() {
    let mut s = make_state();
    let mut enemy = quiet_enemy(EnemyKind::Scout, 400.0, 300.0);
    enemy.health = 8.0;
    s.enemies.push(enemy);
    s.bullets.push(Bullet::new(400.0, 314.0, 0.0, -14.0, BulletOwner::Player));

    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.enemies.is_empty());
    assert!(s2.bullets.iter().all(|b| b.owner != BulletOwner::Player));
    assert_eq!(s2.player.score, 15); // floor(10 * (1 + 1/2))
}

#[test]
fn one_bullet_damages_one_enemy() {
    let mut s = make_state();
    for _ in 0..2 {
        let mut enemy = quiet_enemy(EnemyKind::Scout, 400.0, 300.0);
        enemy.health = 8.0;
        s.enemies.push(enemy);
    }
    s.bullets.push(Bullet::new(400.0, 314.0, 0.0, -14.0, BulletOwner::Player));

    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.enemies[0].health, 8.0);
}

#[test]
fn enemy_contact_costs_health_and_removes_enemy() {
    let mut s = make_state();
    s.enemies.push(quiet_enemy(EnemyKind::Brute, 400.0, 500.0));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.enemies.is_empty());
    assert_eq!(s2.player.health, 84.0);
}

#[test]
fn shield_blocks_contact_damage() {
    let mut s = make_state();
    s.player.shield_ms = 1_000;
    s.enemies.push(quiet_enemy(EnemyKind::Brute, 400.0, 500.0));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.enemies.is_empty());
    assert_eq!(s2.player.health, 100.0);
    assert_eq!(s2.player.shield_ms, 984);
}

#[test]
fn enemy_bullet_hits_player() {
    let mut s = make_state();
    s.bullets.push(Bullet::new(400.0, 500.0, 0.0, 6.0, BulletOwner::Enemy));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.bullets.is_empty());
    assert_eq!(s2.player.health, 90.0);
}

#[test]
fn pickup_applies_power_up() {
    let mut s = make_state();
    s.powerups.push(PowerUp::new(400.0, 515.0, PowerUpKind::Score));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.powerups.is_empty());
    assert_eq!(s2.player.score, 80);
}

// ── power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn health_pack_is_capped_at_max() {
    let mut p = Player::new(0.0, 0.0);
    p.health = 90.0;
    assert_eq!(apply_powerup(&p, PowerUpKind::Health).health, 100.0);
    p.health = 50.0;
    assert_eq!(apply_powerup(&p, PowerUpKind::Health).health, 78.0);
}

#[test]
fn timed_power_ups_stack_duration() {
    let mut p = Player::new(0.0, 0.0);
    p.rapid_ms = 1_000;
    let p2 = apply_powerup(&p, PowerUpKind::Rapid);
    assert_eq!(p2.rapid_ms, 7_000);
    let p3 = apply_powerup(&p2, PowerUpKind::Shield);
    assert_eq!(p3.shield_ms, 6_000);
}

// ── beam ──────────────────────────────────────────────────────────────────────

#[test]
fn beam_needs_cooldown() {
    let s = make_state();
    let s2 = handle_command(&s, Command::FireBeam, &config());
    assert_eq!(s2.beams.len(), 1);
    assert_eq!(s2.player.beam_cooldown_ms, 8_000);
    let s3 = handle_command(&s2, Command::FireBeam, &config());
    assert_eq!(s3.beams.len(), 1);
}

#[test]
fn beam_destroys_enemies_above_player() {
    let mut s = make_state();
    s.enemies.push(quiet_enemy(EnemyKind::Tank, 410.0, 200.0));
    s.enemies.push(quiet_enemy(EnemyKind::Scout, 100.0, 200.0));
    let s = fire_beam(&s);
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.enemies[0].kind, EnemyKind::Scout);
    assert_eq!(s2.player.score, 30); // floor(20 * (1 + 1/2))
}

#[test]
fn beam_expires_after_its_ticks() {
    let mut s = fire_beam(&make_state());
    let mut rng = seeded_rng();
    for _ in 0..29 {
        s = tick(&s, &idle(), 16, &mut rng);
    }
    assert_eq!(s.beams.len(), 1);
    s = tick(&s, &idle(), 16, &mut rng);
    assert!(s.beams.is_empty());
}

// ── wave ramp / game over ─────────────────────────────────────────────────────

#[test]
fn score_past_threshold_advances_wave() {
    let mut s = make_state();
    s.player.score = 201;
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.wave, 2);
    assert_eq!(s2.spawn_interval_ms, 1_160);
}

#[test]
fn score_at_threshold_does_not_advance_wave() {
    let mut s = make_state();
    s.player.score = 200;
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.wave, 1);
}

#[test]
fn spawn_interval_has_a_floor() {
    let mut s = make_state();
    s.spawn_interval_ms = 420;
    s.player.score = 10_000;
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.spawn_interval_ms, 400);
}

#[test]
fn lethal_hit_ends_round_once() {
    let mut s = make_state();
    s.player.health = 10.0;
    s.player.score = 120;
    s.high_score = 100;
    s.enemies.push(quiet_enemy(EnemyKind::Scout, 400.0, 500.0));

    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::GameOver);
    assert!(s2.player.dead);
    assert_eq!(s2.high_score, 120);
    assert!(just_ended(&s, &s2));

    let s3 = tick(&s2, &idle(), 16, &mut seeded_rng());
    assert_eq!(s3, s2);
    assert!(!just_ended(&s2, &s3));
}

#[test]
fn game_over_keeps_higher_stored_score() {
    let mut s = make_state();
    s.player.health = 5.0;
    s.player.score = 50;
    s.high_score = 900;
    s.bullets.push(Bullet::new(400.0, 500.0, 0.0, 6.0, BulletOwner::Enemy));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::GameOver);
    assert_eq!(s2.high_score, 900);
}

#[test]
fn tick_does_not_mutate_input() {
    let mut s = make_state();
    s.enemies.push(Enemy::new(EnemyKind::Scout, 100.0, 100.0, 1.0));
    let before = s.clone();
    let _ = tick(&s, &Controls { fire: true, ..idle() }, 16, &mut seeded_rng());
    assert_eq!(s, before);
}
