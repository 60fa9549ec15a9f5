//! Rendering layer: all terminal I/O for the shooter lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; field coordinates are scaled
//! onto whatever terminal size is available.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use elemental_arcade::shooter::entities::{
    Beam, Bullet, BulletOwner, Enemy, EnemyKind, GameStatus, PowerUp, PowerUpKind, ShooterState,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_HUD_HIGH: Color = Color::Yellow;
const C_PLAYER: Color = Color::Green;
const C_SHIELD: Color = Color::Cyan;
const C_SCOUT: Color = Color::Red;
const C_BRUTE: Color = Color::Magenta;
const C_TANK: Color = Color::Yellow;
const C_BULLET_PLAYER: Color = Color::Blue;
const C_BULLET_ENEMY: Color = Color::DarkYellow;
const C_BEAM: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Maps field coordinates onto the terminal grid inside the border.
struct Viewport {
    cols: u16,
    rows: u16,
    field_w: f64,
    field_h: f64,
}

impl Viewport {
    fn new(cols: u16, rows: u16, state: &ShooterState) -> Self {
        Viewport { cols, rows, field_w: state.width, field_h: state.height }
    }

    /// Terminal cell for a field point, or `None` when it is off-field.
    fn cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || x >= self.field_w || y >= self.field_h {
            return None;
        }
        let inner_w = self.cols.saturating_sub(2) as f64;
        let inner_h = self.rows.saturating_sub(4) as f64;
        let col = 1 + (x / self.field_w * inner_w) as u16;
        let row = 2 + (y / self.field_h * inner_h) as u16;
        Some((col, row))
    }

    /// Inverse of `cell`, used to turn a mouse position into an aim point.
    fn field_point(&self, col: u16, row: u16) -> (f64, f64) {
        let inner_w = self.cols.saturating_sub(2).max(1) as f64;
        let inner_h = self.rows.saturating_sub(4).max(1) as f64;
        let x = (col.saturating_sub(1) as f64 + 0.5) / inner_w * self.field_w;
        let y = (row.saturating_sub(2) as f64 + 0.5) / inner_h * self.field_h;
        (x, y)
    }
}

/// Convert a terminal cell into a field point for aiming.
pub fn aim_point(col: u16, row: u16, state: &ShooterState) -> std::io::Result<(f64, f64)> {
    let (cols, rows) = terminal::size()?;
    Ok(Viewport::new(cols, rows, state).field_point(col, row))
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &ShooterState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, state);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.status {
        GameStatus::Menu => draw_menu(out, state, cols, rows)?,
        _ => {
            draw_border(out, cols, rows)?;
            draw_hud(out, state, cols)?;

            for beam in &state.beams {
                draw_beam(out, &view, beam)?;
            }
            for p in &state.powerups {
                draw_powerup(out, &view, p)?;
            }
            for e in &state.enemies {
                draw_enemy(out, &view, e)?;
            }
            for b in &state.bullets {
                draw_bullet(out, &view, b)?;
            }
            draw_player(out, &view, state)?;
            draw_controls_hint(out, rows)?;

            match state.status {
                GameStatus::Paused => draw_centered(out, cols, rows / 2, "PAUSED", Color::White)?,
                GameStatus::GameOver => draw_game_over(out, state, cols, rows)?,
                _ => {}
            }
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Frame ─────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, state: &ShooterState, cols: u16) -> std::io::Result<()> {
    let p = &state.player;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Score:{:>6}  Health:{:>3}  Wave:{:>2}",
        p.score,
        p.health.max(0.0) as i64,
        state.wave
    )))?;

    let mut statuses = Vec::new();
    if p.rapid_ms > 0 {
        statuses.push(format!("RAPID({})", p.rapid_ms / 1000))
    }
    if p.shield_ms > 0 {
        statuses.push(format!("SHIELD({})", p.shield_ms / 1000))
    }
    if p.beam_cooldown_ms == 0 {
        statuses.push("BEAM READY".to_string());
    }
    let right = format!("{}  High:{:>6}", statuses.join(" | "), state.high_score);
    let rx = cols.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(right))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn put<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f64,
    y: f64,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, state: &ShooterState) -> std::io::Result<()> {
    let p = &state.player;
    let color = if p.shield_ms > 0 { C_SHIELD } else { C_PLAYER };
    put(out, view, p.x, p.y, "▲", color)
}

fn draw_enemy<W: Write>(out: &mut W, view: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let (glyph, color) = match enemy.kind {
        EnemyKind::Scout => ("o", C_SCOUT),
        EnemyKind::Brute => ("O", C_BRUTE),
        EnemyKind::Tank => ("@", C_TANK),
    };
    put(out, view, enemy.x, enemy.y, glyph, color)
}

fn draw_bullet<W: Write>(out: &mut W, view: &Viewport, bullet: &Bullet) -> std::io::Result<()> {
    match bullet.owner {
        BulletOwner::Player => put(out, view, bullet.x, bullet.y, "•", C_BULLET_PLAYER),
        BulletOwner::Enemy => put(out, view, bullet.x, bullet.y, "*", C_BULLET_ENEMY),
    }
}

/// Symbols:
///   +  Health   ⚡ Rapid   S  Shield   ★  Score
fn draw_powerup<W: Write>(out: &mut W, view: &Viewport, p: &PowerUp) -> std::io::Result<()> {
    let (glyph, color) = match p.kind {
        PowerUpKind::Health => ("+", Color::Red),
        PowerUpKind::Rapid => ("⚡", Color::Blue),
        PowerUpKind::Shield => ("S", Color::Cyan),
        PowerUpKind::Score => ("★", Color::Yellow),
    };
    put(out, view, p.x, p.y, glyph, color)
}

fn draw_beam<W: Write>(out: &mut W, view: &Viewport, beam: &Beam) -> std::io::Result<()> {
    let Some((col, bottom)) = view.cell(beam.x, beam.y) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_BEAM))?;
    for row in 2..bottom {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("┃"))?;
    }
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    cols: u16,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_menu<W: Write>(
    out: &mut W,
    state: &ShooterState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cy = rows / 2;
    draw_centered(out, cols, cy.saturating_sub(3), "TOP-DOWN SHOOTER", Color::Cyan)?;
    draw_centered(
        out,
        cols,
        cy.saturating_sub(1),
        "Arrows / WASD move · Space shoots · Mouse aims · E fires the beam",
        Color::White,
    )?;
    draw_centered(out, cols, cy + 1, "Press ENTER to start", Color::DarkGrey)?;
    let best = format!("High Score: {}", state.high_score);
    draw_centered(out, cols, cy + 3, &best, C_HUD_HIGH)?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("WASD : Move   SPACE : Shoot   E : Beam   ESC : Pause   Q : Quit"))?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &ShooterState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cy = rows / 2;
    draw_centered(out, cols, cy.saturating_sub(2), "GAME OVER", Color::Red)?;
    let score = format!("Score: {}", state.player.score);
    draw_centered(out, cols, cy, &score, Color::Yellow)?;
    let best = format!("High Score: {}", state.high_score);
    draw_centered(out, cols, cy + 1, &best, C_HUD_HIGH)?;
    draw_centered(out, cols, cy + 3, "ENTER - Play Again  Q - Quit", Color::White)?;
    Ok(())
}
