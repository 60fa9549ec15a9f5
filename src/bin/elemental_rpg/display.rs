/// Rendering for the RPG: a status header, the tail of the battle log and
/// the key menu for whichever screen is active.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use elemental_arcade::rpg::element::{self, Element};
use elemental_arcade::rpg::Item;

use crate::{App, Screen};

fn element_color(e: Option<Element>) -> Color {
    match e {
        Some(Element::Solar) => Color::DarkYellow,
        Some(Element::Taufan) => Color::Cyan,
        Some(Element::Gempa) => Color::DarkRed,
        Some(Element::Halilintar) => Color::Yellow,
        None => Color::White,
    }
}

/// Items listed on the inventory screen, in display order.
pub fn inventory_items(app: &App) -> Vec<Item> {
    app.state
        .as_ref()
        .map(|s| s.player.inventory.iter().map(|(item, _)| item).collect())
        .unwrap_or_default()
}

struct Painter<'a, W: Write> {
    out: &'a mut W,
    row: u16,
}

impl<W: Write> Painter<'_, W> {
    fn line(&mut self, text: &str, color: Color) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, self.row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        self.row += 1;
        Ok(())
    }

    fn gap(&mut self) {
        self.row += 1;
    }
}

pub fn render<W: Write>(out: &mut W, app: &App) -> std::io::Result<()> {
    let (_, rows) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut p = Painter { out, row: 0 };

    match (&app.state, app.screen) {
        (None, _) | (_, Screen::ClassSelect) => draw_class_select(&mut p, app)?,
        (Some(state), screen) => {
            let pl = &state.player;
            let en = &state.enemy;
            p.line(
                &format!(
                    "Day {}  |  Gold {}  |  Location {}",
                    state.game.day, pl.gold, pl.location
                ),
                Color::Yellow,
            )?;
            p.line(
                &format!(
                    "{} ({}) Lvl {}  HP {}/{}  XP {}/{}  ATK {} DEF {} SPD {}",
                    pl.name,
                    pl.class,
                    pl.level,
                    pl.hp,
                    pl.max_hp,
                    pl.xp,
                    pl.xp_to_next,
                    pl.attack,
                    pl.defense,
                    pl.speed
                ),
                Color::Green,
            )?;
            p.line(
                &format!(
                    "Element {}  Charge {}/100  Special cooldown {}",
                    pl.element, pl.elemental_charge, pl.special_cooldown
                ),
                element_color(Some(pl.element)),
            )?;
            let en_element = en.element.map(|e| e.to_string()).unwrap_or_else(|| "-".into());
            p.line(
                &format!(
                    "{} (Lvl {})  HP {}/{}  Element {}",
                    en.name, en.level, en.hp, en.max_hp, en_element
                ),
                element_color(en.element),
            )?;
            p.gap();

            match screen {
                Screen::Inventory => draw_inventory(&mut p, app)?,
                Screen::Shop => draw_shop(&mut p, app)?,
                Screen::Skills => draw_skills(&mut p, app)?,
                _ => {
                    let budget = rows.saturating_sub(p.row + 6) as usize;
                    let log = &state.game.battle_log;
                    for entry in log.iter().skip(log.len().saturating_sub(budget)) {
                        p.line(entry, Color::White)?;
                    }
                    p.gap();
                    if state.game.game_active {
                        p.line(
                            "[1] Attack  [2] Special  [3] Elemental  [4] Heal  [5] Flee",
                            Color::Cyan,
                        )?;
                        p.line(
                            "[I] Inventory  [B] Shop  [K] Skills  [S] Save  [L] Load  [Q] Quit",
                            Color::DarkGrey,
                        )?;
                    } else {
                        let best = pl.best_element();
                        p.line(
                            &format!(
                                "GAME OVER  Level {}  Gold {}  Best element {}",
                                pl.level, pl.gold, best
                            ),
                            Color::Red,
                        )?;
                        p.line("[I] Inventory  [L] Load  [R] Restart  [Q] Quit", Color::DarkGrey)?;
                    }
                }
            }
        }
    }

    if let Some(notice) = &app.notice {
        p.gap();
        p.line(notice, Color::Red)?;
    }

    p.out.queue(style::ResetColor)?;
    p.out.flush()?;
    Ok(())
}

fn draw_class_select<W: Write>(p: &mut Painter<'_, W>, app: &App) -> std::io::Result<()> {
    p.line("Choose your class", Color::Cyan)?;
    p.gap();
    for (i, c) in app.catalog.classes.iter().enumerate() {
        p.line(
            &format!(
                "[{}] {:<8} HP:{} ATK:{} DEF:{} SPD:{}  {} | strong vs {}, weak vs {}",
                i + 1,
                c.kind.to_string(),
                c.hp,
                c.attack,
                c.defense,
                c.speed,
                c.element,
                c.element.strength(),
                c.element.weakness()
            ),
            element_color(Some(c.element)),
        )?;
        p.line(
            &format!("      {} Special: {}", c.description, c.special_ability),
            Color::DarkGrey,
        )?;
    }
    p.gap();
    p.line("[Q] Quit", Color::DarkGrey)
}

fn draw_inventory<W: Write>(p: &mut Painter<'_, W>, app: &App) -> std::io::Result<()> {
    let Some(state) = &app.state else {
        return Ok(());
    };
    let pl = &state.player;
    p.line("Inventory", Color::Cyan)?;
    if pl.inventory.is_empty() {
        p.line("Your inventory is empty.", Color::DarkGrey)?;
    }
    for (i, (item, count)) in pl.inventory.iter().enumerate() {
        p.line(&format!("[{}] {} x{}", i + 1, item, count), Color::White)?;
    }
    p.gap();
    p.line("Equipment", Color::Cyan)?;
    let slot = |item: Option<Item>| item.map(|i| i.to_string()).unwrap_or_else(|| "Empty".into());
    p.line(&format!("Weapon: {}", slot(pl.equipment.weapon)), Color::White)?;
    p.line(&format!("Armor: {}", slot(pl.equipment.armor)), Color::White)?;
    p.line(&format!("Accessory: {}", slot(pl.equipment.accessory)), Color::White)?;
    p.gap();
    p.line("Elemental Mastery", Color::Cyan)?;
    for (e, mastery) in &pl.element_mastery {
        p.line(&format!("{}: {}", e, mastery), element_color(Some(*e)))?;
    }
    p.gap();
    p.line("[number] Use item  [Esc] Back", Color::DarkGrey)
}

fn draw_shop<W: Write>(p: &mut Painter<'_, W>, app: &App) -> std::io::Result<()> {
    use elemental_arcade::rpg::catalog::ItemKind;

    p.line("Shop", Color::Yellow)?;
    for (i, entry) in app.catalog.shop.iter().enumerate() {
        let bonus = match entry.kind {
            ItemKind::Weapon { attack_bonus } => format!(" (ATK+{})", attack_bonus),
            ItemKind::Armor { defense_bonus } => format!(" (DEF+{})", defense_bonus),
            ItemKind::Accessory { hp_bonus } => format!(" (HP+{})", hp_bonus),
            ItemKind::Consumable | ItemKind::Special => String::new(),
        };
        p.line(
            &format!("[{}] {} - {} gold{}", i + 1, entry.item, entry.price, bonus),
            Color::White,
        )?;
    }
    p.gap();
    p.line("[number] Buy  [Esc] Back", Color::DarkGrey)
}

fn draw_skills<W: Write>(p: &mut Painter<'_, W>, app: &App) -> std::io::Result<()> {
    let Some(state) = &app.state else {
        return Ok(());
    };
    let e = state.player.element;
    p.line(&format!("{} Skills", e), element_color(Some(e)))?;
    for skill in app.catalog.skills(e) {
        let learned = state.player.skills.iter().any(|s| s == skill);
        let (status, color) = if learned {
            ("Learned", Color::Green)
        } else {
            ("Not Learned", Color::DarkGrey)
        };
        p.line(&format!("{:<26} {}", skill, status), color)?;
    }
    let adv = element::advantage(Some(e), Some(e.strength()));
    p.gap();
    p.line(
        &format!("Elemental skills deal x{} against {}", adv, e.strength()),
        Color::White,
    )?;
    p.line("[Esc] Back", Color::DarkGrey)
}
