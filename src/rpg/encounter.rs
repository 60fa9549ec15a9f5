//! Encounter flow: starting a run, rolling enemies, world events,
//! experience and the victory payout.
//!
//! The `pub fn`s are pure (state in, new state out). The `pub(crate)`
//! helpers mutate a working copy and are shared with the turn resolver.

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::RpgConfig;
use crate::rpg::catalog::{Catalog, ClassKind, EnemyKind};
use crate::rpg::element::{self, Element};
use crate::rpg::entities::{Enemy, GameState, Item, Player, RpgState};

/// Build a fresh run for `class` and roll the first encounter.
///
/// Returns `None` when the catalog has no entry for `class`.
pub fn start_game(
    class: ClassKind,
    catalog: &Catalog,
    config: &RpgConfig,
    rng: &mut impl Rng,
) -> Option<RpgState> {
    let stats = catalog.class(class)?;
    let first_skill = catalog.skills(stats.element).first().copied();
    let player = Player::from_class(stats, first_skill, config.starting_gold);

    let mut state = RpgState {
        player,
        enemy: Enemy::placeholder(),
        game: GameState::default(),
    };
    state.log("Welcome to the elemental battle arena!");
    state.log(format!("You chose the {} class!", class));
    state.log(format!("Element: {}", stats.element));
    state.log(format!("Special Ability: {}", stats.special_ability));
    state.log("A wild enemy appears!");

    roll_encounter(&mut state, catalog, rng);
    Some(state)
}

/// Advance to the next day and generate its enemy.
pub fn spawn_enemy(state: &RpgState, catalog: &Catalog, rng: &mut impl Rng) -> RpgState {
    let mut next = state.clone();
    roll_encounter(&mut next, catalog, rng);
    next
}

pub fn trigger_elemental_event(state: &RpgState, rng: &mut impl Rng) -> RpgState {
    let mut next = state.clone();
    world_event(&mut next, rng);
    next
}

pub fn gain_xp(state: &RpgState, amount: u32, catalog: &Catalog, rng: &mut impl Rng) -> RpgState {
    let mut next = state.clone();
    award_xp(&mut next, amount, catalog, rng);
    next
}

pub(crate) fn roll_encounter(state: &mut RpgState, catalog: &Catalog, rng: &mut impl Rng) {
    state.game.day += 1;
    let day = state.game.day;

    if day % RpgConfig::EVENT_EVERY_DAYS == 0 {
        world_event(state, rng);
    }

    let boss_day = day % RpgConfig::BOSS_EVERY_DAYS == 0 && !state.game.boss_defeated;
    let template = if boss_day {
        catalog.enemy(EnemyKind::Dragon)
    } else {
        catalog.enemies.choose(rng)
    };
    let Some(template) = template else {
        return;
    };

    let level = (state.player.level + rng.gen_range(0..=2)).saturating_sub(1).max(1);
    let element = template
        .element
        .or_else(|| Element::ALL.choose(rng).copied());
    let max_hp = rng.gen_range(template.hp.0..=template.hp.1) + level * 5;

    state.enemy = Enemy {
        name: template.kind.name().to_string(),
        kind: template.kind,
        hp: max_hp,
        max_hp,
        attack: rng.gen_range(template.attack.0..=template.attack.1) + level * 2,
        defense: rng.gen_range(template.defense.0..=template.defense.1) + level,
        level,
        element,
        gold: template.gold + level * 2,
    };

    info!("day {}: {} (level {}) spawned", day, state.enemy.name, level);
    state.log(format!(
        "Day {}: A {} (Lvl {}) approaches!",
        day, state.enemy.name, state.enemy.level
    ));
    if let Some(e) = element {
        state.log(format!("Element: {}", e));
        let advantage = element::advantage(Some(state.player.element), Some(e));
        if advantage > element::NEUTRAL {
            state.log(format!("Your element is effective against {}!", e));
        } else if advantage < element::NEUTRAL {
            state.log(format!("Your element is weak against {}!", e));
        }
    }
}

pub(crate) fn world_event(state: &mut RpgState, rng: &mut impl Rng) {
    let Some(event) = Element::ALL.choose(rng).copied() else {
        return;
    };
    info!("elemental event: {}", event);
    state.log(format!("ELEMENTAL EVENT: {}", event.event_message()));

    if state.player.element == event {
        state.player.elemental_charge = RpgConfig::MAX_CHARGE;
        state.player.attack += 5;
        state.log(format!(
            "Your {} powers are enhanced! +5 Attack, Full Charge!",
            event
        ));
        let record = format!("Day {}: {} Event", state.game.day, event);
        state.game.elemental_events.push(record);
    }
}

pub(crate) fn award_xp(state: &mut RpgState, amount: u32, catalog: &Catalog, rng: &mut impl Rng) {
    state.player.xp += amount;
    state.log(format!("You gained {} XP!", amount));
    if state.player.xp >= state.player.xp_to_next {
        level_up(state, catalog, rng);
    }
}

fn level_up(state: &mut RpgState, catalog: &Catalog, rng: &mut impl Rng) {
    let hp_increase = rng.gen_range(10..=20);
    let p = &mut state.player;
    p.level += 1;
    p.xp = 0;
    p.xp_to_next = (p.xp_to_next as f64 * 1.5).floor() as u32;
    p.max_hp += hp_increase;
    p.hp = p.max_hp;
    p.base_attack += 2;
    p.base_defense += 1;
    p.attack = p.base_attack;
    p.defense = p.base_defense;
    p.inventory.add(Item::HealingPotion, 1);

    let mut learned = None;
    if p.level % 3 == 0 {
        let available: Vec<&str> = catalog
            .skills(p.element)
            .iter()
            .copied()
            .filter(|s| !p.skills.iter().any(|known| known == s))
            .collect();
        if let Some(skill) = available.choose(rng) {
            p.skills.push(skill.to_string());
            learned = Some(*skill);
        }
    }

    let (level, attack, defense) = (p.level, p.attack, p.defense);
    info!("player reached level {}", level);
    if let Some(skill) = learned {
        state.log(format!("You learned a new skill: {}!", skill));
    }
    state.log(format!("Level Up! You are now Level {}!", level));
    state.log(format!("Max HP increased by {}!", hp_increase));
    state.log(format!("Attack increased to {}!", attack));
    state.log(format!("Defense increased to {}!", defense));
    state.log("You received a Healing Potion!");
}

/// Pay out the defeated enemy and move on to the next encounter.
pub(crate) fn resolve_victory(
    state: &mut RpgState,
    catalog: &Catalog,
    rng: &mut impl Rng,
    elemental_finish: bool,
) {
    let kind = state.enemy.kind;
    let gold = state.enemy.gold;
    let xp = catalog.enemy(kind).map(|t| t.xp).unwrap_or(0) * state.enemy.level;

    state.player.gold += gold;
    state.log(format!("You defeated the {}!", state.enemy.name));
    state.log(format!("You found {} gold!", gold));
    award_xp(state, xp, catalog, rng);

    if kind == EnemyKind::Dragon {
        state.player.gold += RpgConfig::DRAGON_BOUNTY;
        state.game.boss_defeated = true;
        state.log("QUEST COMPLETE: Dragon Slayer! You've defeated the mighty dragon!");
        state.log(format!("You received {} gold as reward!", RpgConfig::DRAGON_BOUNTY));
    }

    if rng.gen_bool(RpgConfig::ITEM_FIND_CHANCE) {
        if let Some(found) = catalog.loot.choose(rng).copied() {
            state.player.inventory.add(found, 1);
            state.log(format!("You found a {}!", found));
        }
    }

    if elemental_finish {
        state.player.add_mastery(5);
        state.log(format!("+5 {} Mastery!", state.player.element));
    }

    roll_encounter(state, catalog, rng);
}
