//! Player actions and the enemy's reply.
//!
//! Every action takes the current state by reference and returns either a
//! new state or an [`ActionError`] describing why nothing happened. Any
//! action that spends the player's turn hands the initiative to the enemy,
//! unless it ended the encounter.

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::RpgConfig;
use crate::error::ActionError;
use crate::rpg::catalog::Catalog;
use crate::rpg::combat::{calculate_damage, AttackKind};
use crate::rpg::encounter::{resolve_victory, roll_encounter};
use crate::rpg::entities::{Item, RpgState};

/// A player command, as fed in by a front-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Attack(AttackKind),
    Heal,
    UseItem(Item),
    Flee,
    Buy(Item),
}

/// Dispatch one [`Action`].
pub fn apply(
    state: &RpgState,
    action: Action,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<RpgState, ActionError> {
    match action {
        Action::Attack(kind) => attack(state, kind, catalog, rng),
        Action::Heal => heal(state, catalog, rng),
        Action::UseItem(item) => use_item(state, item, catalog, rng),
        Action::Flee => flee(state, catalog, rng),
        Action::Buy(item) => crate::rpg::shop::buy(state, item, catalog),
    }
}

fn ensure_in_battle(state: &RpgState) -> Result<(), ActionError> {
    if state.in_battle() {
        Ok(())
    } else {
        Err(ActionError::NotInBattle)
    }
}

/// Counts down the special-ability cooldown for a spent turn.
fn pass_turn(state: &mut RpgState) {
    state.player.special_cooldown = state.player.special_cooldown.saturating_sub(1);
}

pub fn attack(
    state: &RpgState,
    kind: AttackKind,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<RpgState, ActionError> {
    ensure_in_battle(state)?;
    let player = &state.player;

    if kind == AttackKind::Special && player.special_cooldown > 0 {
        return Err(ActionError::SpecialOnCooldown {
            ability: catalog.special_ability(player.class),
            turns: player.special_cooldown,
        });
    }
    if kind == AttackKind::Elemental && player.elemental_charge < RpgConfig::ELEMENTAL_COST {
        return Err(ActionError::NotEnoughCharge {
            needed: RpgConfig::ELEMENTAL_COST,
            have: player.elemental_charge,
        });
    }

    let mut next = state.clone();
    let hit = calculate_damage(&next.player, &next.enemy, kind, rng);
    next.enemy.hp = next.enemy.hp.saturating_sub(hit.damage);

    match kind {
        AttackKind::Basic => {
            pass_turn(&mut next);
            next.player.add_charge(RpgConfig::CHARGE_PER_ATTACK);
            next.log(format!(
                "You strike the {} for {} damage!{}",
                next.enemy.name,
                hit.damage,
                hit.crit_note()
            ));
        }
        AttackKind::Special => {
            next.player.add_charge(RpgConfig::CHARGE_PER_ATTACK);
            next.player.special_cooldown = RpgConfig::SPECIAL_COOLDOWN;
            let ability = catalog.special_ability(next.player.class);
            next.log(format!(
                "You use {} on the {} for {} damage!{}",
                ability,
                next.enemy.name,
                hit.damage,
                hit.crit_note()
            ));
        }
        AttackKind::Elemental => {
            pass_turn(&mut next);
            next.player.elemental_charge -= RpgConfig::ELEMENTAL_COST;
            next.player.add_mastery(1);
            let skill = next
                .player
                .skills
                .choose(rng)
                .cloned()
                .or_else(|| {
                    catalog
                        .skills(next.player.element)
                        .first()
                        .map(|s| s.to_string())
                })
                .unwrap_or_else(|| format!("{} Strike", next.player.element));
            next.log(format!(
                "You use {} for {} damage!{}{}",
                skill,
                hit.damage,
                hit.effect_note(),
                hit.crit_note()
            ));
        }
    }

    if next.player.buff_turns > 0 {
        next.player.buff_turns -= 1;
        if next.player.buff_turns == 0 {
            next.player.attack = next.player.base_attack;
            next.log("Your Strength Elixir effect wore off!");
        }
    }

    if next.enemy.is_alive() {
        enemy_strikes(&mut next, rng);
    } else {
        resolve_victory(&mut next, catalog, rng, kind == AttackKind::Elemental);
    }
    Ok(next)
}

pub fn use_elemental_skill(
    state: &RpgState,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<RpgState, ActionError> {
    attack(state, AttackKind::Elemental, catalog, rng)
}

pub fn heal(
    state: &RpgState,
    _catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<RpgState, ActionError> {
    ensure_in_battle(state)?;

    let mut next = state.clone();
    if !next.player.inventory.take(Item::HealingPotion) {
        return Err(ActionError::NoItem(Item::HealingPotion));
    }
    pass_turn(&mut next);

    let amount = rng.gen_range(15..=25);
    next.player.hp = (next.player.hp + amount).min(next.player.max_hp);
    next.log(format!(
        "You used a Healing Potion and recovered {} HP!",
        amount
    ));

    enemy_strikes(&mut next, rng);
    Ok(next)
}

pub fn use_item(
    state: &RpgState,
    item: Item,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<RpgState, ActionError> {
    if state.player.inventory.count(item) == 0 {
        return Err(ActionError::NoItem(item));
    }
    if item == Item::PhoenixDown {
        return revive(state);
    }
    if item == Item::HealingPotion {
        return heal(state, catalog, rng);
    }
    ensure_in_battle(state)?;

    let mut next = state.clone();
    match item {
        Item::StrengthElixir => {
            next.player.inventory.take(item);
            pass_turn(&mut next);
            next.player.attack = next.player.base_attack + RpgConfig::ELIXIR_BONUS;
            next.player.buff_turns = RpgConfig::BUFF_TURNS;
            next.log(format!(
                "You used a Strength Elixir! Attack boosted for {} turns.",
                RpgConfig::BUFF_TURNS
            ));
            enemy_strikes(&mut next, rng);
        }
        Item::Bomb => {
            next.player.inventory.take(item);
            pass_turn(&mut next);
            let damage = rng.gen_range(15..=25);
            next.enemy.hp = next.enemy.hp.saturating_sub(damage);
            next.log(format!(
                "You threw a Bomb! {} took {} damage!",
                next.enemy.name, damage
            ));
            if next.enemy.is_alive() {
                enemy_strikes(&mut next, rng);
            } else {
                resolve_victory(&mut next, catalog, rng, false);
            }
        }
        Item::ElementalCrystal => {
            next.player.inventory.take(item);
            next.player.elemental_charge = RpgConfig::MAX_CHARGE;
            next.log("Elemental Crystal used! Charge set to 100!");
        }
        other => return Err(ActionError::NotUsable(other)),
    }
    Ok(next)
}

/// Phoenix Down: brings a defeated hero back at half health.
fn revive(state: &RpgState) -> Result<RpgState, ActionError> {
    if state.player.is_alive() {
        return Err(ActionError::PhoenixDownWhileAlive);
    }
    let mut next = state.clone();
    next.player.inventory.take(Item::PhoenixDown);
    next.player.hp = next.player.max_hp / 2;
    next.game.game_active = true;
    info!("player revived with {} hp", next.player.hp);
    next.log("Phoenix Down used! You've been revived!");
    Ok(next)
}

pub fn flee(
    state: &RpgState,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<RpgState, ActionError> {
    ensure_in_battle(state)?;

    let mut next = state.clone();
    pass_turn(&mut next);
    if rng.gen_bool(RpgConfig::FLEE_CHANCE) {
        next.log("You successfully fled from battle!");
        roll_encounter(&mut next, catalog, rng);
    } else {
        next.log("You failed to flee!");
        enemy_strikes(&mut next, rng);
    }
    Ok(next)
}

/// The enemy's reply to a spent player turn.
pub fn enemy_turn(state: &RpgState, rng: &mut impl Rng) -> RpgState {
    let mut next = state.clone();
    enemy_strikes(&mut next, rng);
    next
}

fn enemy_strikes(state: &mut RpgState, rng: &mut impl Rng) {
    if !state.enemy.is_alive() || !state.game.game_active {
        return;
    }

    let elemental =
        rng.gen_bool(RpgConfig::ENEMY_ELEMENTAL_CHANCE) && state.enemy.element.is_some();
    let kind = if elemental {
        AttackKind::Elemental
    } else {
        AttackKind::Basic
    };
    let hit = calculate_damage(&state.enemy, &state.player, kind, rng);
    state.player.hp = state.player.hp.saturating_sub(hit.damage);

    if elemental {
        state.log(format!(
            "{} uses elemental attack for {} damage!{}{}",
            state.enemy.name,
            hit.damage,
            hit.effect_note(),
            hit.crit_note()
        ));
    } else {
        state.log(format!(
            "The {} hits you for {} damage!{}",
            state.enemy.name,
            hit.damage,
            hit.crit_note()
        ));
    }

    if !state.player.is_alive() {
        state.game.game_active = false;
        info!(
            "player defeated by {} on day {}",
            state.enemy.name, state.game.day
        );
        state.log("You were defeated... Game Over.");
    }
}
