//! Damage resolution shared by the player and enemy turns.

use rand::Rng;

use crate::rpg::element::{self, Element};
use crate::rpg::entities::{Enemy, Player};

pub const SPECIAL_MULTIPLIER: f64 = 1.5;
pub const CRIT_MULTIPLIER: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackKind {
    Basic,
    /// Class ability: ×1.5 power, then a cooldown.
    Special,
    /// Costs elemental charge; the only kind the element table applies to.
    Elemental,
}

/// Anything that can deal or take a hit.
pub trait Combatant {
    fn attack_power(&self) -> u32;
    fn defense(&self) -> u32;
    /// Critical-hit chance in percent.
    fn speed(&self) -> u32;
    fn element(&self) -> Option<Element>;
}

impl Combatant for Player {
    fn attack_power(&self) -> u32 {
        self.attack
    }
    fn defense(&self) -> u32 {
        self.defense
    }
    fn speed(&self) -> u32 {
        self.speed
    }
    fn element(&self) -> Option<Element> {
        Some(self.element)
    }
}

impl Combatant for Enemy {
    fn attack_power(&self) -> u32 {
        self.attack
    }
    fn defense(&self) -> u32 {
        self.defense
    }
    // Enemies never crit.
    fn speed(&self) -> u32 {
        0
    }
    fn element(&self) -> Option<Element> {
        self.element
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub damage: u32,
    pub critical: bool,
    /// Element multiplier that was applied (1.0 for non-elemental attacks).
    pub multiplier: f64,
}

impl Hit {
    /// Suffix for the battle log describing elemental effectiveness.
    pub fn effect_note(&self) -> &'static str {
        if self.multiplier > element::NEUTRAL {
            " EFFECTIVE!"
        } else if self.multiplier < element::NEUTRAL {
            " INEFFECTIVE!"
        } else {
            ""
        }
    }

    pub fn crit_note(&self) -> &'static str {
        if self.critical {
            " CRITICAL!"
        } else {
            ""
        }
    }
}

/// Damage before the critical roll. Every stage floors its result:
/// special boost, then defense and element, then the floor of 1.
pub fn base_damage(attack: u32, defense: u32, kind: AttackKind, multiplier: f64) -> u32 {
    let power = match kind {
        AttackKind::Special => (attack as f64 * SPECIAL_MULTIPLIER).floor() as i64,
        _ => attack as i64,
    };
    let raw = (power - (defense / 2) as i64) as f64 * multiplier;
    (raw.floor() as i64).max(1) as u32
}

pub fn calculate_damage(
    attacker: &impl Combatant,
    defender: &impl Combatant,
    kind: AttackKind,
    rng: &mut impl Rng,
) -> Hit {
    let multiplier = match kind {
        AttackKind::Elemental => element::advantage(attacker.element(), defender.element()),
        _ => element::NEUTRAL,
    };
    let mut damage = base_damage(attacker.attack_power(), defender.defense(), kind, multiplier);

    let crit_chance = (attacker.speed() as f64 / 100.0).clamp(0.0, 1.0);
    let critical = rng.gen_bool(crit_chance);
    if critical {
        damage = (damage as f64 * CRIT_MULTIPLIER).floor() as u32;
    }

    Hit { damage, critical, multiplier }
}
