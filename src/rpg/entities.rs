//! RPG records: pure data plus small bookkeeping helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::RpgConfig;
use crate::rpg::catalog::{ClassKind, ClassStats, EnemyKind};
use crate::rpg::element::Element;

// ── Items ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Item {
    #[serde(rename = "Healing Potion")]
    HealingPotion,
    #[serde(rename = "Strength Elixir")]
    StrengthElixir,
    Bomb,
    #[serde(rename = "Iron Sword")]
    IronSword,
    #[serde(rename = "Steel Armor")]
    SteelArmor,
    #[serde(rename = "Magic Amulet")]
    MagicAmulet,
    #[serde(rename = "Elemental Crystal")]
    ElementalCrystal,
    #[serde(rename = "Phoenix Down")]
    PhoenixDown,
}

impl Item {
    pub fn name(self) -> &'static str {
        match self {
            Item::HealingPotion => "Healing Potion",
            Item::StrengthElixir => "Strength Elixir",
            Item::Bomb => "Bomb",
            Item::IronSword => "Iron Sword",
            Item::SteelArmor => "Steel Armor",
            Item::MagicAmulet => "Magic Amulet",
            Item::ElementalCrystal => "Elemental Crystal",
            Item::PhoenixDown => "Phoenix Down",
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Item stacks. Entries whose count reaches zero are removed, so every
/// stored count is at least one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Item, u32>", into = "BTreeMap<Item, u32>")]
pub struct Inventory(BTreeMap<Item, u32>);

impl From<BTreeMap<Item, u32>> for Inventory {
    fn from(mut stacks: BTreeMap<Item, u32>) -> Self {
        stacks.retain(|_, count| *count > 0);
        Inventory(stacks)
    }
}

impl From<Inventory> for BTreeMap<Item, u32> {
    fn from(inventory: Inventory) -> Self {
        inventory.0
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, item: Item) -> u32 {
        self.0.get(&item).copied().unwrap_or(0)
    }

    pub fn add(&mut self, item: Item, amount: u32) {
        if amount > 0 {
            *self.0.entry(item).or_insert(0) += amount;
        }
    }

    /// Removes one `item`. Returns `false` when there is none to take; a
    /// stray zero-count entry is dropped on the way.
    pub fn take(&mut self, item: Item) -> bool {
        match self.count(item) {
            0 => {
                self.0.remove(&item);
                false
            }
            1 => {
                self.0.remove(&item);
                true
            }
            n => {
                self.0.insert(item, n - 1);
                true
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.0.iter().map(|(item, count)| (*item, *count))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub class: ClassKind,
    pub element: Element,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub base_attack: u32,
    pub defense: u32,
    pub base_defense: u32,
    pub speed: u32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub gold: u32,
    pub inventory: Inventory,
    pub equipment: Equipment,
    /// Remaining attacks under a Strength Elixir.
    pub buff_turns: u32,
    pub special_cooldown: u32,
    /// Always within `0..=RpgConfig::MAX_CHARGE`.
    pub elemental_charge: u8,
    pub skills: Vec<String>,
    pub location: String,
    pub element_mastery: BTreeMap<Element, u32>,
}

impl Player {
    pub fn from_class(stats: &ClassStats, first_skill: Option<&str>, starting_gold: u32) -> Self {
        let mut inventory = Inventory::new();
        inventory.add(Item::HealingPotion, stats.potions);
        inventory.add(Item::StrengthElixir, 1);
        inventory.add(Item::Bomb, 1);

        Player {
            name: "Hero".to_string(),
            class: stats.kind,
            element: stats.element,
            hp: stats.hp,
            max_hp: stats.hp,
            attack: stats.attack,
            base_attack: stats.attack,
            defense: stats.defense,
            base_defense: stats.defense,
            speed: stats.speed,
            level: 1,
            xp: 0,
            xp_to_next: RpgConfig::FIRST_LEVEL_XP,
            gold: starting_gold,
            inventory,
            equipment: Equipment::default(),
            buff_turns: 0,
            special_cooldown: 0,
            elemental_charge: 0,
            skills: first_skill.map(|s| vec![s.to_string()]).unwrap_or_default(),
            location: "Forest".to_string(),
            element_mastery: Element::ALL.iter().map(|e| (*e, 0)).collect(),
        }
    }

    pub fn add_charge(&mut self, amount: u8) {
        self.elemental_charge = self
            .elemental_charge
            .saturating_add(amount)
            .min(RpgConfig::MAX_CHARGE);
    }

    pub fn add_mastery(&mut self, amount: u32) {
        *self.element_mastery.entry(self.element).or_insert(0) += amount;
    }

    /// Element with the highest mastery; ties go to the earlier element.
    pub fn best_element(&self) -> Element {
        Element::ALL
            .iter()
            .rev()
            .copied()
            .max_by_key(|e| self.element_mastery.get(e).copied().unwrap_or(0))
            .unwrap_or(self.element)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Pull hand-edited or stale records back inside the stat bounds.
    pub fn normalize(&mut self) {
        self.elemental_charge = self.elemental_charge.min(RpgConfig::MAX_CHARGE);
        self.hp = self.hp.min(self.max_hp);
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub kind: EnemyKind,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub level: u32,
    pub element: Option<Element>,
    pub gold: u32,
}

impl Enemy {
    /// Stand-in before the first encounter has been rolled.
    pub fn placeholder() -> Self {
        Enemy {
            name: EnemyKind::Goblin.name().to_string(),
            kind: EnemyKind::Goblin,
            hp: 0,
            max_hp: 0,
            attack: 0,
            defense: 0,
            level: 1,
            element: None,
            gold: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

// ── Whole-game record ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub battle_log: Vec<String>,
    pub game_active: bool,
    pub boss_defeated: bool,
    pub day: u32,
    pub elemental_events: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            battle_log: Vec::new(),
            game_active: true,
            boss_defeated: false,
            day: 1,
            elemental_events: Vec::new(),
        }
    }
}

/// Everything the battle simulator knows. Cloneable so the action
/// functions can hand back a new value and leave the input untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct RpgState {
    pub player: Player,
    pub enemy: Enemy,
    pub game: GameState,
}

impl RpgState {
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("battle: {}", message);
        self.game.battle_log.push(message);
    }

    /// Whether battle actions are currently accepted.
    pub fn in_battle(&self) -> bool {
        self.game.game_active && self.player.is_alive() && self.enemy.is_alive()
    }
}
