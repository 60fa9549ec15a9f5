//! Static game tables: classes, enemy types, shop stock and skills.
//!
//! A [`Catalog`] is built once at start-up and passed by reference into the
//! combat and spawning code.

use serde::{Deserialize, Serialize};

use crate::rpg::element::Element;
use crate::rpg::entities::Item;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Warrior,
    Mage,
    Archer,
    Rogue,
}

impl ClassKind {
    pub const ALL: [ClassKind; 4] = [
        ClassKind::Warrior,
        ClassKind::Mage,
        ClassKind::Archer,
        ClassKind::Rogue,
    ];
}

impl std::fmt::Display for ClassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ClassKind::Warrior => "Warrior",
            ClassKind::Mage => "Mage",
            ClassKind::Archer => "Archer",
            ClassKind::Rogue => "Rogue",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassStats {
    pub kind: ClassKind,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    /// Healing Potions in the starting pack.
    pub potions: u32,
    pub special_ability: &'static str,
    pub element: Element,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Bandit,
    Slime,
    Skeleton,
    Dragon,
    Elemental,
}

impl EnemyKind {
    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Orc => "Orc",
            EnemyKind::Bandit => "Bandit",
            EnemyKind::Slime => "Slime",
            EnemyKind::Skeleton => "Skeleton",
            EnemyKind::Dragon => "Dragon",
            EnemyKind::Elemental => "Elemental",
        }
    }
}

/// Inclusive stat range rolled when an enemy is generated.
pub type StatRange = (u32, u32);

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyTemplate {
    pub kind: EnemyKind,
    pub hp: StatRange,
    pub attack: StatRange,
    pub defense: StatRange,
    pub xp: u32,
    pub gold: u32,
    /// `None` means a random element is drawn per encounter.
    pub element: Option<Element>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemKind {
    Consumable,
    Special,
    Weapon { attack_bonus: u32 },
    Armor { defense_bonus: u32 },
    Accessory { hp_bonus: u32 },
}

impl ItemKind {
    /// Whether buying the item puts it into the inventory rather than an
    /// equipment slot.
    pub fn is_stackable(self) -> bool {
        matches!(self, ItemKind::Consumable | ItemKind::Special)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShopEntry {
    pub item: Item,
    pub price: u32,
    pub kind: ItemKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub classes: Vec<ClassStats>,
    pub enemies: Vec<EnemyTemplate>,
    pub shop: Vec<ShopEntry>,
    pub skills: Vec<(Element, [&'static str; 3])>,
    /// Consumables that can drop after a victory.
    pub loot: Vec<Item>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            classes: vec![
                ClassStats {
                    kind: ClassKind::Warrior,
                    hp: 120,
                    attack: 15,
                    defense: 8,
                    speed: 5,
                    potions: 3,
                    special_ability: "Power Strike",
                    element: Element::Halilintar,
                    description: "Tanky warrior with high HP and defense",
                },
                ClassStats {
                    kind: ClassKind::Mage,
                    hp: 80,
                    attack: 25,
                    defense: 3,
                    speed: 8,
                    potions: 4,
                    special_ability: "Fireball",
                    element: Element::Solar,
                    description: "Powerful spellcaster with high attack",
                },
                ClassStats {
                    kind: ClassKind::Archer,
                    hp: 100,
                    attack: 18,
                    defense: 5,
                    speed: 12,
                    potions: 3,
                    special_ability: "Multi-Shot",
                    element: Element::Gempa,
                    description: "Fast ranged attacker with high speed",
                },
                ClassStats {
                    kind: ClassKind::Rogue,
                    hp: 90,
                    attack: 20,
                    defense: 4,
                    speed: 15,
                    potions: 3,
                    special_ability: "Backstab",
                    element: Element::Taufan,
                    description: "Agile assassin with critical strikes",
                },
            ],
            enemies: vec![
                enemy(EnemyKind::Goblin, (20, 30), (4, 8), (2, 4), 15, 5, Some(Element::Gempa)),
                enemy(EnemyKind::Orc, (40, 60), (8, 12), (5, 8), 25, 10, Some(Element::Gempa)),
                enemy(EnemyKind::Bandit, (30, 45), (6, 10), (3, 6), 20, 8, Some(Element::Taufan)),
                enemy(EnemyKind::Slime, (25, 35), (3, 6), (1, 3), 10, 3, Some(Element::Solar)),
                enemy(EnemyKind::Skeleton, (35, 50), (7, 11), (4, 7), 22, 7, Some(Element::Halilintar)),
                enemy(EnemyKind::Dragon, (100, 150), (15, 25), (10, 15), 100, 50, Some(Element::Solar)),
                enemy(EnemyKind::Elemental, (50, 70), (10, 15), (6, 9), 35, 15, None),
            ],
            shop: vec![
                shop(Item::HealingPotion, 10, ItemKind::Consumable),
                shop(Item::StrengthElixir, 20, ItemKind::Consumable),
                shop(Item::Bomb, 15, ItemKind::Consumable),
                shop(Item::IronSword, 50, ItemKind::Weapon { attack_bonus: 5 }),
                shop(Item::SteelArmor, 60, ItemKind::Armor { defense_bonus: 5 }),
                shop(Item::MagicAmulet, 80, ItemKind::Accessory { hp_bonus: 20 }),
                shop(Item::ElementalCrystal, 100, ItemKind::Special),
                shop(Item::PhoenixDown, 150, ItemKind::Consumable),
            ],
            skills: vec![
                (
                    Element::Solar,
                    ["Tembakan Solar", "Pedang Solar", "Tembakan Solar Maksimal"],
                ),
                (
                    Element::Taufan,
                    ["Pelindung Taufan", "Puting Beliung", "Naga Taufan"],
                ),
                (Element::Gempa, ["Tanah Tinggi", "Golem Tanah", "Naga Tanah"]),
                (
                    Element::Halilintar,
                    ["Pedang Halilintar", "Tebasan Kilat", "Hujan Halilintar"],
                ),
            ],
            loot: vec![Item::HealingPotion, Item::StrengthElixir, Item::Bomb],
        }
    }

    pub fn class(&self, kind: ClassKind) -> Option<&ClassStats> {
        self.classes.iter().find(|c| c.kind == kind)
    }

    pub fn enemy(&self, kind: EnemyKind) -> Option<&EnemyTemplate> {
        self.enemies.iter().find(|e| e.kind == kind)
    }

    pub fn shop_entry(&self, item: Item) -> Option<&ShopEntry> {
        self.shop.iter().find(|s| s.item == item)
    }

    pub fn skills(&self, element: Element) -> &[&'static str] {
        self.skills
            .iter()
            .find(|(e, _)| *e == element)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    pub fn special_ability(&self, kind: ClassKind) -> &'static str {
        self.class(kind).map(|c| c.special_ability).unwrap_or("Special Attack")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn enemy(
    kind: EnemyKind,
    hp: StatRange,
    attack: StatRange,
    defense: StatRange,
    xp: u32,
    gold: u32,
    element: Option<Element>,
) -> EnemyTemplate {
    EnemyTemplate { kind, hp, attack, defense, xp, gold, element }
}

fn shop(item: Item, price: u32, kind: ItemKind) -> ShopEntry {
    ShopEntry { item, price, kind }
}
