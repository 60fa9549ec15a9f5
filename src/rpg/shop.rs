use log::info;

use crate::error::ActionError;
use crate::rpg::catalog::{Catalog, ItemKind};
use crate::rpg::entities::{Item, RpgState};

/// Buy one `item`. Stackable goods go to the inventory; gear is equipped on
/// the spot and its bonus folded into the base stats.
pub fn buy(state: &RpgState, item: Item, catalog: &Catalog) -> Result<RpgState, ActionError> {
    let entry = catalog
        .shop_entry(item)
        .ok_or(ActionError::NotForSale(item))?;

    let player = &state.player;
    if player.gold < entry.price {
        return Err(ActionError::NotEnoughGold {
            item,
            price: entry.price,
            gold: player.gold,
        });
    }
    let equipped = &player.equipment;
    if [equipped.weapon, equipped.armor, equipped.accessory].contains(&Some(item)) {
        return Err(ActionError::AlreadyEquipped(item));
    }

    let mut next = state.clone();
    let p = &mut next.player;
    p.gold -= entry.price;

    if entry.kind.is_stackable() {
        p.inventory.add(item, 1);
    } else {
        match entry.kind {
            ItemKind::Weapon { attack_bonus } => {
                p.equipment.weapon = Some(item);
                p.base_attack += attack_bonus;
            }
            ItemKind::Armor { defense_bonus } => {
                p.equipment.armor = Some(item);
                p.base_defense += defense_bonus;
            }
            ItemKind::Accessory { hp_bonus } => {
                p.equipment.accessory = Some(item);
                p.max_hp += hp_bonus;
            }
            ItemKind::Consumable | ItemKind::Special => {}
        }
        p.attack = p.base_attack;
        p.defense = p.base_defense;
    }

    info!("bought {} for {} gold", item, entry.price);
    if entry.kind.is_stackable() {
        next.log(format!("You bought a {}!", item));
    } else {
        next.log(format!("You bought and equipped {}!", item));
    }
    Ok(next)
}
