use std::path::PathBuf;

use crate::rpg::entities::Item;

/// A player action that could not be carried out.
///
/// The `Display` text doubles as the battle-log line shown to the player.
/// Whenever an action returns one of these, the game state is unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("There is nothing to fight right now.")]
    NotInBattle,

    #[error("{ability} is on cooldown for {turns} more turns!")]
    SpecialOnCooldown { ability: &'static str, turns: u32 },

    #[error("Not enough elemental charge! Need {needed} charge, you have {have}.")]
    NotEnoughCharge { needed: u8, have: u8 },

    #[error("You have no {0} left!")]
    NoItem(Item),

    #[error("{0} cannot be used from the inventory.")]
    NotUsable(Item),

    #[error("You can only use Phoenix Down when defeated!")]
    PhoenixDownWhileAlive,

    #[error("You don't have enough gold to buy {item} ({price} gold, you have {gold}).")]
    NotEnoughGold { item: Item, price: u32, gold: u32 },

    #[error("The shop does not sell {0}.")]
    NotForSale(Item),

    #[error("You already have {0} equipped.")]
    AlreadyEquipped(Item),
}

/// Failure while reading or writing the RPG save file.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("No saved game found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Save data error: {0}")]
    Json(#[from] serde_json::Error),
}
