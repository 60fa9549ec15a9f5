//! JSON save file: `{ "player": …, "game_state": …, "timestamp": … }`.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SaveError;
use crate::rpg::catalog::Catalog;
use crate::rpg::encounter::roll_encounter;
use crate::rpg::entities::{GameState, Player, RpgState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub player: Player,
    pub game_state: GameState,
    /// Serialised as an ISO-8601 / RFC 3339 string.
    pub timestamp: DateTime<Local>,
}

impl SaveFile {
    pub fn capture(state: &RpgState) -> Self {
        SaveFile {
            player: state.player.clone(),
            game_state: state.game.clone(),
            timestamp: Local::now(),
        }
    }
}

pub fn save_to_file(path: &Path, state: &RpgState) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(&SaveFile::capture(state))?;
    fs::write(path, json)?;
    info!("game saved to {}", path.display());
    Ok(())
}

pub fn read_save(path: &Path) -> Result<SaveFile, SaveError> {
    if !path.exists() {
        return Err(SaveError::NotFound(path.to_path_buf()));
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Replace the player and game records with the saved ones, then roll a
/// fresh encounter. On any error the caller keeps its current state.
pub fn load_into(
    path: &Path,
    state: &RpgState,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Result<RpgState, SaveError> {
    let save = read_save(path)?;
    let mut next = state.clone();
    next.player = save.player;
    next.player.normalize();
    next.game = save.game_state;
    info!(
        "loaded save from {} (written {})",
        path.display(),
        save.timestamp.to_rfc3339()
    );
    next.log("Game loaded successfully!");
    roll_encounter(&mut next, catalog, rng);
    Ok(next)
}

/// Save, recording the outcome in the battle log.
pub fn save_game(path: &Path, state: &RpgState) -> Result<RpgState, SaveError> {
    let mut next = state.clone();
    next.log("Game saved successfully!");
    save_to_file(path, &next)?;
    Ok(next)
}
