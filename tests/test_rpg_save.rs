use std::path::PathBuf;

use elemental_arcade::config::RpgConfig;
use elemental_arcade::error::{ActionError, SaveError};
use elemental_arcade::rpg::catalog::{Catalog, ClassKind};
use elemental_arcade::rpg::encounter::start_game;
use elemental_arcade::rpg::entities::{Item, RpgState};
use elemental_arcade::rpg::save::*;
use elemental_arcade::rpg::turn::heal;

use rand::rngs::mock::StepRng;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}.json", name, std::process::id()))
}

fn fresh() -> (RpgState, Catalog) {
    let catalog = Catalog::standard();
    let state = start_game(
        ClassKind::Archer,
        &catalog,
        &RpgConfig::new(),
        &mut StepRng::new(0, 0),
    )
    .unwrap();
    (state, catalog)
}

#[test]
fn save_writes_expected_top_level_keys() {
    let path = temp_path("rpg_save_keys");
    let (s, _) = fresh();
    let s2 = save_game(&path, &s).unwrap();
    assert_eq!(
        s2.game.battle_log.last().unwrap(),
        "Game saved successfully!"
    );

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(json.get("player").is_some());
    assert!(json.get("game_state").is_some());
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
    assert_eq!(json["player"]["inventory"]["Healing Potion"], 3);
    assert_eq!(json["player"]["class"], "Archer");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_replaces_player_and_game_records() {
    let path = temp_path("rpg_save_load");
    let (s, catalog) = fresh();
    let saved = save_game(&path, &s).unwrap();

    let mut changed = saved.clone();
    changed.player.gold = 999;
    changed.player.inventory.add(Item::PhoenixDown, 2);
    changed.game.day = 40;
    changed.game.boss_defeated = true;

    let loaded = load_into(&path, &changed, &catalog, &mut StepRng::new(0, 0)).unwrap();
    assert_eq!(loaded.player.gold, 50);
    assert_eq!(loaded.player.inventory.count(Item::PhoenixDown), 0);
    assert!(!loaded.game.boss_defeated);
    // A fresh encounter is rolled after loading.
    assert_eq!(loaded.game.day, saved.game.day + 1);
    assert!(loaded
        .game
        .battle_log
        .iter()
        .any(|l| l == "Game loaded successfully!"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn read_save_round_trips_records() {
    let path = temp_path("rpg_save_records");
    let (s, _) = fresh();
    save_to_file(&path, &s).unwrap();
    let file = read_save(&path).unwrap();
    assert_eq!(file.player, s.player);
    assert_eq!(file.game_state, s.game);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_save_is_not_found() {
    let path = temp_path("rpg_save_missing");
    let (s, catalog) = fresh();
    let err = load_into(&path, &s, &catalog, &mut StepRng::new(0, 0)).unwrap_err();
    assert!(matches!(err, SaveError::NotFound(p) if p == path));
}

#[test]
fn corrupt_save_is_a_json_error() {
    let path = temp_path("rpg_save_corrupt");
    std::fs::write(&path, "{ not json").unwrap();
    let err = read_save(&path).unwrap_err();
    assert!(matches!(err, SaveError::Json(_)));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_pulls_edited_records_back_in_bounds() {
    let path = temp_path("rpg_save_edited");
    let (s, catalog) = fresh();
    save_to_file(&path, &s).unwrap();

    let mut json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    json["player"]["elemental_charge"] = 250.into();
    json["player"]["hp"] = 10.into();
    json["player"]["inventory"] = serde_json::json!({ "Healing Potion": 0, "Bomb": 2 });
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

    let loaded = load_into(&path, &s, &catalog, &mut StepRng::new(0, 0)).unwrap();
    assert!(loaded.player.elemental_charge <= RpgConfig::MAX_CHARGE);
    assert_eq!(loaded.player.inventory.count(Item::HealingPotion), 0);
    assert!(loaded.player.inventory.iter().all(|(_, n)| n > 0));
    assert_eq!(loaded.player.inventory.count(Item::Bomb), 2);

    let err = heal(&loaded, &catalog, &mut StepRng::new(0, 0)).unwrap_err();
    assert_eq!(err, ActionError::NoItem(Item::HealingPotion));
    let _ = std::fs::remove_file(&path);
}
