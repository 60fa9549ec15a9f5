use elemental_arcade::config::RpgConfig;
use elemental_arcade::error::ActionError;
use elemental_arcade::rpg::catalog::{Catalog, ClassKind, EnemyKind};
use elemental_arcade::rpg::combat::AttackKind;
use elemental_arcade::rpg::element::Element;
use elemental_arcade::rpg::encounter::start_game;
use elemental_arcade::rpg::entities::{Enemy, Item, RpgState};
use elemental_arcade::rpg::turn::*;

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn zero_rng() -> StepRng {
    StepRng::new(0, 0)
}

fn goblin(hp: u32) -> Enemy {
    Enemy {
        name: "Goblin".to_string(),
        kind: EnemyKind::Goblin,
        hp,
        max_hp: hp,
        attack: 6,
        defense: 3,
        level: 1,
        element: Some(Element::Gempa),
        gold: 7,
    }
}

/// Warrior (120 hp, 15 atk, 8 def, Halilintar) facing a Goblin.
fn battle(enemy_hp: u32) -> (RpgState, Catalog) {
    let catalog = Catalog::standard();
    let mut state =
        start_game(ClassKind::Warrior, &catalog, &RpgConfig::new(), &mut zero_rng()).unwrap();
    state.enemy = goblin(enemy_hp);
    (state, catalog)
}

fn last_log(state: &RpgState) -> &str {
    state.game.battle_log.last().map(String::as_str).unwrap_or("")
}

// ── attacks ───────────────────────────────────────────────────────────────────

#[test]
fn basic_attack_damages_and_charges() {
    let (s, catalog) = battle(500);
    let s2 = attack(&s, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap();
    // 14 damage, critical with the zero RNG
    assert_eq!(s2.enemy.hp, 500 - 21);
    assert_eq!(s2.player.elemental_charge, 10);
    // Goblin's elemental counter is weak against Halilintar: 1 damage.
    assert_eq!(s2.player.hp, 119);
}

#[test]
fn actions_leave_input_untouched() {
    let (s, catalog) = battle(500);
    let before = s.clone();
    let _ = attack(&s, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s, before);
}

#[test]
fn charge_is_capped_at_max() {
    let (mut s, catalog) = battle(500);
    s.player.elemental_charge = 95;
    let s2 = attack(&s, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.elemental_charge, 100);
}

#[test]
fn elemental_needs_thirty_charge() {
    let (mut s, catalog) = battle(500);
    s.player.elemental_charge = 29;
    let err = attack(&s, AttackKind::Elemental, &catalog, &mut zero_rng()).unwrap_err();
    assert_eq!(err, ActionError::NotEnoughCharge { needed: 30, have: 29 });
}

#[test]
fn elemental_costs_exactly_thirty() {
    let (mut s, catalog) = battle(500);
    s.player.elemental_charge = 45;
    let s2 = use_elemental_skill(&s, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.elemental_charge, 15);
    assert_eq!(s2.player.element_mastery[&Element::Halilintar], 1);
    // floor(floor(14 * 1.5) * 1.5), critical
    assert_eq!(s2.enemy.hp, 500 - 31);
    assert!(s2
        .game
        .battle_log
        .iter()
        .any(|l| l.starts_with("You use Pedang Halilintar") && l.contains("EFFECTIVE!")));
}

#[test]
fn special_sets_cooldown() {
    let (s, catalog) = battle(500);
    let s2 = attack(&s, AttackKind::Special, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.special_cooldown, 3);
    assert_eq!(s2.player.elemental_charge, 10);

    let err = attack(&s2, AttackKind::Special, &catalog, &mut zero_rng()).unwrap_err();
    assert_eq!(
        err,
        ActionError::SpecialOnCooldown { ability: "Power Strike", turns: 3 }
    );
    assert_eq!(err.to_string(), "Power Strike is on cooldown for 3 more turns!");
}

#[test]
fn cooldown_counts_down_on_other_turns() {
    let (s, catalog) = battle(500);
    let mut s = attack(&s, AttackKind::Special, &catalog, &mut zero_rng()).unwrap();
    for left in [2, 1, 0] {
        s = attack(&s, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap();
        assert_eq!(s.player.special_cooldown, left);
    }
    assert!(attack(&s, AttackKind::Special, &catalog, &mut zero_rng()).is_ok());
}

#[test]
fn killing_blow_moves_to_next_encounter() {
    let (s, catalog) = battle(5);
    let s2 = attack(&s, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.gold, 50 + 7);
    assert_eq!(s2.player.xp, 15);
    assert_eq!(s2.game.day, s.game.day + 1);
    assert!(s2.enemy.is_alive());
    // No counter-attack from a dead enemy.
    assert_eq!(s2.player.hp, 120);
}

#[test]
fn defeat_ends_the_game() {
    let (mut s, catalog) = battle(500);
    s.player.hp = 1;
    let s2 = attack(&s, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.hp, 0);
    assert!(!s2.game.game_active);
    assert_eq!(last_log(&s2), "You were defeated... Game Over.");

    let err = attack(&s2, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap_err();
    assert_eq!(err, ActionError::NotInBattle);
    assert_eq!(flee(&s2, &catalog, &mut zero_rng()).unwrap_err(), ActionError::NotInBattle);
}

// ── healing and items ─────────────────────────────────────────────────────────

#[test]
fn heal_uses_a_potion() {
    let (mut s, catalog) = battle(500);
    s.player.hp = 50;
    let s2 = heal(&s, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.inventory.count(Item::HealingPotion), 2);
    assert_eq!(s2.player.hp, 50 + 15 - 1);
}

#[test]
fn heal_is_capped_at_max_hp() {
    let (mut s, catalog) = battle(500);
    s.player.hp = 119;
    s.enemy.attack = 0;
    let s2 = heal(&s, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.hp, 119);
    assert!(s2
        .game
        .battle_log
        .iter()
        .any(|l| l == "You used a Healing Potion and recovered 15 HP!"));
}

#[test]
fn heal_without_potions_fails() {
    let (mut s, catalog) = battle(500);
    for _ in 0..3 {
        assert!(s.player.inventory.take(Item::HealingPotion));
    }
    assert_eq!(s.player.inventory.count(Item::HealingPotion), 0);
    assert!(!s.player.inventory.iter().any(|(item, _)| item == Item::HealingPotion));
    let err = heal(&s, &catalog, &mut zero_rng()).unwrap_err();
    assert_eq!(err, ActionError::NoItem(Item::HealingPotion));
    assert_eq!(err.to_string(), "You have no Healing Potion left!");
}

#[test]
fn missing_item_cannot_be_used() {
    let (s, catalog) = battle(500);
    let err = use_item(&s, Item::ElementalCrystal, &catalog, &mut zero_rng()).unwrap_err();
    assert_eq!(err, ActionError::NoItem(Item::ElementalCrystal));
}

#[test]
fn strength_elixir_buffs_for_three_attacks() {
    let (s, catalog) = battle(500);
    let mut s = use_item(&s, Item::StrengthElixir, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s.player.attack, 20);
    assert_eq!(s.player.buff_turns, 3);
    assert_eq!(s.player.inventory.count(Item::StrengthElixir), 0);

    for _ in 0..2 {
        s = attack(&s, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap();
        assert_eq!(s.player.attack, 20);
    }
    s = attack(&s, AttackKind::Basic, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s.player.attack, 15);
    assert_eq!(s.player.buff_turns, 0);
    assert!(s
        .game
        .battle_log
        .iter()
        .any(|l| l == "Your Strength Elixir effect wore off!"));
}

#[test]
fn bomb_deals_flat_damage() {
    let (s, catalog) = battle(500);
    let s2 = use_item(&s, Item::Bomb, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.enemy.hp, 485);
    assert_eq!(s2.player.inventory.count(Item::Bomb), 0);
}

#[test]
fn bomb_kill_pays_out_with_loot() {
    let (s, catalog) = battle(10);
    let s2 = use_item(&s, Item::Bomb, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.gold, 57);
    assert_eq!(s2.player.xp, 15);
    // Zero RNG always finds loot, and the first loot entry is a potion.
    assert_eq!(s2.player.inventory.count(Item::HealingPotion), 4);
    assert_eq!(s2.game.day, s.game.day + 1);
}

#[test]
fn crystal_fills_charge_without_enemy_turn() {
    let (mut s, catalog) = battle(500);
    s.player.inventory.add(Item::ElementalCrystal, 1);
    let s2 = use_item(&s, Item::ElementalCrystal, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.elemental_charge, 100);
    assert_eq!(s2.player.hp, 120);
    assert_eq!(s2.player.inventory.count(Item::ElementalCrystal), 0);
}

#[test]
fn equipment_is_not_usable() {
    let (mut s, catalog) = battle(500);
    s.player.inventory.add(Item::IronSword, 1);
    let err = use_item(&s, Item::IronSword, &catalog, &mut zero_rng()).unwrap_err();
    assert_eq!(err, ActionError::NotUsable(Item::IronSword));
}

#[test]
fn phoenix_down_only_when_defeated() {
    let (mut s, catalog) = battle(500);
    s.player.inventory.add(Item::PhoenixDown, 1);
    let err = use_item(&s, Item::PhoenixDown, &catalog, &mut zero_rng()).unwrap_err();
    assert_eq!(err, ActionError::PhoenixDownWhileAlive);

    s.player.hp = 0;
    s.game.game_active = false;
    let s2 = use_item(&s, Item::PhoenixDown, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.player.hp, 60);
    assert!(s2.game.game_active);
    assert_eq!(s2.player.inventory.count(Item::PhoenixDown), 0);
    assert!(attack(&s2, AttackKind::Basic, &catalog, &mut zero_rng()).is_ok());
}

// ── flee / enemy turn ─────────────────────────────────────────────────────────

#[test]
fn successful_flee_rolls_new_encounter() {
    let (s, catalog) = battle(500);
    let s2 = flee(&s, &catalog, &mut zero_rng()).unwrap();
    assert_eq!(s2.game.day, s.game.day + 1);
    assert_eq!(s2.player.hp, 120);
    assert!(s2
        .game
        .battle_log
        .iter()
        .any(|l| l == "You successfully fled from battle!"));
}

#[test]
fn flee_either_escapes_or_takes_a_hit() {
    let (s, catalog) = battle(500);
    for seed in 0..50 {
        let s2 = flee(&s, &catalog, &mut StdRng::seed_from_u64(seed)).unwrap();
        if s2.game.day == s.game.day {
            assert!(s2.player.hp < s.player.hp);
            assert_eq!(s2.enemy, s.enemy);
        } else {
            assert_eq!(s2.game.day, s.game.day + 1);
            assert_eq!(s2.player.hp, s.player.hp);
        }
    }
}

#[test]
fn enemy_turn_damages_player() {
    let (s, _) = battle(500);
    let s2 = enemy_turn(&s, &mut StepRng::new(u64::MAX, 0));
    assert_eq!(s2.player.hp, 118); // basic hit: 6 - 8/2
    assert_eq!(last_log(&s2), "The Goblin hits you for 2 damage!");
}

#[test]
fn apply_dispatches_every_action() {
    let (s, catalog) = battle(500);
    let mut rng = zero_rng();
    assert!(apply(&s, Action::Attack(AttackKind::Basic), &catalog, &mut rng).is_ok());
    assert!(apply(&s, Action::Heal, &catalog, &mut rng).is_ok());
    assert!(apply(&s, Action::UseItem(Item::Bomb), &catalog, &mut rng).is_ok());
    assert!(apply(&s, Action::Flee, &catalog, &mut rng).is_ok());
    let bought = apply(&s, Action::Buy(Item::HealingPotion), &catalog, &mut rng).unwrap();
    assert_eq!(bought.player.inventory.count(Item::HealingPotion), 4);
}

#[test]
fn random_play_keeps_invariants() {
    let catalog = Catalog::standard();
    let actions = [
        Action::Attack(AttackKind::Basic),
        Action::Attack(AttackKind::Special),
        Action::Attack(AttackKind::Elemental),
        Action::Heal,
        Action::UseItem(Item::Bomb),
        Action::UseItem(Item::StrengthElixir),
        Action::Flee,
    ];
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        for class in ClassKind::ALL {
            let mut s = start_game(class, &catalog, &RpgConfig::new(), &mut rng).unwrap();
            for step in 0..200 {
                let action = actions[(step * 7 + seed as usize) % actions.len()];
                if let Ok(next) = apply(&s, action, &catalog, &mut rng) {
                    s = next;
                }
                assert!(s.player.elemental_charge <= RpgConfig::MAX_CHARGE);
                assert!(s.player.hp <= s.player.max_hp);
                assert!(s.player.inventory.iter().all(|(_, n)| n > 0));
                assert!(s.enemy.level >= 1);
                if !s.game.game_active {
                    break;
                }
            }
        }
    }
}
