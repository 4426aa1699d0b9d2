//! Integration test: Turn-based combat driven by the timer queue
//!
//! Player action → resolve pause → enemy turn → player turn, until someone
//! falls. A finishing blow on either side resolves after one more pause.

use hunter::character::attributes::Stat;
use hunter::combat::types::{CombatAction, CombatEvent, CombatOutcome, CombatPhase};
use hunter::core::config::GameConfig;
use hunter::core::error::GameError;
use hunter::core::game::{Game, GameEvent};
use hunter::items::types::{Item, Rank};
use hunter::utils::persistence::{MemoryStore, SaveStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn new_game() -> Game {
    Game::new(
        SaveStore::new(MemoryStore::new()),
        GameConfig::default(),
        StdRng::seed_from_u64(3),
        0,
    )
}

/// Attacks whenever it is the player's turn, stepping time 100 ms at a
/// time. Returns every tick event and the final time.
fn fight_to_the_end(game: &mut Game, mut now: u64) -> (Vec<GameEvent>, u64) {
    let mut events = Vec::new();
    for _ in 0..2000 {
        let phase = game.encounter().map(|e| e.phase());
        match phase {
            Some(CombatPhase::PlayerTurn) => {
                game.combat_action(CombatAction::Attack).unwrap();
            }
            Some(CombatPhase::Finished(_)) | None => break,
            _ => {}
        }
        now += 100;
        events.extend(game.tick(now).events);
    }
    (events, now)
}

#[test]
fn test_goblin_victory_pays_rewards() {
    let mut game = new_game();
    // Attack 30, no crits at PER 0: 27 per hit against the goblin's 5 DEF
    game.spend_stat_point(Stat::Str, 6).unwrap();
    game.start_combat("goblin").unwrap();
    assert_eq!(
        game.encounter().map(|e| e.phase()),
        Some(CombatPhase::PlayerTurn)
    );

    let (events, _) = fight_to_the_end(&mut game, 0);

    let encounter = game.encounter().unwrap();
    assert_eq!(encounter.outcome(), Some(CombatOutcome::Victory));
    let hits: Vec<u32> = encounter
        .log()
        .iter()
        .filter_map(|e| match e {
            CombatEvent::PlayerAttack { damage, .. } => Some(*damage),
            _ => None,
        })
        .collect();
    assert_eq!(hits, vec![27, 27, 27, 27]);
    // Three goblin turns at 10 damage each
    assert_eq!(encounter.player_hp, 130);

    assert!(events.contains(&GameEvent::CombatFinished {
        outcome: CombatOutcome::Victory,
        exp: 30,
        coins: 50,
    }));
    assert_eq!(game.state().coins, 1050);
    assert_eq!(game.state().exp, 30);
    // Combat damage does not carry over to the saved record
    assert_eq!(game.state().hp, 160);
}

#[test]
fn test_shadow_knight_defeats_a_fresh_player() {
    let mut game = new_game();
    game.start_combat("shadow-knight").unwrap();

    let (events, _) = fight_to_the_end(&mut game, 0);

    assert_eq!(
        game.encounter().and_then(|e| e.outcome()),
        Some(CombatOutcome::Defeat)
    );
    assert!(events.contains(&GameEvent::Combat(CombatEvent::PlayerDefeated)));
    assert_eq!(game.state().coins, 1000);
    assert_eq!(game.state().exp, 0);
    assert_eq!(
        game.notifications().latest().map(|n| n.message.as_str()),
        Some("You have been defeated!")
    );
}

#[test]
fn test_pacing_between_turns() {
    let mut game = new_game();
    game.start_combat("wolf").unwrap();
    game.combat_action(CombatAction::Attack).unwrap();

    // Still resolving the player's hit
    assert_eq!(
        game.combat_action(CombatAction::Attack),
        Err(GameError::NotPlayerTurn)
    );
    assert!(game.tick(1499).events.is_empty());
    assert!(game.tick(1500).events.is_empty());
    assert_eq!(
        game.encounter().map(|e| e.phase()),
        Some(CombatPhase::EnemyTurn)
    );

    // Enemy turn lands 1200 ms later
    let events = game.tick(2700).events;
    assert_eq!(
        events,
        vec![GameEvent::Combat(CombatEvent::EnemyAttack {
            enemy: "Wild Wolf".to_string(),
            damage: 15,
        })]
    );

    // A survived hit hands the turn straight back, with no resolve pause
    assert_eq!(
        game.encounter().map(|e| e.phase()),
        Some(CombatPhase::PlayerTurn)
    );
    game.combat_action(CombatAction::Attack).unwrap();
}

#[test]
fn test_one_fight_at_a_time() {
    let mut game = new_game();
    assert_eq!(game.start_combat("dragon"), Err(GameError::EnemyNotFound));
    assert_eq!(
        game.combat_action(CombatAction::Attack),
        Err(GameError::NotInCombat)
    );

    game.start_combat("goblin").unwrap();
    assert_eq!(game.start_combat("wolf"), Err(GameError::AlreadyInCombat));
    assert_eq!(
        game.combat_action(CombatAction::Skill("combat-mastery".to_string())),
        Err(GameError::SkillNotUsable)
    );
    // The rejected skill did not use up the turn
    game.combat_action(CombatAction::Potion).unwrap();
}

#[test]
fn test_new_fight_after_the_last_one_ends() {
    let mut game = new_game();
    game.spend_stat_point(Stat::Str, 6).unwrap();
    game.start_combat("goblin").unwrap();
    let (_, now) = fight_to_the_end(&mut game, 0);
    assert!(game.encounter().unwrap().phase().is_finished());

    game.tick(now + 1);
    game.start_combat("wolf").unwrap();
    assert_eq!(game.encounter().unwrap().enemy.id, "wolf");
    assert_eq!(game.encounter().unwrap().player_hp, 160);
}

#[test]
fn test_equipment_buffs_do_not_change_combat() {
    let mut game = new_game();
    let boots = Item::new("boots-1", "Swift Boots", "BOOTS", Rank::C, 500).with_buff(Stat::Agi, 20);
    game.add_item(boots).unwrap();
    game.equip_item("boots-1").unwrap();
    assert_eq!(game.derived_stats().attack, 40);
    assert_eq!(game.combat_stats().attack, 0);

    game.start_combat("goblin").unwrap();
    let events = game.combat_action(CombatAction::Attack).unwrap();
    // 0 attack against 5 DEF floors to the minimum of 1
    assert_eq!(
        events,
        vec![CombatEvent::PlayerAttack {
            damage: 1,
            was_crit: false
        }]
    );
}
