//! Integration test: Timed stat training

use hunter::character::attributes::Stat;
use hunter::core::config::GameConfig;
use hunter::core::error::GameError;
use hunter::core::game::{Game, GameEvent};
use hunter::utils::persistence::{MemoryStore, SaveStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn new_game(config: GameConfig) -> Game {
    Game::new(
        SaveStore::new(MemoryStore::new()),
        config,
        StdRng::seed_from_u64(11),
        0,
    )
}

#[test]
fn test_full_session_in_one_tick() {
    let mut game = new_game(GameConfig::default());
    game.start_training(Stat::Vit).unwrap();

    let events = game.tick(10_000).events;
    let progress: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::TrainingProgress { progress, .. } => Some(*progress),
            _ => None,
        })
        .collect();
    assert_eq!(progress, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
    assert_eq!(
        events.last(),
        Some(&GameEvent::TrainingComplete {
            stat: Stat::Vit,
            gained: 20
        })
    );

    let state = game.state();
    assert_eq!(state.stat(Stat::Vit), 20);
    assert_eq!(state.max_hp, 500);
    assert_eq!(state.hp, 500);
    // Training does not spend stat points
    assert_eq!(state.available_stat_points.physical, 6);
}

#[test]
fn test_finished_session_lingers_then_clears() {
    let mut game = new_game(GameConfig::default());
    game.start_training(Stat::Str).unwrap();
    game.tick(10_000);

    assert!(!game.is_training());
    assert_eq!(game.training().map(|s| s.progress), Some(100));

    assert!(game.tick(12_999).events.is_empty());
    assert_eq!(game.tick(13_000).events, vec![GameEvent::TrainingCleared]);
    assert!(game.training().is_none());
    assert_eq!(game.pending_timers(), 0);
}

#[test]
fn test_new_session_while_previous_is_displayed() {
    let mut game = new_game(GameConfig::default());
    game.start_training(Stat::Str).unwrap();
    game.tick(10_000);

    game.start_training(Stat::Agi).unwrap();
    assert!(game.is_training());
    // The pending clear must not wipe the new session
    game.tick(13_000);
    assert_eq!(game.training().map(|s| s.stat), Some(Stat::Agi));
    assert!(game.is_training());
}

#[test]
fn test_cancel_forfeits_the_reward() {
    let mut game = new_game(GameConfig::default());
    game.start_training(Stat::Int).unwrap();
    game.tick(3000);

    assert_eq!(game.cancel_training(), Ok(true));
    assert!(game.tick(60_000).events.is_empty());
    assert_eq!(game.state().stat(Stat::Int), 0);
    assert_eq!(game.cancel_training(), Ok(false));
}

#[test]
fn test_rejections() {
    let mut game = new_game(GameConfig::default());
    assert_eq!(
        game.start_training(Stat::Per),
        Err(GameError::NotTrainable { stat: Stat::Per })
    );
    game.start_training(Stat::Str).unwrap();
    assert_eq!(
        game.start_training(Stat::Agi),
        Err(GameError::AlreadyTraining)
    );
}

#[test]
fn test_configured_duration_and_reward() {
    let config = GameConfig {
        training_duration_seconds: 2,
        training_reward: 5,
        ..GameConfig::default()
    };
    let mut game = new_game(config);
    game.start_training(Stat::Agi).unwrap();

    let events = game.tick(2000).events;
    assert_eq!(
        events,
        vec![
            GameEvent::TrainingProgress {
                stat: Stat::Agi,
                progress: 50
            },
            GameEvent::TrainingComplete {
                stat: Stat::Agi,
                gained: 5
            },
        ]
    );
    assert_eq!(game.state().stat(Stat::Agi), 5);
}
