//! Hunter - a line-command front end for the idle hunter engine.
//!
//! Reads one command per line from stdin, ticks the game with the wall clock
//! before each command and prints any new notifications.

use anyhow::{Context, Result};
use hunter::character::attributes::Stat;
use hunter::combat::data::enemy_roster;
use hunter::combat::types::{CombatAction, CombatPhase};
use hunter::core::clock::{Clock, SystemClock};
use hunter::core::config::GameConfig;
use hunter::core::game::{Game, GameEvent};
use hunter::core::notifications::{NotificationId, NotificationKind};
use hunter::dungeon::types::DungeonEvent;
use hunter::shop::data::{item_catalog, quest_catalog};
use hunter::utils::build_info::version_string;
use hunter::utils::persistence::{FileStore, MemoryStore, SaveStore};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut verbosity = 0usize;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("{}", version_string());
                return Ok(());
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            flag if flag.starts_with('-') && flag[1..].chars().all(|c| c == 'v') => {
                verbosity += flag.len() - 1;
            }
            other => anyhow::bail!("unknown argument '{}' (see --help)", other),
        }
    }

    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let saves = match FileStore::in_home() {
        Ok(store) => SaveStore::new(store),
        Err(e) => {
            warn!("cannot open save directory, progress will not persist: {}", e);
            SaveStore::new(MemoryStore::new())
        }
    };
    let config = GameConfig::load_or_default();
    let clock = SystemClock;
    let mut game = Game::new(saves, config, StdRng::from_entropy(), clock.now_ms());
    info!("{} started", version_string());

    println!("{}", version_string());
    println!("Type 'help' for commands.");

    let mut shown = HashSet::new();
    print_notifications(&game, &mut shown);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read command")? == 0 {
            break;
        }

        let result = game.tick(clock.now_ms());
        print_events(&result.events);

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            print_notifications(&game, &mut shown);
            continue;
        }
        if matches!(words[0], "quit" | "exit" | "q") {
            break;
        }
        run_command(&mut game, &words);
        print_notifications(&game, &mut shown);
    }

    Ok(())
}

fn print_usage() {
    println!("Hunter - idle hunter RPG\n");
    println!("Usage: hunter [OPTIONS]\n");
    println!("Options:");
    println!("  -v, -vv       More log output (info, debug)");
    println!("  -V, --version Show version information");
    println!("  -h, --help    Show this help message");
}

fn print_help() {
    println!("status                     Show the player");
    println!("spend <stat> [n]           Spend stat points (str vit agi int per cmd)");
    println!("train <stat> | cancel      Start or cancel training");
    println!("enemies | fight <enemy>    List enemies or start a fight");
    println!("attack | skill <id> | potion | flee");
    println!("quests | complete <id>     List or complete quests");
    println!("dungeon start <quest> | begin | fight | avoid | claim | abandon");
    println!("shop | buy <id> | sell <item>");
    println!("items | equip <item> | unequip <item>");
    println!("skills | unlock <id> | upgrade <id>");
    println!("wait                       Process pending timers");
    println!("quit");
}

fn print_notifications(game: &Game, shown: &mut HashSet<NotificationId>) {
    for note in game.notifications().iter() {
        if shown.insert(note.id) {
            let marker = match note.kind {
                NotificationKind::Success => "+",
                NotificationKind::Error => "!",
                NotificationKind::Info => "*",
            };
            println!("[{}] {}", marker, note.message);
        }
    }
}

fn print_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::TrainingProgress { stat, progress } => {
                println!("  training {}: {}%", stat.abbrev(), progress)
            }
            GameEvent::Combat(e) => println!("  {}", e.message()),
            GameEvent::Dungeon(DungeonEvent::Advanced { progress }) => {
                println!("  exploring: {}%", progress)
            }
            _ => {}
        }
    }
}

fn parse_stat(word: Option<&&str>) -> Option<Stat> {
    let stat = word.and_then(|w| Stat::from_abbrev(w));
    if stat.is_none() {
        println!("Which stat? (str vit agi int per cmd)");
    }
    stat
}

/// Runs one command. Rejected operations already surface as error
/// notifications, so results are only inspected for extra output.
fn run_command(game: &mut Game, words: &[&str]) {
    let arg = words.get(1).copied();
    match words[0] {
        "help" | "?" => print_help(),
        "status" => print_status(game),
        "spend" => {
            if let Some(stat) = parse_stat(words.get(1)) {
                let amount = words.get(2).and_then(|n| n.parse().ok()).unwrap_or(1);
                let _ = game.spend_stat_point(stat, amount);
            }
        }
        "train" => {
            if let Some(stat) = parse_stat(words.get(1)) {
                let _ = game.start_training(stat);
            }
        }
        "cancel" => {
            if let Ok(false) = game.cancel_training() {
                println!("Not training.");
            }
        }
        "enemies" => {
            for enemy in enemy_roster() {
                println!(
                    "{:<14} lv {:<3} {} HP {:<4} ATK {:<3} DEF {}",
                    enemy.id,
                    enemy.level,
                    enemy.rank.label(),
                    enemy.max_hp,
                    enemy.attack,
                    enemy.defense
                );
            }
        }
        "fight" if words.len() == 2 => {
            let _ = game.start_combat(words[1]);
        }
        "attack" => combat(game, CombatAction::Attack),
        "skill" => match arg {
            Some(id) => combat(game, CombatAction::Skill(id.to_string())),
            None => println!("Which skill?"),
        },
        "potion" => combat(game, CombatAction::Potion),
        "flee" => combat(game, CombatAction::Flee),
        "quests" => {
            let state = game.state();
            for quest in state.quests.iter().chain(&state.daily_quests) {
                let done = if quest.is_completed { "x" } else { " " };
                println!(
                    "[{}] {:<28} {} {:>5} EXP {:>6} coins  ({})",
                    done,
                    quest.title,
                    quest.rank.label(),
                    quest.rewards.exp,
                    quest.rewards.coins,
                    quest.id
                );
            }
        }
        "complete" => match arg {
            Some(id) => {
                let _ = game.complete_quest(id);
            }
            None => println!("Which quest?"),
        },
        "dungeon" => dungeon(game, arg, words.get(2).copied()),
        "shop" => {
            for offer in quest_catalog() {
                println!(
                    "{:<14} {} {:<28} {:>6} coins",
                    offer.quest.id,
                    offer.quest.rank.label(),
                    offer.quest.title,
                    offer.price
                );
            }
            for item in item_catalog() {
                println!(
                    "{:<14} {} {:<28} {:>6} coins",
                    item.id,
                    item.rank.label(),
                    item.name,
                    item.value
                );
            }
        }
        "buy" => match arg {
            Some(id) if id.starts_with("shop-quest") => {
                let _ = game.buy_quest(id);
            }
            Some(id) => {
                let _ = game.buy_item(id);
            }
            None => println!("Buy what?"),
        },
        "sell" => match arg {
            Some(id) => {
                let _ = game.sell_item(id);
            }
            None => println!("Sell what?"),
        },
        "items" => {
            for item in &game.state().inventory {
                let equipped = if item.is_equipped { "E" } else { " " };
                println!("[{}] {:<28} {:>6} coins  ({})", equipped, item.name, item.value, item.id);
            }
        }
        "equip" => match arg {
            Some(id) => {
                let _ = game.equip_item(id);
            }
            None => println!("Equip what?"),
        },
        "unequip" => match arg {
            Some(id) => {
                let _ = game.unequip_item(id);
            }
            None => println!("Unequip what?"),
        },
        "skills" => {
            let tree = game.skill_tree();
            let skills = &game.state().skills;
            for (index, depth) in tree.walk() {
                let skill = &skills[index];
                let lock = if skill.unlocked { " " } else { "L" };
                println!(
                    "{}[{}] {} {}/{}  ({})",
                    "  ".repeat(depth),
                    lock,
                    skill.name,
                    skill.level,
                    skill.max_level,
                    skill.id
                );
            }
            println!("Skill points: {}", game.state().available_skill_points);
        }
        "unlock" => match arg {
            Some(id) => {
                let _ = game.unlock_skill(id);
            }
            None => println!("Unlock which skill?"),
        },
        "upgrade" => match arg {
            Some(id) => {
                let _ = game.upgrade_skill(id);
            }
            None => println!("Upgrade which skill?"),
        },
        "wait" | "tick" => {}
        other => println!("Unknown command '{}'. Type 'help'.", other),
    }
}

fn combat(game: &mut Game, action: CombatAction) {
    if let Ok(events) = game.combat_action(action) {
        for event in events {
            println!("  {}", event.message());
        }
    }
    if let Some(encounter) = game.encounter() {
        println!(
            "  You {}/{} HP | {} {}/{} HP",
            encounter.player_hp,
            encounter.player_max_hp,
            encounter.enemy.name,
            encounter.enemy.current_hp,
            encounter.enemy.max_hp
        );
        if encounter.phase() == CombatPhase::PlayerTurn {
            println!("  Your turn.");
        }
    }
}

fn dungeon(game: &mut Game, sub: Option<&str>, quest_id: Option<&str>) {
    match (sub, quest_id) {
        (Some("start"), Some(id)) => {
            let _ = game.start_dungeon(id);
        }
        (Some("begin"), _) => {
            let _ = game.begin_exploration();
        }
        (Some("fight"), _) => {
            let _ = game.resolve_dungeon_monster(true);
        }
        (Some("avoid"), _) => {
            let _ = game.resolve_dungeon_monster(false);
        }
        (Some("claim"), _) => {
            let _ = game.claim_dungeon_rewards();
        }
        (Some("abandon"), _) => {
            let _ = game.abandon_dungeon();
        }
        (None, _) => match game.dungeon() {
            Some(run) => println!(
                "{} [{:?}] {}% - {} ({} coins found)",
                run.quest_title, run.step, run.progress, run.message, run.found_coins
            ),
            None => println!("Not in a dungeon."),
        },
        _ => println!("dungeon start <quest> | begin | fight | avoid | claim | abandon"),
    }
}

fn print_status(game: &Game) {
    let state = game.state();
    let derived = game.derived_stats();
    println!("{} - level {} ({}/{} EXP)", state.name, state.level, state.exp, state.exp_to_next_level);
    println!("HP {}/{}  IP {}/{}  Coins {}", state.hp, state.max_hp, state.ip, state.max_ip, state.coins);
    let stats: Vec<String> = Stat::all()
        .iter()
        .map(|s| format!("{} {}", s.abbrev(), derived.stats.get(*s)))
        .collect();
    println!("{}", stats.join("  "));
    println!(
        "ATK {}  DEF {}  Crit {:.0}%  Flee {:.0}%",
        derived.attack,
        derived.defense,
        derived.crit_chance * 100.0,
        derived.flee_chance * 100.0
    );
    println!(
        "Stat points: {} physical, {} mental",
        state.available_stat_points.physical, state.available_stat_points.mental
    );
    if let Some(session) = game.training() {
        println!("Training {}: {}%", session.stat.abbrev(), session.progress);
    }
}
