//! Combat balance simulator CLI.
//!
//! Run Monte Carlo fights to analyze enemy difficulty for a given build.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # Default: 1000 fights per enemy
//!   cargo run --bin simulate -- -n 100 -e wolf        # 100 fights against the wolf
//!   cargo run --bin simulate -- --seed 42 --str 20    # Reproducible, stronger build

use anyhow::{bail, Context, Result};
use hunter::character::attributes::Stat;
use hunter::simulator::{run_simulation, SimConfig};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(config) = parse_args(&args)? else {
        print_help();
        return Ok(());
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              HUNTER COMBAT SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Fights/enemy:   {}", config.num_runs);
    println!(
        "  Enemy:          {}",
        config.enemy_id.as_deref().unwrap_or("all")
    );
    println!(
        "  Build:          STR {} VIT {} AGI {} PER {}",
        config.stats.get(Stat::Str),
        config.stats.get(Stat::Vit),
        config.stats.get(Stat::Agi),
        config.stats.get(Stat::Per)
    );
    if let Some(skill) = &config.skill_id {
        println!("  Skill:          {} (lv {})", skill, config.skill_level);
    }
    println!("  Potions:        {}", config.potions);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);
    if report.enemies.is_empty() {
        bail!(
            "unknown enemy '{}'",
            config.enemy_id.as_deref().unwrap_or_default()
        );
    }

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("failed to write {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }
    Ok(())
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} needs a value", flag))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .ok()
        .with_context(|| format!("{}: '{}' is not a number", flag, raw))
}

/// Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<SimConfig>> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                config.num_runs = number(args, i, flag)?;
                i += 1;
            }
            "-e" | "--enemy" => {
                config.enemy_id = Some(value(args, i, flag)?.to_string());
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(number(args, i, flag)?);
                i += 1;
            }
            "--str" | "--vit" | "--agi" | "--per" => {
                let stat = Stat::from_abbrev(&flag[2..]).context("unknown stat")?;
                config.stats.set(stat, number(args, i, flag)?);
                i += 1;
            }
            "--balanced" => {
                let points: u32 = number(args, i, flag)?;
                config.stats = SimConfig::balanced_build(points).stats;
                i += 1;
            }
            "--skill" => {
                config.skill_id = Some(value(args, i, flag)?.to_string());
                config.skill_level = config.skill_level.max(1);
                i += 1;
            }
            "--skill-level" => {
                config.skill_level = number(args, i, flag)?;
                i += 1;
            }
            "--potions" => {
                config.potions = number(args, i, flag)?;
                i += 1;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {}
            "-h" | "--help" => return Ok(None),
            other => bail!("unknown option '{}' (see --help)", other),
        }
        i += 1;
    }

    Ok(Some(config))
}

fn print_help() {
    println!("Hunter Combat Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Fights per enemy (default: 1000)");
    println!("    -e, --enemy <ID>      Only fight this enemy (goblin, wolf, orc, shadow-knight)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --str/--vit/--agi/--per <N>  Set a stat");
    println!("    --balanced <N>        Spread N points over STR, VIT, AGI and PER");
    println!("    --skill <ID>          Use a combat skill when it hits harder");
    println!("    --skill-level <L>     Level of that skill (default: 1)");
    println!("    --potions <N>         Potions per fight (default: 3)");
    println!("    -v, --verbose         Print every fight");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
}
