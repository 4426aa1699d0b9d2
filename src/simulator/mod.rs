//! Combat balance simulator for Monte Carlo analysis.
//!
//! Runs thousands of seeded fights through the real `CombatEncounter` state
//! machine to analyze:
//! - Win rate against each enemy at a given build
//! - Fight length in turns
//! - Damage dealt and taken per fight
//!
//! Delays between phases are skipped; every fight resolves immediately.

mod combat_sim;
mod config;
mod report;
mod runner;

pub use combat_sim::{simulate_fight, FightStats};
pub use config::SimConfig;
pub use report::{EnemyReport, SimReport};
pub use runner::run_simulation;
