//! Simulation report generation.

use super::combat_sim::FightStats;
use crate::combat::types::CombatOutcome;
use serde::Serialize;

/// Aggregated fights against one enemy.
#[derive(Debug, Clone, Serialize)]
pub struct EnemyReport {
    pub enemy_id: String,
    pub enemy_name: String,
    pub fights: u32,
    pub wins: u32,
    pub losses: u32,
    pub stalemates: u32,
    pub avg_turns: f64,
    pub avg_damage_dealt: f64,
    pub avg_damage_taken: f64,
    pub avg_potions_used: f64,
    pub crit_rate: f64,
}

impl EnemyReport {
    pub fn from_fights(enemy_id: &str, enemy_name: &str, fights: &[FightStats]) -> Self {
        let count = fights.len().max(1) as f64;
        let outcomes = |o: CombatOutcome| fights.iter().filter(|f| f.outcome == Some(o)).count() as u32;
        let avg = |f: fn(&FightStats) -> u64| fights.iter().map(f).sum::<u64>() as f64 / count;

        let turns: u64 = fights.iter().map(|f| f.turns as u64).sum();
        let crits: u64 = fights.iter().map(|f| f.crits as u64).sum();

        Self {
            enemy_id: enemy_id.to_string(),
            enemy_name: enemy_name.to_string(),
            fights: fights.len() as u32,
            wins: outcomes(CombatOutcome::Victory),
            losses: outcomes(CombatOutcome::Defeat),
            stalemates: fights.iter().filter(|f| f.outcome.is_none()).count() as u32,
            avg_turns: turns as f64 / count,
            avg_damage_dealt: avg(|f| f.damage_dealt),
            avg_damage_taken: avg(|f| f.damage_taken),
            avg_potions_used: avg(|f| f.potions_used as u64),
            crit_rate: crits as f64 / turns.max(1) as f64,
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.wins as f64 / self.fights.max(1) as f64
    }
}

/// Aggregated results from a whole simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub runs_per_enemy: u32,
    pub enemies: Vec<EnemyReport>,
}

impl SimReport {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 COMBAT SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Fights per enemy: {}\n\n", self.runs_per_enemy));

        report.push_str("── RESULTS ──────────────────────────────────────────────────────\n");
        report.push_str("  Enemy             Win%   Turns   Dealt   Taken  Potions\n");
        report.push_str("  ─────             ────   ─────   ─────   ─────  ───────\n");
        for enemy in &self.enemies {
            report.push_str(&format!(
                "  {:<16} {:>5.1}  {:>6.1}  {:>6.0}  {:>6.0}  {:>7.2}\n",
                enemy.enemy_name,
                enemy.win_rate() * 100.0,
                enemy.avg_turns,
                enemy.avg_damage_dealt,
                enemy.avg_damage_taken,
                enemy.avg_potions_used
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        for enemy in &self.enemies {
            let rating = match enemy.win_rate() {
                r if r >= 0.95 => "TOO EASY",
                r if r >= 0.6 => "GOOD",
                r if r >= 0.2 => "HARD",
                _ => "TOO HARD",
            };
            report.push_str(&format!("  {:<16} {}\n", enemy.enemy_name, rating));
            if enemy.stalemates > 0 {
                report.push_str(&format!(
                    "  ⚠️  {} fights hit the turn limit\n",
                    enemy.stalemates
                ));
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fight(outcome: Option<CombatOutcome>, turns: u32, dealt: u64) -> FightStats {
        FightStats {
            outcome,
            turns,
            damage_dealt: dealt,
            damage_taken: 10,
            crits: 1,
            potions_used: 0,
        }
    }

    #[test]
    fn test_report_generation() {
        let fights = vec![
            fight(Some(CombatOutcome::Victory), 4, 100),
            fight(Some(CombatOutcome::Defeat), 6, 50),
            fight(None, 10, 30),
        ];
        let enemy = EnemyReport::from_fights("goblin", "Lowly Goblin", &fights);

        assert_eq!(enemy.fights, 3);
        assert_eq!(enemy.wins, 1);
        assert_eq!(enemy.losses, 1);
        assert_eq!(enemy.stalemates, 1);
        assert!((enemy.avg_turns - 20.0 / 3.0).abs() < 1e-9);
        assert!((enemy.avg_damage_dealt - 60.0).abs() < 1e-9);
        assert!((enemy.crit_rate - 0.15).abs() < 1e-9);

        let report = SimReport {
            runs_per_enemy: 3,
            enemies: vec![enemy],
        };
        assert!(report.to_text().contains("Lowly Goblin"));
        assert!(report.to_json().contains("\"wins\": 1"));
    }
}
