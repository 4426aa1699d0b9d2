//! The game controller.
//!
//! `Game` owns the player record and every piece of transient state around
//! it: notifications, timers, the training session, the combat encounter and
//! the dungeon run. Front ends call its methods and feed it time through
//! [`Game::tick`]; actions are stamped with the time of the latest tick.
//!
//! Each operation validates, transforms, notifies, then saves. A rejected
//! operation leaves the state untouched, becomes an error notification, and
//! is also returned to the caller.

use super::clock::{TimerId, TimerQueue};
use super::config::GameConfig;
use super::error::GameError;
use super::game_state::PlayerState;
use super::notifications::{NotificationId, NotificationKind, NotificationQueue};
use super::progression::{self, LevelUpReport};
use crate::character::attributes::Stat;
use crate::character::derived_stats::DerivedStats;
use crate::combat::data::find_enemy;
use crate::combat::encounter::CombatEncounter;
use crate::combat::types::{CombatAction, CombatEvent, CombatOutcome, CombatPhase};
use crate::dungeon::logic::{abandon_run, claim_rewards, DungeonClaim};
use crate::dungeon::types::{DungeonEvent, DungeonRun, DungeonStep};
use crate::items::inventory::{self, EquipOutcome};
use crate::items::types::{EquipmentSlot, Item};
use crate::quests::logic::{self as quest_logic, QuestCompletion};
use crate::quests::types::Quest;
use crate::shop::logic as shop;
use crate::skills::logic as skill_logic;
use crate::skills::tree::SkillTree;
use crate::skills::types::Skill;
use crate::training::session::{TrainingSession, TrainingTick};
use crate::utils::persistence::SaveStore;
use log::{debug, info, warn};
use rand::rngs::StdRng;

/// Delayed work scheduled on the timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    TrainingTick,
    TrainingClear,
    CombatResolve,
    EnemyTurn,
    DungeonStep,
}

/// Something that happened while processing a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    // ── Training ────────────────────────────────────────────────
    TrainingProgress { stat: Stat, progress: u32 },
    TrainingComplete { stat: Stat, gained: u32 },
    TrainingCleared,

    // ── Combat ──────────────────────────────────────────────────
    Combat(CombatEvent),
    CombatFinished {
        outcome: CombatOutcome,
        exp: u64,
        coins: u64,
    },

    // ── Dungeon ─────────────────────────────────────────────────
    Dungeon(DungeonEvent),

    // ── Progression ─────────────────────────────────────────────
    LeveledUp { new_level: u32 },
}

/// Result of a single [`Game::tick`].
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events in the order their timers fired.
    pub events: Vec<GameEvent>,
    pub notifications_expired: usize,
}

pub struct Game {
    state: PlayerState,
    config: GameConfig,
    skill_tree: SkillTree,
    notifications: NotificationQueue,
    timers: TimerQueue<TimerEvent>,
    training: Option<TrainingSession>,
    training_timer: Option<TimerId>,
    training_clear_timer: Option<TimerId>,
    encounter: Option<CombatEncounter>,
    combat_timer: Option<TimerId>,
    dungeon: Option<DungeonRun>,
    dungeon_timer: Option<TimerId>,
    saves: SaveStore,
    rng: StdRng,
    now_ms: u64,
}

impl Game {
    /// Loads the saved player (or a fresh one) and refreshes the daily
    /// quests if a day has passed since the last batch.
    pub fn new(saves: SaveStore, config: GameConfig, rng: StdRng, now_ms: u64) -> Self {
        let mut state = saves.load();
        let reset = quest_logic::check_and_reset_daily_quests(&mut state, now_ms as i64);
        let skill_tree = SkillTree::build(&state.skills);
        let notifications = NotificationQueue::new(config.notification_ttl_ms);

        let mut game = Self {
            state,
            config,
            skill_tree,
            notifications,
            timers: TimerQueue::new(),
            training: None,
            training_timer: None,
            training_clear_timer: None,
            encounter: None,
            combat_timer: None,
            dungeon: None,
            dungeon_timer: None,
            saves,
            rng,
            now_ms,
        };
        if reset {
            info!("daily quests refreshed");
            game.notify("New daily quests are available!", NotificationKind::Info);
            game.save();
        }
        game
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn skill_tree(&self) -> &SkillTree {
        &self.skill_tree
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn training(&self) -> Option<&TrainingSession> {
        self.training.as_ref()
    }

    pub fn is_training(&self) -> bool {
        self.training.as_ref().is_some_and(|t| t.is_active())
    }

    pub fn encounter(&self) -> Option<&CombatEncounter> {
        self.encounter.as_ref()
    }

    pub fn dungeon(&self) -> Option<&DungeonRun> {
        self.dungeon.as_ref()
    }

    /// Stats with equipment applied, for display.
    pub fn derived_stats(&self) -> DerivedStats {
        DerivedStats::calculate(&self.state)
    }

    /// Stats combat resolves with: the base attributes only.
    pub fn combat_stats(&self) -> DerivedStats {
        DerivedStats::from_stats(self.state.stats, self.state.max_hp)
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // ── Plumbing ────────────────────────────────────────────────

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.notifications.notify(message, kind, self.now_ms)
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) {
        self.notifications.dismiss(id);
    }

    fn save(&mut self) {
        if let Err(e) = self.saves.save(&self.state) {
            warn!("save failed: {}", e);
        }
    }

    /// Runs an operation: save on success, error notification on failure.
    fn apply<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T, GameError>) -> Result<T, GameError> {
        match op(self) {
            Ok(value) => {
                self.save();
                Ok(value)
            }
            Err(e) => {
                debug!("rejected: {}", e);
                self.notify(e.to_string(), NotificationKind::Error);
                Err(e)
            }
        }
    }

    fn announce_level_up(&mut self, report: &LevelUpReport) {
        if report.leveled_up() {
            self.notify(
                format!("Level up! You are now level {}!", report.new_level),
                NotificationKind::Success,
            );
        }
    }

    fn cancel_timer(&mut self, timer: Option<TimerId>) {
        if let Some(id) = timer {
            self.timers.cancel(id);
        }
    }

    // ── Attributes & progression ────────────────────────────────

    pub fn spend_stat_point(&mut self, stat: Stat, amount: u32) -> Result<(), GameError> {
        self.apply(|game| {
            progression::spend_stat_point(&mut game.state, stat, amount)?;
            game.notify(format!("{} increased by {}!", stat, amount), NotificationKind::Success);
            Ok(())
        })
    }

    pub fn lower_stat(&mut self, stat: Stat, amount: u32) -> Result<(), GameError> {
        self.apply(|game| {
            progression::lower_stat(&mut game.state, stat, amount);
            Ok(())
        })
    }

    pub fn gain_experience(&mut self, amount: u64) -> Result<LevelUpReport, GameError> {
        self.apply(|game| {
            let report = progression::gain_experience(&mut game.state, amount);
            game.announce_level_up(&report);
            Ok(report)
        })
    }

    pub fn add_coins(&mut self, amount: u64) -> Result<(), GameError> {
        self.apply(|game| {
            progression::add_coins(&mut game.state, amount);
            Ok(())
        })
    }

    pub fn remove_coins(&mut self, amount: u64) -> Result<(), GameError> {
        self.apply(|game| progression::remove_coins(&mut game.state, amount))
    }

    // ── Inventory ───────────────────────────────────────────────

    pub fn add_item(&mut self, item: Item) -> Result<(), GameError> {
        self.apply(|game| {
            let name = item.name.clone();
            inventory::add_item(&mut game.state, item);
            game.notify(format!("Obtained {}!", name), NotificationKind::Success);
            Ok(())
        })
    }

    pub fn equip_item(&mut self, item_id: &str) -> Result<EquipOutcome, GameError> {
        self.apply(|game| {
            let outcome = inventory::equip_item(&mut game.state, item_id)?;
            let name = game.state.find_item(item_id).map(|i| i.name.clone()).unwrap_or_default();
            game.notify(format!("Equipped {}!", name), NotificationKind::Success);
            Ok(outcome)
        })
    }

    pub fn unequip_item(&mut self, item_id: &str) -> Result<EquipmentSlot, GameError> {
        self.apply(|game| {
            let slot = inventory::unequip_item(&mut game.state, item_id)?;
            let name = game.state.find_item(item_id).map(|i| i.name.clone()).unwrap_or_default();
            game.notify(format!("Unequipped {}!", name), NotificationKind::Info);
            Ok(slot)
        })
    }

    pub fn remove_item(&mut self, item_id: &str) -> Result<Item, GameError> {
        self.apply(|game| inventory::remove_item(&mut game.state, item_id))
    }

    // ── Quests ──────────────────────────────────────────────────

    pub fn add_quest(&mut self, quest: Quest) -> Result<(), GameError> {
        self.apply(|game| {
            quest_logic::add_quest(&mut game.state, quest);
            Ok(())
        })
    }

    pub fn complete_quest(&mut self, quest_id: &str) -> Result<QuestCompletion, GameError> {
        self.apply(|game| {
            let done = quest_logic::complete_quest(&mut game.state, quest_id)?;
            game.notify(
                format!(
                    "Quest completed: {}! +{} EXP, +{} coins",
                    done.title, done.rewards.exp, done.rewards.coins
                ),
                NotificationKind::Success,
            );
            game.announce_level_up(&done.level_up);
            Ok(done)
        })
    }

    /// Regenerates the daily quests when a day has passed. Returns whether
    /// it did.
    pub fn check_daily_quests(&mut self) -> Result<bool, GameError> {
        self.apply(|game| {
            let reset = quest_logic::check_and_reset_daily_quests(&mut game.state, game.now_ms as i64);
            if reset {
                game.notify("New daily quests are available!", NotificationKind::Info);
            }
            Ok(reset)
        })
    }

    // ── Skills ──────────────────────────────────────────────────

    pub fn unlock_skill(&mut self, skill_id: &str) -> Result<Skill, GameError> {
        self.apply(|game| {
            let skill = skill_logic::unlock_skill(&game.skill_tree, &mut game.state, skill_id)?.clone();
            game.notify(format!("Unlocked {}!", skill.name), NotificationKind::Success);
            Ok(skill)
        })
    }

    pub fn upgrade_skill(&mut self, skill_id: &str) -> Result<Skill, GameError> {
        self.apply(|game| {
            let skill = skill_logic::upgrade_skill(&game.skill_tree, &mut game.state, skill_id)?.clone();
            game.notify(
                format!("{} upgraded to level {}!", skill.name, skill.level),
                NotificationKind::Success,
            );
            Ok(skill)
        })
    }

    pub fn add_skill_points(&mut self, amount: u32) -> Result<(), GameError> {
        self.apply(|game| {
            progression::add_skill_points(&mut game.state, amount);
            Ok(())
        })
    }

    // ── Training ────────────────────────────────────────────────

    pub fn start_training(&mut self, stat: Stat) -> Result<(), GameError> {
        self.apply(|game| {
            if game.is_training() {
                return Err(GameError::AlreadyTraining);
            }
            let session = TrainingSession::start(stat, game.config.training_duration_seconds)?;

            // A finished session may still be on display
            let clear = game.training_clear_timer.take();
            game.cancel_timer(clear);

            game.training = Some(session);
            game.training_timer = Some(game.timers.schedule_repeating(
                game.now_ms,
                game.config.training_tick_ms,
                TimerEvent::TrainingTick,
            ));
            game.notify(format!("Started training {}!", stat), NotificationKind::Info);
            Ok(())
        })
    }

    /// Stops the running session without reward. Returns whether there was
    /// one to stop.
    pub fn cancel_training(&mut self) -> Result<bool, GameError> {
        self.apply(|game| {
            if !game.is_training() {
                return Ok(false);
            }
            let timer = game.training_timer.take();
            game.cancel_timer(timer);
            game.training = None;
            game.notify("Training cancelled!", NotificationKind::Info);
            Ok(true)
        })
    }

    fn on_training_tick(&mut self, events: &mut Vec<GameEvent>) {
        let Some(session) = self.training.as_mut() else {
            let timer = self.training_timer.take();
            self.cancel_timer(timer);
            return;
        };
        let stat = session.stat;
        match session.tick() {
            TrainingTick::Progress(progress) => {
                events.push(GameEvent::TrainingProgress { stat, progress });
            }
            TrainingTick::Complete => {
                let timer = self.training_timer.take();
                self.cancel_timer(timer);

                let gained = self.config.training_reward;
                progression::apply_stat_gain(&mut self.state, stat, gained);
                info!("training complete: +{} {}", gained, stat);
                self.notify(
                    format!("Training complete! +{} {}!", gained, stat),
                    NotificationKind::Success,
                );
                self.training_clear_timer = Some(self.timers.schedule(
                    self.now_ms,
                    self.config.training_clear_delay_ms,
                    TimerEvent::TrainingClear,
                ));
                self.save();
                events.push(GameEvent::TrainingComplete { stat, gained });
            }
            TrainingTick::Idle => {
                let timer = self.training_timer.take();
                self.cancel_timer(timer);
            }
        }
    }

    fn on_training_clear(&mut self, events: &mut Vec<GameEvent>) {
        self.training_clear_timer = None;
        if !self.is_training() && self.training.take().is_some() {
            events.push(GameEvent::TrainingCleared);
        }
    }

    // ── Combat ──────────────────────────────────────────────────

    /// Starts a fight. Combat HP starts from the player's current HP and is
    /// tracked by the encounter.
    pub fn start_combat(&mut self, enemy_id: &str) -> Result<(), GameError> {
        self.apply(|game| {
            if game.encounter.as_ref().is_some_and(|e| !e.phase().is_finished()) {
                return Err(GameError::AlreadyInCombat);
            }
            let enemy = find_enemy(enemy_id).ok_or(GameError::EnemyNotFound)?;
            let name = enemy.name.clone();
            let mut encounter = CombatEncounter::new(enemy, game.state.hp, game.state.max_hp);
            encounter.start()?;
            game.encounter = Some(encounter);
            game.notify(format!("{} appears!", name), NotificationKind::Info);
            Ok(())
        })
    }

    /// Takes the player's turn. The result lands after the resolve delay.
    pub fn combat_action(&mut self, action: CombatAction) -> Result<Vec<CombatEvent>, GameError> {
        self.apply(|game| {
            let derived = game.combat_stats();
            let encounter = game.encounter.as_mut().ok_or(GameError::NotInCombat)?;
            let events = encounter.player_act(&action, &derived, &game.state.skills, &mut game.rng)?;
            game.combat_timer = Some(game.timers.schedule(
                game.now_ms,
                game.config.player_turn_delay_ms,
                TimerEvent::CombatResolve,
            ));
            Ok(events)
        })
    }

    fn on_combat_resolve(&mut self, events: &mut Vec<GameEvent>) {
        self.combat_timer = None;
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        match encounter.resolve() {
            Ok(CombatPhase::EnemyTurn) => {
                self.combat_timer = Some(self.timers.schedule(
                    self.now_ms,
                    self.config.enemy_turn_delay_ms,
                    TimerEvent::EnemyTurn,
                ));
            }
            Ok(CombatPhase::Finished(outcome)) => self.finish_combat(outcome, events),
            Ok(_) => {}
            Err(e) => debug!("stale combat resolve: {}", e),
        }
    }

    fn on_enemy_turn(&mut self, events: &mut Vec<GameEvent>) {
        self.combat_timer = None;
        let defense = self.combat_stats().defense;
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        match encounter.enemy_act(defense) {
            Ok(combat_events) => {
                if matches!(encounter.phase(), CombatPhase::Resolving(_)) {
                    self.combat_timer = Some(self.timers.schedule(
                        self.now_ms,
                        self.config.player_turn_delay_ms,
                        TimerEvent::CombatResolve,
                    ));
                }
                events.extend(combat_events.into_iter().map(GameEvent::Combat));
            }
            Err(e) => debug!("stale enemy turn: {}", e),
        }
    }

    fn finish_combat(&mut self, outcome: CombatOutcome, events: &mut Vec<GameEvent>) {
        let Some(encounter) = self.encounter.as_ref() else {
            return;
        };
        let enemy = encounter.enemy.clone();
        let (exp, coins) = match outcome {
            CombatOutcome::Victory => (enemy.reward_exp, enemy.reward_coins),
            _ => (0, 0),
        };

        match outcome {
            CombatOutcome::Victory => {
                info!("defeated {}: +{} exp, +{} coins", enemy.name, exp, coins);
                progression::add_coins(&mut self.state, coins);
                let report = progression::gain_experience(&mut self.state, exp);
                self.notify(
                    format!("Victory! +{} EXP, +{} coins", exp, coins),
                    NotificationKind::Success,
                );
                self.announce_level_up(&report);
                if report.leveled_up() {
                    events.push(GameEvent::LeveledUp {
                        new_level: report.new_level,
                    });
                }
                self.save();
            }
            CombatOutcome::Defeat => {
                self.notify("You have been defeated!", NotificationKind::Error);
            }
            CombatOutcome::Fled => {
                self.notify("Successfully fled from combat!", NotificationKind::Info);
            }
        }
        events.push(GameEvent::CombatFinished {
            outcome,
            exp,
            coins,
        });
    }

    // ── Dungeon ─────────────────────────────────────────────────

    pub fn start_dungeon(&mut self, quest_id: &str) -> Result<(), GameError> {
        self.apply(|game| {
            if game.dungeon.as_ref().is_some_and(|d| !d.step.is_over()) {
                return Err(GameError::AlreadyExploring);
            }
            let quest = game
                .state
                .all_quests()
                .find(|q| q.id == quest_id)
                .ok_or(GameError::QuestNotFound)?;
            game.dungeon = Some(DungeonRun::for_quest(quest)?);
            Ok(())
        })
    }

    pub fn begin_exploration(&mut self) -> Result<(), GameError> {
        self.apply(|game| {
            game.dungeon.as_mut().ok_or(GameError::NotExploring)?.begin()?;
            game.schedule_dungeon_steps();
            Ok(())
        })
    }

    fn schedule_dungeon_steps(&mut self) {
        let previous = self.dungeon_timer.take();
        self.cancel_timer(previous);
        self.dungeon_timer = Some(self.timers.schedule_repeating(
            self.now_ms,
            self.config.dungeon_step_ms,
            TimerEvent::DungeonStep,
        ));
    }

    fn on_dungeon_step(&mut self, events: &mut Vec<GameEvent>) {
        let advanced = match self.dungeon.as_mut() {
            Some(run) => run.advance(&mut self.rng).map(|e| (e, run.step)),
            None => Err(GameError::NotExploring),
        };
        let (dungeon_events, step) = match advanced {
            Ok(result) => result,
            Err(e) => {
                debug!("stale dungeon step: {}", e);
                let timer = self.dungeon_timer.take();
                self.cancel_timer(timer);
                return;
            }
        };
        if step != DungeonStep::Exploration {
            let timer = self.dungeon_timer.take();
            self.cancel_timer(timer);
        }
        for event in dungeon_events {
            self.announce_dungeon_event(&event);
            events.push(GameEvent::Dungeon(event));
        }
    }

    fn announce_dungeon_event(&mut self, event: &DungeonEvent) {
        let kind = match event {
            DungeonEvent::TrapTriggered => NotificationKind::Error,
            DungeonEvent::MonsterEncountered | DungeonEvent::MonsterAvoided => NotificationKind::Info,
            _ => NotificationKind::Success,
        };
        if let Some(message) = event.message() {
            self.notify(message, kind);
        }
    }

    /// Settles a dungeon monster: fight (always wins) or avoid it.
    pub fn resolve_dungeon_monster(&mut self, fight: bool) -> Result<DungeonEvent, GameError> {
        self.apply(|game| {
            let run = game.dungeon.as_mut().ok_or(GameError::NotExploring)?;
            let event = run.resolve_monster(fight, &mut game.rng)?;
            game.announce_dungeon_event(&event);
            game.schedule_dungeon_steps();
            Ok(event)
        })
    }

    pub fn claim_dungeon_rewards(&mut self) -> Result<DungeonClaim, GameError> {
        self.apply(|game| {
            let run = game.dungeon.as_mut().ok_or(GameError::NotExploring)?;
            let claim = claim_rewards(&mut game.state, run)?;
            game.notify(
                format!(
                    "Dungeon rewards claimed: +{} coins, +{} EXP",
                    claim.rewards.coins, claim.rewards.exp
                ),
                NotificationKind::Success,
            );
            game.announce_level_up(&claim.level_up);
            if let Some(quest) = &claim.quest {
                game.announce_level_up(&quest.level_up);
            }
            Ok(claim)
        })
    }

    /// Leaves the dungeon keeping only the coins found so far.
    pub fn abandon_dungeon(&mut self) -> Result<u64, GameError> {
        self.apply(|game| {
            let run = game.dungeon.as_mut().ok_or(GameError::NotExploring)?;
            let coins = abandon_run(&mut game.state, run)?;
            let timer = game.dungeon_timer.take();
            game.cancel_timer(timer);
            game.notify(
                format!("You retreated from the dungeon with {} coins.", coins),
                NotificationKind::Info,
            );
            Ok(coins)
        })
    }

    // ── Shop ────────────────────────────────────────────────────

    pub fn buy_quest(&mut self, catalog_id: &str) -> Result<Quest, GameError> {
        self.apply(|game| {
            let quest = shop::buy_quest(&mut game.state, catalog_id)?;
            game.notify(format!("Purchased quest: {}!", quest.title), NotificationKind::Success);
            Ok(quest)
        })
    }

    pub fn buy_item(&mut self, catalog_id: &str) -> Result<Item, GameError> {
        self.apply(|game| {
            let item = shop::buy_item(&mut game.state, catalog_id)?;
            game.notify(format!("Purchased item: {}!", item.name), NotificationKind::Success);
            Ok(item)
        })
    }

    pub fn sell_item(&mut self, item_id: &str) -> Result<Item, GameError> {
        self.apply(|game| {
            let item = shop::sell_item(&mut game.state, item_id)?;
            game.notify(
                format!("Sold {} for {} coins!", item.name, item.value),
                NotificationKind::Success,
            );
            Ok(item)
        })
    }

    // ── Time ────────────────────────────────────────────────────

    /// Advances the game to `now_ms`: fires every due timer in order and
    /// drops expired notifications. Time never moves backwards.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let now_ms = now_ms.max(self.now_ms);
        let mut result = TickResult::default();

        while let Some(fired) = self.timers.pop_next(now_ms) {
            debug!("timer {:?} fired at {}: {:?}", fired.id, fired.due_ms, fired.event);
            // Handlers run at the timer's own due time so follow-up timers
            // keep exact spacing
            self.now_ms = fired.due_ms.max(self.now_ms);
            match fired.event {
                TimerEvent::TrainingTick => self.on_training_tick(&mut result.events),
                TimerEvent::TrainingClear => self.on_training_clear(&mut result.events),
                TimerEvent::CombatResolve => self.on_combat_resolve(&mut result.events),
                TimerEvent::EnemyTurn => self.on_enemy_turn(&mut result.events),
                TimerEvent::DungeonStep => self.on_dungeon_step(&mut result.events),
            }
        }

        self.now_ms = now_ms;
        result.notifications_expired = self.notifications.expire(now_ms);
        result
    }
}
