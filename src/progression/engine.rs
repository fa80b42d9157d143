//! Progression engine - the single entry point for user actions
//!
//! Owns the ledger, experience tracker, task tracker, catalogs and counters.
//! Every action that moves a counter pushes the new value into the task
//! tracker before it returns, so task progress is never stale when the UI
//! reads it.
//!
//! Giveaway draws are two-step: [`Engine::join_giveaway`] takes the fee and
//! hands out a [`Ticket`], and [`Engine::settle_draw`] resolves it later. A
//! ticket only settles against the session generation that issued it, so
//! [`Engine::reset`] invalidates every outstanding draw.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use super::catalog::{
    rank_for, Giveaway, GiveawayStatus, LeaderboardEntry, ShopItem, GIVEAWAYS, LEADERBOARD,
    SHOP_ITEMS,
};
use super::chance::{ChanceResolver, DrawOutcome, RandomSource};
use super::error::EngineError;
use super::events::ProgressionEvent;
use super::experience::ExperienceTracker;
use super::ledger::Ledger;
use super::tasks::{ClaimResult, Task, TaskId, TaskKind, TaskTracker, TASKS};
use crate::config::Config;

/// Counters that feed task progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    /// Giveaways joined in the current daily cycle
    pub giveaway_joins: u32,
    /// Giveaways joined over the player's lifetime
    pub games_played: u32,
    pub shop_purchases: u32,
    pub wins: u32,
    pub level: u32,
    pub login_streak: u32,
}

impl Counters {
    /// Counter value for a task kind (None for kinds without a counter)
    pub fn value_for(&self, kind: TaskKind) -> Option<u32> {
        match kind {
            TaskKind::Giveaway => Some(self.giveaway_joins),
            TaskKind::Play => Some(self.games_played),
            TaskKind::Shop => Some(self.shop_purchases),
            TaskKind::Win => Some(self.wins),
            TaskKind::Level => Some(self.level),
            TaskKind::Streak => Some(self.login_streak),
            TaskKind::Login | TaskKind::Invite => None,
        }
    }
}

const COUNTED_KINDS: [TaskKind; 6] = [
    TaskKind::Giveaway,
    TaskKind::Play,
    TaskKind::Shop,
    TaskKind::Win,
    TaskKind::Level,
    TaskKind::Streak,
];

/// Handle for a giveaway draw that has been paid for but not resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ticket {
    pub id: u64,
    pub giveaway_id: u32,
    generation: u64,
}

/// A completed shop purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Purchase {
    pub item_id: u32,
    pub name: &'static str,
    pub cost: u64,
    pub balance_after: u64,
}

/// Read-only snapshot for the profile and home screens
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub balance: u64,
    pub level: u32,
    pub title: &'static str,
    pub xp: u64,
    pub xp_per_level: u64,
    pub xp_fraction: f64,
    pub wins: u32,
    pub rank: usize,
    pub games_played: u32,
    /// Wins over games played (0.0 - 1.0)
    pub win_rate: f64,
    pub total_earned: u64,
    pub login_streak: u32,
    pub owned_items: Vec<&'static str>,
    pub ready_tasks: usize,
}

/// The progression engine
#[derive(Debug)]
pub struct Engine {
    config: Config,
    generation: u64,
    ledger: Ledger,
    experience: ExperienceTracker,
    tasks: TaskTracker,
    chance: ChanceResolver,
    giveaways: Vec<Giveaway>,
    shop: Vec<ShopItem>,
    leaderboard: Vec<LeaderboardEntry>,
    counters: Counters,
    owned_items: Vec<u32>,
    /// Unsettled tickets: ticket id -> giveaway id
    pending: HashMap<u64, u32>,
    next_ticket: u64,
    events: Vec<ProgressionEvent>,
}

impl Engine {
    /// Create an engine; draws are seeded from `config.session.seed` when set.
    ///
    /// Fails with [`EngineError::InvalidConfig`] for settings that
    /// [`Config::validate`] rejects.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        let payout = config.economy.payout_range();
        let chance = match config.session.seed {
            Some(seed) => ChanceResolver::seeded(seed, payout),
            None => ChanceResolver::from_entropy(payout),
        };
        Self::with_resolver(config, chance)
    }

    /// Create an engine drawing from a custom random source
    pub fn with_source(
        config: Config,
        source: Box<dyn RandomSource>,
    ) -> Result<Self, EngineError> {
        let chance = ChanceResolver::new(source, config.economy.payout_range());
        Self::with_resolver(config, chance)
    }

    fn with_resolver(config: Config, chance: ChanceResolver) -> Result<Self, EngineError> {
        config
            .validate()
            .map_err(|err| EngineError::InvalidConfig(err.to_string()))?;

        let mut engine = Self {
            ledger: Ledger::default(),
            experience: ExperienceTracker::new(1, 0, config.economy.xp_per_level),
            tasks: TaskTracker::new(TASKS, 0, 0),
            chance,
            giveaways: Vec::new(),
            shop: Vec::new(),
            leaderboard: Vec::new(),
            counters: Counters::default(),
            owned_items: Vec::new(),
            pending: HashMap::new(),
            next_ticket: 1,
            events: Vec::new(),
            generation: 0,
            config,
        };
        engine.seed_state();
        Ok(engine)
    }

    /// Load session state from the configured starting profile
    fn seed_state(&mut self) {
        let profile = &self.config.profile;
        let rewards = &self.config.rewards;

        self.ledger = Ledger::with_earnings(profile.balance, profile.total_earned);
        self.experience =
            ExperienceTracker::new(profile.level, profile.xp, self.config.economy.xp_per_level);
        self.tasks = TaskTracker::new(TASKS, rewards.login_claim_xp, rewards.progress_claim_xp);
        self.giveaways = GIVEAWAYS.to_vec();
        self.shop = SHOP_ITEMS.to_vec();
        self.leaderboard = LEADERBOARD.to_vec();
        self.counters = Counters {
            giveaway_joins: 0,
            games_played: profile.games_played,
            shop_purchases: 0,
            wins: profile.wins,
            level: self.experience.level(),
            login_streak: profile.login_streak,
        };
        self.owned_items.clear();
        self.pending.clear();
        self.events.clear();

        // Starting counters may already satisfy some tasks; that is not news
        for kind in COUNTED_KINDS {
            if let Some(value) = self.counters.value_for(kind) {
                self.tasks.update_progress(kind, value);
            }
        }
    }

    /// Throw away the session and start over from the starting profile.
    ///
    /// Outstanding tickets are invalidated.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.seed_state();
        info!("Session reset (generation {})", self.generation);
    }

    // ========================================
    // ACTIONS
    // ========================================

    /// Pay the entry fee for a giveaway and get a ticket for the draw
    pub fn join_giveaway(&mut self, giveaway_id: u32) -> Result<Ticket, EngineError> {
        let index = self
            .giveaways
            .iter()
            .position(|g| g.id == giveaway_id)
            .ok_or_else(|| EngineError::not_found("giveaway", giveaway_id))?;

        let giveaway = &self.giveaways[index];
        if giveaway.status == GiveawayStatus::Ended {
            return Err(EngineError::GiveawayClosed(giveaway_id));
        }
        let fee = giveaway.cost;
        let title = giveaway.title;

        self.debit(fee)?;
        let giveaway = &mut self.giveaways[index];
        giveaway.participants = giveaway.participants.saturating_add(1);

        let ticket = Ticket {
            id: self.next_ticket,
            giveaway_id,
            generation: self.generation,
        };
        self.next_ticket += 1;
        self.pending.insert(ticket.id, giveaway_id);

        debug!(
            "Joined giveaway #{} for {} coins (ticket #{})",
            giveaway_id, fee, ticket.id
        );
        self.events.push(ProgressionEvent::GiveawayJoined {
            giveaway_id,
            title,
            fee,
            ticket: ticket.id,
        });

        self.counters.giveaway_joins += 1;
        self.counters.games_played += 1;
        self.sync_progress(TaskKind::Giveaway);
        self.sync_progress(TaskKind::Play);

        Ok(ticket)
    }

    /// Resolve a ticket's draw and apply the outcome.
    ///
    /// On a win the payout is credited, the win counter goes up and the win XP
    /// is awarded. A loss changes nothing (the fee is already gone).
    pub fn settle_draw(&mut self, ticket: Ticket) -> Result<DrawOutcome, EngineError> {
        if ticket.generation != self.generation || self.pending.remove(&ticket.id).is_none() {
            debug!("Dropping stale ticket #{}", ticket.id);
            return Err(EngineError::StaleTicket(ticket.id));
        }

        let outcome = self.chance.resolve(self.config.economy.win_probability);
        if outcome.won {
            info!(
                "Ticket #{} won {} coins in giveaway #{}",
                ticket.id, outcome.payout, ticket.giveaway_id
            );
            self.ledger.credit(outcome.payout);
            self.events.push(ProgressionEvent::GiveawayWon {
                giveaway_id: ticket.giveaway_id,
                payout: outcome.payout,
            });
            self.counters.wins += 1;
            self.sync_progress(TaskKind::Win);
            self.award_xp(self.config.rewards.win_xp, "giveaway win");
        } else {
            debug!("Ticket #{} lost", ticket.id);
            self.events.push(ProgressionEvent::GiveawayLost {
                giveaway_id: ticket.giveaway_id,
            });
        }

        Ok(outcome)
    }

    /// Buy a shop item
    pub fn buy_item(&mut self, item_id: u32) -> Result<Purchase, EngineError> {
        let item = self
            .shop
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| EngineError::not_found("shop item", item_id))?;
        let (name, cost) = (item.name, item.cost);

        self.debit(cost)?;
        self.owned_items.push(item_id);
        debug!("Bought {} for {} coins", name, cost);
        self.events.push(ProgressionEvent::ItemPurchased {
            item_id,
            name,
            cost,
        });

        self.counters.shop_purchases += 1;
        self.sync_progress(TaskKind::Shop);
        self.award_xp(self.config.rewards.purchase_xp, "purchase");

        Ok(Purchase {
            item_id,
            name,
            cost,
            balance_after: self.ledger.balance(),
        })
    }

    /// Claim a task's reward: coins to the ledger, XP to the tracker.
    ///
    /// Claiming the daily login also extends the login streak. The invite task
    /// is a stub: its claim succeeds with a placeholder result and grants
    /// nothing.
    pub fn claim_task(&mut self, task_id: TaskId) -> Result<ClaimResult, EngineError> {
        let result = self.tasks.claim(task_id)?;
        self.events.push(ProgressionEvent::TaskClaimed(result.clone()));

        if result.placeholder {
            debug!("Task '{}' is a placeholder, nothing granted", task_id);
            return Ok(result);
        }

        info!(
            "Claimed task '{}': +{} coins, +{} XP",
            task_id, result.reward, result.xp_award
        );
        self.ledger.credit(result.reward);

        let is_login = self
            .tasks
            .get(task_id)
            .is_some_and(|t| t.kind == TaskKind::Login);
        if is_login {
            self.counters.login_streak += 1;
            self.events.push(ProgressionEvent::StreakExtended {
                days: self.counters.login_streak,
            });
            self.sync_progress(TaskKind::Streak);
        }

        self.award_xp(result.xp_award, &format!("task {}", task_id));
        Ok(result)
    }

    /// Begin the next daily cycle: daily tasks reset and the per-day join
    /// counter starts from zero
    pub fn start_new_cycle(&mut self) {
        self.tasks.start_new_cycle();
        self.counters.giveaway_joins = 0;
        self.sync_progress(TaskKind::Giveaway);
        info!("Started a new daily cycle");
    }

    // ========================================
    // QUERIES
    // ========================================

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn level(&self) -> u32 {
        self.experience.level()
    }

    pub fn xp(&self) -> u64 {
        self.experience.xp()
    }

    pub fn xp_fraction(&self) -> f64 {
        self.experience.progress_fraction()
    }

    pub fn wins(&self) -> u32 {
        self.counters.wins
    }

    pub fn rank(&self) -> usize {
        rank_for(&self.leaderboard, self.counters.wins)
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    pub fn giveaways(&self) -> &[Giveaway] {
        &self.giveaways
    }

    pub fn shop(&self) -> &[ShopItem] {
        &self.shop
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    /// Number of paid draws that have not been settled yet
    pub fn pending_draws(&self) -> usize {
        self.pending.len()
    }

    pub fn profile(&self) -> Profile {
        let games = self.counters.games_played;
        Profile {
            name: self.config.profile.name.clone(),
            balance: self.ledger.balance(),
            level: self.experience.level(),
            title: self.experience.title(),
            xp: self.experience.xp(),
            xp_per_level: self.experience.xp_per_level(),
            xp_fraction: self.experience.progress_fraction(),
            wins: self.counters.wins,
            rank: self.rank(),
            games_played: games,
            win_rate: if games == 0 {
                0.0
            } else {
                self.counters.wins as f64 / games as f64
            },
            total_earned: self.ledger.total_earned(),
            login_streak: self.counters.login_streak,
            owned_items: self
                .owned_items
                .iter()
                .filter_map(|id| self.shop.iter().find(|i| i.id == *id))
                .map(|i| i.name)
                .collect(),
            ready_tasks: self.tasks.ready_count(),
        }
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<ProgressionEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================
    // INTERNALS
    // ========================================

    fn debit(&mut self, amount: u64) -> Result<(), EngineError> {
        self.ledger.debit(amount).inspect_err(|err| {
            if let EngineError::InsufficientFunds {
                needed,
                balance,
                shortfall,
            } = *err
            {
                debug!("Insufficient funds: need {}, have {}", needed, balance);
                self.events.push(ProgressionEvent::InsufficientFunds {
                    needed,
                    balance,
                    shortfall,
                });
            }
        })
    }

    /// Push the current counter for `kind` into the task tracker
    fn sync_progress(&mut self, kind: TaskKind) {
        let Some(value) = self.counters.value_for(kind) else {
            return;
        };
        for task_id in self.tasks.update_progress(kind, value) {
            if let Some(task) = self.tasks.get(task_id) {
                info!("Task '{}' is ready to claim", task_id);
                self.events.push(ProgressionEvent::TaskReady {
                    task_id,
                    title: task.title,
                });
            }
        }
    }

    fn award_xp(&mut self, amount: u64, reason: &str) {
        if amount == 0 {
            return;
        }
        self.events.push(ProgressionEvent::XpAwarded {
            amount,
            reason: reason.to_string(),
        });

        let level_ups = self.experience.award(amount);
        if level_ups.is_empty() {
            return;
        }
        for level_up in level_ups {
            info!(
                "Level up: {} -> {} ({})",
                level_up.old_level, level_up.new_level, level_up.new_title
            );
            self.events.push(ProgressionEvent::LevelUp(level_up));
        }
        self.counters.level = self.experience.level();
        self.sync_progress(TaskKind::Level);
    }
}
