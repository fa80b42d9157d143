//! Progression engine: coins, XP, levels, tasks and giveaway draws
//!
//! All mutation goes through [`Engine`]. The pieces below it are usable on
//! their own and are exported for tests and alternative front ends.

mod catalog;
mod chance;
mod engine;
mod error;
mod events;
mod experience;
mod ledger;
mod tasks;

pub use catalog::{
    rank_for, Giveaway, GiveawayStatus, LeaderboardEntry, ShopItem, GIVEAWAYS, LEADERBOARD,
    SHOP_ITEMS,
};
pub use chance::{ChanceResolver, DrawOutcome, FixedSource, RandomSource, RngSource};
pub use engine::{Counters, Engine, Profile, Purchase, Ticket};
pub use error::EngineError;
pub use events::{Notice, ProgressionEvent, Severity};
pub use experience::{ExperienceTracker, LevelTitle, LevelUp, DEFAULT_XP_PER_LEVEL, LEVEL_TITLES};
pub use ledger::Ledger;
pub use tasks::{
    ClaimResult, Task, TaskCategory, TaskDefinition, TaskId, TaskKind, TaskTracker, TASKS,
};
