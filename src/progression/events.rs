//! Events produced by engine operations and their user-facing notices

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::experience::LevelUp;
use super::tasks::{ClaimResult, TaskId};

/// Something the UI may want to surface after an action
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProgressionEvent {
    GiveawayJoined {
        giveaway_id: u32,
        title: &'static str,
        fee: u64,
        ticket: u64,
    },
    GiveawayWon {
        giveaway_id: u32,
        payout: u64,
    },
    GiveawayLost {
        giveaway_id: u32,
    },
    InsufficientFunds {
        needed: u64,
        balance: u64,
        shortfall: u64,
    },
    ItemPurchased {
        item_id: u32,
        name: &'static str,
        cost: u64,
    },
    TaskReady {
        task_id: TaskId,
        title: &'static str,
    },
    TaskClaimed(ClaimResult),
    XpAwarded {
        amount: u64,
        reason: String,
    },
    LevelUp(LevelUp),
    StreakExtended {
        days: u32,
    },
}

/// How a notice should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    /// Shown as a destructive/error toast
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A human-readable notification
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl ProgressionEvent {
    /// Render as a notice
    pub fn notice(&self) -> Notice {
        match self {
            Self::GiveawayJoined { title, fee, .. } => Notice::new(
                Severity::Info,
                "Entered giveaway",
                format!("You joined \"{}\" for {} coins. Drawing...", title, fee),
            ),
            Self::GiveawayWon { payout, .. } => Notice::new(
                Severity::Success,
                "You won!",
                format!("Congratulations! +{} coins", payout),
            ),
            Self::GiveawayLost { .. } => Notice::new(
                Severity::Info,
                "Not this time",
                "Better luck in the next giveaway",
            ),
            Self::InsufficientFunds { shortfall, .. } => Notice::new(
                Severity::Warning,
                "Not enough coins",
                format!("You need {} more coins", shortfall),
            ),
            Self::ItemPurchased { name, cost, .. } => Notice::new(
                Severity::Success,
                "Purchase complete",
                format!("{} is yours for {} coins", name, cost),
            ),
            Self::TaskReady { title, .. } => Notice::new(
                Severity::Info,
                "Task complete",
                format!("\"{}\" is ready to claim", title),
            ),
            Self::TaskClaimed(claim) if claim.placeholder => Notice::new(
                Severity::Info,
                "Coming soon",
                "Invitations are not available yet",
            ),
            Self::TaskClaimed(claim) => Notice::new(
                Severity::Success,
                "Reward claimed",
                format!("+{} coins, +{} XP", claim.reward, claim.xp_award),
            ),
            Self::XpAwarded { amount, reason } => {
                Notice::new(Severity::Info, "XP", format!("+{} XP ({})", amount, reason))
            }
            Self::LevelUp(level_up) => Notice::new(
                Severity::Success,
                "Level up!",
                format!(
                    "You reached level {} - {}",
                    level_up.new_level, level_up.new_title
                ),
            ),
            Self::StreakExtended { days } => Notice::new(
                Severity::Info,
                "Streak",
                format!("Login streak: {} days", days),
            ),
        }
    }
}
