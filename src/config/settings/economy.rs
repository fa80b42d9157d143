//! Economy and reward tuning

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Prices of progress: leveling curve and giveaway odds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomySettings {
    /// XP needed for each level
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: u64,

    /// Chance that a giveaway entry wins (0.0 - 1.0)
    #[serde(default = "default_win_probability")]
    pub win_probability: f64,

    /// Smallest giveaway payout (inclusive)
    #[serde(default = "default_payout_min")]
    pub payout_min: u64,

    /// Largest giveaway payout (inclusive)
    #[serde(default = "default_payout_max")]
    pub payout_max: u64,
}

fn default_xp_per_level() -> u64 {
    3_600
}

fn default_win_probability() -> f64 {
    0.3
}

fn default_payout_min() -> u64 {
    200
}

fn default_payout_max() -> u64 {
    699
}

impl EconomySettings {
    pub fn payout_range(&self) -> RangeInclusive<u64> {
        self.payout_min..=self.payout_max
    }
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            xp_per_level: default_xp_per_level(),
            win_probability: default_win_probability(),
            payout_min: default_payout_min(),
            payout_max: default_payout_max(),
        }
    }
}

/// XP granted per action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSettings {
    /// XP for winning a giveaway
    #[serde(default = "default_win_xp")]
    pub win_xp: u64,

    /// XP for buying a shop item
    #[serde(default = "default_purchase_xp")]
    pub purchase_xp: u64,

    /// XP for claiming a one-shot task (daily login)
    #[serde(default = "default_login_claim_xp")]
    pub login_claim_xp: u64,

    /// XP for claiming a progress task
    #[serde(default = "default_progress_claim_xp")]
    pub progress_claim_xp: u64,
}

fn default_win_xp() -> u64 {
    150
}

fn default_purchase_xp() -> u64 {
    50
}

fn default_login_claim_xp() -> u64 {
    100
}

fn default_progress_claim_xp() -> u64 {
    200
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            win_xp: default_win_xp(),
            purchase_xp: default_purchase_xp(),
            login_claim_xp: default_login_claim_xp(),
            progress_claim_xp: default_progress_claim_xp(),
        }
    }
}
