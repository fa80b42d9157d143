//! Starting profile for a new session

use serde::{Deserialize, Serialize};

/// Values every session starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Display name shown on the profile card
    #[serde(default = "default_name")]
    pub name: String,

    /// Starting coin balance
    #[serde(default = "default_balance")]
    pub balance: u64,

    /// Starting level (1 or more)
    #[serde(default = "default_level")]
    pub level: u32,

    /// XP already earned toward the next level
    #[serde(default = "default_xp")]
    pub xp: u64,

    /// Giveaways won before this session
    #[serde(default = "default_wins")]
    pub wins: u32,

    /// Giveaways entered before this session
    #[serde(default = "default_games_played")]
    pub games_played: u32,

    /// Lifetime coins earned before this session
    #[serde(default = "default_total_earned")]
    pub total_earned: u64,

    /// Consecutive daily logins before this session
    #[serde(default = "default_login_streak")]
    pub login_streak: u32,
}

fn default_name() -> String {
    "NewYearPro_2025".to_string()
}

fn default_balance() -> u64 {
    12_500
}

fn default_level() -> u32 {
    7
}

fn default_xp() -> u64 {
    2_340
}

fn default_wins() -> u32 {
    24
}

fn default_games_played() -> u32 {
    127
}

fn default_total_earned() -> u64 {
    47_320
}

fn default_login_streak() -> u32 {
    5
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            balance: default_balance(),
            level: default_level(),
            xp: default_xp(),
            wins: default_wins(),
            games_played: default_games_played(),
            total_earned: default_total_earned(),
            login_streak: default_login_streak(),
        }
    }
}
