//! Giveaways, shop items and the leaderboard seed

use serde::Serialize;

/// Giveaway lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GiveawayStatus {
    Active,
    Ended,
}

/// A prize giveaway that costs coins to enter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Giveaway {
    pub id: u32,
    pub title: &'static str,
    pub prize: &'static str,
    /// Entry fee in coins
    pub cost: u64,
    /// Entrant count shown on the card; entries are never capped by it
    pub participants: u32,
    pub max_participants: u32,
    /// Human-readable time left
    pub ends_in: &'static str,
    pub status: GiveawayStatus,
}

impl Giveaway {
    /// Fill ratio for the participants bar (0.0 - 1.0)
    pub fn fill_fraction(&self) -> f64 {
        if self.max_participants == 0 {
            1.0
        } else {
            (self.participants as f64 / self.max_participants as f64).min(1.0)
        }
    }
}

pub static GIVEAWAYS: &[Giveaway] = &[
    Giveaway {
        id: 1,
        title: "New Year Mega Prize",
        prize: "10,000 coins",
        cost: 100,
        participants: 87,
        max_participants: 100,
        ends_in: "2h 15m",
        status: GiveawayStatus::Active,
    },
    Giveaway {
        id: 2,
        title: "Christmas VIP",
        prize: "Premium status",
        cost: 250,
        participants: 45,
        max_participants: 50,
        ends_in: "5h 30m",
        status: GiveawayStatus::Active,
    },
    Giveaway {
        id: 3,
        title: "Winter Boost",
        prize: "x2 experience",
        cost: 75,
        participants: 100,
        max_participants: 100,
        ends_in: "Ended",
        status: GiveawayStatus::Ended,
    },
];

/// A cosmetic shop item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub icon: &'static str,
}

pub static SHOP_ITEMS: &[ShopItem] = &[
    ShopItem {
        id: 1,
        name: "Santa's Luck",
        description: "+10% win chance",
        cost: 500,
        icon: "sparkles",
    },
    ShopItem {
        id: 2,
        name: "Frosty Coins",
        description: "x2 coins for 1 hour",
        cost: 1000,
        icon: "coins",
    },
    ShopItem {
        id: 3,
        name: "Royal Fir Tree",
        description: "VIP status for a week",
        cost: 2500,
        icon: "crown",
    },
    ShopItem {
        id: 4,
        name: "New Year Energy",
        description: "+50 energy",
        cost: 300,
        icon: "zap",
    },
];

/// A rival player on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    pub wins: u32,
    pub coins: u64,
    pub avatar: &'static str,
}

/// Top-10 players (sorted by wins, descending)
pub static LEADERBOARD: &[LeaderboardEntry] = &[
    LeaderboardEntry {
        name: "SnowKing",
        wins: 156,
        coins: 45_000,
        avatar: "🎅",
    },
    LeaderboardEntry {
        name: "FrostQueen",
        wins: 143,
        coins: 42_300,
        avatar: "❄️",
    },
    LeaderboardEntry {
        name: "FirTreeHero",
        wins: 128,
        coins: 38_900,
        avatar: "🎄",
    },
    LeaderboardEntry {
        name: "NewYearStar",
        wins: 115,
        coins: 35_600,
        avatar: "⭐",
    },
    LeaderboardEntry {
        name: "HappySnowman",
        wins: 98,
        coins: 29_800,
        avatar: "⛄",
    },
    LeaderboardEntry {
        name: "ChristmasPro",
        wins: 87,
        coins: 26_500,
        avatar: "🎁",
    },
    LeaderboardEntry {
        name: "ProGamer2025",
        wins: 76,
        coins: 23_400,
        avatar: "🎮",
    },
    LeaderboardEntry {
        name: "FireDragon",
        wins: 65,
        coins: 19_800,
        avatar: "🐉",
    },
    LeaderboardEntry {
        name: "WinterMagic",
        wins: 54,
        coins: 16_200,
        avatar: "✨",
    },
    LeaderboardEntry {
        name: "NewYearThunder",
        wins: 43,
        coins: 13_100,
        avatar: "⚡",
    },
];

/// 1-based rank of a player with `wins` among `board`; ties share the better rank
pub fn rank_for(board: &[LeaderboardEntry], wins: u32) -> usize {
    1 + board.iter().filter(|p| p.wins > wins).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_sorted() {
        assert!(LEADERBOARD.windows(2).all(|w| w[0].wins >= w[1].wins));
    }

    #[test]
    fn test_rank_for() {
        assert_eq!(rank_for(LEADERBOARD, 24), 11);
        assert_eq!(rank_for(LEADERBOARD, 80), 7);
        assert_eq!(rank_for(LEADERBOARD, 156), 1);
        assert_eq!(rank_for(LEADERBOARD, 500), 1);
        assert_eq!(rank_for(&[], 0), 1);
    }

    #[test]
    fn test_giveaway_fill_fraction() {
        let mega = &GIVEAWAYS[0];
        assert!((mega.fill_fraction() - 0.87).abs() < 1e-9);

        let ended = &GIVEAWAYS[2];
        assert_eq!(ended.fill_fraction(), 1.0);
        assert_eq!(ended.status, GiveawayStatus::Ended);

        let overbooked = Giveaway {
            participants: 130,
            ..mega.clone()
        };
        assert_eq!(overbooked.fill_fraction(), 1.0);
    }
}
