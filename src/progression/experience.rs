//! XP and level tracking
//!
//! Every level costs the same amount of XP. Surplus XP rolls into as many level
//! increments as it covers, so `0 <= xp < xp_per_level` holds after every award.

use serde::Serialize;

/// Default XP needed to advance one level
pub const DEFAULT_XP_PER_LEVEL: u64 = 3600;

/// Title shown next to the level number
#[derive(Debug, Clone)]
pub struct LevelTitle {
    pub from_level: u32,
    pub title: &'static str,
}

/// Level titles (must be sorted by level)
pub static LEVEL_TITLES: &[LevelTitle] = &[
    LevelTitle {
        from_level: 1,
        title: "Snowflake",
    },
    LevelTitle {
        from_level: 5,
        title: "Snowman",
    },
    LevelTitle {
        from_level: 10,
        title: "Gift Wrapper",
    },
    LevelTitle {
        from_level: 20,
        title: "Reindeer Rider",
    },
    LevelTitle {
        from_level: 35,
        title: "Frost Mage",
    },
    LevelTitle {
        from_level: 50,
        title: "Grandfather Frost",
    },
];

impl LevelTitle {
    /// Title for a given level
    pub fn for_level(level: u32) -> &'static str {
        LEVEL_TITLES
            .iter()
            .rev()
            .find(|t| level >= t.from_level)
            .map(|t| t.title)
            .unwrap_or(LEVEL_TITLES[0].title)
    }
}

/// A level up event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
    pub new_title: &'static str,
}

/// XP and level state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceTracker {
    xp: u64,
    level: u32,
    xp_per_level: u64,
}

impl ExperienceTracker {
    /// Create a tracker, normalizing any surplus XP in the starting values.
    ///
    /// Level-ups produced by the normalization are discarded.
    pub fn new(level: u32, xp: u64, xp_per_level: u64) -> Self {
        let mut tracker = Self {
            xp,
            level: level.max(1),
            xp_per_level: xp_per_level.max(1),
        };
        tracker.normalize();
        tracker
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp_per_level(&self) -> u64 {
        self.xp_per_level
    }

    pub fn title(&self) -> &'static str {
        LevelTitle::for_level(self.level)
    }

    /// XP still needed for the next level
    pub fn xp_to_next(&self) -> u64 {
        self.xp_per_level - self.xp
    }

    /// Progress to the next level (0.0 - 1.0, never reaching 1.0)
    pub fn progress_fraction(&self) -> f64 {
        self.xp as f64 / self.xp_per_level as f64
    }

    /// Award XP and return one event per level crossed
    pub fn award(&mut self, amount: u64) -> Vec<LevelUp> {
        self.xp = self.xp.saturating_add(amount);
        self.normalize()
    }

    fn normalize(&mut self) -> Vec<LevelUp> {
        let mut level_ups = Vec::new();
        while self.xp >= self.xp_per_level {
            self.xp -= self.xp_per_level;
            let old_level = self.level;
            self.level = self.level.saturating_add(1);
            level_ups.push(LevelUp {
                old_level,
                new_level: self.level,
                new_title: LevelTitle::for_level(self.level),
            });
        }
        level_ups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_below_threshold() {
        let mut tracker = ExperienceTracker::new(7, 2340, DEFAULT_XP_PER_LEVEL);
        assert!(tracker.award(100).is_empty());
        assert_eq!(tracker.xp(), 2440);
        assert_eq!(tracker.level(), 7);
    }

    #[test]
    fn test_award_crossing_one_threshold() {
        for (old_xp, award) in [(2340, 1260), (3599, 1), (0, 3600), (3000, 4000)] {
            let mut tracker = ExperienceTracker::new(7, old_xp, DEFAULT_XP_PER_LEVEL);
            let level_ups = tracker.award(award);
            assert_eq!(level_ups.len(), 1);
            assert_eq!(level_ups[0].old_level, 7);
            assert_eq!(level_ups[0].new_level, 8);
            assert_eq!(tracker.level(), 8);
            assert_eq!(tracker.xp(), old_xp + award - DEFAULT_XP_PER_LEVEL);
        }
    }

    #[test]
    fn test_award_crossing_several_thresholds() {
        let mut tracker = ExperienceTracker::new(1, 100, 1000);
        let level_ups = tracker.award(3_500);
        let levels: Vec<u32> = level_ups.iter().map(|l| l.new_level).collect();
        assert_eq!(levels, vec![2, 3, 4]);
        assert_eq!(tracker.level(), 4);
        assert_eq!(tracker.xp(), 600);
    }

    #[test]
    fn test_progress_fraction() {
        let tracker = ExperienceTracker::new(7, 2340, DEFAULT_XP_PER_LEVEL);
        assert!((tracker.progress_fraction() - 0.65).abs() < 1e-9);
        assert_eq!(tracker.xp_to_next(), 1260);
    }

    #[test]
    fn test_new_normalizes_surplus() {
        let tracker = ExperienceTracker::new(0, 7300, DEFAULT_XP_PER_LEVEL);
        assert_eq!(tracker.level(), 3);
        assert_eq!(tracker.xp(), 100);
    }

    #[test]
    fn test_level_titles() {
        assert_eq!(LevelTitle::for_level(1), "Snowflake");
        assert_eq!(LevelTitle::for_level(7), "Snowman");
        assert_eq!(LevelTitle::for_level(10), "Gift Wrapper");
        assert_eq!(LevelTitle::for_level(500), "Grandfather Frost");
    }
}
