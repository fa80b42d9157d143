//! Configuration loading and management

mod io;
mod settings;

pub use io::{write_config_atomic, LOCAL_CONFIG_PATH};
pub use settings::{EconomySettings, ProfileSettings, RewardSettings, SessionSettings};

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Starting state of every session
    #[serde(default)]
    pub profile: ProfileSettings,

    /// Leveling curve and giveaway odds
    #[serde(default)]
    pub economy: EconomySettings,

    /// XP per action
    #[serde(default)]
    pub rewards: RewardSettings,

    /// Timing and randomness
    #[serde(default)]
    pub session: SessionSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a working directory.
    ///
    /// Looks for: `.nygames/config.toml`, then `nygames.toml`, then the global
    /// `~/.nygames/config.toml`. Falls back to defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let candidates = [
            Self::local_config_path(dir),
            dir.join("nygames.toml"),
            Self::global_config_path(),
        ];

        for path in candidates {
            if path.exists() {
                tracing::debug!("Loading config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        let economy = &self.economy;
        if !(0.0..=1.0).contains(&economy.win_probability) {
            bail!(
                "economy.win_probability must be between 0 and 1, got {}",
                economy.win_probability
            );
        }
        if economy.payout_min > economy.payout_max {
            bail!(
                "economy.payout_min ({}) is greater than economy.payout_max ({})",
                economy.payout_min,
                economy.payout_max
            );
        }
        if economy.xp_per_level == 0 {
            bail!("economy.xp_per_level must be positive");
        }
        if self.profile.level == 0 {
            bail!("profile.level starts at 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.profile.balance, 12_500);
        assert_eq!(config.economy.xp_per_level, 3_600);
        assert_eq!(config.economy.payout_range(), 200..=699);
        assert_eq!(config.rewards.win_xp, 150);
        assert_eq!(config.session.seed, None);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            [profile]
            balance = 50

            [economy]
            win_probability = 1.0

            [session]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.profile.balance, 50);
        assert_eq!(config.profile.level, 7);
        assert_eq!(config.economy.win_probability, 1.0);
        assert_eq!(config.session.seed, Some(7));
        assert_eq!(config.session.drumroll_ms, 2_000);
    }

    #[test]
    fn test_validation_errors() {
        let bad = [
            "[economy]\nwin_probability = 1.5",
            "[economy]\npayout_min = 700\npayout_max = 100",
            "[economy]\nxp_per_level = 0",
            "[profile]\nlevel = 0",
        ];
        for content in bad {
            assert!(Config::from_toml(content).is_err(), "accepted: {}", content);
        }
    }

    #[test]
    fn test_from_dir_prefers_project_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".nygames")).unwrap();
        std::fs::write(
            dir.path().join(".nygames/config.toml"),
            "[profile]\nbalance = 1",
        )
        .unwrap();
        std::fs::write(dir.path().join("nygames.toml"), "[profile]\nbalance = 2").unwrap();

        let config = Config::from_dir(dir.path()).unwrap();
        assert_eq!(config.profile.balance, 1);
    }
}
