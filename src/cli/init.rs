//! Init command implementation

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use nygames::config::{write_config_atomic, Config};

/// Default configuration content for nygames init
pub const DEFAULT_CONFIG: &str = r#"# New Year Games configuration
# ============================
#
# Every session starts from [profile] and forgets everything on exit.

# ============================================================================
# PROFILE - Starting state of a session
# ============================================================================
[profile]
name = "NewYearPro_2025"
balance = 12500
level = 7
xp = 2340
wins = 24
games_played = 127
total_earned = 47320
login_streak = 5

# ============================================================================
# ECONOMY - Leveling curve and giveaway odds
# ============================================================================
#
#   xp_per_level     - XP needed for each level
#   win_probability  - Chance a giveaway entry wins (0.0 - 1.0)
#   payout_min/max   - Inclusive coin range paid on a win
[economy]
xp_per_level = 3600
win_probability = 0.3
payout_min = 200
payout_max = 699

# ============================================================================
# REWARDS - XP per action
# ============================================================================
[rewards]
win_xp = 150
purchase_xp = 50
login_claim_xp = 100
progress_claim_xp = 200

# ============================================================================
# SESSION - Timing and randomness
# ============================================================================
#
#   drumroll_ms - Suspense delay before a giveaway result is revealed
#   seed        - Uncomment for reproducible draws
[session]
drumroll_ms = 2000
# seed = 2025
"#;

/// Write a fresh configuration file.
///
/// Target: `config_path` if given, else `~/.nygames/config.toml` with
/// `global`, else `.nygames/config.toml` under `work_dir`.
pub async fn init_command(
    work_dir: &Path,
    config_path: Option<PathBuf>,
    global: bool,
    force: bool,
) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path,
        None if global => Config::global_config_path(),
        None => Config::local_config_path(work_dir),
    };

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_config_atomic(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_defaults() {
        let parsed = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[tokio::test]
    async fn test_init_writes_into_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        init_command(dir.path(), None, false, false).await.unwrap();

        let written = dir.path().join(".nygames/config.toml");
        assert_eq!(Config::from_dir(dir.path()).unwrap(), Config::default());
        assert!(written.exists());

        assert!(init_command(dir.path(), None, false, false).await.is_err());
        init_command(dir.path(), None, false, true).await.unwrap();
    }
}
