//! Status command implementation

use anyhow::Result;

use nygames::{Config, Engine};

/// Show the player's dashboard for a fresh session
pub async fn status_command(config: Config, json: bool) -> Result<()> {
    let engine = Engine::new(config)?;
    let profile = engine.profile();

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("{} - level {} {}\n", profile.name, profile.level, profile.title);
    println!("  Balance:      {} coins", profile.balance);
    println!(
        "  XP:           {} / {} ({:.0}% to level {})",
        profile.xp,
        profile.xp_per_level,
        profile.xp_fraction * 100.0,
        profile.level + 1
    );
    println!("  Wins:         {}", profile.wins);
    println!("  Rank:         #{}", profile.rank);
    println!("  Games played: {}", profile.games_played);
    println!("  Win rate:     {:.1}%", profile.win_rate * 100.0);
    println!("  Total earned: {} coins", profile.total_earned);
    println!("  Login streak: {} days", profile.login_streak);

    if profile.ready_tasks > 0 {
        println!("\n  {} task(s) ready to claim", profile.ready_tasks);
    }

    Ok(())
}
