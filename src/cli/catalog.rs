//! Listing commands: tasks, giveaways, shop, leaderboard

use anyhow::Result;

use nygames::progression::{GiveawayStatus, TaskCategory};
use nygames::{Config, Engine};

/// List tasks grouped by category
pub async fn tasks_command(config: Config) -> Result<()> {
    let engine = Engine::new(config)?;

    for category in [
        TaskCategory::Daily,
        TaskCategory::Bonus,
        TaskCategory::Achievement,
    ] {
        println!("{}:", category.label());
        for task in engine.tasks().iter().filter(|t| t.category == category) {
            let state = if task.claimed {
                "claimed".to_string()
            } else if task.completed {
                "ready".to_string()
            } else {
                match (task.progress, task.max_progress) {
                    (Some(progress), Some(max)) => format!("{}/{}", progress, max),
                    _ => "open".to_string(),
                }
            };
            println!(
                "  {:<16} [{:>7}] {} - {} (+{} coins)",
                task.id, state, task.title, task.description, task.reward
            );
        }
        println!();
    }

    Ok(())
}

/// List giveaways
pub async fn giveaways_command(config: Config) -> Result<()> {
    let engine = Engine::new(config)?;

    println!("Giveaways ({}):\n", engine.giveaways().len());
    for giveaway in engine.giveaways() {
        let status = match giveaway.status {
            GiveawayStatus::Active => "active",
            GiveawayStatus::Ended => "ended",
        };
        println!(
            "  #{} [{}] {} - prize: {}",
            giveaway.id, status, giveaway.title, giveaway.prize
        );
        println!(
            "    Entry: {} coins, participants: {}/{} ({:.0}%), ends: {}",
            giveaway.cost,
            giveaway.participants,
            giveaway.max_participants,
            giveaway.fill_fraction() * 100.0,
            giveaway.ends_in
        );
    }

    Ok(())
}

/// List shop items
pub async fn shop_command(config: Config) -> Result<()> {
    let engine = Engine::new(config)?;
    let balance = engine.balance();

    println!("Shop (balance: {} coins):\n", balance);
    for item in engine.shop() {
        let affordable = if item.cost <= balance { "" } else { " (can't afford)" };
        println!(
            "  #{} {} - {} - {} coins{}",
            item.id, item.name, item.description, item.cost, affordable
        );
    }

    Ok(())
}

/// Show the top-10 leaderboard and the player's rank
pub async fn leaderboard_command(config: Config) -> Result<()> {
    let engine = Engine::new(config)?;

    println!("Top {} players:\n", engine.leaderboard().len());
    for (index, player) in engine.leaderboard().iter().enumerate() {
        println!(
            "  #{:<2} {} {:<16} {:>4} wins {:>7} coins",
            index + 1,
            player.avatar,
            player.name,
            player.wins,
            player.coins
        );
    }
    println!("\nYour rank: #{} ({} wins)", engine.rank(), engine.wins());

    Ok(())
}
