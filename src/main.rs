use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use nygames::Config;

mod cli;

#[derive(Parser)]
#[command(name = "nygames")]
#[command(about = "New Year Games - coins, giveaways, tasks and levels")]
#[command(version)]
struct Cli {
    /// Path to the working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (default lookup: .nygames/config.toml, nygames.toml, ~/.nygames/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible giveaway draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show balance, level, wins and rank
    Status {
        /// Print JSON instead of human output
        #[arg(long)]
        json: bool,
    },

    /// List daily, bonus and achievement tasks
    Tasks,

    /// List prize giveaways
    Giveaways,

    /// List shop items
    Shop,

    /// Show the top-10 leaderboard
    Leaderboard,

    /// Play a scripted session, e.g. `play join:1 buy:4 claim:daily_login`
    Play {
        /// Actions: join:<giveaway>, buy:<item>, claim:<task>, new-day, wait
        #[arg(required = true)]
        actions: Vec<String>,

        /// Override the giveaway drumroll delay (milliseconds)
        #[arg(long)]
        drumroll_ms: Option<u64>,
    },

    /// Write a default .nygames/config.toml into the working directory
    Init {
        /// Write ~/.nygames/config.toml instead
        #[arg(long)]
        global: bool,

        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let work_dir = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = || load_config(cli.config.as_deref(), &work_dir, cli.seed);

    match cli.command.unwrap_or(Commands::Status { json: false }) {
        Commands::Status { json } => cli::status::status_command(config()?, json).await?,
        Commands::Tasks => cli::catalog::tasks_command(config()?).await?,
        Commands::Giveaways => cli::catalog::giveaways_command(config()?).await?,
        Commands::Shop => cli::catalog::shop_command(config()?).await?,
        Commands::Leaderboard => cli::catalog::leaderboard_command(config()?).await?,
        Commands::Play {
            actions,
            drumroll_ms,
        } => cli::play::play_command(config()?, actions, drumroll_ms).await?,
        Commands::Init { global, force } => {
            cli::init::init_command(&work_dir, cli.config.clone(), global, force).await?
        }
    }

    Ok(())
}

/// Load the config file (explicit path, else lookup from the working directory)
fn load_config(path: Option<&Path>, work_dir: &Path, seed: Option<u64>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_dir(work_dir)?,
    };
    if seed.is_some() {
        config.session.seed = seed;
    }
    Ok(config)
}
