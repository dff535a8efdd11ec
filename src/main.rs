use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use xp_engine::EngineConfig;

mod cli;

#[derive(Parser)]
#[command(name = "xp-engine")]
#[command(about = "XP and level progression engine with a burst-merging notification queue")]
#[command(version)]
struct Cli {
    /// Path to an engine config file (TOML); defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the level descriptor for a total XP count
    Level {
        /// Total accumulated XP (negative values clamp to 0)
        total_xp: i64,
    },

    /// Show the badge catalog with unlock state at a level
    Badges {
        level: u32,
    },

    /// Show the XP reward for a user action
    Reward {
        /// Action tag, e.g. output_submitted
        action: String,

        /// Quality score 0-10 for verification actions
        #[arg(long)]
        quality: Option<u8>,
    },

    /// Show the features unlocked at a level and profile completion
    Features {
        level: u32,

        /// Profile completion percentage 0-100
        #[arg(long, default_value_t = 0)]
        profile: u8,
    },

    /// Replay a JSON-lines notification stream through the merge queue
    Simulate {
        /// Input file (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
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
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Level { total_xp } => {
            cli::level::level_command(total_xp).await?;
        }
        Commands::Badges { level } => {
            cli::badges::badges_command(&config, level).await?;
        }
        Commands::Reward { action, quality } => {
            cli::reward::reward_command(&action, quality).await?;
        }
        Commands::Features { level, profile } => {
            cli::features::features_command(level, profile).await?;
        }
        Commands::Simulate { input } => {
            cli::simulate::simulate_command(config.queue_config(), input.as_deref()).await?;
        }
    }

    Ok(())
}
