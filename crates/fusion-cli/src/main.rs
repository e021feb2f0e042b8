use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fusion-cli")]
#[command(about = "Fusion CLI - scripted runs of the simulated orchestration dashboard", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit prompts, optionally run the workflow and ticks, then print the state as JSON
    Snapshot {
        /// Prompt to submit; repeat for several submissions in order
        #[arg(short, long = "prompt")]
        prompts: Vec<String>,
        /// Run the workflow to completion after the prompts
        #[arg(long)]
        run_workflow: bool,
        /// Number of pulse recalibration ticks to apply
        #[arg(long, default_value_t = 0)]
        ticks: u32,
        /// RNG seed, overriding the config
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Compute the Fusion IQ for a pulse count and active step count
    Score {
        #[arg(long, default_value_t = 0)]
        pulses: usize,
        #[arg(long, default_value_t = 0)]
        active: usize,
    },
    /// List the built-in agents
    Agents,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("FUSION_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot {
            prompts,
            run_workflow,
            ticks,
            seed,
        } => commands::snapshot::run(
            cli.config.as_deref(),
            commands::snapshot::SnapshotArgs {
                prompts,
                run_workflow,
                ticks,
                seed,
            },
        )?,
        Commands::Score { pulses, active } => commands::score::run(pulses, active),
        Commands::Agents => commands::agents::run(),
    }

    Ok(())
}
