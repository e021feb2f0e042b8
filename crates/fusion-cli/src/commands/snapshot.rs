use std::path::Path;

use anyhow::{Context, Result};
use fusion_application::{Dashboard, DashboardSnapshot};
use fusion_core::FusionConfig;

pub struct SnapshotArgs {
    pub prompts: Vec<String>,
    pub run_workflow: bool,
    pub ticks: u32,
    pub seed: Option<u64>,
}

pub fn run(config_path: Option<&Path>, args: SnapshotArgs) -> Result<()> {
    let mut config = FusionConfig::load(config_path).context("Failed to load config")?;
    if args.seed.is_some() {
        config.dashboard.seed = args.seed;
    }

    let snapshot = build(&config, &args);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Applies the scripted operations in order: prompts, workflow, ticks.
fn build(config: &FusionConfig, args: &SnapshotArgs) -> DashboardSnapshot {
    let mut dashboard = Dashboard::from_settings(&config.dashboard);

    for prompt in &args.prompts {
        if let Err(e) = dashboard.submit(prompt) {
            tracing::warn!("[snapshot] Skipping prompt: {}", e);
        }
    }
    if args.run_workflow {
        let transitions = dashboard.run_workflow_instant();
        tracing::info!("[snapshot] Workflow ran {} transitions", transitions.len());
    }
    for _ in 0..args.ticks {
        dashboard.tick();
    }

    dashboard.snapshot()
}
