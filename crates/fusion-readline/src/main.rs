use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use fusion_application::DashboardService;
use fusion_core::{DashboardEvent, FusionConfig, Participant};
use fusion_execution::Scheduler;
use fusion_execution::tracing_layer::{ActivityEvent, ActivityLayer};

mod command;
mod helper;
mod render;

use command::ReplCommand;
use helper::CliHelper;

/// Routes `fusion*` log events into the activity channel, filtered by
/// `FUSION_LOG` (default `warn`).
fn init_tracing(activity_tx: mpsc::UnboundedSender<ActivityEvent>) {
    let filter = EnvFilter::try_from_env("FUSION_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(ActivityLayer::new(activity_tx).with_filter(filter))
        .init();
}

/// The main entry point for the Fusion REPL.
///
/// 1. Loads the config (`FUSION_CONFIG` or the platform default path)
/// 2. Builds the dashboard service and its scheduler, starts the pulse ticker
/// 3. Prints dashboard and activity events from a background task
/// 4. Reads lines: free text is submitted, slash commands inspect or drive state
#[tokio::main]
async fn main() -> Result<()> {
    let (activity_tx, mut activity_rx) = mpsc::unbounded_channel::<ActivityEvent>();
    init_tracing(activity_tx);

    let config_path = std::env::var_os("FUSION_CONFIG").map(PathBuf::from);
    let config = FusionConfig::load(config_path.as_deref())?;
    tracing::debug!(
        "[REPL] Step delay {:?}, tick interval {:?}",
        config.step_delay(),
        config.tick_interval()
    );

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<DashboardEvent>();
    let service = DashboardService::from_settings(&config.dashboard).with_events(event_tx);
    let scheduler = Scheduler::new(service.clone(), &config);
    scheduler.start_pulse_ticker().await;

    let printer = tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(event) = event_rx.recv() => render::event(&event),
                Some(activity) = activity_rx.recv() => render::activity(&activity),
                else => break,
            }
        }
    });

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    let mut selected = Participant::Orchestrator;
    render::banner(selected);

    // ===== Main REPL Loop =====
    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        let command = ReplCommand::parse(&line);
        if !matches!(command, ReplCommand::Empty) {
            let _ = rl.add_history_entry(line.as_str());
        }

        match command {
            ReplCommand::Empty => {}
            ReplCommand::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            ReplCommand::Submit(prompt) => match service.submit(&prompt).await {
                Ok(receipt) => render::receipt(&receipt),
                // Blank prompts are filtered by the parser; anything else is a real fault
                Err(e) => {
                    tracing::warn!("[REPL] Submit failed: {}", e);
                    eprintln!("{}", format!("Submit failed: {}", e).red());
                }
            },
            ReplCommand::RunWorkflow => {
                if service.workflow().await.is_running() {
                    println!("{}", "Restarting the workflow from ingest.".bright_black());
                }
                if !scheduler.run_workflow().await {
                    eprintln!("{}", "Scheduler is shut down.".red());
                }
            }
            ReplCommand::SelectAgent(participant) => {
                selected = participant;
                println!(
                    "{}",
                    format!("Viewing the {} log.", selected.display_name()).bright_black()
                );
            }
            ReplCommand::ShowLog => render::log(selected, &service.log(selected).await),
            ReplCommand::ShowPulses => render::pulses(&service.pulses().await),
            ReplCommand::ShowWorkflow => render::workflow(&service.workflow().await),
            ReplCommand::ShowScore => render::score(service.score().await),
            ReplCommand::Snapshot => {
                let snapshot = service.snapshot().await;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            ReplCommand::Help => render::help(),
            ReplCommand::Invalid(reason) => println!("{}", reason.yellow()),
            ReplCommand::Unknown(name) => {
                println!("{}", format!("Unknown command {name}, try /help").bright_black())
            }
        }
    }

    scheduler.shutdown().await;
    // The activity sender lives in the global subscriber, so the printer never sees a closed channel
    printer.abort();

    Ok(())
}
