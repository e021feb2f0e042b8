//! Terminal rendering for the REPL.

use colored::{ColoredString, Colorize};
use fusion_application::SubmissionReceipt;
use fusion_core::conversation::Message;
use fusion_core::pulse::{InsightPulse, Trend};
use fusion_core::workflow::{StepStatus, Workflow};
use fusion_core::{DashboardEvent, Participant};
use fusion_execution::tracing_layer::ActivityEvent;

pub fn banner(selected: Participant) {
    println!("{}", "=== Fusion REPL ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a prompt to brief every agent, '/run' to start the workflow, '/help' for more, or 'quit' to exit."
            .bright_black()
    );
    println!("{}", format!("Viewing the {} log.", selected.display_name()).bright_black());
    println!();
}

pub fn help() {
    let lines = [
        ("<text>", "brief all three agents and the orchestrator"),
        ("/run", "run the four-step workflow (restarts a run in progress)"),
        ("/agent <name>", "choose which log /log shows"),
        ("/log", "print the selected log"),
        ("/pulses", "print the telemetry pulse feed"),
        ("/workflow", "print workflow step statuses"),
        ("/score", "print the Fusion IQ"),
        ("/snapshot", "print the full state as JSON"),
        ("quit", "exit"),
    ];
    for (usage, what) in lines {
        println!("  {:<16}{}", usage.bright_cyan(), what.bright_black());
    }
}

fn author(participant: Participant) -> ColoredString {
    let label = format!("[{}]", participant.display_name());
    match participant {
        Participant::User => label.green(),
        Participant::Orchestrator => label.bright_yellow(),
        _ => label.bright_magenta(),
    }
}

fn message(message: &Message) {
    println!(
        "{} {}",
        author(message.from),
        message.timestamp.format("%H:%M:%S").to_string().bright_black()
    );
    for line in message.content.lines() {
        if message.from == Participant::User {
            println!("{}", line.green());
        } else {
            println!("{}", line.bright_blue());
        }
    }
    println!();
}

pub fn receipt(receipt: &SubmissionReceipt) {
    for reply in &receipt.agent_replies {
        message(reply);
    }
    message(&receipt.orchestrator_reply);
}

pub fn log(participant: Participant, messages: &[Message]) {
    if messages.is_empty() {
        println!("{}", format!("The {} log is empty.", participant.display_name()).bright_black());
        return;
    }
    for entry in messages {
        message(entry);
    }
}

fn trend(trend: Trend) -> ColoredString {
    match trend {
        Trend::Up => "▲".green(),
        Trend::Down => "▼".red(),
        Trend::Steady => "■".yellow(),
    }
}

fn pulse(pulse: &InsightPulse) {
    println!(
        "  {} {} {} {}",
        trend(pulse.trend),
        pulse.title.bold(),
        pulse.delta.cyan(),
        format!("({})", pulse.source).bright_black()
    );
    println!("    {}", pulse.signal.bright_black());
}

pub fn pulses(pulses: &[InsightPulse]) {
    if pulses.is_empty() {
        println!("{}", "No pulses yet.".bright_black());
    }
    for entry in pulses {
        pulse(entry);
    }
}

pub fn workflow(workflow: &Workflow) {
    for step in workflow.steps() {
        let status = match step.status {
            StepStatus::Idle => "idle".bright_black(),
            StepStatus::Running => "running".yellow(),
            StepStatus::Done => "done".green(),
        };
        println!(
            "  {:<8} {:<20} {:<10} {} {}",
            step.id.bright_cyan(),
            step.title,
            status,
            step.owner.display_name().bright_magenta(),
            format!("eta {}", step.eta).bright_black()
        );
    }
}

pub fn score(score: u8) {
    println!("{} {}", "Fusion IQ".bright_magenta().bold(), score.to_string().bold());
}

pub fn event(event: &DashboardEvent) {
    match event {
        DashboardEvent::Submitted {
            messages_appended, ..
        } => {
            println!(
                "{}",
                format!("{messages_appended} messages logged").bright_black()
            );
        }
        DashboardEvent::PulseAdded { pulse: added } => {
            println!("{}", "New pulse:".bright_yellow());
            pulse(added);
        }
        DashboardEvent::PulseRecalibrated { pulse: head } => {
            println!(
                "{}",
                format!("Pulse recalibrated: {} {}", head.title, head.delta).bright_black()
            );
        }
        DashboardEvent::StepStarted { step_id } => {
            println!("{}", format!("▶ {step_id} running").yellow());
        }
        DashboardEvent::StepCompleted { step_id } => {
            println!("{}", format!("✔ {step_id} done").green());
        }
        DashboardEvent::WorkflowFinished => {
            println!("{}", "Workflow complete.".bright_green());
        }
        DashboardEvent::WorkflowCancelled => {
            println!("{}", "Workflow run cancelled.".yellow());
        }
    }
}

pub fn activity(activity: &ActivityEvent) {
    let line = format!("[{}] {}", activity.level, activity.message);
    match activity.level.as_str() {
        "ERROR" => eprintln!("{}", line.red()),
        "WARN" => eprintln!("{}", line.yellow()),
        _ => eprintln!("{}", line.bright_black()),
    }
}
