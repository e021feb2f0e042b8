//! Domain layer for the Fusion dashboard.
//!
//! Holds the participants, message logs, reply synthesis, the scripted
//! workflow, the telemetry pulse feed and the derived intelligence score.
//! Nothing here performs I/O apart from reading the config file.

pub mod agent;
pub mod config;
pub mod conversation;
pub mod error;
pub mod event;
pub mod participant;
pub mod pulse;
pub mod score;
pub mod workflow;

// Re-export common types
pub use config::FusionConfig;
pub use error::{FusionError, Result};
pub use event::DashboardEvent;
pub use participant::{AGENTS, Participant};
