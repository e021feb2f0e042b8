//! Application layer for Fusion.
//!
//! `Dashboard` is the owned state container with synchronous transitions;
//! `DashboardService` shares it behind an async lock and publishes events.

pub mod dashboard;
pub mod service;

pub use dashboard::{Dashboard, DashboardSnapshot, LogSnapshot, SubmissionReceipt};
pub use service::DashboardService;
