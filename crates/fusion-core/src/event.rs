use serde::{Deserialize, Serialize};

use crate::pulse::InsightPulse;

/// State changes published by the dashboard so surfaces can redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// A prompt was accepted and every log received its exchange.
    Submitted { prompt: String, messages_appended: usize },
    /// A pulse was prepended to the feed.
    PulseAdded { pulse: InsightPulse },
    /// The head pulse was recalibrated by the periodic tick.
    PulseRecalibrated { pulse: InsightPulse },
    /// A workflow step moved to `running`.
    StepStarted { step_id: String },
    /// A workflow step moved to `done`.
    StepCompleted { step_id: String },
    /// Every workflow step is `done`.
    WorkflowFinished,
    /// A workflow run was cancelled before finishing.
    WorkflowCancelled,
}
