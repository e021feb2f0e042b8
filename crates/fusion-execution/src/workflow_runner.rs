use std::sync::Arc;
use std::time::Duration;

use fusion_application::DashboardService;
use fusion_core::DashboardEvent;
use fusion_core::workflow::StepTransition;
use tokio_util::sync::CancellationToken;

use crate::delay::{StepDelay, TokioDelay};

/// How a workflow run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    Cancelled,
}

/// Drives the workflow through its steps with a pause while each one runs.
///
/// One run: reset every step to idle, then for each step in order set it
/// running, wait `step_delay`, set it done.
#[derive(Clone)]
pub struct WorkflowRunner {
    service: DashboardService,
    delay: Arc<dyn StepDelay>,
    step_delay: Duration,
}

impl WorkflowRunner {
    pub fn new(service: DashboardService, step_delay: Duration) -> Self {
        Self::with_delay(service, step_delay, Arc::new(TokioDelay))
    }

    pub fn with_delay(
        service: DashboardService,
        step_delay: Duration,
        delay: Arc<dyn StepDelay>,
    ) -> Self {
        Self {
            service,
            delay,
            step_delay,
        }
    }

    /// Runs the workflow until every step is done or `cancel` fires.
    ///
    /// A token that is already cancelled leaves the workflow untouched. On
    /// cancellation mid-run the steps keep whatever status they had; the next
    /// run resets them.
    pub async fn run(&self, cancel: CancellationToken) -> RunOutcome {
        if cancel.is_cancelled() {
            return self.cancelled(None);
        }
        tracing::info!("[WorkflowRunner] Run started");
        self.service.reset_workflow().await;

        loop {
            if cancel.is_cancelled() {
                return self.cancelled(None);
            }
            let Some(transition) = self.service.advance_workflow().await else {
                break;
            };
            if matches!(transition, StepTransition::Started { .. }) {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        return self.cancelled(Some(transition.step_id()));
                    }
                    _ = self.delay.wait(self.step_delay) => {}
                }
            }
        }

        tracing::info!("[WorkflowRunner] Run finished");
        self.service.notify(DashboardEvent::WorkflowFinished);
        RunOutcome::Finished
    }

    fn cancelled(&self, during: Option<&str>) -> RunOutcome {
        match during {
            Some(step_id) => tracing::info!("[WorkflowRunner] Run cancelled during '{}'", step_id),
            None => tracing::info!("[WorkflowRunner] Run cancelled"),
        }
        self.service.notify(DashboardEvent::WorkflowCancelled);
        RunOutcome::Cancelled
    }
}
