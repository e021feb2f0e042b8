use std::sync::Arc;

use fusion_core::config::DashboardSettings;
use fusion_core::conversation::Message;
use fusion_core::pulse::InsightPulse;
use fusion_core::workflow::{StepTransition, Workflow};
use fusion_core::{DashboardEvent, Participant, Result};
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

use crate::dashboard::{Dashboard, DashboardSnapshot, SubmissionReceipt};

/// Shared handle to one dashboard.
///
/// Cloning is cheap; every clone sees the same state. Each mutation is
/// published as a [`DashboardEvent`] when an event sender is attached.
#[derive(Clone)]
pub struct DashboardService {
    state: Arc<RwLock<Dashboard>>,
    events: Option<UnboundedSender<DashboardEvent>>,
}

impl DashboardService {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            state: Arc::new(RwLock::new(dashboard)),
            events: None,
        }
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::new(Dashboard::from_settings(settings))
    }

    /// Attaches the channel that receives every [`DashboardEvent`].
    pub fn with_events(mut self, sender: UnboundedSender<DashboardEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    fn emit(&self, event: DashboardEvent) {
        if let Some(sender) = &self.events {
            // Receiver gone means the surface is shutting down
            let _ = sender.send(event);
        }
    }

    /// Submits a prompt. Blank prompts are rejected and nothing is emitted.
    pub async fn submit(&self, prompt: &str) -> Result<SubmissionReceipt> {
        let receipt = {
            let mut dashboard = self.state.write().await;
            dashboard.submit(prompt)?
        };

        tracing::info!(
            "[DashboardService] Prompt fused across {} agents",
            receipt.agent_replies.len()
        );
        self.emit(DashboardEvent::Submitted {
            prompt: receipt.user_message.content.clone(),
            messages_appended: receipt.messages_appended(),
        });
        self.emit(DashboardEvent::PulseAdded {
            pulse: receipt.pulse.clone(),
        });
        Ok(receipt)
    }

    /// Recalibrates the head pulse; `None` when the feed is empty.
    pub async fn tick(&self) -> Option<InsightPulse> {
        let pulse = self.state.write().await.tick()?;
        tracing::debug!("[DashboardService] Recalibrated pulse {}", pulse.id);
        self.emit(DashboardEvent::PulseRecalibrated {
            pulse: pulse.clone(),
        });
        Some(pulse)
    }

    pub async fn reset_workflow(&self) {
        self.state.write().await.reset_workflow();
    }

    /// Applies the next workflow transition and publishes it.
    pub async fn advance_workflow(&self) -> Option<StepTransition> {
        let transition = self.state.write().await.advance_workflow();
        match &transition {
            Some(StepTransition::Started { step_id }) => {
                tracing::info!("[Workflow] Step '{}' running", step_id);
                self.emit(DashboardEvent::StepStarted {
                    step_id: step_id.clone(),
                });
            }
            Some(StepTransition::Completed { step_id }) => {
                tracing::info!("[Workflow] Step '{}' done", step_id);
                self.emit(DashboardEvent::StepCompleted {
                    step_id: step_id.clone(),
                });
            }
            None => {}
        }
        transition
    }

    /// Publishes a workflow lifecycle event that has no state change of its own.
    pub fn notify(&self, event: DashboardEvent) {
        self.emit(event);
    }

    pub async fn score(&self) -> u8 {
        self.state.read().await.score()
    }

    pub async fn workflow(&self) -> Workflow {
        self.state.read().await.workflow().clone()
    }

    pub async fn pulses(&self) -> Vec<InsightPulse> {
        self.state.read().await.pulses().iter().cloned().collect()
    }

    pub async fn log(&self, participant: Participant) -> Vec<Message> {
        self.state.read().await.log(participant).to_vec()
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().await.snapshot()
    }
}
