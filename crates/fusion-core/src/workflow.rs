//! Workflow simulator domain model.
//!
//! A fixed, ordered list of four steps. Each run resets every step to `idle`
//! and then walks them strictly in order: `idle → running → done`. At most one
//! step is `running` at any time and there is no failure state.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{FusionError, Result};
use crate::participant::Participant;

/// Lifecycle status of a workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StepStatus {
    Idle,
    Running,
    Done,
}

/// One step of the scripted workflow. Only `status` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub owner: Participant,
    pub status: StepStatus,
    /// Display-only estimate, e.g. "45s"
    pub eta: String,
}

/// A single status change produced by [`Workflow::advance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepTransition {
    /// The step moved `idle → running`.
    Started { step_id: String },
    /// The step moved `running → done`.
    Completed { step_id: String },
}

impl StepTransition {
    pub fn step_id(&self) -> &str {
        match self {
            StepTransition::Started { step_id } | StepTransition::Completed { step_id } => step_id,
        }
    }
}

/// Step ids in run order.
pub const STEP_IDS: [&str; 4] = ["ingest", "research", "plan", "execute"];

fn step(id: &str, title: &str, description: &str, owner: Participant, eta: &str) -> WorkflowStep {
    WorkflowStep {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        owner,
        status: StepStatus::Idle,
        eta: eta.to_string(),
    }
}

/// The scripted four-step workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    steps: Vec<WorkflowStep>,
}

impl Workflow {
    /// Builds the standard `ingest → research → plan → execute` workflow, all idle.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                step(
                    STEP_IDS[0],
                    "Ingest context",
                    "Collect the conversation thread and normalize the request.",
                    Participant::Orchestrator,
                    "15s",
                ),
                step(
                    STEP_IDS[1],
                    "Parallel research",
                    "Gather supporting evidence and market signals.",
                    Participant::Gemini,
                    "45s",
                ),
                step(
                    STEP_IDS[2],
                    "Strategic plan",
                    "Weigh risks and shape the recommended approach.",
                    Participant::Claude,
                    "30s",
                ),
                step(
                    STEP_IDS[3],
                    "Execute & report",
                    "Turn the plan into deliverables and publish the summary.",
                    Participant::ChatGpt,
                    "20s",
                ),
            ],
        }
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    /// Puts every step back to `idle`.
    pub fn reset(&mut self) {
        for step in &mut self.steps {
            step.status = StepStatus::Idle;
        }
    }

    /// Performs the next transition of a run, if any.
    ///
    /// A running step completes first; otherwise the first idle step starts.
    /// Returns `None` once every step is done.
    pub fn advance(&mut self) -> Option<StepTransition> {
        if let Some(step) = self
            .steps
            .iter_mut()
            .find(|s| s.status == StepStatus::Running)
        {
            step.status = StepStatus::Done;
            return Some(StepTransition::Completed {
                step_id: step.id.clone(),
            });
        }

        let step = self
            .steps
            .iter_mut()
            .find(|s| s.status == StepStatus::Idle)?;
        step.status = StepStatus::Running;
        Some(StepTransition::Started {
            step_id: step.id.clone(),
        })
    }

    /// Moves a specific step `idle → running`.
    ///
    /// Fails unless every earlier step is done and nothing else is running.
    pub fn start(&mut self, step_id: &str) -> Result<()> {
        let idx = self.index_of(step_id)?;
        if self.steps[idx].status != StepStatus::Idle {
            return Err(FusionError::invalid_transition(step_id, "step is not idle"));
        }
        if self.steps[..idx].iter().any(|s| s.status != StepStatus::Done) {
            return Err(FusionError::invalid_transition(
                step_id,
                "earlier steps have not finished",
            ));
        }
        self.steps[idx].status = StepStatus::Running;
        Ok(())
    }

    /// Moves a specific step `running → done`.
    pub fn complete(&mut self, step_id: &str) -> Result<()> {
        let idx = self.index_of(step_id)?;
        if self.steps[idx].status != StepStatus::Running {
            return Err(FusionError::invalid_transition(
                step_id,
                "step is not running",
            ));
        }
        self.steps[idx].status = StepStatus::Done;
        Ok(())
    }

    /// Resets and runs the whole workflow without delays, returning every
    /// transition in order.
    pub fn run_to_completion(&mut self) -> Vec<StepTransition> {
        self.reset();
        std::iter::from_fn(|| self.advance()).collect()
    }

    /// Number of steps not in `idle`.
    pub fn active_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status != StepStatus::Idle)
            .count()
    }

    pub fn is_running(&self) -> bool {
        self.steps.iter().any(|s| s.status == StepStatus::Running)
    }

    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|s| s.status == StepStatus::Done)
    }

    fn index_of(&self, step_id: &str) -> Result<usize> {
        self.steps
            .iter()
            .position(|s| s.id == step_id)
            .ok_or_else(|| FusionError::invalid_transition(step_id, "no such step"))
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(workflow: &Workflow) -> Vec<StepStatus> {
        workflow.steps().iter().map(|s| s.status).collect()
    }

    #[test]
    fn test_standard_workflow_order() {
        let workflow = Workflow::standard();
        let ids: Vec<&str> = workflow.steps().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, STEP_IDS);
        assert_eq!(workflow.active_count(), 0);
    }

    #[test]
    fn test_advance_walks_steps_in_order() {
        let mut workflow = Workflow::standard();

        assert_eq!(
            workflow.advance(),
            Some(StepTransition::Started {
                step_id: "ingest".to_string()
            })
        );
        assert_eq!(
            statuses(&workflow),
            vec![
                StepStatus::Running,
                StepStatus::Idle,
                StepStatus::Idle,
                StepStatus::Idle
            ]
        );

        assert_eq!(
            workflow.advance(),
            Some(StepTransition::Completed {
                step_id: "ingest".to_string()
            })
        );
        assert_eq!(workflow.advance().unwrap().step_id(), "research");
    }

    #[test]
    fn test_run_to_completion() {
        let mut workflow = Workflow::standard();
        let transitions = workflow.run_to_completion();

        assert_eq!(transitions.len(), 8);
        for (pair, id) in transitions.chunks(2).zip(STEP_IDS) {
            assert_eq!(
                pair[0],
                StepTransition::Started {
                    step_id: id.to_string()
                }
            );
            assert_eq!(
                pair[1],
                StepTransition::Completed {
                    step_id: id.to_string()
                }
            );
        }
        assert!(workflow.is_complete());
        assert_eq!(workflow.active_count(), 4);
        assert_eq!(workflow.advance(), None);
    }

    #[test]
    fn test_rerun_resets_first() {
        let mut workflow = Workflow::standard();
        workflow.run_to_completion();
        workflow.reset();
        assert_eq!(workflow.active_count(), 0);
        assert!(!workflow.is_complete());
    }

    #[test]
    fn test_manual_transitions_are_sequential() {
        let mut workflow = Workflow::standard();

        let err = workflow.start("plan").unwrap_err();
        assert!(err.is_invalid_transition());

        let err = workflow.complete("ingest").unwrap_err();
        assert!(err.is_invalid_transition());

        workflow.start("ingest").unwrap();
        assert!(workflow.start("research").is_err());
        workflow.complete("ingest").unwrap();
        workflow.start("research").unwrap();
        assert!(workflow.is_running());

        assert!(workflow.start("deploy").is_err());
    }
}
