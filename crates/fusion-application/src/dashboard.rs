//! The dashboard state container.
//!
//! `Dashboard` owns the conversation store, the workflow and the pulse feed
//! together with the random source. Each public operation is a synchronous
//! transition over that owned state; timers and sharing live in the layers
//! above.

use chrono::{DateTime, Utc};
use fusion_core::agent::agent_profiles;
use fusion_core::config::DashboardSettings;
use fusion_core::conversation::synthesis::{
    CONTEXT_DEPTH, format_context, fuse_replies, synthesize_reply,
};
use fusion_core::conversation::{ConversationStore, Message};
use fusion_core::pulse::{InsightPulse, PulseFeed};
use fusion_core::score::intelligence_score;
use fusion_core::workflow::{StepTransition, Workflow};
use fusion_core::{FusionError, Participant, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Everything produced by one accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub user_message: Message,
    /// Agent replies in display order
    pub agent_replies: Vec<Message>,
    pub orchestrator_reply: Message,
    pub pulse: InsightPulse,
}

impl SubmissionReceipt {
    /// Messages appended across all logs.
    pub fn messages_appended(&self) -> usize {
        (self.agent_replies.len() + 1) * 2
    }
}

/// Serializable view of the full dashboard state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub score: u8,
    pub logs: Vec<LogSnapshot>,
    pub workflow: Workflow,
    pub pulses: Vec<InsightPulse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogSnapshot {
    pub participant: Participant,
    pub messages: Vec<Message>,
}

/// Owned state of one dashboard.
pub struct Dashboard<R: Rng = StdRng> {
    conversation: ConversationStore,
    workflow: Workflow,
    pulses: PulseFeed,
    rng: R,
}

impl Dashboard<StdRng> {
    /// Builds a dashboard from settings, seeding the RNG when a seed is set.
    pub fn from_settings(settings: &DashboardSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, settings)
    }
}

impl<R: Rng> Dashboard<R> {
    pub fn with_rng(rng: R, settings: &DashboardSettings) -> Self {
        let conversation = if settings.seed_thread {
            ConversationStore::with_welcome_thread(Utc::now())
        } else {
            ConversationStore::new()
        };
        let pulses = if settings.seed_pulses {
            PulseFeed::seeded()
        } else {
            PulseFeed::new()
        };

        Self {
            conversation,
            workflow: Workflow::standard(),
            pulses,
            rng,
        }
    }

    /// Submits a prompt at the current time.
    pub fn submit(&mut self, prompt: &str) -> Result<SubmissionReceipt> {
        self.submit_at(prompt, Utc::now())
    }

    /// Submits a prompt with an explicit batch timestamp.
    ///
    /// A blank prompt is rejected with `InvalidInput` before anything changes.
    /// Otherwise every agent log and the orchestrator log receive one
    /// `[user message, reply]` pair and a pulse is prepended to the feed.
    pub fn submit_at(&mut self, prompt: &str, now: DateTime<Utc>) -> Result<SubmissionReceipt> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(FusionError::invalid_input("prompt is empty"));
        }

        // Context is captured once, before this submission lands anywhere.
        let context = format_context(&self.conversation.recent_user_prompts(CONTEXT_DEPTH));
        let user_message = Message::new(Participant::User, prompt, now);

        let mut agent_replies = Vec::with_capacity(agent_profiles().len());
        for profile in agent_profiles() {
            let content = synthesize_reply(profile, prompt, &context, &mut self.rng);
            let reply = Message::new(profile.participant, content, now);
            self.conversation
                .append_exchange(profile.participant, &user_message, reply.clone())?;
            agent_replies.push(reply);
        }

        let fused = fuse_replies(prompt, &context, &mut self.rng);
        let orchestrator_reply = Message::new(Participant::Orchestrator, fused, now);
        self.conversation.append_exchange(
            Participant::Orchestrator,
            &user_message,
            orchestrator_reply.clone(),
        )?;

        let pulse = self.pulses.record_prompt(prompt, &mut self.rng).clone();

        tracing::debug!(
            "[Dashboard] Accepted prompt ({} chars), feed now holds {} pulses",
            prompt.chars().count(),
            self.pulses.len()
        );

        Ok(SubmissionReceipt {
            user_message,
            agent_replies,
            orchestrator_reply,
            pulse,
        })
    }

    /// Periodic recalibration of the head pulse at the current time.
    pub fn tick(&mut self) -> Option<InsightPulse> {
        self.tick_at(Utc::now())
    }

    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Option<InsightPulse> {
        self.pulses.recalibrate_head(now).cloned()
    }

    pub fn reset_workflow(&mut self) {
        self.workflow.reset();
    }

    pub fn advance_workflow(&mut self) -> Option<StepTransition> {
        self.workflow.advance()
    }

    /// Runs the workflow to the end without delays.
    pub fn run_workflow_instant(&mut self) -> Vec<StepTransition> {
        self.workflow.run_to_completion()
    }

    /// Current Fusion IQ.
    pub fn score(&self) -> u8 {
        intelligence_score(self.pulses.len(), self.workflow.active_count())
    }

    pub fn conversation(&self) -> &ConversationStore {
        &self.conversation
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn pulses(&self) -> &PulseFeed {
        &self.pulses
    }

    pub fn log(&self, participant: Participant) -> &[Message] {
        self.conversation.log(participant)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            score: self.score(),
            logs: self
                .conversation
                .logs()
                .into_iter()
                .map(|log| LogSnapshot {
                    participant: log.participant,
                    messages: log.messages.to_vec(),
                })
                .collect(),
            workflow: self.workflow.clone(),
            pulses: self.pulses.iter().cloned().collect(),
        }
    }
}
