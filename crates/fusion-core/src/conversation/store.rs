use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::IntoEnumIterator;

use super::message::Message;
use crate::agent::{self, ORCHESTRATOR_WELCOME};
use crate::error::{FusionError, Result};
use crate::participant::{AGENTS, Participant};

/// Per-participant ordered message logs.
///
/// Every participant key exists from construction. Insertion order is
/// chronological order. The `user` log stays empty: user messages are filed
/// under the agent and orchestrator logs they were addressed to.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    logs: HashMap<Participant, Vec<Message>>,
}

/// A participant log borrowed for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantLog<'a> {
    pub participant: Participant,
    pub messages: &'a [Message],
}

impl ConversationStore {
    /// Creates a store with an empty log for every participant.
    pub fn new() -> Self {
        Self {
            logs: Participant::iter().map(|p| (p, Vec::new())).collect(),
        }
    }

    /// Creates a store pre-filled with the canned welcome thread: one greeting
    /// per agent log and one in the orchestrator log.
    pub fn with_welcome_thread(timestamp: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        for agent_id in AGENTS {
            if let Some(profile) = agent::profile(agent_id) {
                store.push(Message::new(agent_id, profile.welcome, timestamp));
            }
        }
        store.push(Message::new(
            Participant::Orchestrator,
            ORCHESTRATOR_WELCOME,
            timestamp,
        ));
        store
    }

    fn push(&mut self, message: Message) {
        self.logs.entry(message.from).or_default().push(message);
    }

    /// Appends a `[user message, reply]` pair to `owner`'s log.
    ///
    /// The user log is never written to.
    pub fn append_exchange(
        &mut self,
        owner: Participant,
        user_message: &Message,
        reply: Message,
    ) -> Result<()> {
        if owner == Participant::User {
            return Err(FusionError::invalid_input(
                "the user log does not receive exchanges",
            ));
        }
        if user_message.from != Participant::User {
            return Err(FusionError::invalid_input(format!(
                "exchange must start with a user message, got one from {}",
                user_message.from
            )));
        }

        let log = self.logs.entry(owner).or_default();
        log.push(user_message.clone());
        log.push(reply);
        Ok(())
    }

    /// Returns the log for a participant, oldest first.
    pub fn log(&self, participant: Participant) -> &[Message] {
        self.logs
            .get(&participant)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn message_count(&self, participant: Participant) -> usize {
        self.log(participant).len()
    }

    pub fn total_messages(&self) -> usize {
        self.logs.values().map(Vec::len).sum()
    }

    /// Returns the contents of up to `limit` most recent user messages,
    /// oldest first.
    ///
    /// Read from the orchestrator log, which receives every submission.
    pub fn recent_user_prompts(&self, limit: usize) -> Vec<&str> {
        let mut prompts: Vec<&str> = self
            .log(Participant::Orchestrator)
            .iter()
            .rev()
            .filter(|m| m.from == Participant::User)
            .take(limit)
            .map(|m| m.content.as_str())
            .collect();
        prompts.reverse();
        prompts
    }

    /// All logs in fixed participant order.
    pub fn logs(&self) -> Vec<ParticipantLog<'_>> {
        Participant::iter()
            .map(|participant| ParticipantLog {
                participant,
                messages: self.log(participant),
            })
            .collect()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
