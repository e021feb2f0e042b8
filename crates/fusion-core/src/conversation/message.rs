//! Conversation message type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::participant::Participant;

/// A single immutable entry in a participant log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Who wrote the message
    pub from: Participant,
    /// Message text
    pub content: String,
    /// Creation time; shared by every message of one submission
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(from: Participant, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            from,
            content: content.into(),
            timestamp,
        }
    }
}
