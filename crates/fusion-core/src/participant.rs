//! Participant identities.
//!
//! The set is fixed at startup: three simulated agents, the human user and
//! the orchestrator that fuses agent replies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{FusionError, Result};

/// Identity of a conversation participant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Participant {
    Claude,
    Gemini,
    ChatGpt,
    User,
    Orchestrator,
}

/// The three simulated agents, in display order.
pub const AGENTS: [Participant; 3] = [Participant::Claude, Participant::Gemini, Participant::ChatGpt];

impl Participant {
    /// Parses a participant name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| FusionError::unknown_participant(name.trim()))
    }

    /// Human-facing label.
    pub fn display_name(self) -> &'static str {
        match self {
            Participant::Claude => "Claude",
            Participant::Gemini => "Gemini",
            Participant::ChatGpt => "ChatGPT",
            Participant::User => "You",
            Participant::Orchestrator => "Orchestrator",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Participant::parse("ChatGPT").unwrap(), Participant::ChatGpt);
        assert_eq!(Participant::parse("  gemini ").unwrap(), Participant::Gemini);
        assert_eq!(
            Participant::parse("orchestrator").unwrap(),
            Participant::Orchestrator
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = Participant::parse("copilot").unwrap_err();
        assert_eq!(err, FusionError::unknown_participant("copilot"));
    }

    #[test]
    fn test_names_round_trip() {
        for participant in Participant::iter() {
            let name = participant.to_string();
            assert_eq!(Participant::parse(&name).unwrap(), participant);
            let json = serde_json::to_string(&participant).unwrap();
            assert_eq!(json, format!("\"{}\"", name));
        }
    }
}
