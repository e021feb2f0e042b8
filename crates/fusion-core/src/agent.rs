//! Built-in agent profiles.
//!
//! Each simulated agent carries a static phrase bank used by reply
//! synthesis. Every phrase is exactly one sentence ending in a period, so the
//! orchestrator can strip it when fusing replies.

use crate::participant::Participant;

/// Static description of a simulated agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    /// Conversation identity of this agent
    pub participant: Participant,
    /// Role shown next to the agent name
    pub role: &'static str,
    /// The angle the agent leads with in every reply
    pub focus: &'static str,
    /// Opening sentences, one picked at random per reply
    pub phrases: &'static [&'static str],
    /// First message of the canned thread
    pub welcome: &'static str,
}

impl AgentProfile {
    pub fn display_name(&self) -> &'static str {
        self.participant.display_name()
    }
}

static PROFILES: [AgentProfile; 3] = [
    AgentProfile {
        participant: Participant::Claude,
        role: "Strategic Reasoner",
        focus: "second-order risks and the assumptions underneath them",
        phrases: &[
            "Let me reason through the long-horizon implications.",
            "I see a few assumptions worth pressure-testing first.",
            "Here is a careful, step-by-step read of the situation.",
            "The safest path forward balances ambition with clear guardrails.",
        ],
        welcome: "Claude online. I will map the reasoning and the risks behind every request.",
    },
    AgentProfile {
        participant: Participant::Gemini,
        role: "Research Synthesizer",
        focus: "the signals hiding across data, market and user research",
        phrases: &[
            "Cross-referencing the available signals now.",
            "The research landscape points to a clear pattern.",
            "Multimodal evidence suggests an interesting angle.",
            "I pulled together the strongest supporting data points.",
        ],
        welcome: "Gemini connected. I will gather evidence and surface the patterns that matter.",
    },
    AgentProfile {
        participant: Participant::ChatGpt,
        role: "Execution Planner",
        focus: "a concrete, shippable plan with owners and milestones",
        phrases: &[
            "Turning this into an actionable plan.",
            "Here is how I would sequence the work.",
            "Breaking it down into crisp deliverables.",
            "Let us convert the idea into momentum this week.",
        ],
        welcome: "ChatGPT ready. I will turn the discussion into a plan you can execute.",
    },
];

/// Welcome line used by the orchestrator in the canned thread.
pub const ORCHESTRATOR_WELCOME: &str =
    "Fusion orchestrator standing by. Ask anything and I will blend all three perspectives.";

/// Returns the built-in agent profiles in display order.
pub fn agent_profiles() -> &'static [AgentProfile] {
    &PROFILES
}

/// Looks up the profile for an agent participant.
///
/// Returns `None` for `user` and `orchestrator`.
pub fn profile(participant: Participant) -> Option<&'static AgentProfile> {
    PROFILES.iter().find(|p| p.participant == participant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::AGENTS;

    #[test]
    fn test_every_agent_has_a_profile() {
        for agent in AGENTS {
            let profile = profile(agent).expect("agent profile");
            assert_eq!(profile.participant, agent);
            assert!(profile.phrases.len() >= 3);
        }
        assert!(profile(Participant::User).is_none());
        assert!(profile(Participant::Orchestrator).is_none());
    }

    #[test]
    fn test_phrases_are_single_sentences() {
        for profile in agent_profiles() {
            for phrase in profile.phrases {
                assert!(phrase.ends_with('.'), "{phrase}");
                assert!(!phrase.contains(". "), "{phrase}");
            }
        }
    }
}
