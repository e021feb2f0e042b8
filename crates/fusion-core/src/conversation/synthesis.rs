//! Reply synthesis.
//!
//! Replies are pure string templates over the agent phrase banks. The random
//! source is passed in so a seeded generator gives reproducible threads.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::agent::{AgentProfile, agent_profiles};

/// Joins prior prompts inside the context clause.
pub const CONTEXT_SEPARATOR: &str = " | ";

/// Context clause used before the first submission.
pub const FRESH_CONTEXT: &str = "fresh thread";

/// Number of prior user prompts quoted as context.
pub const CONTEXT_DEPTH: usize = 2;

/// Renders the context clause from the prior prompts (oldest first).
pub fn format_context(prior_prompts: &[&str]) -> String {
    if prior_prompts.is_empty() {
        FRESH_CONTEXT.to_string()
    } else {
        prior_prompts.join(CONTEXT_SEPARATOR)
    }
}

/// Builds one agent reply: a random opening phrase, the verbatim prompt and
/// the prior-prompt context.
pub fn synthesize_reply<R: Rng + ?Sized>(
    profile: &AgentProfile,
    prompt: &str,
    context: &str,
    rng: &mut R,
) -> String {
    let phrase = profile.phrases.choose(rng).copied().unwrap_or_default();
    format!(
        "{phrase} On \"{prompt}\" I would lead with {}. Context: {context}.",
        profile.focus
    )
}

/// Drops everything up to and including the first sentence break.
///
/// Text without a sentence break is returned unchanged.
pub fn strip_first_sentence(text: &str) -> &str {
    match text.find(". ") {
        Some(idx) => text[idx + 2..].trim_start(),
        None => text,
    }
}

/// Builds the orchestrator's fusion report.
///
/// Every agent reply is synthesized afresh here rather than reusing the
/// replies already filed in the agent logs, so the random picks may differ.
pub fn fuse_replies<R: Rng + ?Sized>(prompt: &str, context: &str, rng: &mut R) -> String {
    let mut report = format!("Fusion report for \"{prompt}\":");
    for profile in agent_profiles() {
        let reply = synthesize_reply(profile, prompt, context, rng);
        report.push_str(&format!(
            "\n• {}: {}",
            profile.display_name(),
            strip_first_sentence(&reply)
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::profile;
    use crate::participant::Participant;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_format_context() {
        assert_eq!(format_context(&[]), FRESH_CONTEXT);
        assert_eq!(format_context(&["a", "b"]), "a | b");
    }

    #[test]
    fn test_reply_embeds_prompt_context_and_phrase() {
        let claude = profile(Participant::Claude).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let reply = synthesize_reply(claude, "Launch Q3 roadmap", "fresh thread", &mut rng);

        assert!(reply.contains("\"Launch Q3 roadmap\""));
        assert!(reply.ends_with("Context: fresh thread."));
        assert!(claude.phrases.iter().any(|p| reply.starts_with(p)));
    }

    #[test]
    fn test_same_seed_same_reply() {
        let gemini = profile(Participant::Gemini).unwrap();
        let a = synthesize_reply(gemini, "x", "y", &mut StdRng::seed_from_u64(42));
        let b = synthesize_reply(gemini, "x", "y", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_strip_first_sentence() {
        assert_eq!(strip_first_sentence("One. Two. Three."), "Two. Three.");
        assert_eq!(strip_first_sentence("No break here."), "No break here.");
    }

    #[test]
    fn test_fusion_report_lists_every_agent_without_openers() {
        let mut rng = StdRng::seed_from_u64(3);
        let report = fuse_replies("Ship it", "a | b", &mut rng);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Fusion report for \"Ship it\":");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("• Claude: On \"Ship it\""));
        assert!(lines[2].starts_with("• Gemini: On \"Ship it\""));
        assert!(lines[3].starts_with("• ChatGPT: On \"Ship it\""));
        for line in &lines[1..] {
            assert!(line.ends_with("Context: a | b."));
        }
    }
}
