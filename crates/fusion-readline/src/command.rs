use fusion_core::Participant;

/// Slash commands offered for completion.
pub const COMMANDS: &[&str] = &[
    "/run", "/agent", "/log", "/pulses", "/workflow", "/score", "/snapshot", "/help",
];

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Free text, sent to every agent
    Submit(String),
    RunWorkflow,
    SelectAgent(Participant),
    ShowLog,
    ShowPulses,
    ShowWorkflow,
    ShowScore,
    Snapshot,
    Help,
    Quit,
    Empty,
    /// A slash command that was recognised but malformed
    Invalid(String),
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ReplCommand::Empty;
        }
        if trimmed == "quit" || trimmed == "exit" {
            return ReplCommand::Quit;
        }
        if !trimmed.starts_with('/') {
            return ReplCommand::Submit(trimmed.to_string());
        }

        let (name, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (trimmed, ""),
        };

        match name {
            "/run" => ReplCommand::RunWorkflow,
            "/agent" if arg.is_empty() => {
                ReplCommand::Invalid("usage: /agent <claude|gemini|chatgpt|orchestrator>".to_string())
            }
            "/agent" => match Participant::parse(arg) {
                Ok(Participant::User) => {
                    ReplCommand::Invalid("the user log is always empty".to_string())
                }
                Ok(participant) => ReplCommand::SelectAgent(participant),
                Err(e) => ReplCommand::Invalid(e.to_string()),
            },
            "/log" => ReplCommand::ShowLog,
            "/pulses" => ReplCommand::ShowPulses,
            "/workflow" => ReplCommand::ShowWorkflow,
            "/score" => ReplCommand::ShowScore,
            "/snapshot" => ReplCommand::Snapshot,
            "/help" => ReplCommand::Help,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_is_submitted_trimmed() {
        assert_eq!(
            ReplCommand::parse("  Launch Q3 roadmap "),
            ReplCommand::Submit("Launch Q3 roadmap".to_string())
        );
    }

    #[test]
    fn test_blank_and_quit() {
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
        assert_eq!(ReplCommand::parse("quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("exit"), ReplCommand::Quit);
    }

    #[test]
    fn test_agent_selection() {
        assert_eq!(
            ReplCommand::parse("/agent Gemini"),
            ReplCommand::SelectAgent(Participant::Gemini)
        );
        assert!(matches!(ReplCommand::parse("/agent"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/agent user"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/agent bard"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_known_and_unknown_commands() {
        assert_eq!(ReplCommand::parse("/run"), ReplCommand::RunWorkflow);
        assert_eq!(ReplCommand::parse("/score"), ReplCommand::ShowScore);
        assert_eq!(
            ReplCommand::parse("/deploy now"),
            ReplCommand::Unknown("/deploy".to_string())
        );
    }
}
