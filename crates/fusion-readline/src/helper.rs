use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;

const AGENT_NAMES: &[&str] = &["claude", "gemini", "chatgpt", "orchestrator"];

/// Rustyline helper providing completion, highlighting and hints for slash
/// commands and agent names.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl CliHelper {
    /// Remaining characters of the first command that extends `line`.
    fn command_hint(&self, line: &str) -> Option<String> {
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

/// The partially typed argument of `/agent`, if `line` is one.
fn agent_argument(line: &str) -> Option<&str> {
    line.strip_prefix("/agent ")
}

fn matching_agents(partial: &str) -> impl Iterator<Item = &'static str> + '_ {
    let partial = partial.to_ascii_lowercase();
    AGENT_NAMES
        .iter()
        .copied()
        .filter(move |name| name.starts_with(&partial))
}

/// Completes an agent name after `/agent `; nothing once the name is whole.
fn agent_hint(line: &str) -> Option<String> {
    let partial = agent_argument(line)?;
    if partial.is_empty() {
        return Some("<claude|gemini|chatgpt|orchestrator>".to_string());
    }
    matching_agents(partial)
        .find(|name| name.len() > partial.len())
        .map(|name| name[partial.len()..].to_string())
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if let Some(partial) = agent_argument(line) {
            let start = line.len() - partial.len();
            let candidates = matching_agents(partial)
                .map(|name| Pair {
                    display: name.to_string(),
                    replacement: name.to_string(),
                })
                .collect();
            return Ok((start, candidates));
        }

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if let Some(name) = agent_argument(line) {
            let name = if AGENT_NAMES.contains(&name.to_ascii_lowercase().as_str()) {
                name.bright_magenta().to_string()
            } else {
                name.to_string()
            };
            Owned(format!("{} {}", "/agent".bright_cyan(), name))
        } else if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        agent_hint(line).or_else(|| self.command_hint(line))
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_hint_extends_prefix() {
        let helper = CliHelper::new();
        assert_eq!(helper.command_hint("/pu"), Some("lses".to_string()));
        assert_eq!(helper.command_hint("/pulses"), None);
        assert_eq!(helper.command_hint("hello"), None);
    }

    #[test]
    fn test_agent_hint() {
        assert_eq!(agent_hint("/agent gem"), Some("ini".to_string()));
        assert_eq!(agent_hint("/agent Cla"), Some("ude".to_string()));
        assert_eq!(agent_hint("/agent chatgpt"), None);
        assert_eq!(agent_hint("/agent zed"), None);
        assert!(agent_hint("/agent ").is_some());
        assert_eq!(agent_hint("/log"), None);
    }

    #[test]
    fn test_matching_agents() {
        let names: Vec<_> = matching_agents("c").collect();
        assert_eq!(names, vec!["claude", "chatgpt"]);
    }
}
