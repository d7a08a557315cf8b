//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing visitors to browse the portfolio and inspect the session
//! without sending a message to the assistant.

/// A parsed chat command.
///
/// These commands are handled locally and never reach the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Print the full transcript.
    History,

    /// Display session statistics.
    Stats,

    /// List the showcased projects.
    Projects,

    /// List skills, grouped by category.
    Skills,

    /// List offered services.
    Services,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it
/// should be sent to the assistant.
///
/// # Examples
///
/// ```
/// # use folio::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/projects").is_some());
/// assert!(parse_command("How do you start a project?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match (command.as_str(), argument) {
        ("help" | "?", _) => ChatCommand::Help,
        ("quit" | "exit" | "q", _) => ChatCommand::Quit,
        ("history", None) => ChatCommand::History,
        ("stats" | "status", None) => ChatCommand::Stats,
        ("projects" | "work", None) => ChatCommand::Projects,
        ("skills" | "expertise", None) => ChatCommand::Skills,
        ("services", None) => ChatCommand::Services,
        ("history" | "stats" | "status" | "projects" | "work" | "skills" | "expertise"
        | "services", Some(_)) => {
            ChatCommand::Invalid(format!("/{command} takes no arguments"))
        }
        _ => ChatCommand::Invalid(format!("Unknown command: /{command}")),
    };

    Some(result)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /projects              List showcased projects
  /skills                List skills by category
  /services              List offered services
  /history               Show the conversation so far
  /stats                 Show session statistics
  /help                  Show this help message
  /quit                  Exit the chat"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_portfolio_commands() {
        assert_eq!(parse_command("/projects"), Some(ChatCommand::Projects));
        assert_eq!(parse_command("/WORK"), Some(ChatCommand::Projects));
        assert_eq!(parse_command("/skills"), Some(ChatCommand::Skills));
        assert_eq!(parse_command("/services"), Some(ChatCommand::Services));
    }

    #[test]
    fn parse_session_commands() {
        assert_eq!(parse_command("/history"), Some(ChatCommand::History));
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn arguments_are_rejected() {
        assert!(matches!(
            parse_command("/projects all"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("takes no arguments")
        ));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_command("/clear"),
            Some(ChatCommand::Invalid("Unknown command: /clear".to_string()))
        );
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("What inspired Hyperion?"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(help.contains("/quit"));
        assert!(help.contains("/projects"));
        assert!(help.contains("/history"));
    }
}
