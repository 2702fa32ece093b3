//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the session without sending messages to the
//! backend.

/// A parsed chat command.
///
/// These commands act locally and are never sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Display help information.
    Help,

    /// Display session statistics (message count, fallback count, etc.).
    Stats,

    /// Show the current configuration.
    ShowConfig,

    /// Save the message log to a specific file immediately.
    SaveTranscript(String),

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it
/// should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use finsight::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/save log.json").is_some());
/// assert!(parse_command("How did AAPL do this quarter?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        "stats" | "status" => ChatCommand::Stats,
        "config" => ChatCommand::ShowConfig,
        "save" => match argument {
            Some(arg) => ChatCommand::SaveTranscript(arg.to_string()),
            None => ChatCommand::Invalid("/save requires a file path".to_string()),
        },
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /save <file>           Save the message log to a file
  /stats                 Show session statistics
  /config                Show current configuration
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
    fn parse_help_aliases() {
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn parse_save() {
        assert_eq!(
            parse_command("/save session.json"),
            Some(ChatCommand::SaveTranscript("session.json".to_string()))
        );
        assert_eq!(
            parse_command("/save"),
            Some(ChatCommand::Invalid("/save requires a file path".to_string()))
        );
    }

    #[test]
    fn parse_stats_and_config() {
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/status"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/config"), Some(ChatCommand::ShowConfig));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/frobnicate"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("/frobnicate")
        ));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("Summarize my portfolio"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(!help.is_empty());
        assert!(help.contains("/quit"));
        assert!(help.contains("/save"));
        assert!(help.contains("/stats"));
    }
}
