//! Operator command grammar

use crate::domain::recording::ClipDuration;

/// One-line summary of the command grammar
pub const COMMAND_SUMMARY: &str = "Commands: save [ms], status, quit";

/// Hint printed after an unknown command
pub const COMMAND_HINT: &str = "Type: save [ms] | status | quit";

/// A parsed operator command.
///
/// Matching is case-sensitive and by prefix on the trimmed line, so
/// `statusx` is still `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a recording, optionally overriding the clip length
    Save(Option<ClipDuration>),
    /// Report whether a recording is running
    Status,
    /// Leave the command loop
    Quit,
    /// Print the command summary
    Help,
    /// Blank line
    Empty,
    /// Anything else, carrying the trimmed input
    Unknown(String),
}

impl Command {
    /// Parse a raw input line
    pub fn parse(line: &str) -> Self {
        let cmd = line.trim();

        if cmd.is_empty() {
            return Self::Empty;
        }

        if cmd.starts_with("quit") || cmd.starts_with("exit") {
            Self::Quit
        } else if cmd.starts_with("status") {
            Self::Status
        } else if let Some(rest) = cmd.strip_prefix("save") {
            Self::Save(ClipDuration::parse_override(rest.split_whitespace().next()))
        } else if cmd.starts_with("help") || cmd.starts_with('?') {
            Self::Help
        } else {
            Self::Unknown(cmd.to_string())
        }
    }
}
