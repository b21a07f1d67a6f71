//! CLI presenter for output formatting

use std::io::{self, Write};

use colored::*;

use crate::application::ports::ChildHandle;
use crate::domain::command::{COMMAND_HINT, COMMAND_SUMMARY};
use crate::domain::config::AppConfig;
use crate::domain::trigger::TriggerStatus;

/// Presenter for CLI output formatting.
///
/// Operator messages go to stderr; replies to `status` and `help` go to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output a reply line to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Startup banner
    pub fn banner(&self, config: &AppConfig) {
        self.info("Command-trigger mode. Type 'save', 'status', or 'quit'.");
        self.info(&format!(
            "Default 'save': {} ms to {}",
            config.duration().as_millis(),
            config.output_dir().display()
        ));
    }

    /// Reply to `status`
    pub fn status(&self, status: TriggerStatus) {
        self.output(&Self::format_status(status));
    }

    /// Reply to `help`
    pub fn help(&self) {
        self.output(COMMAND_SUMMARY);
    }

    /// Report an unrecognized command
    pub fn unknown_command(&self, cmd: &str) {
        self.warn(&format!("Unknown command: {}", cmd));
        self.info(COMMAND_HINT);
    }

    /// Report a launched recorder
    pub fn recording_started(&self, child: &ChildHandle, duration_ms: u64) {
        self.success(&format!(
            "Recording {} ms to {}",
            duration_ms,
            child.clip_path().display()
        ));
    }

    /// Format the `status` reply
    pub fn format_status(status: TriggerStatus) -> String {
        format!("Status: {}", status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_status_idle() {
        assert_eq!(Presenter::format_status(TriggerStatus::Idle), "Status: idle");
    }

    #[test]
    fn format_status_recording() {
        assert_eq!(
            Presenter::format_status(TriggerStatus::Recording),
            "Status: recording"
        );
    }
}
