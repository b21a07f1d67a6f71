//! Command loop - turns input lines into controller operations

use tokio::sync::mpsc;
use tracing::debug;

use crate::application::ports::ProcessLauncher;
use crate::application::{SaveOutcome, TriggerUseCase};
use crate::domain::command::Command;
use crate::domain::recording::ClipDuration;

use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Why the command loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// `quit` or `exit`
    Quit,
    /// SIGINT/SIGTERM
    Signal,
    /// Input closed
    EndOfInput,
}

/// Read commands until quit, a stop signal, or end of input.
///
/// The stop flag is checked before every line; once it is set no further
/// buffered line is handled.
pub async fn run_command_loop<L>(
    lines: &mut mpsc::Receiver<String>,
    use_case: &TriggerUseCase<L>,
    shutdown: &ShutdownSignal,
    presenter: &Presenter,
) -> LoopExit
where
    L: ProcessLauncher,
{
    loop {
        if shutdown.is_shutdown() {
            return LoopExit::Signal;
        }

        let line = tokio::select! {
            biased;
            _ = shutdown.requested() => return LoopExit::Signal,
            line = lines.recv() => line,
        };

        let Some(line) = line else {
            return LoopExit::EndOfInput;
        };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => {
                presenter.info("Exiting on user command.");
                return LoopExit::Quit;
            }
            Command::Status => presenter.status(use_case.status()),
            Command::Save(requested) => handle_save(use_case, requested, presenter).await,
            Command::Help => presenter.help(),
            Command::Unknown(cmd) => presenter.unknown_command(&cmd),
        }
    }
}

async fn handle_save<L>(
    use_case: &TriggerUseCase<L>,
    requested: Option<ClipDuration>,
    presenter: &Presenter,
) where
    L: ProcessLauncher,
{
    match use_case.save(requested).await {
        Ok(SaveOutcome::Started { child, duration }) => {
            debug!(pid = child.pid(), "recording started");
            presenter.recording_started(&child, duration.as_millis());
        }
        // Already logged at debug level by the use case
        Ok(SaveOutcome::Debounced) | Ok(SaveOutcome::Busy) => {}
        Err(e) => presenter.error(&e.to_string()),
    }
}
