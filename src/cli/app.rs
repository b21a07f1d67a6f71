//! Main app runner

use std::process::ExitCode;
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::{ConfigStore, ProcessLauncher};
use crate::application::{exit_channel, Reaper, TriggerController, TriggerUseCase};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::{prepare_output, RecorderLauncher, XdgConfigStore};

use super::args::Cli;
use super::command_loop::{run_command_loop, LoopExit};
use super::input::spawn_stdin_reader;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Load and merge configuration: defaults < config file < env < CLI
pub async fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let store = match &cli.config {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    };
    let file_layer = store.load().await?;
    file_layer.merge(cli.to_layer()).resolve()
}

/// Run the trigger controller on stdin until quit, a stop signal, or EOF
pub async fn run(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    debug!(
        duration_ms = config.duration().as_millis(),
        outdir = %config.output_dir().display(),
        min_gap_ms = config.min_gap().as_millis() as u64,
        recorder = config.recorder(),
        "configuration resolved"
    );

    if let Err(e) = prepare_output(config.output_dir()) {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    if which::which(config.recorder()).is_err() {
        presenter.warn(&format!(
            "Recorder '{}' not found; 'save' will fail until it is installed",
            config.recorder()
        ));
    }

    // Setup signal handler
    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup() {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let controller = Arc::new(TriggerController::new(config.duration(), config.min_gap()));
    let (exit_tx, exit_rx) = exit_channel();
    let reaper = Reaper::new(Arc::clone(&controller), exit_rx).spawn();

    let launcher = RecorderLauncher::new(config.recorder(), exit_tx);
    let use_case = TriggerUseCase::new(launcher, controller, config.output_dir());

    presenter.banner(&config);

    let mut lines = spawn_stdin_reader();
    let exit = run_command_loop(&mut lines, &use_case, &shutdown, &presenter).await;
    debug!(?exit, "command loop finished");

    // Stop accepting input before waiting on recorders
    drop(lines);
    drain(&use_case, exit, &presenter).await;

    // Last sender goes with the launcher; the reaper then drains and stops
    drop(use_case);
    let _ = reaper.await;

    ExitCode::from(EXIT_SUCCESS)
}

/// Block until every in-flight recording has exited
pub async fn drain<L>(use_case: &TriggerUseCase<L>, exit: LoopExit, presenter: &Presenter)
where
    L: ProcessLauncher,
{
    if exit == LoopExit::EndOfInput {
        presenter.info("Input closed, shutting down.");
    }

    let active = use_case.active_count();
    if active > 0 {
        presenter.info(&format!("Waiting for {} recording(s) to finish...", active));
    }

    use_case.drain().await;
}
