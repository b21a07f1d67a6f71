//! Trigger recording use case

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::domain::recording::{ClipDuration, RecordingRequest};
use crate::domain::trigger::{Decision, TriggerStatus};

use super::controller::TriggerController;
use super::ports::{ChildHandle, LaunchError, ProcessLauncher};

/// Result of a `save` that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Recorder launched
    Started {
        child: ChildHandle,
        duration: ClipDuration,
    },
    /// Too soon after the last accepted trigger
    Debounced,
    /// A recording is already running
    Busy,
}

/// Gate-then-launch use case shared by the command loop and shutdown
pub struct TriggerUseCase<L>
where
    L: ProcessLauncher,
{
    launcher: L,
    controller: Arc<TriggerController>,
    output_dir: PathBuf,
}

impl<L> TriggerUseCase<L>
where
    L: ProcessLauncher,
{
    /// Create a new use case instance
    pub fn new(launcher: L, controller: Arc<TriggerController>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            launcher,
            controller,
            output_dir: output_dir.into(),
        }
    }

    /// Handle a `save` command arriving now
    pub async fn save(&self, requested: Option<ClipDuration>) -> Result<SaveOutcome, LaunchError> {
        self.save_at(requested, Instant::now()).await
    }

    /// Handle a `save` command arriving at `now`.
    ///
    /// A launch failure rolls back the active count before returning the error.
    pub async fn save_at(
        &self,
        requested: Option<ClipDuration>,
        now: Instant,
    ) -> Result<SaveOutcome, LaunchError> {
        let duration = match self.controller.handle_trigger(requested, now) {
            Decision::Proceed(duration) => duration,
            Decision::Debounced => {
                debug!(
                    min_gap_ms = self.controller.min_gap().as_millis() as u64,
                    "debounce: trigger ignored"
                );
                return Ok(SaveOutcome::Debounced);
            }
            Decision::Busy => {
                debug!("ignored: a recording is already running");
                return Ok(SaveOutcome::Busy);
            }
        };

        let request = RecordingRequest::now(duration, &self.output_dir);
        match self.launcher.launch(&request).await {
            Ok(child) => Ok(SaveOutcome::Started { child, duration }),
            Err(e) => {
                self.controller.abandon_launch();
                Err(e)
            }
        }
    }

    /// Get current controller status
    pub fn status(&self) -> TriggerStatus {
        self.controller.status()
    }

    /// Number of recordings in flight
    pub fn active_count(&self) -> usize {
        self.controller.active_count()
    }

    /// Wait for every in-flight recording to finish
    pub async fn drain(&self) {
        self.controller.wait_idle().await
    }

    pub fn controller(&self) -> &Arc<TriggerController> {
        &self.controller
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
