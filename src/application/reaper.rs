//! Process reaper - reconciles recorder exits with the controller

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::controller::TriggerController;
use super::ports::ChildExit;

/// Capacity of the exit notification channel
pub const EXIT_CHANNEL_CAPACITY: usize = 16;

/// Create the channel launchers post exit notices on
pub fn exit_channel() -> (mpsc::Sender<ChildExit>, mpsc::Receiver<ChildExit>) {
    mpsc::channel(EXIT_CHANNEL_CAPACITY)
}

/// Consumes [`ChildExit`] notices and decrements the active count once each
pub struct Reaper {
    controller: Arc<TriggerController>,
    exits: mpsc::Receiver<ChildExit>,
}

impl Reaper {
    pub fn new(controller: Arc<TriggerController>, exits: mpsc::Receiver<ChildExit>) -> Self {
        Self { controller, exits }
    }

    /// Run until every sender is dropped
    pub async fn run(mut self) {
        while let Some(exit) = self.exits.recv().await {
            self.reconcile(&exit);
        }
        debug!("reaper: exit channel closed");
    }

    /// Run on a background task
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    fn reconcile(&self, exit: &ChildExit) {
        if !self.controller.on_child_exit() {
            debug!(pid = exit.child.pid(), "reaper: exit with no active recording, ignored");
            return;
        }

        if exit.success {
            info!(
                pid = exit.child.pid(),
                clip = %exit.child.clip_path().display(),
                "recording finished"
            );
        } else {
            warn!(
                pid = exit.child.pid(),
                clip = %exit.child.clip_path().display(),
                status = %exit.status,
                "recorder exited with failure"
            );
        }
    }
}
