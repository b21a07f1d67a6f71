//! External recorder process adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tracing::debug;

use crate::application::ports::{ChildExit, ChildHandle, LaunchError, ProcessLauncher};
use crate::domain::recording::RecordingRequest;

/// Launches one recorder process per request and reports each exit
/// on the reaper channel.
///
/// The recorder is invoked as `<program> -n -t <ms> -o <path>`:
/// no preview, record for the given time, write to the given file.
pub struct RecorderLauncher {
    program: String,
    exits: mpsc::Sender<ChildExit>,
}

impl RecorderLauncher {
    /// Create a launcher for `program`
    pub fn new(program: impl Into<String>, exits: mpsc::Sender<ChildExit>) -> Self {
        Self {
            program: program.into(),
            exits,
        }
    }

    /// Build recorder args for a request
    fn build_args(request: &RecordingRequest) -> Vec<String> {
        vec![
            "-n".to_string(),
            "-t".to_string(),
            request.duration().as_millis().to_string(),
            "-o".to_string(),
            request.output_path().to_string_lossy().to_string(),
        ]
    }

    /// Spawn the recorder process
    fn spawn_recorder(&self, args: &[String]) -> Result<Child, LaunchError> {
        Command::new(&self.program)
            .args(args)
            // stdin carries our own command stream
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| LaunchError::SpawnFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })
    }

    /// Wait for the child on a background task and post its exit
    fn watch(&self, mut child: Child, handle: ChildHandle) {
        let exits = self.exits.clone();
        tokio::spawn(async move {
            let exit = match child.wait().await {
                Ok(status) => ChildExit {
                    child: handle,
                    success: status.success(),
                    status: status.to_string(),
                },
                Err(e) => ChildExit {
                    child: handle,
                    success: false,
                    status: format!("wait failed: {}", e),
                },
            };
            // Receiver only goes away once the runtime is shutting down
            let _ = exits.send(exit).await;
        });
    }
}

#[async_trait]
impl ProcessLauncher for RecorderLauncher {
    async fn launch(&self, request: &RecordingRequest) -> Result<ChildHandle, LaunchError> {
        let args = Self::build_args(request);
        debug!("exec: {} {}", self.program, args.join(" "));

        let child = self.spawn_recorder(&args)?;
        let handle = ChildHandle::new(child.id().unwrap_or_default(), request.output_path());
        debug!(pid = handle.pid(), "spawned recorder");

        self.watch(child, handle.clone());
        Ok(handle)
    }
}
