//! Recorder launch port interfaces

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::recording::RecordingRequest;

/// Launch errors
#[derive(Debug, Clone, Error)]
pub enum LaunchError {
    #[error("Failed to start recorder '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },
}

/// Identifies a launched recorder process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildHandle {
    pid: u32,
    clip_path: PathBuf,
}

impl ChildHandle {
    pub fn new(pid: u32, clip_path: impl Into<PathBuf>) -> Self {
        Self {
            pid,
            clip_path: clip_path.into(),
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Clip file the recorder is writing
    pub fn clip_path(&self) -> &Path {
        &self.clip_path
    }
}

impl fmt::Display for ChildHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pid={} -> {}", self.pid, self.clip_path.display())
    }
}

/// Termination notice for a launched recorder.
/// Exactly one is posted per child that was successfully spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildExit {
    pub child: ChildHandle,
    /// Whether the recorder reported success
    pub success: bool,
    /// Human-readable exit status (e.g. "exit status: 0")
    pub status: String,
}

/// Port for starting the external recorder
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Start one recorder process for `request`.
    ///
    /// Returns as soon as the process exists; never waits for it to finish.
    /// Termination is reported later as a [`ChildExit`] notification.
    async fn launch(&self, request: &RecordingRequest) -> Result<ChildHandle, LaunchError>;
}
