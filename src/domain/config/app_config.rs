//! Application configuration value objects

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::recording::{ClipDuration, DEFAULT_CLIP_MS};

/// Default output directory for clips
pub const DEFAULT_OUTPUT_DIR: &str = "/mnt/ssd/clips";

/// Default minimum gap between accepted triggers
pub const DEFAULT_MIN_GAP_MS: u64 = 500;

/// Default recorder executable
pub const DEFAULT_RECORDER: &str = "rpicam-vid";

/// One source of configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    pub duration_ms: Option<u64>,
    pub outdir: Option<PathBuf>,
    pub min_gap_ms: Option<u64>,
    pub verbose: Option<bool>,
    pub recorder: Option<String>,
}

impl ConfigLayer {
    /// Create a layer with default values
    pub fn defaults() -> Self {
        Self {
            duration_ms: Some(DEFAULT_CLIP_MS),
            outdir: Some(PathBuf::from(DEFAULT_OUTPUT_DIR)),
            min_gap_ms: Some(DEFAULT_MIN_GAP_MS),
            verbose: Some(false),
            recorder: Some(DEFAULT_RECORDER.to_string()),
        }
    }

    /// Create an empty layer (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this layer with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            duration_ms: other.duration_ms.or(self.duration_ms),
            outdir: other.outdir.or(self.outdir),
            min_gap_ms: other.min_gap_ms.or(self.min_gap_ms),
            verbose: other.verbose.or(self.verbose),
            recorder: other.recorder.or(self.recorder),
        }
    }

    /// Validate and freeze into an [`AppConfig`], filling gaps with defaults
    pub fn resolve(self) -> Result<AppConfig, ConfigError> {
        let merged = Self::defaults().merge(self);

        let duration_ms = merged.duration_ms.unwrap_or(DEFAULT_CLIP_MS);
        let duration =
            ClipDuration::from_millis(duration_ms).ok_or_else(|| ConfigError::ValidationError {
                key: "duration".to_string(),
                message: "must be a positive number of milliseconds".to_string(),
            })?;

        let output_dir = merged
            .outdir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        if output_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                key: "outdir".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let recorder = merged
            .recorder
            .unwrap_or_else(|| DEFAULT_RECORDER.to_string());
        if recorder.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                key: "recorder".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(AppConfig {
            duration,
            output_dir,
            min_gap: Duration::from_millis(merged.min_gap_ms.unwrap_or(DEFAULT_MIN_GAP_MS)),
            verbose: merged.verbose.unwrap_or(false),
            recorder,
        })
    }
}

/// Resolved configuration, read-only for the life of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    duration: ClipDuration,
    output_dir: PathBuf,
    min_gap: Duration,
    verbose: bool,
    recorder: String,
}

impl AppConfig {
    /// Default clip length for `save` without an override
    pub fn duration(&self) -> ClipDuration {
        self.duration
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Minimum gap between accepted triggers
    pub fn min_gap(&self) -> Duration {
        self.min_gap
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Recorder executable name or path
    pub fn recorder(&self) -> &str {
        &self.recorder
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            duration: ClipDuration::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            min_gap: Duration::from_millis(DEFAULT_MIN_GAP_MS),
            verbose: false,
            recorder: DEFAULT_RECORDER.to_string(),
        }
    }
}
