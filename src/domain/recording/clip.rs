//! Recording request and clip file naming

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use super::duration::ClipDuration;

/// Prefix of every clip file name
pub const CLIP_PREFIX: &str = "clip-";

/// Extension of every clip file name
pub const CLIP_EXTENSION: &str = "mp4";

/// Timestamp layout used in clip names
const CLIP_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Build the clip file name for a moment in time.
///
/// Names have one-second resolution: two clips started within the same
/// second get the same name and the later one overwrites the earlier.
pub fn clip_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}.{}",
        CLIP_PREFIX,
        at.format(CLIP_TIMESTAMP_FORMAT),
        CLIP_EXTENSION
    )
}

/// A single accepted trigger, ready to be handed to the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingRequest {
    duration: ClipDuration,
    output_path: PathBuf,
}

impl RecordingRequest {
    /// Create a request whose clip lands in `output_dir`, named after `at`
    pub fn new<Tz>(duration: ClipDuration, output_dir: &Path, at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            duration,
            output_path: output_dir.join(clip_file_name(at)),
        }
    }

    /// Create a request named after the current local time
    pub fn now(duration: ClipDuration, output_dir: &Path) -> Self {
        Self::new(duration, output_dir, &chrono::Local::now())
    }

    pub fn duration(&self) -> ClipDuration {
        self.duration
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
