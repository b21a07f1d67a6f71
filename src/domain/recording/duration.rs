//! Clip duration value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ClipDurationParseError;

/// Default clip length (10 seconds)
pub const DEFAULT_CLIP_MS: u64 = 10_000;

/// Length of a single recording in milliseconds.
/// Always positive; validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClipDuration {
    milliseconds: u64,
}

impl ClipDuration {
    /// Create a ClipDuration from milliseconds, rejecting zero
    pub const fn from_millis(ms: u64) -> Option<Self> {
        if ms == 0 {
            None
        } else {
            Some(Self { milliseconds: ms })
        }
    }

    /// Default clip length (10 seconds)
    pub const fn default_clip() -> Self {
        Self {
            milliseconds: DEFAULT_CLIP_MS,
        }
    }

    /// Get duration in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Parse an optional per-command override.
    ///
    /// Anything that is not a positive integer yields `None`, meaning the
    /// configured default applies.
    pub fn parse_override(arg: Option<&str>) -> Option<Self> {
        arg.and_then(|s| s.parse().ok())
    }
}

impl FromStr for ClipDuration {
    type Err = ClipDurationParseError;

    /// Parse a plain millisecond count such as "15000"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || ClipDurationParseError {
            input: s.to_string(),
        };

        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let ms: u64 = input.parse().map_err(|_| err())?;
        Self::from_millis(ms).ok_or_else(err)
    }
}

impl fmt::Display for ClipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.milliseconds)
    }
}

impl Default for ClipDuration {
    fn default() -> Self {
        Self::default_clip()
    }
}
