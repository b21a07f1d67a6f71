//! Trigger gates and their outcomes

use std::fmt;
use std::time::{Duration, Instant};

use crate::domain::recording::ClipDuration;

/// Outcome of evaluating a trigger against the gates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Both gates passed; the caller must launch a recording of this length
    Proceed(ClipDuration),
    /// Arrived within the minimum gap of the last accepted trigger
    Debounced,
    /// A recording is already in flight
    Busy,
}

impl Decision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed(_))
    }
}

/// Externally visible controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriggerStatus {
    #[default]
    Idle,
    Recording,
}

impl TriggerStatus {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
        }
    }

    pub const fn from_active(active: usize) -> Self {
        if active > 0 {
            Self::Recording
        } else {
            Self::Idle
        }
    }
}

impl fmt::Display for TriggerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Debounce gate over monotonic time.
///
/// Remembers the instant of the last accepted trigger; a new trigger is
/// admitted only once `min_gap` has elapsed since then.
#[derive(Debug, Clone)]
pub struct DebounceWindow {
    min_gap: Duration,
    last: Option<Instant>,
}

impl DebounceWindow {
    /// Create a window that has never seen a trigger
    pub fn new(min_gap: Duration) -> Self {
        Self { min_gap, last: None }
    }

    pub fn min_gap(&self) -> Duration {
        self.min_gap
    }

    /// Check whether a trigger at `now` clears the gap
    pub fn admits(&self, now: Instant) -> bool {
        match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.min_gap,
        }
    }

    /// Record `now` as the last accepted trigger
    pub fn record(&mut self, now: Instant) {
        self.last = Some(now);
    }
}
