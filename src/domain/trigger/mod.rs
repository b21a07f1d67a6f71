//! Trigger gating

mod gate;

pub use gate::{DebounceWindow, Decision, TriggerStatus};
