//! Domain layer - Core business logic
//!
//! Contains value objects, gate logic, command grammar, and domain errors.
//! This layer has no dependencies on external systems.

pub mod command;
pub mod config;
pub mod error;
pub mod recording;
pub mod trigger;

// Re-export common types
pub use command::Command;
pub use config::{AppConfig, ConfigLayer};
pub use error::*;
pub use recording::{ClipDuration, RecordingRequest};
pub use trigger::{DebounceWindow, Decision, TriggerStatus};
