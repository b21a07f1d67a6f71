//! Application layer - Use cases and port interfaces
//!
//! Contains the trigger controller, the recording use case, the process
//! reaper, and trait definitions for external system interactions.

pub mod controller;
pub mod ports;
pub mod reaper;
pub mod trigger;

// Re-export use cases
pub use controller::TriggerController;
pub use reaper::{exit_channel, Reaper, EXIT_CHANNEL_CAPACITY};
pub use trigger::{SaveOutcome, TriggerUseCase};
