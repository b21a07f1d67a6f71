//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod launcher;

// Re-export common types
pub use config::ConfigStore;
pub use launcher::{ChildExit, ChildHandle, LaunchError, ProcessLauncher};
