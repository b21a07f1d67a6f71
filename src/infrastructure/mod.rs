//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the external
//! recorder process, the output directory, and the config file.

pub mod config;
pub mod recording;
pub mod storage;

// Re-export adapters
pub use config::XdgConfigStore;
pub use recording::RecorderLauncher;
pub use storage::prepare_output;
