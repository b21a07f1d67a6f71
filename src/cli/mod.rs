//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! the stdin command loop, and the main application runner.

pub mod app;
pub mod args;
pub mod command_loop;
pub mod input;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{load_config, run, EXIT_ERROR, EXIT_SUCCESS};
pub use args::Cli;
pub use command_loop::{run_command_loop, LoopExit};
pub use presenter::Presenter;
pub use signals::ShutdownSignal;
