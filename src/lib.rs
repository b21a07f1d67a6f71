//! cam-trigger - record a video clip whenever a command arrives
//!
//! This crate reads line commands (`save [ms]`, `status`, `quit`) and starts
//! an external video-capture process for each accepted `save`, allowing at
//! most one recording at a time and rate-limiting triggers.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, gates, command grammar, and errors
//! - **Application**: Trigger controller, recording use case, process reaper,
//!   and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (recorder process,
//!   output directory, config file)
//! - **CLI**: Argument parsing, signal handling, and the command loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
