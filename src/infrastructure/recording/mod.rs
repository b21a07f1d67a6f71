//! Recording infrastructure module
//!
//! Starts the external video-capture executable and watches each child
//! until it exits.

mod recorder;

pub use recorder::RecorderLauncher;
