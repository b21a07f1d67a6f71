//! Recording value objects

mod clip;
mod duration;

pub use clip::{clip_file_name, RecordingRequest, CLIP_EXTENSION, CLIP_PREFIX};
pub use duration::{ClipDuration, DEFAULT_CLIP_MS};
