//! Configuration value objects

mod app_config;

pub use app_config::{
    AppConfig, ConfigLayer, DEFAULT_MIN_GAP_MS, DEFAULT_OUTPUT_DIR, DEFAULT_RECORDER,
};
