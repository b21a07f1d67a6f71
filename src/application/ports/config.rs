//! Configuration port interface

use async_trait::async_trait;

use crate::domain::config::ConfigLayer;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration layer.
    ///
    /// # Returns
    /// The loaded layer (all fields None if the store has nothing)
    async fn load(&self) -> Result<ConfigLayer, ConfigError>;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;
}
