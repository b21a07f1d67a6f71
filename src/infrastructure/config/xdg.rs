//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::ConfigLayer;
use crate::domain::error::ConfigError;

/// Config directory name under the XDG config home
const APP_DIR: &str = "cam-trigger";

/// Config file name
const CONFIG_FILE: &str = "config.toml";

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
    /// Whether a missing file is an error (explicit `--config`)
    required: bool,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join(APP_DIR);

        Self {
            path: config_dir.join(CONFIG_FILE),
            required: false,
        }
    }

    /// Create with an explicit path that must exist
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// Parse TOML content into a config layer
    fn parse_toml(content: &str) -> Result<ConfigLayer, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<ConfigLayer, ConfigError> {
        if !self.exists() {
            if self.required {
                return Err(ConfigError::ReadError(format!(
                    "{}: file not found",
                    self.path.display()
                )));
            }
            return Ok(ConfigLayer::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", self.path.display(), e)))?;

        Self::parse_toml(&content)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = &store.path;
        assert!(path.to_string_lossy().contains("cam-trigger"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path, PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
duration_ms = 15000
outdir = "/srv/clips"
min_gap_ms = 250
recorder = "libcamera-vid"
"#;

        let layer = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(layer.duration_ms, Some(15000));
        assert_eq!(layer.outdir, Some(PathBuf::from("/srv/clips")));
        assert_eq!(layer.min_gap_ms, Some(250));
        assert_eq!(layer.recorder.as_deref(), Some("libcamera-vid"));
        assert!(layer.verbose.is_none());
    }

    #[test]
    fn parse_toml_rejects_wrong_types() {
        let err = XdgConfigStore::parse_toml("duration_ms = \"ten\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_default_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore {
            path: dir.path().join("config.toml"),
            required: false,
        };
        assert_eq!(store.load().await.unwrap(), ConfigLayer::empty());
    }

    #[tokio::test]
    async fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("absent.toml"));
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[tokio::test]
    async fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "verbose = true\nmin_gap_ms = 0\n").unwrap();

        let layer = XdgConfigStore::with_path(&path).load().await.unwrap();
        assert_eq!(layer.verbose, Some(true));
        assert_eq!(layer.min_gap_ms, Some(0));
    }
}
