//! Configuration service implementation.
//!
//! Loads the optional settings file (~/.config/stargazer/config.toml).

use crate::paths::StargazerPaths;
use stargazer_core::config::AppConfig;
use stargazer_core::error::{Result, StargazerError};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches config.toml.
///
/// A missing file is not an error; defaults are used instead.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &StargazerPaths) -> Self {
        Self::with_path(paths.config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| StargazerError::internal(format!("config cache poisoned: {e}")))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|e| StargazerError::internal(format!("config cache poisoned: {e}")))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    fn load_config(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[Config] No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content).map_err(|e| {
            StargazerError::config(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_loads_model_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StargazerPaths::new(Some(temp_dir.path())).unwrap();
        std::fs::write(paths.config_file(), "[gemini]\nmodel = \"gemini-2.5-pro\"\n").unwrap();

        let service = ConfigService::new(&paths);
        let config = service.get_config().unwrap();
        assert_eq!(config.gemini.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[gemini\nmodel = 1").unwrap();

        let err = ConfigService::with_path(path).get_config().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_unreadable_config_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::create_dir(&path).unwrap();

        let err = ConfigService::with_path(path).get_config().unwrap_err();
        assert!(matches!(err, StargazerError::Io { .. }));
    }
}
