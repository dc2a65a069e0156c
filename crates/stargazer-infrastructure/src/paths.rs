//! Unified path management for stargazer configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/stargazer/         # Config directory (platform config dir)
//! ├── config.toml              # Optional settings
//! ├── secret.json              # Gemini API key
//! └── logs/                    # Application logs
//!     └── stargazer.log.YYYY-MM-DD
//! ```

use stargazer_core::config::{DEFAULT_GEMINI_MODEL, GeminiConfig, SecretConfig};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "stargazer";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for stargazer.
///
/// All files live under one base directory. The default base is the
/// platform config directory joined with `stargazer`; tests pass a
/// temporary directory instead.
#[derive(Debug, Clone)]
pub struct StargazerPaths {
    base: PathBuf,
}

impl StargazerPaths {
    /// Uses `base_path` when given, the platform config directory otherwise.
    pub fn new(base_path: Option<&Path>) -> Result<Self, PathError> {
        let base = match base_path {
            Some(path) => path.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(PathError::ConfigDirNotFound)?
                .join(APP_DIR_NAME),
        };
        Ok(Self { base })
    }

    pub fn config_dir(&self) -> &Path {
        &self.base
    }

    /// Returns the path to config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.base.join("config.toml")
    }

    /// Returns the path to secret.json.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file(&self) -> PathBuf {
        self.base.join("secret.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.base.join("logs")
    }

    /// Ensures the secret file exists, creating it with a template if it doesn't.
    ///
    /// The template carries an empty `gemini.api_key` for the user to fill in.
    /// On Unix the new file gets mode 600.
    ///
    /// # Returns
    ///
    /// - `Ok((PathBuf, bool))`: path to the secret file and whether it was just created
    /// - `Err(std::io::Error)`: If file creation or permission setting fails
    pub fn ensure_secret_file(&self) -> Result<(PathBuf, bool), std::io::Error> {
        let secret_path = self.secret_file();

        if secret_path.exists() {
            return Ok((secret_path, false));
        }

        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template_config = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some(DEFAULT_GEMINI_MODEL.to_string()),
            }),
        };

        let template_json = serde_json::to_string_pretty(&template_config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        std::fs::write(&secret_path, template_json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        Ok((secret_path, true))
    }
}
