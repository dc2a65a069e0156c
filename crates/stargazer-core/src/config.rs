//! Configuration models.
//!
//! Secrets (`secret.json`) and plain settings (`config.toml`) are kept in
//! separate files; only the former holds credentials.

use serde::{Deserialize, Serialize};

/// Default Gemini model when neither config file names one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Environment variable consulted when secret.json carries no key.
pub const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

/// Root structure of secret.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    /// Gemini API configuration
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl SecretConfig {
    /// Picks the API key: secret.json first, then the environment value.
    ///
    /// Blank keys are treated as absent.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Option<String> {
        self.gemini
            .as_ref()
            .map(|gemini| gemini.api_key.trim().to_string())
            .filter(|key| !key.is_empty())
            .or_else(|| {
                env_value
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            })
    }

    pub fn model_name(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .and_then(|gemini| gemini.model_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

/// Root structure of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Non-secret Gemini settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSettings {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Model to use: config.toml, then secret.json, then the default.
    pub fn effective_model(&self, secrets: &SecretConfig) -> String {
        self.gemini
            .model
            .as_deref()
            .filter(|model| !model.trim().is_empty())
            .or_else(|| secrets.model_name())
            .unwrap_or(DEFAULT_GEMINI_MODEL)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets_with(api_key: &str, model_name: Option<&str>) -> SecretConfig {
        SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: api_key.to_string(),
                model_name: model_name.map(str::to_string),
            }),
        }
    }

    #[test]
    fn test_file_key_wins_over_env() {
        let secrets = secrets_with("file-key", None);
        assert_eq!(
            secrets.resolve_api_key(Some("env-key".to_string())),
            Some("file-key".to_string())
        );
    }

    #[test]
    fn test_blank_file_key_falls_back_to_env() {
        let secrets = secrets_with("  ", None);
        assert_eq!(
            secrets.resolve_api_key(Some("env-key".to_string())),
            Some("env-key".to_string())
        );
        assert_eq!(SecretConfig::default().resolve_api_key(Some(String::new())), None);
        assert_eq!(SecretConfig::default().resolve_api_key(None), None);
    }

    #[test]
    fn test_model_precedence() {
        let secrets = secrets_with("k", Some("gemini-from-secret"));
        let mut config = AppConfig::default();
        assert_eq!(config.effective_model(&secrets), "gemini-from-secret");
        assert_eq!(config.effective_model(&SecretConfig::default()), DEFAULT_GEMINI_MODEL);

        config.gemini.model = Some("gemini-from-config".to_string());
        assert_eq!(config.effective_model(&secrets), "gemini-from-config");
    }

    #[test]
    fn test_app_config_defaults_from_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_app_config_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [gemini]
            base_url = "http://localhost:8080/v1beta/models"

            [logging]
            filter = "stargazer=debug"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.gemini.base_url.as_deref(),
            Some("http://localhost:8080/v1beta/models")
        );
        assert!(config.gemini.model.is_none());
        assert_eq!(config.logging.filter, "stargazer=debug");
    }

    #[test]
    fn test_secret_config_parses_without_gemini() {
        let config: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(config.gemini.is_none());
    }
}
