//! Startup wiring: credential lookup and agent construction.

use stargazer_core::config::{API_KEY_ENV_VAR, AppConfig, SecretConfig};
use stargazer_core::secret::SecretService;
use stargazer_infrastructure::{SecretServiceImpl, SecretStorage, StargazerPaths};
use stargazer_interaction::GeminiApiAgent;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup conditions. Each message tells the user how to fix it.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(
        "Gemini API key not found. Add your key to {} under \"gemini.api_key\" \
         (or set {env_var}) and start stargazer again.",
        .path.display()
    )]
    MissingApiKey { path: PathBuf, env_var: &'static str },

    #[error(
        "Could not read {}: {reason}. Fix or remove the file and start stargazer again.",
        .path.display()
    )]
    UnreadableSecrets { path: PathBuf, reason: String },

    #[error("Could not create {}: {reason}", .path.display())]
    TemplateFailed { path: PathBuf, reason: String },
}

/// Builds the Gemini agent from secret.json, the environment and config.toml.
///
/// When no key is available anywhere and secret.json does not exist yet,
/// a template is written so the user only has to fill in the key.
pub async fn build_agent(
    paths: &StargazerPaths,
    config: &AppConfig,
    env_api_key: Option<String>,
) -> Result<GeminiApiAgent, SetupError> {
    let service = SecretServiceImpl::with_storage(
        SecretStorage::with_path(paths.secret_file()),
    );

    let secrets = if service.secret_file_exists().await {
        service
            .load_secrets()
            .await
            .map_err(|reason| SetupError::UnreadableSecrets {
                path: paths.secret_file(),
                reason,
            })?
    } else {
        SecretConfig::default()
    };

    let Some(api_key) = secrets.resolve_api_key(env_api_key) else {
        let (path, created) =
            paths
                .ensure_secret_file()
                .map_err(|e| SetupError::TemplateFailed {
                    path: paths.secret_file(),
                    reason: e.to_string(),
                })?;
        if created {
            tracing::info!("[Startup] Wrote secret template to {}", path.display());
        }
        return Err(SetupError::MissingApiKey {
            path,
            env_var: API_KEY_ENV_VAR,
        });
    };

    let model = config.effective_model(&secrets);
    tracing::info!("[Startup] Using Gemini model {}", model);

    let agent = GeminiApiAgent::new(api_key, model);
    Ok(match config.gemini.base_url.as_deref() {
        Some(base_url) if !base_url.trim().is_empty() => agent.with_base_url(base_url),
        _ => agent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stargazer_core::advisory::TextGenerator;
    use tempfile::TempDir;

    fn paths_in(dir: &TempDir) -> StargazerPaths {
        StargazerPaths::new(Some(dir.path())).unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_writes_template() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);

        let err = build_agent(&paths, &AppConfig::default(), None)
            .await
            .err()
            .expect("startup should fail without a key");

        assert!(matches!(err, SetupError::MissingApiKey { .. }));
        assert!(err.to_string().contains("gemini.api_key"));
        assert!(paths.secret_file().exists());

        // The template has an empty key, so a second start still fails
        let again = build_agent(&paths, &AppConfig::default(), None).await;
        assert!(matches!(again, Err(SetupError::MissingApiKey { .. })));
    }

    #[tokio::test]
    async fn test_env_key_without_secret_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);

        let agent = build_agent(&paths, &AppConfig::default(), Some("env-key".to_string()))
            .await
            .unwrap();
        assert_eq!(agent.model(), stargazer_core::config::DEFAULT_GEMINI_MODEL);
        assert!(!paths.secret_file().exists());
    }

    #[tokio::test]
    async fn test_secret_file_model_and_config_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);
        std::fs::write(
            paths.secret_file(),
            r#"{"gemini": {"api_key": "file-key", "model_name": "gemini-from-secret"}}"#,
        )
        .unwrap();

        let agent = build_agent(&paths, &AppConfig::default(), None).await.unwrap();
        assert_eq!(agent.model(), "gemini-from-secret");

        let mut config = AppConfig::default();
        config.gemini.model = Some("gemini-from-config".to_string());
        let agent = build_agent(&paths, &config, None).await.unwrap();
        assert_eq!(agent.model(), "gemini-from-config");
    }

    #[tokio::test]
    async fn test_corrupt_secret_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);
        std::fs::write(paths.secret_file(), "{ nope").unwrap();

        let result = build_agent(&paths, &AppConfig::default(), Some("env-key".to_string())).await;
        assert!(matches!(result, Err(SetupError::UnreadableSecrets { .. })));
    }
}
