//! Secret service implementation.
//!
//! Reads secret.json through [`SecretStorage`] and caches the result so
//! repeated lookups do not hit the file system.

use crate::paths::StargazerPaths;
use crate::storage::secret_storage::SecretStorage;
use anyhow::Result;
use stargazer_core::config::SecretConfig;
use stargazer_core::secret::SecretService;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Service for loading secret configuration.
///
/// # Example
///
/// ```ignore
/// use stargazer_infrastructure::SecretServiceImpl;
/// use stargazer_core::secret::SecretService;
///
/// let service = SecretServiceImpl::new(None)?;
/// let secrets = service.load_secrets().await?;
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    /// Cached secret config loaded from storage.
    secrets: Arc<RwLock<Option<SecretConfig>>>,
    storage: Arc<SecretStorage>,
}

impl SecretServiceImpl {
    /// Creates a service reading `secret.json` under `base_path`, or under
    /// the platform config directory when `None`.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let paths = StargazerPaths::new(base_path)
            .map_err(|e| anyhow::anyhow!("Failed to get secret path: {}", e))?;
        Ok(Self::with_storage(SecretStorage::with_path(paths.secret_file())))
    }

    pub fn with_storage(storage: SecretStorage) -> Self {
        Self {
            secrets: Arc::new(RwLock::new(None)),
            storage: Arc::new(storage),
        }
    }

    /// Loads the secrets from storage if not already cached.
    fn load_secrets_internal(&self) -> Result<SecretConfig, String> {
        {
            let read_lock = self
                .secrets
                .read()
                .map_err(|e| format!("Secret cache lock poisoned: {}", e))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.storage.load().map_err(|e| e.to_string())?;
        tracing::debug!(
            "[Secrets] Loaded secret file from {}",
            self.storage.path().display()
        );

        {
            let mut write_lock = self
                .secrets
                .write()
                .map_err(|e| format!("Secret cache lock poisoned: {}", e))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        self.load_secrets_internal()
    }

    async fn secret_file_exists(&self) -> bool {
        self.storage.exists()
    }
}
