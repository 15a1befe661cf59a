//! Secret configuration service.
//!
//! Reads API keys from `secret.json`. The file is created from an empty
//! template on demand and restricted to the owning user on Unix.

use std::path::PathBuf;

use async_trait::async_trait;

use studora_core::config::SecretConfig;
use studora_core::error::{Result, StudoraError};
use studora_core::secret::SecretService;

use crate::paths::StudoraPaths;

/// [`SecretService`] backed by `secret.json` in the config directory.
#[derive(Debug, Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
}

impl SecretServiceImpl {
    /// Creates a service for an explicit secret file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a service for the platform secret file location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(StudoraPaths::secret_file()?))
    }

    /// Creates the secret file with an empty template if it doesn't exist.
    ///
    /// On Unix the file is restricted to mode 600.
    pub async fn ensure_secret_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let template = serde_json::to_string_pretty(&SecretConfig::default())?;
        tokio::fs::write(&self.path, template).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            tokio::fs::set_permissions(&self.path, permissions).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SecretConfig::default());
            }
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&content).map_err(|_| {
            // Never echo file contents; they may hold partial secrets.
            StudoraError::config(format!(
                "secret file at {} is not valid JSON",
                self.path.display()
            ))
        })
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }
}
