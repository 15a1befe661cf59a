//! Application configuration service.
//!
//! Loads and saves `config.toml`. A missing file is created with default
//! values on first load so a fresh install starts from a known state.

use std::path::PathBuf;

use studora_core::config::AppConfig;
use studora_core::error::{Result, StudoraError};

use crate::paths::StudoraPaths;
use crate::storage::AtomicFile;

/// Service reading and writing the application configuration file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file: AtomicFile,
}

impl ConfigService {
    /// Creates a service for an explicit config file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    /// Creates a service for the platform config file location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(StudoraPaths::config_file()?))
    }

    /// Loads the configuration, writing defaults first if the file is
    /// missing or empty.
    pub async fn load(&self) -> Result<AppConfig> {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || {
            match file.load()? {
                Some(content) => {
                    let config: AppConfig = toml::from_str(&content)?;
                    Ok(config)
                }
                None => {
                    let config = AppConfig::default();
                    file.save(&toml::to_string_pretty(&config)?)?;
                    tracing::info!(path = %file.path().display(), "wrote default configuration");
                    Ok(config)
                }
            }
        })
        .await
        .map_err(|e| StudoraError::internal(format!("Failed to join task: {}", e)))?
    }

    /// Saves the configuration.
    pub async fn save(&self, config: &AppConfig) -> Result<()> {
        let file = self.file.clone();
        let content = toml::to_string_pretty(config)?;
        tokio::task::spawn_blocking(move || file.save(&content))
            .await
            .map_err(|e| StudoraError::internal(format!("Failed to join task: {}", e)))?
    }
}
