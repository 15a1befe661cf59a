//! Unified path management for Studora configuration files.
//!
//! All configuration, secrets, and cached data live under the platform
//! config and data directories, resolved through the `dirs` crate.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/studora/           # Config directory
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//!
//! ~/.local/share/studora/      # Data directory
//! └── cache/                   # Key-value store files (one JSON file per key)
//! ```

use std::path::PathBuf;

use studora_core::StudoraError;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for StudoraError {
    fn from(err: PathError) -> Self {
        StudoraError::config(err.to_string())
    }
}

/// Unified path management for Studora.
pub struct StudoraPaths;

impl StudoraPaths {
    /// Returns the Studora configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("studora"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the Studora data directory, used for cached records.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("studora"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g. 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the directory holding key-value store files.
    pub fn cache_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("cache"))
    }
}
