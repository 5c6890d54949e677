//! Configuration management for the repo-policy CLI.
//!
//! The configuration is an optional TOML file. It only carries the parts of
//! the repository policy that may differ between organizations; everything
//! else is fixed by [`DesiredPolicy`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use repo_policy_core::DesiredPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "repo-policy.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the repo-policy CLI application.
///
/// # Example TOML Configuration
///
/// ```toml
/// [policy]
/// creation_languages = ["javascript", "typescript"]
///
/// [policy.required_status_check]
/// app_id = "MDM6QXBwMTUzNjg="
/// context = "test / test"
/// ```
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Overrides of the repository policy
    #[serde(default)]
    pub policy: DesiredPolicy,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read, or
    /// does not contain a valid configuration.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicitly given path must exist. Without one, the default file in
    /// the current directory is used when present, and the built-in policy
    /// otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    info!("No configuration file found, using the built-in policy");
                    Ok(Self::default())
                }
            }
        }
    }
}
