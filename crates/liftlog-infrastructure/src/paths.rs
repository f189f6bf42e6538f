//! Path management for liftlog configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/liftlog/           # Config directory (platform default via `dirs`)
//! ├── config.toml              # Client configuration
//! └── credential.json          # Stored credential (token + account)
//! ```

use liftlog_core::error::{LiftlogError, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "liftlog";
const CONFIG_FILE: &str = "config.toml";
const CREDENTIAL_FILE: &str = "credential.json";

#[derive(Debug, Clone)]
pub struct LiftlogPaths {
    config_dir: PathBuf,
}

impl LiftlogPaths {
    /// Resolves paths under `base_dir`, or under the platform config
    /// directory when `None`.
    ///
    /// # Returns
    ///
    /// - `Ok(LiftlogPaths)`: paths resolved
    /// - `Err(LiftlogError::Config)`: no platform config directory exists
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let config_dir = match base_dir {
            Some(base) => base.to_path_buf(),
            None => dirs::config_dir()
                .ok_or_else(|| LiftlogError::config("Cannot find config directory"))?
                .join(APP_DIR),
        };
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn credential_file(&self) -> PathBuf {
        self.config_dir.join(CREDENTIAL_FILE)
    }
}
