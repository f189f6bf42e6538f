//! Configuration service implementation.
//!
//! Loads `ClientConfig` from `config.toml` and applies environment
//! overrides on top.

use liftlog_core::config::ClientConfig;
use liftlog_core::error::Result;
use std::path::{Path, PathBuf};

pub const ENV_API_URL: &str = "LIFTLOG_API_URL";
pub const ENV_LOG_LEVEL: &str = "LIFTLOG_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file. A missing file yields the defaults.
    pub async fn load(&self) -> Result<ClientConfig> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                tracing::debug!("[ConfigService] Loaded {}", self.path.display());
                Ok(toml::from_str(&content)?)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("[ConfigService] {} not found, using defaults", self.path.display());
                Ok(ClientConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reads the config file and applies process environment overrides.
    pub async fn load_with_env(&self) -> Result<ClientConfig> {
        let config = self.load().await?;
        Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
    }

    pub async fn save(&self, config: &ClientConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(config)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

/// Overrides config values from `lookup`. Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(api_url) = non_empty(ENV_API_URL) {
        config.api_url = api_url;
    }
    if let Some(level) = non_empty(ENV_LOG_LEVEL) {
        config.log_level = level;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(dir.path().join("config.toml"));

        assert_eq!(service.load().await.unwrap(), ClientConfig::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(dir.path().join("nested").join("config.toml"));
        let config = ClientConfig {
            api_url: "https://api.example.com".to_string(),
            request_timeout_secs: Some(15),
            log_level: "debug".to_string(),
        };

        service.save(&config).await.unwrap();

        assert_eq!(service.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();

        let err = ConfigService::new(path).load().await.unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_API_URL, "https://staging.example.com"),
            (ENV_LOG_LEVEL, "  "),
        ]);

        let config = apply_env_overrides(ClientConfig::default(), |key| {
            env.get(key).map(|v| v.to_string())
        });

        assert_eq!(config.api_url, "https://staging.example.com");
        assert_eq!(config.log_level, "info");
    }
}
