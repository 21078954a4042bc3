//! Global configuration and token resolution for thanks.
//!
//! The only secret this tool needs is a GitHub token with permission to star
//! repositories. Like other credentials, it belongs in a user-level file
//! outside version control rather than in the project tree, so thanks reads
//! an optional global config at `~/.thanks/config.toml`:
//!
//! ```toml
//! # ~/.thanks/config.toml - never commit this file
//! github_token = "ghp_xxxxxxxxxxxx"
//! ```
//!
//! The file location can be overridden with the `THANKS_CONFIG` environment
//! variable or the `--config` flag.
//!
//! # Token Resolution Order
//!
//! 1. The `--token` command-line flag
//! 2. `github_token` in the global config file
//! 3. The `GITHUB_TOKEN` environment variable
//!
//! Explicit configuration beats the ambient environment. A missing token is
//! not an error: the run ends early with a diagnostic and no network calls.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{CONFIG_PATH_VAR, GITHUB_TOKEN_VAR};
use crate::core::ThanksError;

/// Global configuration stored at `~/.thanks/config.toml`.
///
/// The token is held only for the lifetime of the process and is never
/// written back or logged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalConfig {
    /// GitHub token used to authenticate star requests.
    pub github_token: Option<String>,
}

impl GlobalConfig {
    /// Default location of the global config file.
    ///
    /// Honors the `THANKS_CONFIG` environment variable, falling back to
    /// `~/.thanks/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or_else(|| ThanksError::ConfigError {
            reason: "could not determine home directory".to_string(),
        })?;
        Ok(home.join(".thanks").join("config.toml"))
    }

    /// Load the config from a specific path.
    ///
    /// A missing file yields the default (empty) configuration; a present
    /// but malformed file is a configuration error.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).await?;
        let config: Self = toml::from_str(&content).map_err(|e| ThanksError::ConfigError {
            reason: format!("invalid config file {}: {e}", path.display()),
        })?;
        Ok(config)
    }
}

/// Resolve the GitHub token from flag, global config, and environment.
///
/// Returns `Ok(None)` when no source supplies a non-empty token.
pub async fn resolve_token(
    flag: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<Option<String>> {
    let path = match config_path {
        Some(path) => path,
        None => GlobalConfig::default_path()?,
    };
    let config = GlobalConfig::load_from(&path).await?;
    Ok(pick_token(flag, config.github_token, std::env::var(GITHUB_TOKEN_VAR).ok()))
}

/// Pure selection of the first non-empty token in priority order.
fn pick_token(
    flag: Option<String>,
    config_token: Option<String>,
    env_token: Option<String>,
) -> Option<String> {
    [flag, config_token, env_token]
        .into_iter()
        .flatten()
        .find(|token| !token.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_config_and_environment() {
        let token = pick_token(
            Some("from-flag".into()),
            Some("from-config".into()),
            Some("from-env".into()),
        );
        assert_eq!(token.as_deref(), Some("from-flag"));
    }

    #[test]
    fn config_beats_environment() {
        let token = pick_token(None, Some("from-config".into()), Some("from-env".into()));
        assert_eq!(token.as_deref(), Some("from-config"));
    }

    #[test]
    fn environment_is_the_last_resort() {
        let token = pick_token(None, None, Some("from-env".into()));
        assert_eq!(token.as_deref(), Some("from-env"));
    }

    #[test]
    fn empty_tokens_are_ignored() {
        let token = pick_token(Some("  ".into()), Some(String::new()), None);
        assert_eq!(token, None);
    }

    #[tokio::test]
    async fn missing_config_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("config.toml")).await.unwrap();
        assert!(config.github_token.is_none());
    }

    #[tokio::test]
    async fn config_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "github_token = \"ghp_test\"\n").await.unwrap();
        let config = GlobalConfig::load_from(&path).await.unwrap();
        assert_eq!(config.github_token.as_deref(), Some("ghp_test"));
    }

    #[tokio::test]
    async fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "github_token = [not toml").await.unwrap();
        let error = GlobalConfig::load_from(&path).await.unwrap_err();
        let error = error.downcast::<ThanksError>().unwrap();
        assert!(matches!(error, ThanksError::ConfigError { .. }));
    }
}
