//! Client configuration and factory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::http::{HttpVocabClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "VOCABDRILL_API_URL";

/// Top-level vocabdrill configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabdrillConfig {
    /// Base URL that `/api/word` and `/api/validate-sentence` are resolved against.
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for VocabdrillConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
            // Inserted values are not expanded again.
            from = start + value.len();
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `vocabdrill.toml` in the current directory
/// 2. `~/.config/vocabdrill/config.toml`
///
/// `VOCABDRILL_API_URL` overrides the base URL from any file.
pub fn load_config() -> Result<VocabdrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<VocabdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("vocabdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => VocabdrillConfig::default(),
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            config.api_base_url = url;
        }
    }

    Ok(config)
}

/// Parse a TOML config string and resolve `${VAR}` references.
pub fn parse_config(content: &str) -> Result<VocabdrillConfig> {
    let mut config: VocabdrillConfig = toml::from_str(content)?;
    config.api_base_url = resolve_env_vars(&config.api_base_url);
    anyhow::ensure!(
        config.request_timeout_secs >= 1,
        "request_timeout_secs must be at least 1"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("vocabdrill"))
}

/// Create an HTTP client from the configuration.
pub fn create_client(config: &VocabdrillConfig) -> Result<HttpVocabClient> {
    HttpVocabClient::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_VOCABDRILL_TEST_HOST", "api.example.test");
        assert_eq!(
            resolve_env_vars("https://${_VOCABDRILL_TEST_HOST}:8000"),
            "https://api.example.test:8000"
        );
        assert_eq!(resolve_env_vars("no vars"), "no vars");
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_VOCABDRILL_TEST_HOST");
    }

    #[test]
    fn resolve_env_vars_inserts_values_verbatim() {
        std::env::set_var("_VOCABDRILL_TEST_SELF", "${_VOCABDRILL_TEST_SELF}");
        std::env::set_var("_VOCABDRILL_TEST_PORT", "9000");
        assert_eq!(
            resolve_env_vars("http://${_VOCABDRILL_TEST_SELF}:${_VOCABDRILL_TEST_PORT}"),
            "http://${_VOCABDRILL_TEST_SELF}:9000"
        );
        std::env::remove_var("_VOCABDRILL_TEST_SELF");
        std::env::remove_var("_VOCABDRILL_TEST_PORT");
    }

    #[test]
    fn default_config() {
        let config = VocabdrillConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(r#"api_base_url = "http://vocab.internal:9000""#).unwrap();
        assert_eq!(config.api_base_url, "http://vocab.internal:9000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn zero_timeout_is_invalid() {
        assert!(parse_config("request_timeout_secs = 0").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/nonexistent/vocabdrill.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabdrill.toml");
        std::fs::write(
            &path,
            "api_base_url = \"http://127.0.0.1:8123\"\nrequest_timeout_secs = 5\n",
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        if std::env::var(API_URL_ENV).is_err() {
            assert_eq!(config.api_base_url, "http://127.0.0.1:8123");
        }
        assert_eq!(config.request_timeout_secs, 5);
    }
}
