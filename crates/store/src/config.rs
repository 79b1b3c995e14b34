//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront runs fully local by default.
//!
//! - `SHOPLITE_DATA_DIR` - Profile directory for the file backend
//!   (default: `.shoplite`)
//! - `SHOPLITE_SEARCH_HISTORY_LIMIT` - Search history cap (default: 5)
//! - `SHOPLITE_BACKEND_URL` - Remote backend base URL (placeholder client)
//! - `SHOPLITE_BACKEND_KEY` - Remote backend anonymous key
//!
//! The remote pair is ignored unless the URL parses as http(s) and neither
//! value looks like an unfilled placeholder, so a freshly copied `.env`
//! template never produces a half-configured client.

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default profile directory.
const DEFAULT_DATA_DIR: &str = ".shoplite";

/// Default search history cap.
const DEFAULT_SEARCH_HISTORY_LIMIT: usize = 5;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Profile directory for the file backend.
    pub data_dir: PathBuf,
    /// Maximum number of retained search history entries.
    pub search_history_limit: usize,
    /// Remote backend configuration, when genuinely configured.
    pub remote: Option<RemoteConfig>,
}

/// Remote backend connection settings.
///
/// Implements `Debug` manually to redact the key.
#[derive(Clone)]
pub struct RemoteConfig {
    /// Base URL of the remote backend.
    pub base_url: Url,
    /// Anonymous API key sent with every request.
    pub anon_key: SecretString,
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("base_url", &self.base_url.as_str())
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid. Missing
    /// variables fall back to defaults; a missing or placeholder remote pair
    /// disables the remote client rather than erroring.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("SHOPLITE_DATA_DIR", DEFAULT_DATA_DIR));

        let search_history_limit = match std::env::var("SHOPLITE_SEARCH_HISTORY_LIMIT") {
            Ok(raw) => {
                let limit: usize = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "SHOPLITE_SEARCH_HISTORY_LIMIT".to_owned(),
                        format!("not a number: {raw}"),
                    )
                })?;
                if limit == 0 {
                    return Err(ConfigError::InvalidEnvVar(
                        "SHOPLITE_SEARCH_HISTORY_LIMIT".to_owned(),
                        "must be at least 1".to_owned(),
                    ));
                }
                limit
            }
            Err(_) => DEFAULT_SEARCH_HISTORY_LIMIT,
        };

        let remote = remote_from_env(
            get_optional_env("SHOPLITE_BACKEND_URL"),
            get_optional_env("SHOPLITE_BACKEND_KEY"),
        );

        Ok(Self {
            data_dir,
            search_history_limit,
            remote,
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            search_history_limit: DEFAULT_SEARCH_HISTORY_LIMIT,
            remote: None,
        }
    }
}

/// Gate the remote pair: both values present, URL http(s), neither a
/// placeholder. Anything less means "not configured", never an error.
fn remote_from_env(url: Option<String>, key: Option<String>) -> Option<RemoteConfig> {
    let url = url?;
    let key = key?;

    if looks_like_placeholder(&url) || looks_like_placeholder(&key) {
        tracing::debug!("remote backend env vars look like placeholders, staying local");
        return None;
    }

    let base_url = match Url::parse(&url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
        Ok(parsed) => {
            tracing::warn!(scheme = parsed.scheme(), "remote backend URL is not http(s), staying local");
            return None;
        }
        Err(err) => {
            tracing::warn!(%err, "remote backend URL failed to parse, staying local");
            return None;
        }
    };

    Some(RemoteConfig {
        base_url,
        anon_key: SecretString::from(key),
    })
}

/// Whether a value matches the placeholder blocklist.
fn looks_like_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_detection() {
        assert!(looks_like_placeholder("https://your-backend.example.com"));
        assert!(looks_like_placeholder("changeme123"));
        assert!(!looks_like_placeholder("https://api.shoplite.dev"));
    }

    #[test]
    fn test_remote_requires_both_values() {
        assert!(remote_from_env(Some("https://api.shoplite.dev".into()), None).is_none());
        assert!(remote_from_env(None, Some("sk_live_abc123".into())).is_none());
    }

    #[test]
    fn test_remote_rejects_placeholders() {
        let remote = remote_from_env(
            Some("https://your-backend-url.test".into()),
            Some("real-looking-key-9f8a7b".into()),
        );
        assert!(remote.is_none());
    }

    #[test]
    fn test_remote_rejects_non_http_schemes() {
        let remote = remote_from_env(
            Some("ftp://api.shoplite.dev".into()),
            Some("k9f8a7b6c5d4".into()),
        );
        assert!(remote.is_none());
    }

    #[test]
    fn test_remote_accepts_valid_pair() {
        let remote = remote_from_env(
            Some("https://api.shoplite.dev".into()),
            Some("k9f8a7b6c5d4".into()),
        );
        let remote = remote.unwrap();
        assert_eq!(remote.base_url.as_str(), "https://api.shoplite.dev/");
    }

    #[test]
    fn test_remote_config_debug_redacts_key() {
        let remote = remote_from_env(
            Some("https://api.shoplite.dev".into()),
            Some("k9f8a7b6c5d4".into()),
        )
        .unwrap();
        let debug = format!("{remote:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("k9f8a7b6c5d4"));
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".shoplite"));
        assert_eq!(config.search_history_limit, 5);
        assert!(config.remote.is_none());
    }
}
