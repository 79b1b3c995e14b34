//! Remote backend placeholder client.
//!
//! The storefront is designed so the storage port could one day be served by
//! a real networked backend. This client is the seam for that future: it is
//! constructed only when the environment carries a genuine URL/key pair (see
//! [`crate::config`]), and none of the data paths call it. It exists so the
//! wiring - configuration, gating, auth header - is already proven when a
//! remote store arrives.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use crate::config::RemoteConfig;

/// Errors from the remote backend client.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    /// The configured base URL cannot address the requested endpoint.
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A client for the (future) remote backend.
///
/// Implements `Debug` manually to redact the key.
#[derive(Clone)]
pub struct RemoteBackend {
    http: reqwest::Client,
    base_url: Url,
    anon_key: SecretString,
}

impl std::fmt::Debug for RemoteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteBackend")
            .field("base_url", &self.base_url.as_str())
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl RemoteBackend {
    /// Build a client from validated remote settings.
    #[must_use]
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// The backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Probe the backend's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Http`] on transport failure and
    /// [`RemoteError::Status`] when the backend answers with a non-success
    /// status.
    pub async fn ping(&self) -> Result<(), RemoteError> {
        let url = self.base_url.join("health")?;

        let response = self
            .http
            .get(url)
            .header("apikey", self.anon_key.expose_secret())
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RemoteError::Status(response.status()))
        }
    }
}
