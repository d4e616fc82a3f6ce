//! REST adapter for the hosted backend collaborator.
//!
//! The adapter is constructed at startup from [`BackendConfig`] and carries
//! the public key on every request. The core flows never call it; it exists
//! so a deployment that adopts persistence has the seam ready (see
//! [`crate::domain::ports::BackendPort`]).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::info;
use url::Url;

use crate::config::BackendConfig;
use crate::domain::ports::{BackendError, BackendPort, SnapshotPayload};

/// Header carrying the public API key, Supabase-style.
const API_KEY_HEADER: &str = "apikey";

/// HTTP adapter implementing [`BackendPort`].
#[derive(Debug, Clone)]
pub struct RestBackend {
    http: reqwest::Client,
    base: Url,
}

impl RestBackend {
    /// Build the adapter from validated configuration.
    ///
    /// Construction only wires the client; no request is made until a port
    /// method is called.
    pub fn connect(config: &BackendConfig) -> Result<Self, BackendError> {
        let key = HeaderValue::from_str(config.public_key())
            .map_err(|err| BackendError::protocol(format!("public key is not a header: {err}")))?;
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| BackendError::connection(err.to_string()))?;

        info!(
            service_url = %config.service_url(),
            key_fingerprint = %config.key_fingerprint(),
            "backend client wired"
        );
        Ok(Self {
            http,
            base: config.service_url().clone(),
        })
    }

    /// Base URL the adapter talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base
            .join(path)
            .map_err(|err| BackendError::protocol(format!("bad endpoint {path}: {err}")))
    }
}

#[async_trait]
impl BackendPort for RestBackend {
    async fn health(&self) -> Result<(), BackendError> {
        let endpoint = self.endpoint("health")?;
        let response = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(|err| BackendError::connection(err.to_string()))?;
        response
            .error_for_status()
            .map_err(|err| BackendError::protocol(err.to_string()))?;
        Ok(())
    }

    async fn push_snapshot(&self, snapshot: SnapshotPayload<'_>) -> Result<(), BackendError> {
        let endpoint = self.endpoint("snapshot")?;
        let response = self
            .http
            .post(endpoint)
            .json(&snapshot)
            .send()
            .await
            .map_err(|err| BackendError::connection(err.to_string()))?;
        response
            .error_for_status()
            .map_err(|err| BackendError::protocol(err.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Adapter construction; network behaviour is not exercised here.

    use super::*;
    use crate::config::BackendSettings;
    use rstest::rstest;

    fn config() -> BackendConfig {
        BackendSettings {
            service_url: Some("https://api.example.com/v1/".to_owned()),
            public_key: Some("anon-key-123".to_owned()),
        }
        .try_into_config()
        .expect("config builds")
    }

    #[rstest]
    fn connect_wires_the_configured_base_url() {
        let backend = RestBackend::connect(&config()).expect("adapter builds");
        assert_eq!(backend.base_url().as_str(), "https://api.example.com/v1/");
    }

    #[rstest]
    fn keys_that_cannot_travel_as_headers_are_rejected() {
        let config = BackendSettings {
            service_url: Some("https://api.example.com".to_owned()),
            public_key: Some("bad\nkey".to_owned()),
        }
        .try_into_config()
        .expect("config builds");

        let err = RestBackend::connect(&config).expect_err("header value must be rejected");
        assert!(matches!(err, BackendError::Protocol { .. }));
    }
}
