//! Backend collaborator configuration.
//!
//! Two values are required at startup: the backend service URL and its
//! public API key. Both come from the environment (prefix `BACKEND_`), and
//! absence fails fast with a typed error instead of wiring a silently dead
//! client. The key itself is never logged; use
//! [`BackendConfig::key_fingerprint`] when the startup log needs to prove
//! which key was loaded.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use url::Url;

/// Errors raised while assembling the backend configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration sources could not be read or merged.
    #[error("configuration load failed: {message}")]
    Load {
        /// Loader-provided failure description.
        message: String,
    },
    /// A required value was absent from every source.
    #[error("missing required configuration value {name}")]
    MissingValue {
        /// Environment name of the absent value.
        name: &'static str,
    },
    /// The service URL did not parse.
    #[error("invalid backend service URL: {0}")]
    InvalidServiceUrl(#[from] url::ParseError),
}

/// Raw configuration values as the environment provides them.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BACKEND")]
pub struct BackendSettings {
    /// Backend service URL (`BACKEND_SERVICE_URL`).
    pub service_url: Option<String>,
    /// Public API key (`BACKEND_PUBLIC_KEY`).
    pub public_key: Option<String>,
}

impl BackendSettings {
    /// Validate the raw values into a usable configuration.
    pub fn try_into_config(self) -> Result<BackendConfig, ConfigError> {
        let service_url = self.service_url.ok_or(ConfigError::MissingValue {
            name: "BACKEND_SERVICE_URL",
        })?;
        let public_key = self.public_key.ok_or(ConfigError::MissingValue {
            name: "BACKEND_PUBLIC_KEY",
        })?;
        let service_url = Url::parse(&service_url)?;

        Ok(BackendConfig {
            service_url,
            public_key,
        })
    }
}

/// Validated backend configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    service_url: Url,
    public_key: String,
}

impl BackendConfig {
    /// Assemble the configuration from the environment, failing fast when
    /// either required value is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = BackendSettings::load_from_iter([OsString::from("console")]).map_err(
            |err| ConfigError::Load {
                message: err.to_string(),
            },
        )?;
        settings.try_into_config()
    }

    /// Backend service URL.
    #[must_use]
    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    /// Public API key, for constructing the backend client.
    #[must_use]
    pub fn public_key(&self) -> &str {
        self.public_key.as_str()
    }

    /// Short SHA-256 digest of the public key, safe to log.
    #[must_use]
    pub fn key_fingerprint(&self) -> String {
        let digest = Sha256::digest(self.public_key.as_bytes());
        hex::encode(&digest[..8])
    }
}
