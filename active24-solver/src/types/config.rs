//! Solver configuration

use active24_provider::Active24Config;
use active24_provider::log_sanitizer::mask_credential;
use serde::{Deserialize, Serialize};

/// Page fetches allowed per search unless configured otherwise.
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Secret key holding the API key when the selector names none.
pub(crate) const DEFAULT_API_KEY_KEY: &str = "apiKey";
/// Secret key holding the API secret when the selector names none.
pub(crate) const DEFAULT_API_SECRET_KEY: &str = "apiSecret";

/// Reference to one key of a named secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeySelector {
    /// Secret name
    pub name: String,
    /// Key inside the secret; empty selects the default
    #[serde(default)]
    pub key: String,
}

impl SecretKeySelector {
    /// The selected key, or `default` when none is set.
    pub fn key_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.key.is_empty() {
            default
        } else {
            &self.key
        }
    }
}

/// Decoded solver config blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Where to read the API key
    #[serde(default)]
    pub api_key_secret_ref: SecretKeySelector,
    /// Where to read the API secret
    #[serde(default)]
    pub api_secret_secret_ref: SecretKeySelector,
    /// Active24 service that owns the zone
    #[serde(rename = "serviceID")]
    pub service_id: i64,
    /// Zone override; empty uses the resolved zone
    #[serde(default)]
    pub domain: String,
    /// Endpoint override; empty uses the public API
    #[serde(default)]
    pub api_url: String,
    /// Page cap; non-positive uses [`DEFAULT_MAX_PAGES`]
    #[serde(default)]
    pub max_pages: i64,
}

impl SolverConfig {
    /// Secret key of the API key.
    pub fn api_key_key(&self) -> &str {
        self.api_key_secret_ref.key_or(DEFAULT_API_KEY_KEY)
    }

    /// Secret key of the API secret.
    pub fn api_secret_key(&self) -> &str {
        self.api_secret_secret_ref.key_or(DEFAULT_API_SECRET_KEY)
    }

    /// Configured zone override, if any.
    pub fn zone_override(&self) -> Option<&str> {
        Some(self.domain.as_str()).filter(|d| !d.is_empty())
    }

    /// Configured endpoint, if any.
    pub fn api_url(&self) -> Option<&str> {
        Some(self.api_url.as_str()).filter(|u| !u.is_empty())
    }

    /// Effective page cap, always at least 1.
    pub fn max_pages(&self) -> u32 {
        if self.max_pages <= 0 {
            DEFAULT_MAX_PAGES
        } else {
            u32::try_from(self.max_pages).unwrap_or(u32::MAX)
        }
    }
}

/// Credentials and scope of a single reconcile.
#[derive(Clone, PartialEq, Eq)]
pub struct ReconcilerConfig {
    pub api_key: String,
    pub api_secret: String,
    /// `None` uses the public API
    pub api_endpoint: Option<String>,
    pub service_id: i64,
    /// Zone without trailing dot
    pub domain: String,
    /// At least 1
    pub max_pages: u32,
}

impl ReconcilerConfig {
    /// Backend session settings for this reconcile.
    pub fn to_backend_config(&self) -> Active24Config {
        Active24Config {
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
            api_url: self.api_endpoint.clone(),
            service_id: self.service_id,
            domain: self.domain.clone(),
        }
    }
}

impl std::fmt::Debug for ReconcilerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReconcilerConfig")
            .field("api_key", &mask_credential(&self.api_key))
            .field("api_secret", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .field("service_id", &self.service_id)
            .field("domain", &self.domain)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}
