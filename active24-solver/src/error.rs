//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use active24_provider::ProviderError;

/// Solver error type
///
/// Every error aborts the current present / clean up and is handed back to
/// the dispatcher unchanged; nothing is recovered locally.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum SolverError {
    /// The DNS backend rejected a call or could not be reached
    #[error("Backend failure{}: {message}", http_suffix(.status))]
    BackendFailure {
        /// HTTP status, if the backend answered at all
        status: Option<u16>,
        /// Backend error message
        message: String,
    },

    /// The listing still had pages after `limit` fetches
    #[error(
        "Maximum page limit {limit} reached while searching for the TXT record, increase maxPages in the solver config"
    )]
    PageLimitExceeded { limit: u32 },

    /// The solver config blob could not be decoded
    #[error("Invalid solver config: {0}")]
    ConfigInvalid(String),

    /// A credential could not be read from the secret store
    #[error("Secret '{namespace}/{name}' key '{key}' unavailable: {detail}")]
    SecretMissing {
        namespace: String,
        name: String,
        key: String,
        detail: String,
    },
}

#[allow(clippy::ref_option)]
fn http_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl SolverError {
    /// Whether the failure stems from configuration or input rather than an
    /// outage; used to pick `warn` over `error` when logging.
    ///
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigInvalid(_) | Self::SecretMissing { .. } | Self::PageLimitExceeded { .. } => {
                true
            }
            Self::BackendFailure { status, .. } => {
                matches!(status, Some(s) if (400..500).contains(s) && *s != 429)
            }
        }
    }

    /// HTTP status behind a backend failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BackendFailure { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<ProviderError> for SolverError {
    fn from(e: ProviderError) -> Self {
        Self::BackendFailure {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

/// Solver Result type alias
pub type SolverResult<T> = std::result::Result<T, SolverError>;
