//! Backend factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::Active24Provider;
use crate::traits::DnsBackend;
use crate::types::Active24Config;

/// Creates a [`DnsBackend`] session from credentials and scope.
///
/// Every call builds a new HTTP client; sessions are not shared between
/// callers with different credentials.
///
/// # Examples
///
/// ```rust,no_run
/// use active24_provider::{create_backend, Active24Config};
///
/// let backend = create_backend(Active24Config {
///     api_key: "key".to_string(),
///     api_secret: "secret".to_string(),
///     api_url: None,
///     service_id: 12345,
///     domain: "example.com".to_string(),
/// })?;
/// # Ok::<(), active24_provider::ProviderError>(())
/// ```
pub fn create_backend(config: Active24Config) -> Result<Arc<dyn DnsBackend>> {
    Ok(Arc::new(Active24Provider::new(config)?))
}
