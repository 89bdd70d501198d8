//! Secret store abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{SolverError, SolverResult};

/// Secret Store Trait
///
/// Reads one key of a named secret. Platform implementations decide where
/// secrets live; [`InMemorySecretStore`] is provided for embedding and tests.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Get the raw bytes stored under `key` of secret `name`
    ///
    /// # Arguments
    /// * `namespace` - Scope of the lookup
    /// * `name` - Secret name
    /// * `key` - Key inside the secret
    ///
    /// # Errors
    /// [`SolverError::SecretMissing`] when the secret or the key is absent.
    async fn get(&self, namespace: &str, name: &str, key: &str) -> SolverResult<Vec<u8>>;
}

type SecretData = HashMap<String, Vec<u8>>;

/// In-memory secret store
#[derive(Clone, Default)]
pub struct InMemorySecretStore {
    secrets: Arc<RwLock<HashMap<(String, String), SecretData>>>,
}

impl InMemorySecretStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key` of secret `namespace/name`
    pub async fn insert(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
        value: impl Into<Vec<u8>>,
    ) {
        self.secrets
            .write()
            .await
            .entry((namespace.to_string(), name.to_string()))
            .or_default()
            .insert(key.to_string(), value.into());
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get(&self, namespace: &str, name: &str, key: &str) -> SolverResult<Vec<u8>> {
        let missing = |detail: &str| SolverError::SecretMissing {
            namespace: namespace.to_string(),
            name: name.to_string(),
            key: key.to_string(),
            detail: detail.to_string(),
        };

        let secrets = self.secrets.read().await;
        let data = secrets
            .get(&(namespace.to_string(), name.to_string()))
            .ok_or_else(|| missing("secret not found"))?;
        data.get(key)
            .cloned()
            .ok_or_else(|| missing("key not found in secret"))
    }
}
