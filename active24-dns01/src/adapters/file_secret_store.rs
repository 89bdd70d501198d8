//! File-backed secret store
//!
//! Secrets are directories of key files, grouped by namespace, as laid out
//! by volume-mounted secrets.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use active24_solver::traits::SecretStore;
use active24_solver::{SolverError, SolverResult};
use async_trait::async_trait;

const MAX_SECRET_FILE_SIZE: u64 = 64 * 1024; // 64KB

/// Secret store reading `<root>/<namespace>/<name>/<key>`.
pub struct FileSecretStore {
    root: PathBuf,
}

impl FileSecretStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        tracing::debug!("Secret store root: {:?}", root);
        Self { root }
    }

    fn secret_path(&self, namespace: &str, name: &str, key: &str) -> Option<PathBuf> {
        let parts = [namespace, name, key];
        if parts.iter().any(|p| !is_plain_segment(p)) {
            return None;
        }
        Some(parts.iter().fold(self.root.clone(), |path, p| path.join(p)))
    }
}

/// A single non-empty path component without traversal.
fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[async_trait]
impl SecretStore for FileSecretStore {
    async fn get(&self, namespace: &str, name: &str, key: &str) -> SolverResult<Vec<u8>> {
        let missing = |detail: String| SolverError::SecretMissing {
            namespace: namespace.to_string(),
            name: name.to_string(),
            key: key.to_string(),
            detail,
        };

        let path = self
            .secret_path(namespace, name, key)
            .ok_or_else(|| missing("invalid secret reference".to_string()))?;

        let metadata = tokio::fs::metadata(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => missing("not found".to_string()),
            _ => missing(format!("failed to read {}: {e}", path.display())),
        })?;
        if !metadata.is_file() {
            return Err(missing(format!("{} is not a file", path.display())));
        }
        if metadata.len() > MAX_SECRET_FILE_SIZE {
            return Err(missing(format!(
                "{} exceeds {MAX_SECRET_FILE_SIZE} bytes",
                path.display()
            )));
        }

        tokio::fs::read(&path)
            .await
            .map_err(|e| missing(format!("failed to read {}: {e}", path.display())))
    }
}
