//! Backend session construction

use std::sync::Arc;

use active24_provider::{DnsBackend, create_backend};

use crate::error::SolverResult;
use crate::types::ReconcilerConfig;

/// Builds a backend session for one reconcile.
///
/// Called once per present / clean up; credentials may differ between
/// challenges, so sessions are never cached.
pub trait BackendFactory: Send + Sync {
    fn create(&self, config: &ReconcilerConfig) -> SolverResult<Arc<dyn DnsBackend>>;
}

/// Builds Active24 REST sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Active24BackendFactory;

impl BackendFactory for Active24BackendFactory {
    fn create(&self, config: &ReconcilerConfig) -> SolverResult<Arc<dyn DnsBackend>> {
        Ok(create_backend(config.to_backend_config())?)
    }
}
