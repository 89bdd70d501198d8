//! Business logic services

mod finder;
mod matcher;
mod reconciler;
mod solver;

pub use finder::PagedFinder;
pub use matcher::record_matches;
pub use reconciler::ChallengeReconciler;
pub use solver::{Active24Solver, ChallengeSolver};

use std::sync::Arc;

use crate::traits::{
    Active24BackendFactory, BackendFactory, ConfigDecoder, JsonConfigDecoder, SecretStore,
};

/// Service context - holds the solver's collaborators
///
/// The embedding dispatcher creates it and injects its secret store.
pub struct SolverContext {
    /// Credential source
    pub secret_store: Arc<dyn SecretStore>,
    /// Config blob decoder
    pub config_decoder: Arc<dyn ConfigDecoder>,
    /// Builds one backend session per reconcile
    pub backend_factory: Arc<dyn BackendFactory>,
}

impl SolverContext {
    #[must_use]
    pub fn new(
        secret_store: Arc<dyn SecretStore>,
        config_decoder: Arc<dyn ConfigDecoder>,
        backend_factory: Arc<dyn BackendFactory>,
    ) -> Self {
        Self {
            secret_store,
            config_decoder,
            backend_factory,
        }
    }

    /// JSON config decoding and Active24 REST sessions.
    #[must_use]
    pub fn with_defaults(secret_store: Arc<dyn SecretStore>) -> Self {
        Self::new(
            secret_store,
            Arc::new(JsonConfigDecoder),
            Arc::new(Active24BackendFactory),
        )
    }
}
