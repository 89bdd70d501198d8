//! Active24 ACME DNS-01 solver core
//!
//! Publishes and retracts the `TXT` records of ACME DNS-01 challenges:
//! - [`services::record_matches`] decides whether a listed record is the
//!   challenge record
//! - [`services::PagedFinder`] scans the paginated listing with a page cap
//! - [`services::ChallengeReconciler`] performs the idempotent
//!   present (upsert) and clean up (delete-if-present)
//! - [`services::Active24Solver`] turns a challenge request into a reconcile:
//!   decodes the config, reads credentials, builds a backend session
//!
//! Secret retrieval, config decoding and backend construction are traits, so
//! the dispatcher embedding this library supplies its own implementations.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{SolverError, SolverResult};
pub use services::{
    Active24Solver, ChallengeReconciler, ChallengeSolver, PagedFinder, SolverContext,
    record_matches,
};
pub use traits::{
    Active24BackendFactory, BackendFactory, ConfigDecoder, InMemorySecretStore, JsonConfigDecoder,
    SecretStore,
};
pub use types::{
    ChallengeCoords, ChallengeRequest, DEFAULT_MAX_PAGES, DEFAULT_TTL, ReconcilerConfig,
    SecretKeySelector, SolverConfig,
};
