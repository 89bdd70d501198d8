//! Type definitions

mod challenge;
mod config;

pub use challenge::{ChallengeCoords, ChallengeRequest, DEFAULT_TTL};
pub use config::{DEFAULT_MAX_PAGES, ReconcilerConfig, SecretKeySelector, SolverConfig};

// Re-export backend types used across the solver
pub use active24_provider::{
    DnsBackend, DnsRecord, DnsRecordType, PageCursor, RecordPage, TxtRecordRequest,
};
