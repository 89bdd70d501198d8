//! DNS backend implementations

/// Shared utilities used by backend implementations.
pub mod common;

mod active24;

pub use active24::Active24Provider;
