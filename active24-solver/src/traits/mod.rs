//! Collaborator abstractions
//!
//! The dispatcher embedding the solver decides where secrets live, how the
//! config blob is decoded and how backend sessions are built.

mod backend_factory;
mod config_decoder;
mod secret_store;

pub use backend_factory::{Active24BackendFactory, BackendFactory};
pub use config_decoder::{ConfigDecoder, JsonConfigDecoder};
pub use secret_store::{InMemorySecretStore, SecretStore};
