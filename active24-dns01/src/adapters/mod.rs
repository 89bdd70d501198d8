//! Platform adapters for the solver binary
//!
//! - **`FileSecretStore`**: reads secrets mounted as files,
//!   one file per key under `<root>/<namespace>/<name>/<key>`.

mod file_secret_store;

pub use file_secret_store::FileSecretStore;
