//! # active24-provider
//!
//! Active24 DNS REST API backend for managing the `TXT` records of ACME
//! DNS-01 challenges.
//!
//! The [`DnsBackend`] trait is the capability the challenge solver consumes:
//! paginated listing plus create, update and delete of single records, all
//! scoped to one service id and zone. [`Active24Provider`] implements it on
//! top of the Active24 v2 API.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for static and container builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use active24_provider::{
//!     create_backend, Active24Config, DnsBackend, DnsRecordType, PageCursor, TxtRecordRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = create_backend(Active24Config {
//!         api_key: "your-key".to_string(),
//!         api_secret: "your-secret".to_string(),
//!         api_url: None,
//!         service_id: 12345,
//!         domain: "example.com".to_string(),
//!     })?;
//!
//!     let page = backend
//!         .list_page(DnsRecordType::Txt, "_acme-challenge", &PageCursor::None)
//!         .await?;
//!     for record in &page.records {
//!         println!("{} {:?}", record.name, record.content);
//!     }
//!
//!     backend
//!         .create_txt_record(&TxtRecordRequest {
//!             name: "_acme-challenge".to_string(),
//!             content: "token".to_string(),
//!             ttl: 300,
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Errors
//! caused by an HTTP response expose the status through
//! [`ProviderError::status`]. Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_backend;

// Re-export the backend capability (internal traits are not exported)
pub use traits::DnsBackend;

// Re-export types
pub use types::{
    Active24Config, DEFAULT_API_URL, DnsRecord, DnsRecordType, PageCursor, RecordPage,
    TxtRecordRequest,
};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export the concrete backend
pub use providers::Active24Provider;
