use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DnsRecordType, PageCursor, RecordPage, TxtRecordRequest};

/// Raw API failure before it is mapped (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status of the response.
    pub status: u16,
    /// Machine-readable error code, when the body carries one.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information attached while mapping an error (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record id for update/delete calls.
    pub record_id: Option<String>,
    /// Parameter the API complained about, if it says.
    pub param: Option<String>,
    /// Parsed `Retry-After` header.
    pub retry_after: Option<u64>,
}

/// Maps raw API failures onto [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a failed response to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: fallback for anything unmapped.
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            status: Some(raw.status),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Record operations of a DNS hosting backend, scoped to one service and zone.
///
/// Implementations perform exactly one API call per method and never retry.
#[async_trait]
pub trait DnsBackend: Send + Sync {
    /// Backend identifier.
    fn id(&self) -> &'static str;

    /// Service the session is scoped to.
    fn service_id(&self) -> i64;

    /// Zone the session is scoped to (no trailing dot).
    fn domain(&self) -> &str;

    /// Fetch one page of records of `record_type` named `name` (relative).
    ///
    /// `cursor` is [`PageCursor::None`] for the first page.
    async fn list_page(
        &self,
        record_type: DnsRecordType,
        name: &str,
        cursor: &PageCursor,
    ) -> Result<RecordPage>;

    /// Create a TXT record.
    async fn create_txt_record(&self, req: &TxtRecordRequest) -> Result<()>;

    /// Overwrite name, content and TTL of the record `id`.
    async fn update_txt_record(&self, id: i64, req: &TxtRecordRequest) -> Result<()>;

    /// Delete the record `id`.
    async fn delete_record(&self, id: i64) -> Result<()>;
}
