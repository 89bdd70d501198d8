use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_credential;

/// Default Active24 REST endpoint.
pub const DEFAULT_API_URL: &str = "https://rest.active24.cz";

// ============ Pagination ============

/// Position of the next page in a record listing.
///
/// The API reports the next page either as a ready-made URL or as a page
/// number. Both are honoured; the listing is exhausted when the cursor is
/// [`PageCursor::None`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PageCursor {
    /// No further page.
    #[default]
    None,
    /// Absolute or base-relative URL of the next page.
    ByUrl(String),
    /// 1-indexed page number of the next page.
    ByNumber(u32),
}

impl PageCursor {
    /// Build a cursor from the two wire fields.
    ///
    /// Empty strings and non-positive numbers are the "no page" sentinels.
    /// When both fields are set the URL wins.
    pub fn from_wire(next_page_url: Option<&str>, next_page: Option<i64>) -> Self {
        match (next_page_url, next_page) {
            (Some(url), _) if !url.is_empty() => Self::ByUrl(url.to_string()),
            (_, Some(n)) if n > 0 => u32::try_from(n).map_or(Self::None, Self::ByNumber),
            _ => Self::None,
        }
    }

    /// Whether another page is available.
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for PageCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::ByUrl(url) => write!(f, "url={url}"),
            Self::ByNumber(n) => write!(f, "page={n}"),
        }
    }
}

/// One page of a record listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    /// Records in backend order.
    pub records: Vec<DnsRecord>,
    /// Where the next page begins.
    pub next: PageCursor,
}

// ============ Records ============

/// DNS record types known to the API.
///
/// Only [`DnsRecordType::Txt`] is ever written; the other variants exist so
/// listings containing them still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Srv,
    Caa,
}

impl DnsRecordType {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as listed by the backend.
///
/// `name` is always absolute (`label.zone`, no trailing dot). The API may omit
/// `id`, `type` and `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Server-assigned identifier.
    pub id: Option<i64>,
    /// Absolute record name.
    pub name: String,
    /// Record type.
    pub record_type: Option<DnsRecordType>,
    /// Record payload.
    pub content: Option<String>,
    /// Time to live in seconds.
    pub ttl: Option<u32>,
}

/// Body of a TXT create or update call.
///
/// `name` is relative to the zone; the backend appends the zone itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxtRecordRequest {
    /// Record name relative to the zone.
    pub name: String,
    /// TXT payload.
    pub content: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

// ============ Backend configuration ============

/// Credentials and scope for one Active24 backend session.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Active24Config {
    /// API key (Basic auth user).
    pub api_key: String,
    /// API secret used to sign each request.
    pub api_secret: String,
    /// Endpoint override; [`DEFAULT_API_URL`] when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Provider service identifier that owns the zone.
    pub service_id: i64,
    /// Zone (no trailing dot) the session operates on.
    pub domain: String,
}

impl Active24Config {
    /// Effective endpoint, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        self.api_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
    }
}

// The secret must never reach a log line through `{:?}`.
impl std::fmt::Debug for Active24Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Active24Config")
            .field("api_key", &mask_credential(&self.api_key))
            .field("api_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("service_id", &self.service_id)
            .field("domain", &self.domain)
            .finish()
    }
}
