//! Active24 API 类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paginated record listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordListResponse {
    #[serde(default)]
    pub data: Vec<Active24DnsRecord>,
    pub current_page: Option<i64>,
    pub total_records: Option<i64>,
    pub next_page_url: Option<String>,
    pub next_page: Option<i64>,
}

/// Active24 DNS record (response)
#[derive(Debug, Deserialize)]
pub struct Active24DnsRecord {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub name: String,
    pub content: Option<String>,
    pub ttl: Option<u32>,
}

/// Create request body
#[derive(Debug, Serialize)]
pub struct CreateRecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
}

/// Update request body. The API keeps the type of an existing record.
#[derive(Debug, Serialize)]
pub struct UpdateRecordBody<'a> {
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
}

/// Problem document returned with 4xx/5xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    pub title: Option<String>,
    pub detail: Option<String>,
    /// Validation errors keyed by field name.
    pub data: Option<Value>,
}
