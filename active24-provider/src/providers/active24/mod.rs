//! Active24 DNS backend
//!
//! REST API v2. Every request is signed with HMAC-SHA1 over method, path and
//! timestamp and sent with HTTP Basic auth (API key as user, signature as
//! password).

mod error;
mod http;
mod provider;
mod sign;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_domain_name};
use crate::types::Active24Config;
use crate::utils::log_sanitizer::mask_credential;

pub(crate) use types::{
    Active24DnsRecord, CreateRecordBody, ProblemDetail, RecordListResponse, UpdateRecordBody,
};

pub(crate) const PROVIDER_NAME: &str = "active24";

/// Active24 DNS backend scoped to one service and zone.
pub struct Active24Provider {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) api_secret: String,
    pub(crate) endpoint: String,
    pub(crate) service_id: i64,
    pub(crate) domain: String,
}

impl Active24Provider {
    /// Create a backend session from credentials and scope.
    pub fn new(config: Active24Config) -> Result<Self> {
        let endpoint = config.endpoint().to_string();
        log::debug!(
            "[{PROVIDER_NAME}] New session: endpoint={endpoint}, service={}, domain={}, key={}",
            config.service_id,
            config.domain,
            mask_credential(&config.api_key)
        );
        Ok(Self {
            client: create_http_client(PROVIDER_NAME)?,
            api_key: config.api_key,
            api_secret: config.api_secret,
            endpoint,
            service_id: config.service_id,
            domain: normalize_domain_name(&config.domain),
        })
    }

    /// Path of the record collection of this service.
    pub(crate) fn records_path(&self) -> String {
        format!("/v2/service/{}/dns/record", self.service_id)
    }

    /// Path of a single record of this service.
    pub(crate) fn record_path(&self, id: i64) -> String {
        format!("/v2/service/{}/dns/record/{id}", self.service_id)
    }
}
