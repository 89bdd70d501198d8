//! Active24 HMAC-SHA1 request signing

use chrono::{DateTime, SecondsFormat, Utc};

use crate::providers::common::hmac_sha1;

use super::Active24Provider;

impl Active24Provider {
    /// Signature for one request: hex HMAC-SHA1 of `"{METHOD} {PATH} {TIMESTAMP}"`.
    ///
    /// `path` excludes the query string.
    pub(crate) fn sign(&self, method: &str, path: &str, timestamp: i64) -> String {
        let canonical_request = format!("{method} {path} {timestamp}");
        hex::encode(hmac_sha1(
            self.api_secret.as_bytes(),
            canonical_request.as_bytes(),
        ))
    }
}

/// `Date` header value for `timestamp`, ISO 8601 in UTC.
pub(crate) fn date_header(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}
