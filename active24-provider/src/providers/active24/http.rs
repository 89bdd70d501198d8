//! Active24 HTTP 请求方法

use chrono::Utc;
use reqwest::header::{ACCEPT, CONTENT_TYPE, DATE};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::{ErrorContext, ProviderErrorMapper};

use super::sign::date_header;
use super::{Active24Provider, PROVIDER_NAME};

impl Active24Provider {
    /// Absolute URL for an API path (which may carry a query string).
    pub(crate) fn api_url(&self, path_and_query: &str) -> Result<Url> {
        let raw = format!("{}{path_and_query}", self.endpoint);
        Url::parse(&raw).map_err(|e| ProviderError::NetworkError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("Invalid request URL '{raw}': {e}"),
        })
    }

    /// Resolve a next-page URL handed out by the API.
    ///
    /// Absolute URLs must share the endpoint's origin, since the request is
    /// signed with the account credentials. Root-relative URLs keep the
    /// endpoint's path prefix; other relative URLs are joined below it.
    pub(crate) fn resolve_url(&self, next: &str) -> Result<Url> {
        let invalid = |e: &dyn std::fmt::Display| ProviderError::NetworkError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("Invalid next page URL '{next}': {e}"),
        };
        let base = Url::parse(&format!("{}/", self.endpoint)).map_err(|e| invalid(&e))?;

        if let Ok(url) = Url::parse(next) {
            if url.origin() != base.origin() {
                return Err(ProviderError::ParseError {
                    provider: PROVIDER_NAME.to_string(),
                    detail: format!(
                        "Next page URL '{next}' is outside the API origin {}",
                        base.origin().ascii_serialization()
                    ),
                });
            }
            return Ok(url);
        }

        let prefix = base.path().trim_end_matches('/');
        let resolved = if next.starts_with('/') && !next.starts_with(&format!("{prefix}/")) {
            Url::parse(&format!("{}{next}", self.endpoint))
        } else {
            base.join(next)
        };
        resolved.map_err(|e| invalid(&e))
    }

    /// Signed request to `url`, optionally with a JSON body.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
        context: ErrorContext,
    ) -> Result<HttpResponse> {
        let timestamp = Utc::now().timestamp();
        let signature = self.sign(method.as_str(), url.path(), timestamp);
        let url_for_log = url.to_string();
        let method_name = method.as_str().to_string();

        let mut request = self
            .client
            .request(method, url)
            .basic_auth(&self.api_key, Some(signature))
            .header(DATE, date_header(timestamp))
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            log::debug!("[{PROVIDER_NAME}] Request Body: {body}");
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response =
            HttpUtils::execute_request(request, PROVIDER_NAME, &method_name, &url_for_log).await?;

        if !response.is_success() {
            let error = self.response_error(&response, context);
            if error.is_expected() {
                log::warn!(
                    "[{PROVIDER_NAME}] {method_name} {url_for_log} rejected (HTTP {}): {error}",
                    response.status
                );
            } else {
                log::error!(
                    "[{PROVIDER_NAME}] {method_name} {url_for_log} failed (HTTP {}): {error}",
                    response.status
                );
            }
            return Err(error);
        }

        Ok(response)
    }

    fn serialize_body<B: Serialize>(&self, body: &B) -> Result<String> {
        serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: e.to_string(),
        })
    }

    /// 执行 GET 请求并解析 JSON
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .execute(Method::GET, url, None, ErrorContext::default())
            .await?;
        HttpUtils::parse_json(&response.body, PROVIDER_NAME)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.api_url(path)?;
        let body = self.serialize_body(body)?;
        self.execute(Method::POST, url, Some(body), ErrorContext::default())
            .await
            .map(|_| ())
    }

    /// 执行 PUT 请求
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B, id: i64) -> Result<()> {
        let url = self.api_url(path)?;
        let body = self.serialize_body(body)?;
        let context = ErrorContext {
            record_id: Some(id.to_string()),
            ..ErrorContext::default()
        };
        self.execute(Method::PUT, url, Some(body), context)
            .await
            .map(|_| ())
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str, id: i64) -> Result<()> {
        let url = self.api_url(path)?;
        let context = ErrorContext {
            record_id: Some(id.to_string()),
            ..ErrorContext::default()
        };
        self.execute(Method::DELETE, url, None, context)
            .await
            .map(|_| ())
    }
}
