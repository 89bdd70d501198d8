//! Active24 error mapping

use crate::error::ProviderError;
use crate::http_client::HttpResponse;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{Active24Provider, PROVIDER_NAME, ProblemDetail};

/// Active24 signals failures through the HTTP status; the body is a problem
/// document with an optional `data` map of field validation errors.
impl ProviderErrorMapper for Active24Provider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.status {
            401 => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            403 => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            404 => match context.record_id {
                Some(record_id) => ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id,
                    raw_message: Some(raw.message),
                },
                None => ProviderError::ResourceNotFound {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                },
            },

            400 | 422 => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                status: raw.status,
                param: context.param.unwrap_or_else(|| "general".to_string()),
                detail: raw.message,
            },

            429 => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: context.retry_after,
                raw_message: Some(raw.message),
            },

            500..=599 => ProviderError::ServerError {
                provider: self.provider_name().to_string(),
                status: raw.status,
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}

impl Active24Provider {
    /// Map a non-2xx response, extracting message and field from the body.
    pub(crate) fn response_error(
        &self,
        response: &HttpResponse,
        mut context: ErrorContext,
    ) -> ProviderError {
        let problem: ProblemDetail = serde_json::from_str(&response.body).unwrap_or_default();

        let message = problem
            .detail
            .clone()
            .or_else(|| problem.title.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if response.body.trim().is_empty() {
                    format!("HTTP {}", response.status)
                } else {
                    truncate_for_log(&response.body)
                }
            });

        if context.param.is_none() {
            context.param = problem
                .data
                .as_ref()
                .and_then(|d| d.as_object())
                .and_then(|fields| fields.keys().next().cloned());
        }
        context.retry_after = response.retry_after;

        let raw = match problem.problem_type {
            Some(code) => RawApiError::with_code(response.status, code, message),
            None => RawApiError::new(response.status, message),
        };

        self.map_error(raw, context)
    }
}
