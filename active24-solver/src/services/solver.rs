//! Challenge solver entry points

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{SolverError, SolverResult};
use crate::services::{ChallengeReconciler, SolverContext};
use crate::types::{ChallengeCoords, ChallengeRequest, ReconcilerConfig, SecretKeySelector};

/// The callbacks a challenge dispatcher drives.
#[async_trait]
pub trait ChallengeSolver: Send + Sync {
    /// Solver name the dispatcher routes challenges by.
    fn name(&self) -> &'static str;

    /// Publish the challenge record.
    async fn present(&self, request: &ChallengeRequest) -> SolverResult<()>;

    /// Retract the challenge record.
    async fn clean_up(&self, request: &ChallengeRequest) -> SolverResult<()>;
}

/// Active24 DNS-01 solver
///
/// Each call decodes the request's config, reads credentials and builds a
/// fresh backend session; nothing is shared between calls.
pub struct Active24Solver {
    ctx: Arc<SolverContext>,
}

impl Active24Solver {
    #[must_use]
    pub fn new(ctx: Arc<SolverContext>) -> Self {
        Self { ctx }
    }

    async fn prepare(
        &self,
        request: &ChallengeRequest,
    ) -> SolverResult<(ChallengeReconciler, ChallengeCoords)> {
        let config = self.ctx.config_decoder.decode(request.config.as_ref())?;
        let coords = ChallengeCoords::from_request(request, config.zone_override());

        let namespace = &request.resource_namespace;
        let api_key = self
            .read_secret(namespace, &config.api_key_secret_ref, config.api_key_key())
            .await?;
        let api_secret = self
            .read_secret(
                namespace,
                &config.api_secret_secret_ref,
                config.api_secret_key(),
            )
            .await?;

        let reconciler_config = ReconcilerConfig {
            api_key,
            api_secret,
            api_endpoint: config.api_url().map(str::to_string),
            service_id: config.service_id,
            domain: coords.zone.clone(),
            max_pages: config.max_pages(),
        };
        log::debug!("Reconciling with {reconciler_config:?}");

        let backend = self.ctx.backend_factory.create(&reconciler_config)?;
        Ok((
            ChallengeReconciler::new(backend, reconciler_config.max_pages),
            coords,
        ))
    }

    async fn read_secret(
        &self,
        namespace: &str,
        selector: &SecretKeySelector,
        key: &str,
    ) -> SolverResult<String> {
        let bytes = self
            .ctx
            .secret_store
            .get(namespace, &selector.name, key)
            .await?;
        String::from_utf8(bytes).map_err(|_| {
            SolverError::ConfigInvalid(format!(
                "secret '{namespace}/{}' key '{key}' is not valid UTF-8",
                selector.name
            ))
        })
    }

    fn log_setup_failure(operation: &str, request: &ChallengeRequest, error: &SolverError) {
        if error.is_expected() {
            log::warn!(
                "Cannot {operation} challenge for {}: {error}",
                request.resolved_fqdn
            );
        } else {
            log::error!(
                "Cannot {operation} challenge for {}: {error}",
                request.resolved_fqdn
            );
        }
    }
}

#[async_trait]
impl ChallengeSolver for Active24Solver {
    fn name(&self) -> &'static str {
        "active24"
    }

    async fn present(&self, request: &ChallengeRequest) -> SolverResult<()> {
        log::info!(
            "Presenting challenge for {} in zone {}",
            request.resolved_fqdn,
            request.resolved_zone
        );
        let (reconciler, coords) = self.prepare(request).await.inspect_err(|e| {
            Self::log_setup_failure("present", request, e);
        })?;
        reconciler.present(&coords).await?;
        log::info!("Presented TXT record {}", coords.fqdn);
        Ok(())
    }

    async fn clean_up(&self, request: &ChallengeRequest) -> SolverResult<()> {
        log::info!(
            "Cleaning up challenge for {} in zone {}",
            request.resolved_fqdn,
            request.resolved_zone
        );
        let (reconciler, coords) = self.prepare(request).await.inspect_err(|e| {
            Self::log_setup_failure("clean up", request, e);
        })?;
        reconciler.clean_up(&coords).await?;
        log::info!("Cleaned up TXT record {}", coords.fqdn);
        Ok(())
    }
}
