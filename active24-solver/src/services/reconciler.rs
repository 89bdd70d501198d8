//! Idempotent publish and retract of challenge records

use std::sync::Arc;

use crate::error::{SolverError, SolverResult};
use crate::services::PagedFinder;
use crate::types::{ChallengeCoords, DnsBackend, DnsRecord, TxtRecordRequest};

/// Present (upsert) and clean up (delete-if-present) against one backend
/// session.
pub struct ChallengeReconciler {
    backend: Arc<dyn DnsBackend>,
    finder: PagedFinder,
}

impl ChallengeReconciler {
    #[must_use]
    pub fn new(backend: Arc<dyn DnsBackend>, max_pages: u32) -> Self {
        Self {
            finder: PagedFinder::new(backend.clone(), max_pages),
            backend,
        }
    }

    /// Publish the challenge record.
    ///
    /// Updates the existing record with the same name and content, otherwise
    /// creates one. Repeating the call leaves exactly one such record.
    pub async fn present(&self, coords: &ChallengeCoords) -> SolverResult<()> {
        let result = self.upsert(coords).await;
        if let Err(e) = &result {
            self.log_failure("present", coords, e);
        }
        result
    }

    /// Retract the challenge record.
    ///
    /// Only a record matching both name and content is deleted; a missing
    /// record is a no-op.
    pub async fn clean_up(&self, coords: &ChallengeCoords) -> SolverResult<()> {
        let result = self.delete_if_present(coords).await;
        if let Err(e) = &result {
            self.log_failure("clean up", coords, e);
        }
        result
    }

    async fn upsert(&self, coords: &ChallengeCoords) -> SolverResult<()> {
        let existing = self.find(coords).await?;
        let request = TxtRecordRequest {
            name: coords.record_name.clone(),
            content: coords.content.clone(),
            ttl: coords.ttl,
        };

        match existing {
            None => {
                log::debug!(
                    "Creating TXT record '{}' in zone {}",
                    coords.record_name,
                    coords.zone
                );
                self.backend.create_txt_record(&request).await?;
            }
            Some(record) => {
                let id = record_id(&record)?;
                log::debug!("Updating TXT record {id} '{}'", record.name);
                self.backend.update_txt_record(id, &request).await?;
            }
        }
        Ok(())
    }

    async fn delete_if_present(&self, coords: &ChallengeCoords) -> SolverResult<()> {
        let Some(record) = self.find(coords).await? else {
            log::debug!(
                "No TXT record '{}' with the challenge content, nothing to clean up",
                coords.absolute_name()
            );
            return Ok(());
        };

        let id = record_id(&record)?;
        log::debug!("Deleting TXT record {id} '{}'", record.name);
        self.backend.delete_record(id).await?;
        Ok(())
    }

    async fn find(&self, coords: &ChallengeCoords) -> SolverResult<Option<DnsRecord>> {
        self.finder
            .find(&coords.record_name, &coords.zone, &coords.content)
            .await
    }

    fn log_failure(&self, operation: &str, coords: &ChallengeCoords, error: &SolverError) {
        let backend = self.backend.id();
        let service_id = self.backend.service_id();
        let domain = self.backend.domain();
        if error.is_expected() {
            log::warn!(
                "[{backend}] TXT {operation} failed (serviceId={service_id}, domain={domain}, recordName={}): {error}",
                coords.record_name
            );
        } else {
            log::error!(
                "[{backend}] TXT {operation} failed (serviceId={service_id}, domain={domain}, recordName={}): {error}",
                coords.record_name
            );
        }
    }
}

fn record_id(record: &DnsRecord) -> SolverResult<i64> {
    record.id.ok_or_else(|| SolverError::BackendFailure {
        status: None,
        message: format!("TXT record '{}' listed without an id", record.name),
    })
}
