//! Bounded scan of the paginated TXT listing

use std::sync::Arc;

use crate::error::{SolverError, SolverResult};
use crate::services::record_matches;
use crate::types::{DnsBackend, DnsRecord, DnsRecordType, PageCursor};

/// Finds the challenge record across pages, fetching at most `max_pages`.
pub struct PagedFinder {
    backend: Arc<dyn DnsBackend>,
    max_pages: u32,
}

impl PagedFinder {
    /// `max_pages` below 1 is raised to 1.
    #[must_use]
    pub fn new(backend: Arc<dyn DnsBackend>, max_pages: u32) -> Self {
        Self {
            backend,
            max_pages: max_pages.max(1),
        }
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// First record matching `(record_name, zone, content)` in listing order.
    ///
    /// The first page is always fetched. Fails with
    /// [`SolverError::PageLimitExceeded`] when a further page is announced
    /// after `max_pages` fetches; backend errors are returned as they are.
    pub async fn find(
        &self,
        record_name: &str,
        zone: &str,
        content: &str,
    ) -> SolverResult<Option<DnsRecord>> {
        let mut cursor = PageCursor::None;
        let mut page_count: u32 = 0;

        loop {
            page_count += 1;
            if page_count > self.max_pages && cursor.is_some() {
                log::debug!(
                    "[{}] Page limit {} reached searching TXT '{record_name}.{zone}', next {cursor}",
                    self.backend.id(),
                    self.max_pages
                );
                return Err(SolverError::PageLimitExceeded {
                    limit: self.max_pages,
                });
            }

            let page = self
                .backend
                .list_page(DnsRecordType::Txt, record_name, &cursor)
                .await?;
            log::debug!(
                "Page {page_count} ({cursor}) of TXT '{record_name}': {} records, next {}",
                page.records.len(),
                page.next
            );

            if let Some(found) = page.records.into_iter().find(|r| {
                log::trace!("Checking record {:?} '{}'", r.id, r.name);
                record_matches(r, record_name, zone, content)
            }) {
                log::debug!("Found TXT record {:?} on page {page_count}", found.id);
                return Ok(Some(found));
            }

            if !page.next.is_some() {
                return Ok(None);
            }
            cursor = page.next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        ABSOLUTE_NAME, Call, CursorStyle, MockDnsBackend, Op, RECORD_NAME, ZONE, challenge_txt,
        txt,
    };
    use active24_provider::ProviderError;

    fn finder(backend: &Arc<MockDnsBackend>, max_pages: u32) -> PagedFinder {
        PagedFinder::new(backend.clone(), max_pages)
    }

    #[tokio::test]
    async fn empty_listing_returns_none() {
        let backend = Arc::new(MockDnsBackend::new());

        let found = finder(&backend, 10)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap();

        assert!(found.is_none());
        assert_eq!(
            backend.calls().await,
            vec![Call::List {
                name: RECORD_NAME.to_string(),
                cursor: PageCursor::None
            }]
        );
    }

    #[tokio::test]
    async fn first_match_on_page_wins() {
        let backend = Arc::new(
            MockDnsBackend::new()
                .with_records(vec![
                    challenge_txt(1, "other"),
                    challenge_txt(2, "tok1"),
                    challenge_txt(3, "tok1"),
                ])
                .await,
        );

        let found = finder(&backend, 10)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap();

        assert_eq!(found.and_then(|r| r.id), Some(2));
    }

    #[tokio::test]
    async fn follows_number_cursors() {
        let backend = Arc::new(
            MockDnsBackend::new()
                .with_records(vec![
                    challenge_txt(1, "a"),
                    challenge_txt(2, "b"),
                    challenge_txt(3, "tok1"),
                ])
                .await
                .with_page_size(1)
                .await,
        );

        let found = finder(&backend, 5)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap();

        assert_eq!(found.and_then(|r| r.id), Some(3));
        let cursors: Vec<PageCursor> = backend
            .calls()
            .await
            .into_iter()
            .filter_map(|c| match c {
                Call::List { cursor, .. } => Some(cursor),
                _ => None,
            })
            .collect();
        assert_eq!(
            cursors,
            vec![
                PageCursor::None,
                PageCursor::ByNumber(2),
                PageCursor::ByNumber(3)
            ]
        );
    }

    #[tokio::test]
    async fn follows_url_cursors() {
        let backend = Arc::new(
            MockDnsBackend::new()
                .with_records(vec![challenge_txt(1, "a"), challenge_txt(2, "tok1")])
                .await
                .with_page_size(1)
                .await
                .with_cursor_style(CursorStyle::Url)
                .await,
        );

        let found = finder(&backend, 5)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap();

        assert_eq!(found.and_then(|r| r.id), Some(2));
        assert!(matches!(
            backend.calls().await.last(),
            Some(Call::List { cursor: PageCursor::ByUrl(url), .. }) if url.ends_with("page=2")
        ));
    }

    #[tokio::test]
    async fn endless_listing_stops_at_limit() {
        let backend = Arc::new(
            MockDnsBackend::new()
                .with_records(vec![challenge_txt(1, "other")])
                .await
                .endless()
                .await,
        );

        let err = finder(&backend, 3)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap_err();

        assert_eq!(err, SolverError::PageLimitExceeded { limit: 3 });
        assert_eq!(backend.list_calls().await, 3);
    }

    #[tokio::test]
    async fn single_page_limit_still_fetches_first_page() {
        let backend = Arc::new(
            MockDnsBackend::new()
                .with_records(vec![challenge_txt(1, "tok1")])
                .await
                .endless()
                .await,
        );

        let found = finder(&backend, 1)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap();
        assert_eq!(found.and_then(|r| r.id), Some(1));

        let err = finder(&backend, 1)
            .find(RECORD_NAME, ZONE, "missing")
            .await
            .unwrap_err();
        assert_eq!(err, SolverError::PageLimitExceeded { limit: 1 });
    }

    #[tokio::test]
    async fn listing_ending_exactly_at_limit_is_not_an_error() {
        let backend = Arc::new(
            MockDnsBackend::new()
                .with_records(vec![challenge_txt(1, "a"), challenge_txt(2, "b")])
                .await
                .with_page_size(1)
                .await,
        );

        let found = finder(&backend, 2)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap();

        assert!(found.is_none());
        assert_eq!(backend.list_calls().await, 2);
    }

    #[tokio::test]
    async fn zero_limit_is_raised_to_one() {
        let backend = Arc::new(MockDnsBackend::new());
        assert_eq!(finder(&backend, 0).max_pages(), 1);
    }

    #[tokio::test]
    async fn records_under_other_names_are_skipped() {
        let backend = Arc::new(
            MockDnsBackend::new()
                .with_records(vec![
                    txt(1, "_acme-challenge.www.example.com", "tok1"),
                    challenge_txt(2, "tok1"),
                ])
                .await,
        );

        let found = finder(&backend, 10)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, Some(2));
        assert_eq!(found.name, ABSOLUTE_NAME);
    }

    #[tokio::test]
    async fn backend_error_is_passed_through() {
        let backend = Arc::new(MockDnsBackend::new());
        backend
            .fail_on(
                Op::List,
                ProviderError::ServerError {
                    provider: "mock".to_string(),
                    status: 503,
                    raw_message: Some("maintenance".to_string()),
                },
            )
            .await;

        let err = finder(&backend, 10)
            .find(RECORD_NAME, ZONE, "tok1")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(matches!(err, SolverError::BackendFailure { .. }));
    }
}
