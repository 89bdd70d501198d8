//! Test helpers
//!
//! In-memory backend, factory and convenience builders.

use std::sync::Arc;

use active24_provider::ProviderError;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::SolverResult;
use crate::traits::{BackendFactory, InMemorySecretStore};
use crate::types::{
    ChallengeCoords, DnsBackend, DnsRecord, DnsRecordType, PageCursor, ReconcilerConfig,
    RecordPage, TxtRecordRequest,
};

pub const ZONE: &str = "example.com";
pub const RECORD_NAME: &str = "_acme-challenge";
pub const ABSOLUTE_NAME: &str = "_acme-challenge.example.com";

// ===== MockDnsBackend =====

/// One call received by [`MockDnsBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List { name: String, cursor: PageCursor },
    Create(TxtRecordRequest),
    Update(i64, TxtRecordRequest),
    Delete(i64),
}

/// Which kind of cursor the mock hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Number,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

struct MockState {
    records: Vec<DnsRecord>,
    next_id: i64,
    page_size: usize,
    cursor_style: CursorStyle,
    /// Always report another page, even past the end
    endless: bool,
    calls: Vec<Call>,
    failure: Option<(Op, ProviderError)>,
}

/// In-memory TXT backend with paging, call log and failure injection.
pub struct MockDnsBackend {
    domain: String,
    state: RwLock<MockState>,
}

impl MockDnsBackend {
    pub fn new() -> Self {
        Self {
            domain: ZONE.to_string(),
            state: RwLock::new(MockState {
                records: Vec::new(),
                next_id: 1000,
                page_size: 50,
                cursor_style: CursorStyle::Number,
                endless: false,
                calls: Vec::new(),
                failure: None,
            }),
        }
    }

    pub async fn with_records(self, records: Vec<DnsRecord>) -> Self {
        self.state.write().await.records = records;
        self
    }

    pub async fn with_page_size(self, page_size: usize) -> Self {
        self.state.write().await.page_size = page_size.max(1);
        self
    }

    pub async fn with_cursor_style(self, style: CursorStyle) -> Self {
        self.state.write().await.cursor_style = style;
        self
    }

    pub async fn endless(self) -> Self {
        self.state.write().await.endless = true;
        self
    }

    pub async fn fail_on(&self, op: Op, error: ProviderError) {
        self.state.write().await.failure = Some((op, error));
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.state.read().await.calls.clone()
    }

    pub async fn list_calls(&self) -> usize {
        self.calls()
            .await
            .iter()
            .filter(|c| matches!(c, Call::List { .. }))
            .count()
    }

    /// Calls other than listings.
    pub async fn mutations(&self) -> Vec<Call> {
        self.calls()
            .await
            .into_iter()
            .filter(|c| !matches!(c, Call::List { .. }))
            .collect()
    }

    pub async fn records(&self) -> Vec<DnsRecord> {
        self.state.read().await.records.clone()
    }

    /// Records equal to the challenge record of `content`.
    pub async fn matching(&self, content: &str) -> Vec<DnsRecord> {
        self.records()
            .await
            .into_iter()
            .filter(|r| r.name == ABSOLUTE_NAME && r.content.as_deref() == Some(content))
            .collect()
    }

    fn page_index(cursor: &PageCursor) -> usize {
        match cursor {
            PageCursor::None => 1,
            PageCursor::ByNumber(n) => *n as usize,
            PageCursor::ByUrl(url) => url
                .rsplit("page=")
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(1),
        }
    }

    fn injected(state: &MockState, op: Op) -> Result<(), ProviderError> {
        match &state.failure {
            Some((failing, error)) if *failing == op => Err(error.clone()),
            _ => Ok(()),
        }
    }

    fn not_found(id: i64) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: "mock".to_string(),
            record_id: id.to_string(),
            raw_message: None,
        }
    }
}

#[async_trait]
impl DnsBackend for MockDnsBackend {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn service_id(&self) -> i64 {
        1
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    async fn list_page(
        &self,
        record_type: DnsRecordType,
        name: &str,
        cursor: &PageCursor,
    ) -> active24_provider::Result<RecordPage> {
        let mut state = self.state.write().await;
        state.calls.push(Call::List {
            name: name.to_string(),
            cursor: cursor.clone(),
        });
        Self::injected(&state, Op::List)?;

        let absolute = format!("{name}.{}", self.domain);
        let filtered: Vec<DnsRecord> = state
            .records
            .iter()
            .filter(|r| r.record_type == Some(record_type) && r.name == absolute)
            .cloned()
            .collect();

        let page = Self::page_index(cursor);
        let start = (page - 1) * state.page_size;
        let records: Vec<DnsRecord> = filtered
            .iter()
            .skip(start)
            .take(state.page_size)
            .cloned()
            .collect();

        let has_more = state.endless || start + state.page_size < filtered.len();
        let next = match (has_more, state.cursor_style) {
            (false, _) => PageCursor::None,
            (true, CursorStyle::Number) => PageCursor::ByNumber(u32::try_from(page + 1).unwrap()),
            (true, CursorStyle::Url) => PageCursor::ByUrl(format!(
                "/v2/service/1/dns/record?filters[name]={name}&page={}",
                page + 1
            )),
        };

        Ok(RecordPage { records, next })
    }

    async fn create_txt_record(&self, req: &TxtRecordRequest) -> active24_provider::Result<()> {
        let mut state = self.state.write().await;
        state.calls.push(Call::Create(req.clone()));
        Self::injected(&state, Op::Create)?;

        let id = state.next_id;
        state.next_id += 1;
        let record = DnsRecord {
            id: Some(id),
            name: format!("{}.{}", req.name, self.domain),
            record_type: Some(DnsRecordType::Txt),
            content: Some(req.content.clone()),
            ttl: Some(req.ttl),
        };
        state.records.push(record);
        Ok(())
    }

    async fn update_txt_record(
        &self,
        id: i64,
        req: &TxtRecordRequest,
    ) -> active24_provider::Result<()> {
        let mut state = self.state.write().await;
        state.calls.push(Call::Update(id, req.clone()));
        Self::injected(&state, Op::Update)?;

        let name = format!("{}.{}", req.name, self.domain);
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| Self::not_found(id))?;
        record.name = name;
        record.content = Some(req.content.clone());
        record.ttl = Some(req.ttl);
        Ok(())
    }

    async fn delete_record(&self, id: i64) -> active24_provider::Result<()> {
        let mut state = self.state.write().await;
        state.calls.push(Call::Delete(id));
        Self::injected(&state, Op::Delete)?;

        let before = state.records.len();
        state.records.retain(|r| r.id != Some(id));
        if state.records.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

// ===== MockBackendFactory =====

/// Hands out one shared mock backend and records the configs it was asked for.
pub struct MockBackendFactory {
    pub backend: Arc<MockDnsBackend>,
    seen: std::sync::Mutex<Vec<ReconcilerConfig>>,
}

impl MockBackendFactory {
    pub fn new(backend: Arc<MockDnsBackend>) -> Self {
        Self {
            backend,
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<ReconcilerConfig> {
        self.seen.lock().unwrap().clone()
    }
}

impl BackendFactory for MockBackendFactory {
    fn create(&self, config: &ReconcilerConfig) -> SolverResult<Arc<dyn DnsBackend>> {
        self.seen.lock().unwrap().push(config.clone());
        Ok(self.backend.clone())
    }
}

// ===== Builders =====

/// TXT record named `name` under the test zone.
pub fn txt(id: i64, name: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: Some(id),
        name: name.to_string(),
        record_type: Some(DnsRecordType::Txt),
        content: Some(content.to_string()),
        ttl: Some(300),
    }
}

/// Challenge record of `content` under the test zone.
pub fn challenge_txt(id: i64, content: &str) -> DnsRecord {
    txt(id, ABSOLUTE_NAME, content)
}

pub fn coords(content: &str) -> ChallengeCoords {
    ChallengeCoords::new(ZONE, RECORD_NAME, content)
}

/// Secret store holding `apiKey` / `apiSecret` in `ns/active24`.
pub async fn secret_store() -> InMemorySecretStore {
    let store = InMemorySecretStore::new();
    store.insert("ns", "active24", "apiKey", "test-key").await;
    store.insert("ns", "active24", "apiSecret", "test-secret").await;
    store
}
