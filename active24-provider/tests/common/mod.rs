//! Shared helpers for live API tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use active24_provider::{
    Active24Config, DnsBackend, DnsRecord, DnsRecordType, PageCursor, create_backend,
};

/// Skip the test when any of the environment variables is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: environment variable {} not set", $var);
                return;
            }
        )+
    };
}

/// Unique record name for one test run
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Backend session plus the zone it is scoped to
pub struct TestContext {
    pub backend: Arc<dyn DnsBackend>,
    pub domain: String,
}

impl TestContext {
    /// Active24 session from `ACTIVE24_*` and `TEST_DOMAIN`
    pub fn active24() -> Option<Self> {
        let api_key = env::var("ACTIVE24_API_KEY").ok()?;
        let api_secret = env::var("ACTIVE24_API_SECRET").ok()?;
        let service_id = env::var("ACTIVE24_SERVICE_ID").ok()?.parse().ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let backend = create_backend(Active24Config {
            api_key,
            api_secret,
            api_url: env::var("ACTIVE24_API_URL").ok(),
            service_id,
            domain: domain.clone(),
        })
        .ok()?;

        Some(Self { backend, domain })
    }

    /// Walk every page of the TXT listing for `name`
    pub async fn list_all_txt(&self, name: &str) -> Vec<DnsRecord> {
        let mut records = Vec::new();
        let mut cursor = PageCursor::None;
        for _ in 0..20 {
            let page = self
                .backend
                .list_page(DnsRecordType::Txt, name, &cursor)
                .await
                .expect("list_page failed");
            records.extend(page.records);
            if !page.next.is_some() {
                break;
            }
            cursor = page.next;
        }
        records
    }

    /// Absolute name of the relative `name`
    pub fn absolute(&self, name: &str) -> String {
        format!("{name}.{}", self.domain)
    }
}
