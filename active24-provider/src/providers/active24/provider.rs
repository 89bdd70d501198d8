//! Active24 DnsBackend trait 实现

use async_trait::async_trait;
use reqwest::Url;

use crate::error::Result;
use crate::providers::common::parse_record_type;
use crate::traits::DnsBackend;
use crate::types::{DnsRecord, DnsRecordType, PageCursor, RecordPage, TxtRecordRequest};

use super::{
    Active24DnsRecord, Active24Provider, CreateRecordBody, PROVIDER_NAME, RecordListResponse,
    UpdateRecordBody,
};

impl Active24Provider {
    /// Filtered listing URL, optionally for a given page.
    pub(crate) fn records_url(
        &self,
        record_type: DnsRecordType,
        name: &str,
        page: Option<u32>,
    ) -> Result<Url> {
        let mut path = format!(
            "{}?filters[type][]={}&filters[name]={}",
            self.records_path(),
            urlencoding::encode(record_type.as_str()),
            urlencoding::encode(name)
        );
        if let Some(page) = page {
            path.push_str(&format!("&page={page}"));
        }
        self.api_url(&path)
    }

    /// 将 Active24 记录转换为 `DnsRecord`
    pub(crate) fn to_dns_record(record: Active24DnsRecord) -> DnsRecord {
        DnsRecord {
            id: record.id,
            name: record.name,
            record_type: record.record_type.as_deref().and_then(parse_record_type),
            content: record.content,
            ttl: record.ttl,
        }
    }
}

#[async_trait]
impl DnsBackend for Active24Provider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn service_id(&self) -> i64 {
        self.service_id
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    async fn list_page(
        &self,
        record_type: DnsRecordType,
        name: &str,
        cursor: &PageCursor,
    ) -> Result<RecordPage> {
        log::debug!(
            "[{PROVIDER_NAME}] list_page: domain={}, service={}, type={record_type}, name={name}, cursor={cursor}",
            self.domain,
            self.service_id
        );

        let url = match cursor {
            PageCursor::None => self.records_url(record_type, name, None)?,
            PageCursor::ByNumber(page) => self.records_url(record_type, name, Some(*page))?,
            PageCursor::ByUrl(next) => self.resolve_url(next)?,
        };

        let response: RecordListResponse = self.get_json(url).await?;
        let (response_page, total_records) = (response.current_page, response.total_records);
        let next = PageCursor::from_wire(response.next_page_url.as_deref(), response.next_page);
        let records: Vec<DnsRecord> = response.data.into_iter().map(Self::to_dns_record).collect();

        log::debug!(
            "[{PROVIDER_NAME}] list_page: {} record(s) on page {:?} of {:?} total, next={next}",
            records.len(),
            response_page,
            total_records
        );

        Ok(RecordPage { records, next })
    }

    async fn create_txt_record(&self, req: &TxtRecordRequest) -> Result<()> {
        log::debug!(
            "[{PROVIDER_NAME}] create_txt_record: domain={}, service={}, name={}, ttl={}",
            self.domain,
            self.service_id,
            req.name,
            req.ttl
        );

        let body = CreateRecordBody {
            record_type: DnsRecordType::Txt.as_str(),
            name: &req.name,
            content: &req.content,
            ttl: req.ttl,
        };
        self.post(&self.records_path(), &body).await
    }

    async fn update_txt_record(&self, id: i64, req: &TxtRecordRequest) -> Result<()> {
        log::debug!(
            "[{PROVIDER_NAME}] update_txt_record: domain={}, service={}, id={id}, name={}, ttl={}",
            self.domain,
            self.service_id,
            req.name,
            req.ttl
        );

        let body = UpdateRecordBody {
            name: &req.name,
            content: &req.content,
            ttl: req.ttl,
        };
        self.put(&self.record_path(id), &body, id).await
    }

    async fn delete_record(&self, id: i64) -> Result<()> {
        log::debug!(
            "[{PROVIDER_NAME}] delete_record: domain={}, service={}, id={id}",
            self.domain,
            self.service_id
        );

        self.delete(&self.record_path(id), id).await
    }
}
