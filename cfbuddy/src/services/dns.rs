use serde::{Deserialize, Serialize};

use super::{MAX_PAGE_SIZE_DNS_RECORDS, require_id};
use crate::api::ApiClient;
use crate::error::Result;
use crate::filter::{DnsRecordFilter, DnsRecordView, RecordProjection};
use crate::pagination::{PageSpec, collect_pages_with, page_window};
use crate::query::QueryString;
use crate::types::dns::DnsRecord;

/// Server-side narrowing plus the client-side filter and projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecordQuery {
    /// Exact record name (`name=`).
    pub hostname: Option<String>,
    /// Exact record content (`content=`).
    pub content: Option<String>,
    /// Proxied state (`proxied=`); `None` asks for both.
    pub proxied: Option<bool>,
    pub filter: DnsRecordFilter,
    pub projection: RecordProjection,
}

impl Default for DnsRecordQuery {
    fn default() -> Self {
        Self {
            hostname: None,
            content: None,
            proxied: Some(true),
            filter: DnsRecordFilter::default(),
            projection: RecordProjection::NameOnly,
        }
    }
}

impl DnsRecordQuery {
    /// Filter then project one page of records.
    pub fn apply(&self, records: Vec<DnsRecord>) -> Vec<DnsRecordView> {
        records
            .into_iter()
            .filter(|r| self.filter.keeps(r))
            .map(|r| self.projection.project(r))
            .collect()
    }
}

/// DNS record reads for a zone.
#[derive(Clone)]
pub struct DnsService {
    api: ApiClient,
}

impl DnsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// One unfiltered page of records matching the server-side parts of `query`.
    pub async fn records_page(
        &self,
        zone_id: &str,
        query: &DnsRecordQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<DnsRecord>> {
        let zone_id = require_id("zone_id", zone_id)?;
        let (page, per_page) = page_window(page, per_page, MAX_PAGE_SIZE_DNS_RECORDS)?;

        let path = QueryString::new()
            .push("per_page", per_page)
            .push("page", page)
            .push_opt("content", query.content.as_deref())
            .push_opt("proxied", query.proxied)
            .push_opt("name", query.hostname.as_deref())
            .finish(&format!("zones/{zone_id}/dns_records"));

        self.api.get_entities(&path).await
    }

    /// One page, filtered and projected.
    pub async fn dns_records_page(
        &self,
        zone_id: &str,
        query: &DnsRecordQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<DnsRecordView>> {
        let records = self.records_page(zone_id, query, page, per_page).await?;
        Ok(query.apply(records))
    }

    /// All relevant records of the zone across every page.
    pub async fn zone_sub_domains(
        &self,
        zone_id: &str,
        query: &DnsRecordQuery,
        spec: PageSpec,
    ) -> Result<Vec<DnsRecordView>> {
        collect_pages_with(
            spec,
            |page, per_page| self.records_page(zone_id, query, page, per_page),
            |records| query.apply(records),
        )
        .await
    }
}
