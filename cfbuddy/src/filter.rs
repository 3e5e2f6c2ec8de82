//! DNS record relevance filter and projection, applied per fetched page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::dns::{DnsRecord, DnsRecordType};

/// Hosting-provider domain fragment a relevant CNAME must point into.
pub const DEFAULT_HOSTING_MARKER: &str = "episerver.net";
/// Fragment identifying production targets.
pub const DEFAULT_PRODUCTION_MARKER: &str = "prod.";

/// Decides which records of a zone are "sub domains" worth reporting.
///
/// `A` records are always kept. `CNAME` records are kept when their content
/// contains `hosting_marker` and, with `production_only`, also
/// `production_marker`. Everything else is dropped. Matching ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecordFilter {
    pub hosting_marker: String,
    pub production_marker: String,
    pub production_only: bool,
}

impl Default for DnsRecordFilter {
    fn default() -> Self {
        Self {
            hosting_marker: DEFAULT_HOSTING_MARKER.to_string(),
            production_marker: DEFAULT_PRODUCTION_MARKER.to_string(),
            production_only: true,
        }
    }
}

impl DnsRecordFilter {
    #[must_use]
    pub fn production_only(mut self, production_only: bool) -> Self {
        self.production_only = production_only;
        self
    }

    pub fn keeps(&self, record: &DnsRecord) -> bool {
        match record.record_type {
            DnsRecordType::A => true,
            DnsRecordType::Cname => {
                contains_ignore_case(&record.content, &self.hosting_marker)
                    && (!self.production_only
                        || contains_ignore_case(&record.content, &self.production_marker))
            }
            _ => false,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Shape of each reported record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordProjection {
    /// Hostname only.
    #[default]
    NameOnly,
    /// Name, type and content.
    Full,
}

impl RecordProjection {
    pub fn project(self, record: DnsRecord) -> DnsRecordView {
        match self {
            Self::NameOnly => DnsRecordView::Name(record.name),
            Self::Full => DnsRecordView::Full(RecordSummary {
                name: record.name,
                record_type: record.record_type,
                content: record.content,
            }),
        }
    }
}

/// Name, type and content of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub content: String,
}

/// A projected record.
///
/// `Display` renders `name` or `name,type,content`, the line format existing
/// consumers read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DnsRecordView {
    Name(String),
    Full(RecordSummary),
}

impl DnsRecordView {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Full(summary) => &summary.name,
        }
    }
}

impl fmt::Display for DnsRecordView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Full(s) => write!(f, "{},{},{}", s.name, s.record_type, s.content),
        }
    }
}
