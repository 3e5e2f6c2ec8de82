//! # cfbuddy
//!
//! Typed async client for the zone-level resources of the Cloudflare v4 API:
//! firewall rules and filters, IP access rules, custom SSL certificates, DNS
//! records, custom hostnames and the published edge IP ranges.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cfbuddy::{CfBuddy, CfConfig, Credentials, DnsRecordQuery, Lookup, PageSpec};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CfConfig::new(
//!         cfbuddy::DEFAULT_BASE_URL,
//!         Credentials::ApiToken {
//!             api_token: "your-token".to_string(),
//!         },
//!     );
//!     let client = CfBuddy::from_config(&config)?;
//!
//!     let Lookup::Found(zone_id) = client.zones().zone_id("example.com").await? else {
//!         return Ok(());
//!     };
//!
//!     let hosts = client
//!         .dns()
//!         .zone_sub_domains(&zone_id, &DnsRecordQuery::default(), PageSpec::default())
//!         .await?;
//!     for host in &hosts {
//!         println!("{host}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, CfError>`](CfError). Mutations map to
//! `Result<()>`; callers that only care whether the change went through can
//! use [`OutcomeExt::applied`]. Singleton queries return a [`Lookup`] so that
//! "no match" and "several matches" are never confused with an error.
//!
//! Nothing is retried automatically.

mod api;
mod client;
mod config;
mod error;
mod filter;
mod http_client;
mod lookup;
mod pagination;
mod query;
mod services;
mod transport;
mod types;
mod utils;

pub use api::ApiClient;
pub use client::CfBuddy;
pub use config::{CfConfig, Credentials, DEFAULT_BASE_URL};
pub use error::{CfError, OutcomeExt, Result};
pub use filter::{
    DEFAULT_HOSTING_MARKER, DEFAULT_PRODUCTION_MARKER, DnsRecordFilter, DnsRecordView,
    RecordProjection, RecordSummary,
};
pub use http_client::ReqwestTransport;
pub use lookup::Lookup;
pub use pagination::{DEFAULT_PER_PAGE, PageSpec, collect_pages, collect_pages_with};
pub use query::QueryParams;
pub use services::{
    ACCESS_RULE_QUERY_KEYS, DnsRecordQuery, DnsService, FILTER_QUERY_KEYS, FirewallService,
    IpService, RULE_QUERY_KEYS, SslService, ZoneService,
};
pub use transport::{HttpMethod, Transport, TransportResponse};
pub use types::WireEntity;
pub use types::certificate::{
    BundleMethod, CertificateInfo, CertificateUpload, SslVerification,
};
pub use types::dns::{DnsRecord, DnsRecordType};
pub use types::firewall::{
    AccessRuleMode, FirewallAccessRule, FirewallAction, FirewallRule, FirewallRuleFilter,
};
pub use types::hostname::CustomHostname;
pub use types::ip::IpRanges;
pub use types::zone::Zone;
