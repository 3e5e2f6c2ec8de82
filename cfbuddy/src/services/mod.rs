//! One service per resource family.
//!
//! Each service is a thin, stateless wrapper around a shared [`ApiClient`];
//! cloning is cheap and instances can be used from many tasks at once.

mod dns;
mod firewall;
mod ip;
mod ssl;
mod zone;

pub use dns::{DnsRecordQuery, DnsService};
pub use firewall::{ACCESS_RULE_QUERY_KEYS, FILTER_QUERY_KEYS, FirewallService, RULE_QUERY_KEYS};
pub use ip::IpService;
pub use ssl::SslService;
pub use zone::ZoneService;

use crate::error::{CfError, Result};

/// Page size limit of the zones endpoint.
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Page size limit of the DNS records endpoint.
pub(crate) const MAX_PAGE_SIZE_DNS_RECORDS: u32 = 5000;
/// Page size limit of the firewall rules and filters endpoints.
pub(crate) const MAX_PAGE_SIZE_FIREWALL: u32 = 100;
/// Page size limit of the access rules endpoint.
pub(crate) const MAX_PAGE_SIZE_ACCESS_RULES: u32 = 1000;
/// Page size limit of the custom hostnames endpoint.
pub(crate) const MAX_PAGE_SIZE_CUSTOM_HOSTNAMES: u32 = 50;

/// Path segments must be non-blank and must not smuggle extra path or query parts.
pub(crate) fn require_id<'a>(param: &str, id: &'a str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CfError::invalid_parameter(param, "must not be empty"));
    }
    if id.contains(['/', '?', '&', '#']) {
        return Err(CfError::invalid_parameter(param, "contains reserved URL characters"));
    }
    Ok(id)
}
