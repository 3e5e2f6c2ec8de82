use serde::{Deserialize, Serialize};

use super::WireEntity;

/// Cloudflare's published edge address ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRanges {
    pub ipv4_cidrs: Vec<String>,
    pub ipv6_cidrs: Vec<String>,
    /// Only present when `networks=jdcloud` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jdcloud_cidrs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl WireEntity for IpRanges {
    const KIND: &'static str = "ip ranges";
}
