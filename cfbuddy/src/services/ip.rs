use crate::api::ApiClient;
use crate::error::{CfError, Result};
use crate::query::QueryString;
use crate::types::ip::IpRanges;

/// Cloudflare's published edge address ranges. Needs no zone.
#[derive(Clone)]
pub struct IpService {
    api: ApiClient,
}

impl IpService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `network` selects an additional network (e.g. `jdcloud`).
    pub async fn ip_ranges(&self, network: Option<&str>) -> Result<IpRanges> {
        let network = match network.map(str::trim) {
            Some("") => {
                return Err(CfError::invalid_parameter("networks", "must not be empty"));
            }
            other => other,
        };
        let path = QueryString::new().push_opt("networks", network).finish("ips");
        self.api.get_entity(&path).await
    }
}
