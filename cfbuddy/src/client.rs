use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::CfConfig;
use crate::error::Result;
use crate::http_client::ReqwestTransport;
use crate::services::{DnsService, FirewallService, IpService, SslService, ZoneService};
use crate::transport::Transport;

/// Entry point bundling every resource service over one transport.
///
/// ```rust,no_run
/// # async fn example() -> cfbuddy::Result<()> {
/// use cfbuddy::{CfBuddy, CfConfig, Lookup};
///
/// let client = CfBuddy::from_config(&CfConfig::from_env()?)?;
/// if let Lookup::Found(zone_id) = client.zones().zone_id("example.com").await? {
///     let rules = client.firewall().rules(&zone_id, &Default::default()).await?;
///     println!("{} firewall rules", rules.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CfBuddy {
    zones: ZoneService,
    dns: DnsService,
    firewall: FirewallService,
    ssl: SslService,
    ips: IpService,
}

impl CfBuddy {
    /// Build on an arbitrary transport (tests, proxies, custom clients).
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let api = ApiClient::new(transport);
        Self {
            zones: ZoneService::new(api.clone()),
            dns: DnsService::new(api.clone()),
            firewall: FirewallService::new(api.clone()),
            ssl: SslService::new(api.clone()),
            ips: IpService::new(api),
        }
    }

    /// Build on the reqwest transport.
    pub fn from_config(config: &CfConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    pub fn zones(&self) -> &ZoneService {
        &self.zones
    }

    pub fn dns(&self) -> &DnsService {
        &self.dns
    }

    pub fn firewall(&self) -> &FirewallService {
        &self.firewall
    }

    pub fn ssl(&self) -> &SslService {
        &self.ssl
    }

    pub fn ips(&self) -> &IpService {
        &self.ips
    }
}
