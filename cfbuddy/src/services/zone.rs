use serde_json::Value;

use super::{MAX_PAGE_SIZE_ZONES, require_id};
use crate::api::ApiClient;
use crate::error::{CfError, Result};
use crate::lookup::Lookup;
use crate::pagination::{PageSpec, collect_pages, page_window};
use crate::query::QueryString;
use crate::types::certificate::SslVerification;
use crate::types::zone::Zone;

/// Zone lookups, zone settings and zone listing.
#[derive(Clone)]
pub struct ZoneService {
    api: ApiClient,
}

impl ZoneService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The active zone called `name`.
    ///
    /// `NotFound` when no active zone has that name, `Ambiguous` when the API
    /// lists more than one.
    pub async fn find_zone(&self, name: &str) -> Result<Lookup<Zone>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CfError::invalid_parameter("name", "must not be empty"));
        }

        let path = QueryString::new()
            .push("name", name)
            .push("status", "active")
            .finish("zones");
        let zones: Vec<Zone> = self.api.get_entities(&path).await?;

        let lookup = Lookup::from_matches(zones);
        if let Lookup::Ambiguous { matches } = lookup {
            log::warn!("Zone name {name} matches {matches} active zones, refusing to pick one");
        }
        Ok(lookup)
    }

    /// Id of the active zone called `name`; same three-way result as [`find_zone`](Self::find_zone).
    pub async fn zone_id(&self, name: &str) -> Result<Lookup<String>> {
        Ok(self.find_zone(name).await?.map(|zone| zone.id))
    }

    /// The zone's SSL/TLS encryption mode (`off`, `flexible`, `full`, `strict`).
    pub async fn zone_ssl_mode(&self, zone_id: &str) -> Result<Option<String>> {
        let zone_id = require_id("zone_id", zone_id)?;
        let setting = self
            .api
            .get_value(&format!("zones/{zone_id}/settings/ssl"))
            .await?;
        Ok(setting
            .get("value")
            .and_then(Value::as_str)
            .map(ToString::to_string))
    }

    /// One page of the account's zones.
    pub async fn zones_page(&self, page: u32, per_page: u32) -> Result<Vec<Zone>> {
        let (page, per_page) = page_window(page, per_page, MAX_PAGE_SIZE_ZONES)?;
        let path = QueryString::new()
            .push("per_page", per_page)
            .push("page", page)
            .finish("zones");
        self.api.get_entities(&path).await
    }

    /// Every zone of the account.
    pub async fn all_zones(&self, spec: PageSpec) -> Result<Vec<Zone>> {
        collect_pages(spec, |page, per_page| self.zones_page(page, per_page)).await
    }

    /// Universal SSL verification state for the zone's hostnames.
    pub async fn universal_ssl_verification(&self, zone_id: &str) -> Result<Vec<SslVerification>> {
        let zone_id = require_id("zone_id", zone_id)?;
        self.api
            .get_entities(&format!("zones/{zone_id}/ssl/verification"))
            .await
    }
}
