//! Firewall rules, filters and access rules of a zone.
//!
//! Rule and filter create/update bodies are JSON arrays holding exactly one
//! object; the API does not accept a bare object on these endpoints.

use serde_json::Value;

use super::{MAX_PAGE_SIZE_ACCESS_RULES, MAX_PAGE_SIZE_FIREWALL, require_id};
use crate::api::ApiClient;
use crate::error::{CfError, Result};
use crate::lookup::Lookup;
use crate::pagination::{PageSpec, collect_pages, page_window};
use crate::query::{QueryParams, QueryString, validate_query};
use crate::transport::HttpMethod;
use crate::types::WireEntity;
use crate::types::firewall::{FirewallAccessRule, FirewallRule, FirewallRuleFilter};

/// Filter keys accepted by [`FirewallService::rules`].
pub const RULE_QUERY_KEYS: &[&str] = &["id", "description", "action", "paused", "page", "per_page"];

/// Filter keys accepted by [`FirewallService::filters`].
pub const FILTER_QUERY_KEYS: &[&str] = &[
    "id",
    "expression",
    "description",
    "paused",
    "ref",
    "page",
    "per_page",
];

/// Filter keys accepted by [`FirewallService::access_rules`].
pub const ACCESS_RULE_QUERY_KEYS: &[&str] = &[
    "mode",
    "notes",
    "configuration.target",
    "configuration.value",
    "match",
    "order",
    "direction",
    "page",
    "per_page",
];

#[derive(Clone)]
pub struct FirewallService {
    api: ApiClient,
}

impl FirewallService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // ============ Rules ============

    /// Create `rule` together with its filter.
    pub async fn create_rule(&self, zone_id: &str, rule: &FirewallRule) -> Result<()> {
        let zone_id = require_id("zone_id", zone_id)?;
        let body = [Value::Object(rule.to_wire()?)];
        self.api
            .send_json(HttpMethod::Post, &format!("zones/{zone_id}/firewall/rules"), &body)
            .await
            .map(drop)
    }

    /// Rules of the zone matching `query` (keys from [`RULE_QUERY_KEYS`]).
    pub async fn rules(&self, zone_id: &str, query: &QueryParams) -> Result<Vec<FirewallRule>> {
        validate_query(query, RULE_QUERY_KEYS)?;
        let zone_id = require_id("zone_id", zone_id)?;
        let path = QueryString::new()
            .extend(query)
            .finish(&format!("zones/{zone_id}/firewall/rules"));
        self.api.get_entities(&path).await
    }

    /// Every rule matching `query`; `page`/`per_page` in `query` are driven by `spec`.
    pub async fn all_rules(
        &self,
        zone_id: &str,
        query: &QueryParams,
        spec: PageSpec,
    ) -> Result<Vec<FirewallRule>> {
        validate_query(query, RULE_QUERY_KEYS)?;
        collect_pages(spec, |page, per_page| async move {
            let (page, per_page) = page_window(page, per_page, MAX_PAGE_SIZE_FIREWALL)?;
            self.rules(zone_id, &paged(query, page, per_page)).await
        })
        .await
    }

    /// The rule with id `rule_id`.
    pub async fn rule(&self, zone_id: &str, rule_id: &str) -> Result<Lookup<FirewallRule>> {
        let rule_id = require_id("rule_id", rule_id)?;
        let query: QueryParams = [("id".to_string(), rule_id.to_string())].into();
        let rules = self.rules(zone_id, &query).await?;
        let lookup = Lookup::from_matches(rules);
        if let Lookup::Ambiguous { matches } = lookup {
            log::warn!("Rule id {rule_id} matched {matches} rules");
        }
        Ok(lookup)
    }

    /// Update an existing rule. The rule and its filter must carry their ids;
    /// the filter itself is left untouched (see [`update_filter`](Self::update_filter)).
    pub async fn update_rule(&self, zone_id: &str, rule: &FirewallRule) -> Result<()> {
        let body = [Value::Object(rule.update_wire()?)];
        let zone_id = require_id("zone_id", zone_id)?;
        self.api
            .send_json(HttpMethod::Put, &format!("zones/{zone_id}/firewall/rules"), &body)
            .await
            .map(drop)
    }

    pub async fn delete_rule(&self, zone_id: &str, rule_id: &str) -> Result<()> {
        let zone_id = require_id("zone_id", zone_id)?;
        let rule_id = require_id("rule_id", rule_id)?;
        self.api
            .delete(&format!("zones/{zone_id}/firewall/rules/{rule_id}"))
            .await
    }

    // ============ Filters ============

    pub async fn create_filter(&self, zone_id: &str, filter: &FirewallRuleFilter) -> Result<()> {
        let zone_id = require_id("zone_id", zone_id)?;
        let body = [Value::Object(filter.to_wire()?)];
        self.api
            .send_json(HttpMethod::Post, &format!("zones/{zone_id}/filters"), &body)
            .await
            .map(drop)
    }

    /// Filters of the zone matching `query` (keys from [`FILTER_QUERY_KEYS`]).
    pub async fn filters(
        &self,
        zone_id: &str,
        query: &QueryParams,
    ) -> Result<Vec<FirewallRuleFilter>> {
        validate_query(query, FILTER_QUERY_KEYS)?;
        let zone_id = require_id("zone_id", zone_id)?;
        let path = QueryString::new()
            .extend(query)
            .finish(&format!("zones/{zone_id}/filters"));
        self.api.get_entities(&path).await
    }

    /// Replace a filter's expression/paused state. The filter must carry its id.
    pub async fn update_filter(&self, zone_id: &str, filter: &FirewallRuleFilter) -> Result<()> {
        if filter.id.is_none() {
            return Err(CfError::invalid_parameter(
                "id",
                "an update needs the filter's remote id",
            ));
        }
        let zone_id = require_id("zone_id", zone_id)?;
        let body = [Value::Object(filter.to_wire()?)];
        self.api
            .send_json(HttpMethod::Put, &format!("zones/{zone_id}/filters"), &body)
            .await
            .map(drop)
    }

    pub async fn delete_filter(&self, zone_id: &str, filter_id: &str) -> Result<()> {
        let zone_id = require_id("zone_id", zone_id)?;
        let filter_id = require_id("filter_id", filter_id)?;
        self.api
            .delete(&format!("zones/{zone_id}/filters/{filter_id}"))
            .await
    }

    // ============ Access rules ============

    /// Access rules matching `query` (keys from [`ACCESS_RULE_QUERY_KEYS`]).
    pub async fn access_rules(
        &self,
        zone_id: &str,
        query: &QueryParams,
    ) -> Result<Vec<FirewallAccessRule>> {
        validate_query(query, ACCESS_RULE_QUERY_KEYS)?;
        let zone_id = require_id("zone_id", zone_id)?;
        let path = QueryString::new()
            .extend(query)
            .finish(&format!("zones/{zone_id}/firewall/access_rules/rules"));
        self.api.get_entities(&path).await
    }

    pub async fn all_access_rules(
        &self,
        zone_id: &str,
        query: &QueryParams,
        spec: PageSpec,
    ) -> Result<Vec<FirewallAccessRule>> {
        validate_query(query, ACCESS_RULE_QUERY_KEYS)?;
        collect_pages(spec, |page, per_page| async move {
            let (page, per_page) = page_window(page, per_page, MAX_PAGE_SIZE_ACCESS_RULES)?;
            self.access_rules(zone_id, &paged(query, page, per_page))
                .await
        })
        .await
    }
}

fn paged(query: &QueryParams, page: u32, per_page: u32) -> QueryParams {
    let mut query = query.clone();
    query.insert("page".to_string(), page.to_string());
    query.insert("per_page".to_string(), per_page.to_string());
    query
}
