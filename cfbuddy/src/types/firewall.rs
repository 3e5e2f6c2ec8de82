//! Firewall rules, their filters, and IP access rules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::WireEntity;
use crate::error::{CfError, Result};

// ============ Filter ============

/// Boolean expression over request attributes, owned by one firewall rule.
///
/// `id` is assigned by the API on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallRuleFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub expression: String,
    #[serde(default)]
    pub paused: bool,
}

impl FirewallRuleFilter {
    /// New, not-yet-created filter. The expression must be non-empty.
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let filter = Self {
            id: None,
            expression: expression.into(),
            paused: false,
        };
        filter.validate()?;
        Ok(filter)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// `{"id": ...}`: how a rule update points at its existing filter.
    pub(crate) fn reference(&self) -> Result<Value> {
        let id = self.id.as_deref().ok_or_else(|| {
            CfError::invalid_parameter("filter.id", "rule updates reference an existing filter by id")
        })?;
        Ok(json!({ "id": id }))
    }
}

impl WireEntity for FirewallRuleFilter {
    const KIND: &'static str = "firewall filter";

    fn validate(&self) -> Result<()> {
        if self.expression.trim().is_empty() {
            return Err(CfError::invalid_parameter("expression", "must not be empty"));
        }
        Ok(())
    }
}

// ============ Rule ============

/// What a firewall rule does when its filter matches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FirewallAction {
    Block,
    Challenge,
    JsChallenge,
    ManagedChallenge,
    Allow,
    Log,
    Bypass,
}

/// A named action bound to exactly one filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub paused: bool,
    pub filter: FirewallRuleFilter,
    pub action: FirewallAction,
    /// Products skipped by a `bypass` rule. Only sent when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,
}

impl FirewallRule {
    pub fn new(
        description: impl Into<String>,
        action: FirewallAction,
        filter: FirewallRuleFilter,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            paused: false,
            filter,
            action,
            products: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    #[must_use]
    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    /// Body object for an update: the filter travels by reference only,
    /// so updating a rule never rewrites its filter.
    pub(crate) fn update_wire(&self) -> Result<Map<String, Value>> {
        if self.id.is_none() {
            return Err(CfError::invalid_parameter(
                "id",
                "an update needs the rule's remote id",
            ));
        }
        let mut map = self.to_wire()?;
        map.insert("filter".to_string(), self.filter.reference()?);
        Ok(map)
    }
}

impl WireEntity for FirewallRule {
    const KIND: &'static str = "firewall rule";

    fn validate(&self) -> Result<()> {
        self.filter.validate()
    }
}

// ============ Access rule ============

/// How an access rule treats matching traffic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessRuleMode {
    Block,
    Challenge,
    Whitelist,
    JsChallenge,
    ManagedChallenge,
}

/// IP / range / ASN / country entry of the zone's access list (read-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AccessRuleWire", into = "AccessRuleWire")]
pub struct FirewallAccessRule {
    pub id: Option<String>,
    /// `ip`, `ip_range`, `ip6`, `asn` or `country`.
    pub target: String,
    pub value: String,
    pub mode: AccessRuleMode,
    pub paused: bool,
    pub notes: String,
}

impl WireEntity for FirewallAccessRule {
    const KIND: &'static str = "firewall access rule";
}

/// Access rule as the API sends it; target/value sit under `configuration`.
#[derive(Serialize, Deserialize)]
struct AccessRuleWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    mode: AccessRuleMode,
    configuration: AccessRuleConfiguration,
    #[serde(default)]
    paused: bool,
    #[serde(default)]
    notes: String,
}

#[derive(Serialize, Deserialize)]
struct AccessRuleConfiguration {
    target: String,
    value: String,
}

impl From<AccessRuleWire> for FirewallAccessRule {
    fn from(wire: AccessRuleWire) -> Self {
        Self {
            id: wire.id,
            target: wire.configuration.target,
            value: wire.configuration.value,
            mode: wire.mode,
            paused: wire.paused,
            notes: wire.notes,
        }
    }
}

impl From<FirewallAccessRule> for AccessRuleWire {
    fn from(rule: FirewallAccessRule) -> Self {
        Self {
            id: rule.id,
            mode: rule.mode,
            configuration: AccessRuleConfiguration {
                target: rule.target,
                value: rule.value,
            },
            paused: rule.paused,
            notes: rule.notes,
        }
    }
}
