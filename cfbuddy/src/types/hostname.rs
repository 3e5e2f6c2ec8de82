use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WireEntity;

/// A SaaS tenant's domain mapped onto the zone's edge (Cloudflare for SaaS).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHostname {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub hostname: String,
    pub status: String,
    /// Origin override; absent when the zone's fallback origin is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_origin_server: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WireEntity for CustomHostname {
    const KIND: &'static str = "custom hostname";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn wire_round_trip() {
        let wire = json!({
            "id": "0d89c70d-ad9f-4843-b99f-6cc0252067e9",
            "hostname": "app.customer.com",
            "status": "active",
            "custom_origin_server": "origin.example.com",
            "created_at": "2020-02-06T18:11:23.531995Z"
        });
        let host = CustomHostname::from_wire(&wire).unwrap();
        assert_eq!(host.hostname, "app.customer.com");
        assert_eq!(Value::Object(host.to_wire().unwrap()), wire);
    }

    #[test]
    fn origin_is_optional() {
        let host = CustomHostname::from_wire(&json!({
            "hostname": "shop.customer.com",
            "status": "pending",
            "created_at": "2021-05-01T00:00:00Z",
            "ssl": {"status": "pending_validation"}
        }))
        .unwrap();
        assert!(host.custom_origin_server.is_none());
    }

    #[test]
    fn bad_timestamp_is_error() {
        let res = CustomHostname::from_wire(&json!({
            "hostname": "shop.customer.com",
            "status": "pending",
            "created_at": "yesterday"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn timestamps_normalized_to_utc() {
        let host = CustomHostname::from_wire(&json!({
            "hostname": "shop.customer.com",
            "status": "active",
            "created_at": "2021-05-01T10:00:00.12+02:00"
        }))
        .unwrap();
        let wire = host.to_wire().unwrap();
        assert_eq!(wire["created_at"], "2021-05-01T08:00:00.120Z");

        let again = CustomHostname::from_wire(&Value::Object(wire)).unwrap();
        assert_eq!(again.created_at, host.created_at);
    }
}
