use serde::{Deserialize, Serialize};

use super::WireEntity;

/// A DNS-managed domain under the account.
///
/// Cloudflare statuses: `active`, `pending`, `initializing`, `moved`, `deleted`, `deactivated`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub status: String,
}

impl Zone {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

impl WireEntity for Zone {
    const KIND: &'static str = "zone";
}
