//! Connection settings: API base URL and the authentication scheme.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CfError, Result};

/// Default Cloudflare v4 endpoint, used when `CF_BASE_URI` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4/";

/// Exactly one authentication scheme per deployment.
///
/// Serialized as a tagged enum:
///
/// ```json
/// { "scheme": "api_token", "credentials": { "api_token": "..." } }
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "scheme", content = "credentials", rename_all = "snake_case")]
pub enum Credentials {
    /// Global API key, sent as `X-Auth-Email` + `X-Auth-Key`.
    ApiKey {
        /// Account e-mail address.
        api_email: String,
        /// Global API key.
        api_key: String,
    },
    /// Scoped API token, sent as `Authorization: Bearer`.
    ApiToken {
        /// API token.
        api_token: String,
    },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { api_email, .. } => f
                .debug_struct("ApiKey")
                .field("api_email", api_email)
                .field("api_key", &"***")
                .finish(),
            Self::ApiToken { .. } => f
                .debug_struct("ApiToken")
                .field("api_token", &"***")
                .finish(),
        }
    }
}

impl Credentials {
    /// Build credentials from a flat key-value map (`apiEmail`, `apiKey`, `apiToken`).
    ///
    /// Blank values are treated as absent. Supplying both a token and a key
    /// is rejected rather than guessed.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        let token = non_blank(map, "apiToken");
        let key = non_blank(map, "apiKey");
        let email = non_blank(map, "apiEmail");

        match (token, key) {
            (Some(_), Some(_)) => Err(CfError::invalid_parameter(
                "credentials",
                "both apiToken and apiKey are set, configure exactly one",
            )),
            (Some(api_token), None) => Ok(Self::ApiToken { api_token }),
            (None, Some(api_key)) => {
                let api_email = email.ok_or_else(|| CfError::MissingCredentials {
                    field: "apiEmail".to_string(),
                })?;
                Ok(Self::ApiKey { api_email, api_key })
            }
            (None, None) => Err(CfError::MissingCredentials {
                field: "apiToken".to_string(),
            }),
        }
    }

    /// Header pairs the transport attaches to every request.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ApiKey { api_email, api_key } => vec![
                ("X-Auth-Email", api_email.clone()),
                ("X-Auth-Key", api_key.clone()),
            ],
            Self::ApiToken { api_token } => {
                vec![("Authorization", format!("Bearer {api_token}"))]
            }
        }
    }
}

fn non_blank(map: &HashMap<String, String>, key: &str) -> Option<String> {
    map.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Immutable settings shared by every service for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfConfig {
    /// API base URL, e.g. `https://api.cloudflare.com/client/v4/`.
    pub base_url: String,
    /// Authentication scheme.
    pub credentials: Credentials,
}

impl CfConfig {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Load from `CF_BASE_URI`, `CF_API_EMAIL`, `CF_API_KEY` and `CF_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let map: HashMap<String, String> = [
            ("CF_API_EMAIL", "apiEmail"),
            ("CF_API_KEY", "apiKey"),
            ("CF_API_TOKEN", "apiToken"),
        ]
        .into_iter()
        .filter_map(|(env_key, key)| vars.get(env_key).map(|v| (key.to_string(), v.clone())))
        .collect();

        let base_url = vars
            .get("CF_BASE_URI")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        Ok(Self::new(base_url, Credentials::from_map(&map)?))
    }
}
