//! The injected HTTP capability every service is built on.
//!
//! Services never talk to the network directly: they hand a method, a path
//! relative to the API base URL and an optional JSON body to a [`Transport`].
//! [`ReqwestTransport`](crate::ReqwestTransport) is the production
//! implementation; tests plug in a scripted one.

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;

/// HTTP verbs used by the zone-resource API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw answer of a single request: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP request against the API.
///
/// Implementations own connection handling, TLS, auth headers and timeouts.
/// They must return `Err` only for transport failures
/// ([`NetworkError`](crate::CfError::NetworkError) / [`Timeout`](crate::CfError::Timeout));
/// any HTTP status, including 4xx/5xx, comes back as a [`TransportResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<TransportResponse>;
}
