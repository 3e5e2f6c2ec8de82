//! Response envelope decoding and request dispatch.
//!
//! Every response body is `{"success": bool, "result": ..., "errors": [...]}`.
//! A request only counts as successful when the status is 2xx **and**
//! `success` is `true`; everything else becomes [`CfError::Rejected`] (or
//! [`CfError::ParseError`] for a 2xx body that is not an envelope).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CfError, Result};
use crate::transport::{HttpMethod, Transport, TransportResponse};
use crate::types::{WireEntity, entities_from_wire};
use crate::utils::log_sanitizer::truncate_for_log;

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    success: bool,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    errors: Option<Vec<ApiErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorItem {
    /// Numeric on most endpoints, a string on a few.
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiErrorItem {
    fn api_code(&self) -> Option<String> {
        match self.code.as_ref()? {
            Value::Null => None,
            Value::String(code) => Some(code.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Decode a raw response into its `result` payload.
pub(crate) fn decode_envelope(response: &TransportResponse) -> Result<Value> {
    let status = response.status;

    let envelope: ApiEnvelope = match serde_json::from_str(&response.body) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::error!("Failed to parse response JSON: {e}");
            log::error!("Raw response: {}", truncate_for_log(&response.body));
            if response.is_success() {
                return Err(CfError::parse(e));
            }
            return Err(CfError::Rejected {
                status,
                api_code: None,
                message: format!("HTTP {status} without a JSON envelope"),
            });
        }
    };

    if envelope.success && response.is_success() {
        return Ok(envelope.result);
    }

    let first = envelope.errors.and_then(|errors| errors.into_iter().next());
    let api_code = first.as_ref().and_then(ApiErrorItem::api_code);
    let message = first
        .and_then(|e| e.message)
        .unwrap_or_else(|| "Unknown error".to_string());
    log::warn!("API error (HTTP {status}): {message}");
    Err(CfError::Rejected {
        status,
        api_code,
        message,
    })
}

/// Encode a request body; forward slashes stay unescaped.
pub(crate) fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| CfError::SerializationError {
        detail: e.to_string(),
    })
}

/// Sends requests through the injected [`Transport`] and unwraps envelopes.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn execute(&self, method: HttpMethod, path: &str, body: Option<Vec<u8>>) -> Result<Value> {
        let response = self.transport.request(method, path, body).await?;
        decode_envelope(&response).inspect_err(|e| {
            log::warn!("{method} {path} failed: {e}");
        })
    }

    /// `GET` and return the raw `result`.
    pub async fn get_value(&self, path: &str) -> Result<Value> {
        self.execute(HttpMethod::Get, path, None).await
    }

    /// `GET` a single object.
    pub async fn get_entity<T: WireEntity>(&self, path: &str) -> Result<T> {
        let value = self.get_value(path).await?;
        if value.is_null() {
            return Err(CfError::parse(format!("{}: response has no result", T::KIND)));
        }
        T::from_wire(&value)
    }

    /// `GET` a list; `result: null` is an empty list.
    pub async fn get_entities<T: WireEntity>(&self, path: &str) -> Result<Vec<T>> {
        let value = self.get_value(path).await?;
        entities_from_wire(&value)
    }

    /// Send a JSON body. Bodies carrying key material are only logged redacted.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        let bytes = encode_body(body)?;
        log::debug!(
            "Request Body: {}",
            truncate_for_log(&String::from_utf8_lossy(&bytes))
        );
        self.execute(method, path, Some(bytes)).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(HttpMethod::Delete, path, None).await.map(drop)
    }
}
