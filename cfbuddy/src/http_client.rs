//! reqwest-backed [`Transport`]
//!
//! Sends the request, logs it, and reads the body back as text.
//! Status codes are passed through untouched; deciding what a 4xx/5xx means
//! is the job of [`ApiClient`](crate::api::ApiClient).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};

use crate::config::CfConfig;
use crate::error::{CfError, Result};
use crate::transport::{HttpMethod, Transport, TransportResponse};
use crate::utils::log_sanitizer::truncate_for_log;

/// Connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Whole-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Production transport: one pooled `reqwest::Client` with auth headers preset.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &CfConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .default_headers(default_headers(config)?)
            .build()
            .map_err(|e| CfError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn default_headers(config: &CfConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in config.credentials.auth_headers() {
        let mut value = HeaderValue::from_str(&value)
            .map_err(|_| CfError::invalid_parameter(name, "contains characters not allowed in a header"))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(header_key(name)), value);
    }

    Ok(headers)
}

/// `HeaderName::from_static` only accepts lowercase names.
fn header_key(name: &'static str) -> &'static str {
    match name {
        "X-Auth-Email" => "x-auth-email",
        "X-Auth-Key" => "x-auth-key",
        _ => "authorization",
    }
}

/// Joins base URL and path with exactly one `/` between them.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn send_error(e: &reqwest::Error) -> CfError {
    if e.is_timeout() {
        CfError::Timeout {
            detail: e.to_string(),
        }
    } else {
        CfError::NetworkError {
            detail: e.to_string(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<TransportResponse> {
        let url = self.url(path);
        log::debug!("{method} {url}");

        let mut builder = self.client.request(to_reqwest_method(method), &url);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| send_error(&e))?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                send_error(&e)
            } else {
                CfError::NetworkError {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(TransportResponse { status, body })
    }
}
