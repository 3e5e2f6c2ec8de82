//! Shared test helpers.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cfbuddy::{CfBuddy, CfConfig, CfError, HttpMethod, Result, Transport, TransportResponse};
use serde_json::{Value, json};

/// Skip the test when any of the environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert `Some` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// One request as the fake transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

enum Scripted {
    Response(TransportResponse),
    Failure(CfError),
}

/// Scripted transport: answers requests in FIFO order and records them.
///
/// Running out of scripted answers is reported as a network error, so a test
/// that issues more requests than expected fails loudly.
#[derive(Default)]
pub struct FakeTransport {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.push(Scripted::Response(TransportResponse::new(
            status,
            body.to_string(),
        )))
    }

    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.push(Scripted::Response(TransportResponse::new(status, body)))
    }

    /// `200` with a successful envelope around `result`.
    pub fn ok(&self, result: Value) -> &Self {
        self.respond(200, success(result))
    }

    pub fn fail(&self, error: CfError) -> &Self {
        self.push(Scripted::Failure(error))
    }

    fn push(&self, item: Scripted) -> &Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(item);
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.path).collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<TransportResponse> {
        let body = body.map(|b| serde_json::from_slice(&b).unwrap_or(Value::Null));
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                method,
                path: path.to_string(),
                body,
            });
        }

        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        match next {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(error)) => Err(error),
            None => Err(CfError::NetworkError {
                detail: format!("no scripted response for {method} {path}"),
            }),
        }
    }
}

/// Client over a fresh fake transport.
pub fn fake_client() -> (CfBuddy, Arc<FakeTransport>) {
    let transport = FakeTransport::new();
    (CfBuddy::new(transport.clone()), transport)
}

pub fn success(result: Value) -> Value {
    json!({"success": true, "errors": [], "messages": [], "result": result})
}

pub fn failure(code: i64, message: &str) -> Value {
    json!({
        "success": false,
        "errors": [{"code": code, "message": message}],
        "messages": [],
        "result": null
    })
}

pub fn zone_json(id: &str, name: &str) -> Value {
    json!({"id": id, "name": name, "status": "active"})
}

pub fn dns_json(record_type: &str, name: &str, content: &str) -> Value {
    json!({
        "id": format!("rec-{name}"),
        "type": record_type,
        "name": name,
        "content": content,
        "proxied": true,
        "ttl": 1
    })
}

/// Client for the real API; needs `CF_API_TOKEN` or `CF_API_EMAIL` + `CF_API_KEY`.
pub fn live_client() -> Option<CfBuddy> {
    let config = CfConfig::from_env().ok()?;
    CfBuddy::from_config(&config).ok()
}

pub fn test_zone() -> Option<String> {
    env::var("TEST_ZONE").ok()
}
