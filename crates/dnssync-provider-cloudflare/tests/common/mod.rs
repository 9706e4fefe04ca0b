//! Test doubles for the Cloudflare provider tests
//!
//! `ScriptedTransport` replays canned responses in order and records every
//! request it was asked to send. Clones share the same script and log, so
//! a test keeps one clone and hands the other to the provider.

#![allow(dead_code)]

use dnssync_core::{AuthConfig, DnsRecord};
use dnssync_provider_cloudflare::{ApiRequest, ApiResponse, CloudflareProvider, HttpTransport};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://api.test.invalid/client/v4/";

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<Result<ApiResponse, String>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a connection-level failure
    pub fn fail(self, detail: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(detail.to_string()));
        self
    }

    /// Requests sent so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> anyhow::Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(detail)) => Err(anyhow::anyhow!(detail)),
            None => Err(anyhow::anyhow!("no scripted response left")),
        }
    }
}

pub fn token_auth() -> AuthConfig {
    AuthConfig::ApiToken {
        token: "test-token".to_string(),
    }
}

pub fn key_auth() -> AuthConfig {
    AuthConfig::ApiKey {
        key: "test-key".to_string(),
        email: "ops@example.com".to_string(),
    }
}

/// Provider wired to `transport`
pub fn provider(auth: AuthConfig, transport: &ScriptedTransport) -> CloudflareProvider {
    CloudflareProvider::with_transport(auth, BASE_URL, Box::new(transport.clone()))
}

/// A listing page body
pub fn page(items: Vec<Value>, total_count: u64) -> String {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": items,
        "result_info": {
            "page": 1,
            "per_page": items.len(),
            "count": items.len(),
            "total_count": total_count
        }
    })
    .to_string()
}

pub fn zone_json(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "status": "active", "paused": false })
}

pub fn record_json(id: &str, record_type: &str, name: &str, content: &str) -> Value {
    json!({
        "id": id,
        "type": record_type,
        "name": name,
        "content": content,
        "proxied": false,
        "ttl": 1
    })
}

/// `count` distinct A records starting at `offset`
pub fn a_records(offset: usize, count: usize) -> Vec<Value> {
    (offset..offset + count)
        .map(|i| record_json(&format!("r{}", i), "A", &format!("h{}.example.com", i), "192.0.2.1"))
        .collect()
}

/// A successful single-record body
pub fn single(record: Value) -> String {
    json!({ "success": true, "errors": [], "messages": [], "result": record }).to_string()
}

/// A structured API error body
pub fn api_error(code: i64, message: &str) -> String {
    json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null
    })
    .to_string()
}

pub fn ids(records: &[DnsRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
