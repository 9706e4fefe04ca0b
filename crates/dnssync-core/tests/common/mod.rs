//! Test doubles shared by the collection contract tests
//!
//! The in-memory provider serves canned records per (zone, type) and
//! records every call it receives.

#![allow(dead_code)]

use dnssync_core::error::{Error, Result};
use dnssync_core::{AddressFamily, DnsRecord, RecordProvider, RecordType, UpdateRequest};
use std::collections::HashMap;
use std::sync::Mutex;

/// A provider backed by a fixed table of records
pub struct InMemoryProvider {
    zones: Vec<String>,
    records: HashMap<(String, String), Vec<DnsRecord>>,
    fail_on: Option<(String, String)>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            records: HashMap::new(),
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Zones returned by discovery
    pub fn with_zones(mut self, zones: &[&str]) -> Self {
        self.zones = zones.iter().map(|z| z.to_string()).collect();
        self
    }

    /// Add a record to `zone`
    pub fn with_record(mut self, zone: &str, record: DnsRecord) -> Self {
        let key = (zone.to_string(), record.record_type.as_str().to_string());
        self.records
            .entry(key)
            .or_default()
            .push(record.in_zone(zone));
        self
    }

    /// Make the listing of (`zone`, `record_type`) fail
    pub fn failing_on(mut self, zone: &str, record_type: RecordType) -> Self {
        self.fail_on = Some((zone.to_string(), record_type.as_str().to_string()));
        self
    }

    /// Calls received so far, formatted as `zones` or `records:<zone>:<type>`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecordProvider for InMemoryProvider {
    async fn list_zone_ids(&self) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push("zones".to_string());
        Ok(self.zones.clone())
    }

    async fn list_records(&self, zone_id: &str, record_type: &RecordType) -> Result<Vec<DnsRecord>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("records:{}:{}", zone_id, record_type));

        let key = (zone_id.to_string(), record_type.as_str().to_string());
        if self.fail_on.as_ref() == Some(&key) {
            return Err(Error::Api {
                action: format!("Listing {} records", record_type),
                status: 500,
                messages: vec!["Internal error".to_string()],
                body: r#"{"success":false}"#.to_string(),
            });
        }

        Ok(self.records.get(&key).cloned().unwrap_or_default())
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        _family: AddressFamily,
        request: &UpdateRequest,
    ) -> Result<DnsRecord> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("update:{}:{}", zone_id, record_id));

        Ok(DnsRecord {
            id: record_id.to_string(),
            zone_id: zone_id.to_string(),
            record_type: request.record_type.clone(),
            name: request.name.clone(),
            content: request.content.clone(),
            proxied: request.proxied,
        })
    }

    fn provider_name(&self) -> &'static str {
        "in-memory"
    }
}

/// Build a record with the given identity and content
pub fn record(id: &str, record_type: RecordType, name: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        zone_id: String::new(),
        record_type,
        name: name.to_string(),
        content: content.to_string(),
        proxied: false,
    }
}

/// Convenience for zone lists in tests
pub fn zones(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|z| z.to_string()).collect()
}
