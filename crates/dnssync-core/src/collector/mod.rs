//! Record collection across zones
//!
//! The [`RecordCollector`] turns many per-zone, per-type listings into one
//! deduplicated record set:
//!
//! ```text
//!   configured zones ──(empty?)──▶ RecordProvider::list_zone_ids
//!          │
//!          ▼
//!   for each zone:  A (unless v6-only)
//!                   AAAA (unless v4-only)
//!                   TXT, SPF
//!          │
//!          ▼
//!       dedup ──▶ Vec<DnsRecord>
//! ```
//!
//! The first failing listing aborts the whole collection; records gathered
//! before it are dropped.

use crate::config::IpVersion;
use crate::error::Result;
use crate::record::{DnsRecord, RecordType};
use crate::traits::RecordProvider;
use std::collections::HashSet;
use tracing::{debug, info};

/// Gathers the records of interest from a provider
pub struct RecordCollector<'a> {
    provider: &'a dyn RecordProvider,
    ip_version: IpVersion,
}

impl<'a> RecordCollector<'a> {
    /// Create a collector for `provider` honoring the `ip_version` policy
    pub fn new(provider: &'a dyn RecordProvider, ip_version: IpVersion) -> Self {
        Self {
            provider,
            ip_version,
        }
    }

    /// Record types fetched for every zone, in fetch order
    pub fn record_types(&self) -> Vec<RecordType> {
        let mut types = Vec::with_capacity(4);
        if self.ip_version.includes_v4() {
            types.push(RecordType::A);
        }
        if self.ip_version.includes_v6() {
            types.push(RecordType::Aaaa);
        }
        types.push(RecordType::Txt);
        types.push(RecordType::Spf);
        types
    }

    /// Collect records from `zones`, or from every active zone if empty
    pub async fn collect(&self, zones: &[String]) -> Result<Vec<DnsRecord>> {
        let discovered;
        let zones = if zones.is_empty() {
            debug!(
                provider = self.provider.provider_name(),
                "No zones configured, discovering"
            );
            discovered = self.provider.list_zone_ids().await?;
            discovered.as_slice()
        } else {
            zones
        };

        let types = self.record_types();
        let mut records = Vec::new();

        for zone_id in zones {
            for record_type in &types {
                let fetched = self.provider.list_records(zone_id, record_type).await?;
                debug!(
                    zone_id = %zone_id,
                    record_type = %record_type,
                    count = fetched.len(),
                    "Fetched records"
                );
                records.extend(fetched);
            }
        }

        let fetched = records.len();
        let records = dedup_records(records);

        info!(
            provider = self.provider.provider_name(),
            zones = zones.len(),
            fetched,
            unique = records.len(),
            "Collected DNS records"
        );

        Ok(records)
    }
}

/// Drop structurally identical records, keeping the first occurrence
pub fn dedup_records(records: Vec<DnsRecord>) -> Vec<DnsRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}
