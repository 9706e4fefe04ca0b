//! RecordProvider implementation

use async_trait::async_trait;
use tracing::info;

use dnssync_core::{
    AddressFamily, DnsRecord, RecordProvider, RecordType, Result, UpdateRequest, Zone,
};

use crate::CloudflareProvider;
use crate::transport::Method;
use crate::types::{CloudflareZone, Single};

/// Page size for zone listings
pub const ZONE_PAGE_SIZE: u32 = 50;

/// Page size for DNS record listings
pub const RECORD_PAGE_SIZE: u32 = 100;

impl CloudflareProvider {
    /// List every active zone
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        let zones: Vec<CloudflareZone> = self
            .fetch_all_pages("Listing zones", "zones?status=active", ZONE_PAGE_SIZE)
            .await?;

        Ok(zones
            .into_iter()
            .map(|zone| Zone {
                id: zone.id,
                name: zone.name,
            })
            .collect())
    }

    /// List every `record_type` record in `zone_id`
    pub async fn list_zone_records(
        &self,
        zone_id: &str,
        record_type: &RecordType,
    ) -> Result<Vec<DnsRecord>> {
        let action = format!("Listing {} records in zone {}", record_type, zone_id);
        let path = format!(
            "zones/{}/dns_records?type={}",
            urlencoding::encode(zone_id),
            urlencoding::encode(record_type.as_str())
        );

        let records: Vec<DnsRecord> = self
            .fetch_all_pages(&action, &path, RECORD_PAGE_SIZE)
            .await?;

        Ok(records
            .into_iter()
            .map(|record| record.in_zone(zone_id))
            .collect())
    }

    /// Replace one record, returning the state the provider confirmed
    ///
    /// Exactly one request is sent (none in dry-run mode).
    pub async fn put_record(
        &self,
        zone_id: &str,
        record_id: &str,
        family: AddressFamily,
        request: &UpdateRequest,
    ) -> Result<DnsRecord> {
        let action = format!(
            "Updating {} record {} in zone {}",
            family, record_id, zone_id
        );
        let path = format!(
            "zones/{}/dns_records/{}",
            urlencoding::encode(zone_id),
            urlencoding::encode(record_id)
        );
        let body = serde_json::to_string(request)?;

        if self.dry_run {
            info!(
                action = %action,
                payload = %body,
                "[DRY-RUN] Would send PUT request"
            );
            return Ok(DnsRecord {
                id: record_id.to_string(),
                zone_id: zone_id.to_string(),
                record_type: request.record_type.clone(),
                name: request.name.clone(),
                content: request.content.clone(),
                proxied: request.proxied,
            });
        }

        let http_request = self.requests.build_json(Method::Put, &path, body);
        let response = self.execute(&action, http_request).await?;
        let updated: Single<DnsRecord> = self.check_response(&action, &response)?;

        info!(
            record = %updated.result.name,
            content = %updated.result.content,
            family = %family,
            "DNS record updated"
        );

        Ok(updated.result.in_zone(zone_id))
    }
}

#[async_trait]
impl RecordProvider for CloudflareProvider {
    async fn list_zone_ids(&self) -> Result<Vec<String>> {
        let zones = self.list_zones().await?;
        Ok(zones.into_iter().map(|zone| zone.id).collect())
    }

    async fn list_records(&self, zone_id: &str, record_type: &RecordType) -> Result<Vec<DnsRecord>> {
        self.list_zone_records(zone_id, record_type).await
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        family: AddressFamily,
        request: &UpdateRequest,
    ) -> Result<DnsRecord> {
        self.put_record(zone_id, record_id, family, request).await
    }

    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }
}
