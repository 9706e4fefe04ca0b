// # Record Provider Trait
//
// Defines the interface the collector and the daemon use to talk to a DNS
// provider's management API.
//
// ## Implementations
//
// - Cloudflare: `dnssync-provider-cloudflare` crate
//
// ## Usage
//
// ```rust,ignore
// use dnssync_core::{RecordProvider, RecordType};
//
// async fn print_a_records(provider: &dyn RecordProvider) -> dnssync_core::Result<()> {
//     for zone_id in provider.list_zone_ids().await? {
//         for record in provider.list_records(&zone_id, &RecordType::A).await? {
//             println!("{} -> {}", record.name, record.content);
//         }
//     }
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::record::{AddressFamily, DnsRecord, RecordType, UpdateRequest};

/// Trait for DNS provider implementations
///
/// Every method performs its work synchronously from the caller's point of
/// view and reports failure through the returned `Result`.
///
/// # Constraints
///
/// - One logical operation per call; paging is internal to a listing call
/// - No retries and no backoff: a failed call returns its error once
/// - No state carried between calls (each listing starts from scratch)
/// - A failed listing returns no partial results
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Enumerate the identifiers of every active zone
    async fn list_zone_ids(&self) -> Result<Vec<String>, crate::Error>;

    /// Enumerate every record of `record_type` in `zone_id`
    ///
    /// Returned records have `zone_id` set to the zone they came from.
    async fn list_records(
        &self,
        zone_id: &str,
        record_type: &RecordType,
    ) -> Result<Vec<DnsRecord>, crate::Error>;

    /// Replace one record with `request`
    ///
    /// `family` is the address family the caller is updating; it only adds
    /// context to error messages.
    ///
    /// # Returns
    ///
    /// The record as the provider stored it.
    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        family: AddressFamily,
        request: &UpdateRequest,
    ) -> Result<DnsRecord, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}

/// Helper trait for constructing record providers from configuration
pub trait RecordProviderFactory: Send + Sync {
    /// Create a RecordProvider instance from configuration
    fn create(
        &self,
        config: &crate::config::ProviderConfig,
    ) -> Result<Box<dyn RecordProvider>, crate::Error>;
}
