// # dnssync-core
//
// Core library for synchronizing DNS records against a provider's
// management API.
//
// ## Architecture Overview
//
// - **RecordProvider**: Trait for listing zones/records and updating records
// - **RecordCollector**: Gathers records across zones under an IP policy
// - **ProviderRegistry**: Plugin-based registry for providers
// - **SyncConfig**: Zones, IP policy and credentials for one pass
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Collection logic is separate from provider wire formats
// 2. **Explicit Dependencies**: Configuration is passed in, never read from globals
// 3. **Fail Fast**: Any failed call aborts the operation; nothing is retried here
// 4. **Library-First**: The daemon is a thin layer over this crate

pub mod collector;
pub mod config;
pub mod error;
pub mod record;
pub mod registry;
pub mod traits;

// Re-export core types for convenience
pub use collector::{RecordCollector, dedup_records};
pub use config::{AuthConfig, IpVersion, ProviderConfig, SyncConfig, parse_zone_list};
pub use error::{Error, Result};
pub use record::{AddressFamily, DnsRecord, RecordType, UpdateRequest, Zone};
pub use registry::ProviderRegistry;
pub use traits::{RecordProvider, RecordProviderFactory};
