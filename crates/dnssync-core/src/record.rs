//! DNS record model shared by providers and the collector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A provider-managed zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Opaque zone identifier
    pub id: String,
    /// Zone (domain) name
    pub name: String,
}

/// DNS record type
///
/// Only the address and text types are fetched by the collector; anything
/// else a provider hands back is kept verbatim in [`RecordType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// IPv6 address record
    Aaaa,
    /// Text record
    Txt,
    /// Sender policy record
    Spf,
    /// Any other type, upper-cased
    Other(String),
}

impl RecordType {
    /// Wire name of the type (e.g. `"AAAA"`)
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Txt => "TXT",
            RecordType::Spf => "SPF",
            RecordType::Other(other) => other,
        }
    }

    /// Address family served by this type, if it is an address record
    pub fn address_family(&self) -> Option<AddressFamily> {
        match self {
            RecordType::A => Some(AddressFamily::V4),
            RecordType::Aaaa => Some(AddressFamily::V6),
            _ => None,
        }
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::Aaaa,
            "TXT" => RecordType::Txt,
            "SPF" => RecordType::Spf,
            other => RecordType::Other(other.to_string()),
        }
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        RecordType::from(value.to_string())
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address family an update is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => f.write_str("IPv4"),
            AddressFamily::V6 => f.write_str("IPv6"),
        }
    }
}

/// A DNS record as stored by the provider
///
/// Equality and hashing cover only type, name, content and proxied. The
/// provider-assigned `id` and the `zone_id` taken from the fetch context are
/// left out, so the same record held in two zones collapses to one entry
/// when results are deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Provider record identifier
    pub id: String,

    /// Zone the record was fetched from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone_id: String,

    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Fully qualified record name
    pub name: String,

    /// Record content (address, text, ...)
    pub content: String,

    /// Provider routing flag, passed through untouched
    #[serde(default)]
    pub proxied: bool,
}

impl DnsRecord {
    /// Attach the zone the record was fetched from
    pub fn in_zone(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = zone_id.into();
        self
    }
}

impl PartialEq for DnsRecord {
    fn eq(&self, other: &Self) -> bool {
        self.record_type == other.record_type
            && self.name == other.name
            && self.content == other.content
            && self.proxied == other.proxied
    }
}

impl Eq for DnsRecord {}

impl Hash for DnsRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record_type.hash(state);
        self.name.hash(state);
        self.content.hash(state);
        self.proxied.hash(state);
    }
}

/// Desired state submitted for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
    pub proxied: bool,
}

impl UpdateRequest {
    /// Keep everything about `record` except its content
    pub fn with_content(record: &DnsRecord, content: impl Into<String>) -> Self {
        Self {
            record_type: record.record_type.clone(),
            name: record.name.clone(),
            content: content.into(),
            proxied: record.proxied,
        }
    }
}
