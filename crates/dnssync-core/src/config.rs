//! Configuration types for the DNS sync client
//!
//! Nothing here is read from global state: callers build a [`SyncConfig`]
//! (or a [`ProviderConfig`] wrapping one) and hand it to the components
//! that need it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings for one synchronization pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Zone identifiers to work on; empty means discover every active zone
    #[serde(default)]
    pub zones: Vec<String>,

    /// Which address record types are in play
    #[serde(default)]
    pub ip_version: IpVersion,

    /// Provider credentials
    pub auth: AuthConfig,

    /// Log updates instead of sending them
    #[serde(default)]
    pub dry_run: bool,
}

impl SyncConfig {
    /// Create a configuration that discovers zones and handles both families
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            zones: Vec::new(),
            ip_version: IpVersion::Both,
            auth,
            dry_run: false,
        }
    }

    /// Restrict the pass to the given zones
    pub fn with_zones(mut self, zones: Vec<String>) -> Self {
        self.zones = zones;
        self
    }

    /// Set the protocol-support policy
    pub fn with_ip_version(mut self, ip_version: IpVersion) -> Self {
        self.ip_version = ip_version;
        self
    }

    /// Enable or disable dry-run updates
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.zones.iter().any(|zone| zone.trim().is_empty()) {
            return Err(crate::Error::config("Zone identifiers cannot be empty"));
        }

        self.auth.validate()
    }
}

/// Split a comma-separated zone list, dropping blanks
///
/// An empty or all-blank input yields an empty list, which means
/// "discover zones" to the collector.
pub fn parse_zone_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Protocol-support policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    /// IPv4 only
    V4,
    /// IPv6 only
    V6,
    /// Both IPv4 and IPv6
    #[default]
    Both,
}

impl IpVersion {
    /// Whether A records are fetched and updated
    pub fn includes_v4(self) -> bool {
        self != IpVersion::V6
    }

    /// Whether AAAA records are fetched and updated
    pub fn includes_v6(self) -> bool {
        self != IpVersion::V4
    }
}

impl std::str::FromStr for IpVersion {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v4" | "ipv4" => Ok(IpVersion::V4),
            "v6" | "ipv6" => Ok(IpVersion::V6),
            "both" | "" => Ok(IpVersion::Both),
            other => Err(crate::Error::config(format!(
                "Unknown IP version '{}'. Valid values: v4, v6, both",
                other
            ))),
        }
    }
}

/// Provider credentials
///
/// Exactly one scheme is ever active. The Debug implementation never prints
/// the secret values.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// Scoped API token, sent as a bearer token
    ApiToken {
        token: String,
    },

    /// Global API key paired with the account email
    ApiKey {
        key: String,
        email: String,
    },
}

impl AuthConfig {
    /// Whether requests authenticate with a scoped token
    pub fn is_token(&self) -> bool {
        matches!(self, AuthConfig::ApiToken { .. })
    }

    /// Validate the credentials
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            AuthConfig::ApiToken { token } => {
                if token.trim().is_empty() {
                    return Err(crate::Error::config("API token cannot be empty"));
                }
                Ok(())
            }
            AuthConfig::ApiKey { key, email } => {
                if key.trim().is_empty() {
                    return Err(crate::Error::config("API key cannot be empty"));
                }
                if !email.contains('@') {
                    return Err(crate::Error::config(format!(
                        "API email '{}' is not a valid address",
                        email
                    )));
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::ApiToken { .. } => f
                .debug_struct("ApiToken")
                .field("token", &"<REDACTED>")
                .finish(),
            AuthConfig::ApiKey { email, .. } => f
                .debug_struct("ApiKey")
                .field("key", &"<REDACTED>")
                .field("email", email)
                .finish(),
        }
    }
}

/// DNS provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Cloudflare provider
    Cloudflare {
        /// Sync settings and credentials
        sync: SyncConfig,
    },

    /// Custom provider
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

impl ProviderConfig {
    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ProviderConfig::Cloudflare { sync } => sync.validate(),
            ProviderConfig::Custom { factory, config } => {
                if factory.is_empty() {
                    return Err(crate::Error::config(
                        "Custom provider factory cannot be empty",
                    ));
                }
                if config.is_null() {
                    return Err(crate::Error::config(
                        "Custom provider config cannot be null",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Get the provider type name
    pub fn type_name(&self) -> &str {
        match self {
            ProviderConfig::Cloudflare { .. } => "cloudflare",
            ProviderConfig::Custom { factory, .. } => factory,
        }
    }
}
