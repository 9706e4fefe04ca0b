// # dnssyncd - DNS sync binary
//
// Thin integration layer over dnssync-core. It:
// 1. Reads configuration from environment variables
// 2. Initializes tracing and the runtime
// 3. Registers providers and creates the configured one
// 4. Runs one collection pass over the configured (or discovered) zones
// 5. Optionally pushes desired addresses to stale A/AAAA records
//
// Collection, paging and response handling all live in the library crates.
// The only decision made here is which records need a new address.
//
// ## Configuration
//
// ### Provider
// - `DNSSYNC_PROVIDER_TYPE`: Provider type (default: cloudflare)
// - `DNSSYNC_USE_API_KEY`: `true` selects key + email auth; token otherwise
// - `DNSSYNC_API_TOKEN`: API token (token auth)
// - `DNSSYNC_API_KEY`, `DNSSYNC_API_EMAIL`: Global key and account email
//
// ### Scope
// - `DNSSYNC_ZONE_IDS`: Comma-separated zone ids; empty discovers all active zones
// - `DNSSYNC_IP_VERSION`: v4, v6 or both (default: both)
//
// ### Updates
// - `DNSSYNC_IPV4`, `DNSSYNC_IPV6`: Desired addresses; records that differ are updated
// - `DNSSYNC_DRY_RUN`: `true` logs updates instead of sending them
//
// ### Logging
// - `DNSSYNC_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Example
//
// ```bash
// export DNSSYNC_API_TOKEN=your_token
// export DNSSYNC_ZONE_IDS=023e105f4ecef8ad9ca31a8372d0c353
// export DNSSYNC_IP_VERSION=v4
// export DNSSYNC_IPV4=198.51.100.7
//
// dnssyncd
// ```

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use dnssync_core::{
    AddressFamily, AuthConfig, DnsRecord, IpVersion, ProviderConfig, ProviderRegistry,
    RecordCollector, SyncConfig, UpdateRequest, parse_zone_list,
};

/// Exit codes for different termination scenarios
///
/// - 0: Pass completed
/// - 1: Configuration or startup error
/// - 2: Runtime error (provider call failed)
#[derive(Debug, Clone, Copy)]
enum DnssyncExitCode {
    /// Pass completed
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error
    RuntimeError = 2,
}

impl From<DnssyncExitCode> for ExitCode {
    fn from(code: DnssyncExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Addresses the caller wants published
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Targets {
    ipv4: Option<Ipv4Addr>,
    ipv6: Option<Ipv6Addr>,
}

impl Targets {
    fn is_empty(&self) -> bool {
        self.ipv4.is_none() && self.ipv6.is_none()
    }

    fn for_family(&self, family: AddressFamily) -> Option<IpAddr> {
        match family {
            AddressFamily::V4 => self.ipv4.map(IpAddr::V4),
            AddressFamily::V6 => self.ipv6.map(IpAddr::V6),
        }
    }
}

/// Application configuration
#[derive(Debug)]
struct Config {
    provider_type: String,
    zones: Vec<String>,
    ip_version: IpVersion,
    auth: AuthConfig,
    targets: Targets,
    dry_run: bool,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let auth = if lookup("DNSSYNC_USE_API_KEY").is_some_and(|v| parse_flag(&v)) {
            AuthConfig::ApiKey {
                key: lookup("DNSSYNC_API_KEY").unwrap_or_default(),
                email: lookup("DNSSYNC_API_EMAIL").unwrap_or_default(),
            }
        } else {
            AuthConfig::ApiToken {
                token: lookup("DNSSYNC_API_TOKEN").unwrap_or_default(),
            }
        };

        let ip_version = lookup("DNSSYNC_IP_VERSION")
            .unwrap_or_default()
            .parse::<IpVersion>()?;

        let ipv4 = lookup("DNSSYNC_IPV4")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().parse::<Ipv4Addr>())
            .transpose()
            .context("DNSSYNC_IPV4 is not a valid IPv4 address")?;

        let ipv6 = lookup("DNSSYNC_IPV6")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().parse::<Ipv6Addr>())
            .transpose()
            .context("DNSSYNC_IPV6 is not a valid IPv6 address")?;

        Ok(Self {
            provider_type: lookup("DNSSYNC_PROVIDER_TYPE")
                .unwrap_or_else(|| "cloudflare".to_string()),
            zones: parse_zone_list(&lookup("DNSSYNC_ZONE_IDS").unwrap_or_default()),
            ip_version,
            auth,
            targets: Targets { ipv4, ipv6 },
            dry_run: lookup("DNSSYNC_DRY_RUN").is_some_and(|v| parse_flag(&v)),
            log_level: lookup("DNSSYNC_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        match self.provider_type.as_str() {
            "cloudflare" => {}
            _ => anyhow::bail!(
                "DNSSYNC_PROVIDER_TYPE '{}' is not supported. \
                Supported providers: cloudflare",
                self.provider_type
            ),
        }

        match &self.auth {
            AuthConfig::ApiToken { token } if token.is_empty() => anyhow::bail!(
                "DNSSYNC_API_TOKEN is required. \
                Set it via: export DNSSYNC_API_TOKEN=your_token \
                (or set DNSSYNC_USE_API_KEY=true to use a global API key)"
            ),
            AuthConfig::ApiKey { key, .. } if key.is_empty() => anyhow::bail!(
                "DNSSYNC_API_KEY is required when DNSSYNC_USE_API_KEY=true"
            ),
            AuthConfig::ApiKey { email, .. } if email.is_empty() => anyhow::bail!(
                "DNSSYNC_API_EMAIL is required when DNSSYNC_USE_API_KEY=true"
            ),
            _ => {}
        }

        self.sync_config().validate()?;

        if self.targets.ipv4.is_some() && !self.ip_version.includes_v4() {
            anyhow::bail!("DNSSYNC_IPV4 is set but DNSSYNC_IP_VERSION excludes IPv4");
        }

        if self.targets.ipv6.is_some() && !self.ip_version.includes_v6() {
            anyhow::bail!("DNSSYNC_IPV6 is set but DNSSYNC_IP_VERSION excludes IPv6");
        }

        if log_level(&self.log_level).is_none() {
            anyhow::bail!(
                "DNSSYNC_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            );
        }

        Ok(())
    }

    fn sync_config(&self) -> SyncConfig {
        SyncConfig::new(self.auth.clone())
            .with_zones(self.zones.clone())
            .with_ip_version(self.ip_version)
            .with_dry_run(self.dry_run)
    }

    fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::Cloudflare {
            sync: self.sync_config(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn log_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// One record that needs a new address
#[derive(Debug)]
struct PlannedUpdate<'a> {
    record: &'a DnsRecord,
    family: AddressFamily,
    request: UpdateRequest,
}

/// Select the address records whose content differs from the desired address
///
/// Contents are compared as addresses, so `2001:0db8::1` matches
/// `2001:db8::1`. Records of a family excluded by `ip_version`, or with no
/// desired address, are left alone.
fn plan_updates<'a>(
    records: &'a [DnsRecord],
    targets: &Targets,
    ip_version: IpVersion,
) -> Vec<PlannedUpdate<'a>> {
    records
        .iter()
        .filter_map(|record| {
            let family = record.record_type.address_family()?;
            let allowed = match family {
                AddressFamily::V4 => ip_version.includes_v4(),
                AddressFamily::V6 => ip_version.includes_v6(),
            };
            if !allowed {
                return None;
            }

            let desired = targets.for_family(family)?;
            let current = record.content.trim().parse::<IpAddr>().ok();
            if current == Some(desired) {
                return None;
            }

            Some(PlannedUpdate {
                record,
                family,
                request: UpdateRequest::with_content(record, desired.to_string()),
            })
        })
        .collect()
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return DnssyncExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {:#}", e);
        return DnssyncExitCode::ConfigError.into();
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(&config.log_level).unwrap_or(Level::INFO))
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DnssyncExitCode::ConfigError.into();
    }

    info!("Starting dnssyncd");
    info!(
        provider = %config.provider_type,
        zones = config.zones.len(),
        ip_version = ?config.ip_version,
        dry_run = config.dry_run,
        "Configuration loaded"
    );

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DnssyncExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run(config).await {
            error!("Sync failed: {:#}", e);
            DnssyncExitCode::RuntimeError
        } else {
            DnssyncExitCode::Success
        }
    });

    result.into()
}

/// Run one collection pass and push any stale addresses
async fn run(config: Config) -> Result<()> {
    let registry = ProviderRegistry::new();

    #[cfg(feature = "cloudflare")]
    {
        info!("Registering Cloudflare provider");
        dnssync_provider_cloudflare::register(&registry);
    }

    let provider = registry
        .create_provider(&config.provider_config())
        .context("Failed to create provider")?;

    let collector = RecordCollector::new(provider.as_ref(), config.ip_version);
    let records = collector.collect(&config.zones).await?;

    info!(count = records.len(), "Collected records");
    for record in &records {
        info!(
            zone = %record.zone_id,
            record_type = %record.record_type,
            name = %record.name,
            content = %record.content,
            "Record"
        );
    }

    if config.targets.is_empty() {
        return Ok(());
    }

    let updates = plan_updates(&records, &config.targets, config.ip_version);
    if updates.is_empty() {
        info!("All address records are current");
        return Ok(());
    }

    if config.dry_run {
        warn!(count = updates.len(), "DRY-RUN: updates will be logged only");
    }

    for update in updates {
        let updated = provider
            .update_record(
                &update.record.zone_id,
                &update.record.id,
                update.family,
                &update.request,
            )
            .await?;

        info!(
            name = %updated.name,
            from = %update.record.content,
            to = %updated.content,
            "Address updated"
        );
    }

    Ok(())
}
