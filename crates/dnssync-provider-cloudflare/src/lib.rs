// # Cloudflare Provider
//
// Cloudflare API v4 implementation of `dnssync_core::RecordProvider`.
//
// ## Request Path
//
// Every call goes through the same steps:
//
// 1. `RequestBuilder` adds `Accept` and exactly one auth scheme
//    (bearer token, or `X-Auth-Key` + `X-Auth-Email`)
// 2. `HttpTransport` sends it and returns status + raw body
// 3. `ResponseValidator` extracts error messages from failed responses
// 4. HTML bodies, validation errors and undecodable bodies each become a
//    distinct `dnssync_core::Error` variant carrying the raw body
//
// Listings are paged (`page`, `per_page`, ordered by name); a failure on
// any page fails the whole listing.
//
// ## Constraints
//
// - One attempt per request: no retry, no backoff
// - No state kept between calls
// - Credentials never appear in logs or Debug output
//
// ## API Reference
//
// - List Zones: GET `/zones?status=active`
// - List DNS Records: GET `/zones/:zone_id/dns_records?type=...`
// - Update DNS Record: PUT `/zones/:zone_id/dns_records/:record_id`

mod http;
mod pagination;
mod provider;
pub mod request;
mod types;
pub mod transport;
pub mod validate;

use dnssync_core::config::ProviderConfig;
use dnssync_core::{AuthConfig, Error, ProviderRegistry, RecordProvider, RecordProviderFactory, Result};

pub use provider::{RECORD_PAGE_SIZE, ZONE_PAGE_SIZE};
pub use request::RequestBuilder;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
pub use validate::{ResponseValidator, TOKEN_SCOPE_HINT, ValidationOutcome};

/// Cloudflare API base URL
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4/";

/// Cloudflare record provider
///
/// # Dry-Run Mode
///
/// When `dry_run` is set, listings run normally but updates are only
/// logged; the record is returned as if the provider had stored it.
pub struct CloudflareProvider {
    requests: RequestBuilder,
    validator: ResponseValidator,
    transport: Box<dyn HttpTransport>,
    dry_run: bool,
}

// Custom Debug implementation that hides the credentials
impl std::fmt::Debug for CloudflareProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareProvider")
            .field("auth", self.requests.auth())
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl CloudflareProvider {
    /// Create a provider talking to the public Cloudflare API
    pub fn new(auth: AuthConfig) -> Result<Self> {
        auth.validate()?;
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(
            auth,
            CLOUDFLARE_API_BASE,
            Box::new(transport),
        ))
    }

    /// Create a provider over an arbitrary transport and base URL
    pub fn with_transport(
        auth: AuthConfig,
        base_url: impl Into<String>,
        transport: Box<dyn HttpTransport>,
    ) -> Self {
        Self {
            validator: ResponseValidator::new(&auth),
            requests: RequestBuilder::new(base_url, auth),
            transport,
            dry_run: false,
        }
    }

    /// Log updates instead of sending them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Factory for creating Cloudflare providers
pub struct CloudflareFactory;

impl RecordProviderFactory for CloudflareFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn RecordProvider>> {
        match config {
            ProviderConfig::Cloudflare { sync } => {
                sync.validate()?;

                if sync.dry_run {
                    tracing::warn!(
                        "Cloudflare provider running in DRY-RUN mode - no changes will be made"
                    );
                }

                Ok(Box::new(
                    CloudflareProvider::new(sync.auth.clone())?.with_dry_run(sync.dry_run),
                ))
            }
            _ => Err(Error::config("Invalid config for Cloudflare provider")),
        }
    }
}

/// Register the Cloudflare provider with a registry
///
/// # Example
///
/// ```rust
/// use dnssync_core::ProviderRegistry;
///
/// let registry = ProviderRegistry::new();
/// dnssync_provider_cloudflare::register(&registry);
/// assert!(registry.has_provider("cloudflare"));
/// ```
pub fn register(registry: &ProviderRegistry) {
    registry.register_provider("cloudflare", Box::new(CloudflareFactory));
}
