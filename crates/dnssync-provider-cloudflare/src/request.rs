//! Outbound request construction

use crate::transport::{ApiRequest, Method};
use dnssync_core::AuthConfig;

/// Builds authenticated API requests against a base URL
///
/// Attaches either a bearer token or the key/email header pair, never
/// both. Building cannot fail.
#[derive(Clone)]
pub struct RequestBuilder {
    base_url: String,
    auth: AuthConfig,
}

impl RequestBuilder {
    pub fn new(base_url: impl Into<String>, auth: AuthConfig) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
        }
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Build a body-less request for `path` (which may carry a query string)
    pub fn build(&self, method: Method, path: &str) -> ApiRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];

        match &self.auth {
            AuthConfig::ApiToken { token } => {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
            AuthConfig::ApiKey { key, email } => {
                headers.push(("X-Auth-Key".to_string(), key.clone()));
                headers.push(("X-Auth-Email".to_string(), email.clone()));
            }
        }

        ApiRequest {
            method,
            url: format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            headers,
            body: None,
        }
    }

    /// Build a request carrying a JSON body
    pub fn build_json(&self, method: Method, path: &str, body: String) -> ApiRequest {
        let mut request = self.build(method, path);
        request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        request.body = Some(body);
        request
    }
}
