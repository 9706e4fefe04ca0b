//! Response validation
//!
//! Turns a status flag and a raw body into the list of messages a failed
//! call reports. Decoding a successful body is left to the caller.

use crate::types::ErrorPayload;
use dnssync_core::AuthConfig;

/// Appended to every failure under token auth: missing scopes are the
/// usual cause.
pub const TOKEN_SCOPE_HINT: &str = "When using an API token, make sure it has the \
    Zone:Zone:Read and Zone:DNS:Edit permissions and that its zone resources \
    include every zone being managed.";

/// Result of validating one response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Messages to report; non-empty means the call failed
    pub errors: Vec<String>,
    /// Why the error payload of a failed response could not be parsed
    pub payload_error: Option<String>,
}

impl ValidationOutcome {
    /// Whether the call may proceed to decoding
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Classifies responses for one authentication mode
#[derive(Debug, Clone, Copy)]
pub struct ResponseValidator {
    token_auth: bool,
}

impl ResponseValidator {
    pub fn new(auth: &AuthConfig) -> Self {
        Self {
            token_auth: auth.is_token(),
        }
    }

    /// Validate a response given its 2xx flag and raw body
    pub fn validate(&self, success: bool, body: &str) -> ValidationOutcome {
        if success {
            return ValidationOutcome::default();
        }

        let mut outcome = ValidationOutcome::default();

        match serde_json::from_str::<ErrorPayload>(body) {
            Ok(payload) => {
                if let Some(first) = payload
                    .errors
                    .into_iter()
                    .map(|e| e.message)
                    .find(|m| !m.is_empty())
                {
                    outcome.errors.push(first);
                }
            }
            Err(e) => outcome.payload_error = Some(e.to_string()),
        }

        if self.token_auth {
            outcome.errors.push(TOKEN_SCOPE_HINT.to_string());
        }

        outcome
    }
}

/// HTML in place of JSON, typically an edge or gateway error page
pub fn is_html(body: &str) -> bool {
    body.starts_with('<')
}
