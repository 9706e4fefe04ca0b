//! Sending requests and checking responses

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use dnssync_core::{Error, Result};

use crate::CloudflareProvider;
use crate::transport::{ApiRequest, ApiResponse};
use crate::validate::is_html;

impl CloudflareProvider {
    /// Send `request`, mapping a missing response to `Error::Transport`
    pub(crate) async fn execute(&self, action: &str, request: ApiRequest) -> Result<ApiResponse> {
        debug!(action, method = request.method.as_str(), url = %request.url, "Sending request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| Error::transport(action, format!("{:#}", e)))?;

        debug!(action, status = response.status, body = %response.body, "Received response");
        Ok(response)
    }

    /// Validate `response` and decode its body as `T`
    ///
    /// Checks run in this order: HTML body, validator messages, failed
    /// status without messages, then decoding.
    pub(crate) fn check_response<T: DeserializeOwned>(
        &self,
        action: &str,
        response: &ApiResponse,
    ) -> Result<T> {
        let outcome = self
            .validator
            .validate(response.is_success(), &response.body);

        if !outcome.errors.is_empty() {
            warn!(action, status = response.status, errors = ?outcome.errors, "Response validation failed");
        }

        if is_html(&response.body) {
            return Err(Error::Gateway {
                action: action.to_string(),
                messages: outcome.errors,
                body: response.body.clone(),
            });
        }

        if !outcome.is_ok() {
            return Err(Error::Api {
                action: action.to_string(),
                status: response.status,
                messages: outcome.errors,
                body: response.body.clone(),
            });
        }

        if !response.is_success() {
            return Err(match outcome.payload_error {
                Some(detail) => Error::decode(action, detail, response.body.clone()),
                None => Error::Api {
                    action: action.to_string(),
                    status: response.status,
                    messages: Vec::new(),
                    body: response.body.clone(),
                },
            });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            warn!(action, error = %e, "Failed to decode response");
            Error::decode(action, e, response.body.clone())
        })
    }
}
