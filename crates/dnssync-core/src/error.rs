//! Error types for the DNS sync client
//!
//! Provider failures are split by where they were detected so callers can
//! react to each kind explicitly:
//!
//! - [`Error::Transport`]: no response was received at all
//! - [`Error::Api`]: the provider answered with an error status
//! - [`Error::Gateway`]: an HTML page came back instead of JSON
//! - [`Error::Decode`]: the body did not have the expected shape
//!
//! Every variant that saw a response body keeps it verbatim, so the
//! rendered message is enough to diagnose a failure without re-running it.

use thiserror::Error;

/// Result type alias for DNS sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DNS sync client
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (connection, TLS, timeout)
    #[error("{action} failed: transport error: {detail}")]
    Transport {
        /// What was being attempted
        action: String,
        /// Underlying transport message
        detail: String,
    },

    /// Non-success status, with whatever messages could be extracted
    #[error("{action} failed (HTTP {status}): {}\nResponse body: {body}", join_messages(.messages))]
    Api {
        /// What was being attempted
        action: String,
        /// HTTP status code
        status: u16,
        /// Extracted error messages, in order
        messages: Vec<String>,
        /// Raw response body
        body: String,
    },

    /// The body was an HTML page, typically from an edge proxy
    #[error("{action} failed: gateway returned an HTML page: {}\nResponse body: {body}", join_messages(.messages))]
    Gateway {
        /// What was being attempted
        action: String,
        /// Extracted error messages, in order
        messages: Vec<String>,
        /// Raw response body
        body: String,
    },

    /// The body did not match the expected shape
    #[error("{action} failed: could not decode response: {detail}\nResponse body: {body}")]
    Decode {
        /// What was being attempted
        action: String,
        /// Decoder message
        detail: String,
        /// Raw response body
        body: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization errors outside of response decoding
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

fn join_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        "no error details".to_string()
    } else {
        messages.join("; ")
    }
}

impl Error {
    /// Create a transport error
    pub fn transport(action: impl Into<String>, detail: impl ToString) -> Self {
        Self::Transport {
            action: action.into(),
            detail: detail.to_string(),
        }
    }

    /// Create a decode error
    pub fn decode(action: impl Into<String>, detail: impl ToString, body: impl Into<String>) -> Self {
        Self::Decode {
            action: action.into(),
            detail: detail.to_string(),
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Raw response body, if this failure saw one
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::Gateway { body, .. } | Self::Decode { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }

    /// Validation messages carried by this failure (empty for other kinds)
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Api { messages, .. } | Self::Gateway { messages, .. } => messages,
            _ => &[],
        }
    }
}
