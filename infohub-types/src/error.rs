//! Error types for the InfoHub service.

use crate::domain::InvalidCurrencyCode;

/// Upstream-level errors (one outbound HTTP call failing).
///
/// Adapters translate every transport and protocol failure into this type at
/// the call site; nothing from `reqwest` crosses the port boundary.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The provider answered with a non-2xx status. `message` carries the
    /// error text from the response body when one was supplied.
    #[error("upstream returned HTTP {status}")]
    Status { status: u16, message: Option<String> },

    /// Connection, DNS, TLS or timeout failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered 2xx but the body did not match the expected shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes; the `Display` text is exactly what the
/// `{error}` envelope carries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed required query parameter.
    #[error("{0}")]
    InvalidRequest(String),

    /// Amount did not parse to a finite, non-negative number.
    #[error("Invalid amount")]
    InvalidAmount,

    /// The rate provider has no quote for the requested target currency.
    #[error("Unsupported currency pair")]
    UnsupportedPair,

    /// A required upstream credential is absent.
    #[error("{0}")]
    ServerMisconfigured(String),

    /// An upstream call failed during weather lookup or conversion.
    /// `status` is the upstream HTTP status when one was received.
    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },
}

impl AppError {
    /// Translates an upstream failure, keeping the provider's own error
    /// message when present and falling back to the per-endpoint generic one.
    pub fn upstream(err: UpstreamError, generic: &str) -> Self {
        match err {
            UpstreamError::Status { status, message } => AppError::Upstream {
                status: Some(status),
                message: message.unwrap_or_else(|| generic.to_string()),
            },
            UpstreamError::Transport(_) | UpstreamError::Decode(_) => AppError::Upstream {
                status: None,
                message: generic.to_string(),
            },
        }
    }
}

impl From<InvalidCurrencyCode> for AppError {
    fn from(err: InvalidCurrencyCode) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}
