//! Shared HTTP plumbing for the upstream clients.

use std::time::Duration;

use anyhow::Context;
use infohub_types::UpstreamError;

/// Builds a reqwest client with the adapter's timeout applied to every call.
pub(crate) fn build_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("infohub/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")
}

/// Translates a connection-level failure (DNS, TLS, timeout, refused).
pub(crate) fn transport(err: reqwest::Error) -> UpstreamError {
    UpstreamError::Transport(err.to_string())
}

/// Turns a non-2xx response into a structured upstream failure, extracting
/// the provider's own error text when the body carries a JSON `message` or
/// `error` field.
pub(crate) async fn status_error(resp: reqwest::Response) -> UpstreamError {
    let status = resp.status().as_u16();
    let message = resp.text().await.ok().and_then(|body| {
        serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
    });
    UpstreamError::Status { status, message }
}
