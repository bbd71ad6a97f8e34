//! Quote source adapters: Quotable (primary) and ZenQuotes (secondary).
//!
//! Both are credential-free and return one random quote per call. Each client
//! carries its own bounded timeout so a chain of attempts cannot hang.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use infohub_types::{Quote, QuoteSource, UpstreamError};

use crate::http;

const QUOTABLE_BASE_URL: &str = "https://api.quotable.io";
const ZENQUOTES_BASE_URL: &str = "https://zenquotes.io";

/// Client for the Quotable random-quote endpoint.
pub struct QuotableClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuotableClient {
    /// Creates a client with the given per-attempt timeout.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base_url: QUOTABLE_BASE_URL.to_string(),
        })
    }

    /// Overrides the provider base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct QuotableBody {
    content: String,
    author: String,
}

#[async_trait]
impl QuoteSource for QuotableClient {
    fn name(&self) -> &'static str {
        "quotable"
    }

    #[instrument(skip(self))]
    async fn random_quote(&self) -> Result<Quote, UpstreamError> {
        let resp = self
            .http
            .get(format!("{}/random", self.base_url))
            .send()
            .await
            .map_err(http::transport)?;

        if !resp.status().is_success() {
            return Err(http::status_error(resp).await);
        }

        let body: QuotableBody = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;
        Ok(Quote {
            content: body.content,
            author: body.author,
        })
    }
}

/// Client for the ZenQuotes random-quote endpoint.
///
/// The provider wraps its single quote in a one-element array with `q`/`a`
/// keys; an empty array counts as a failed attempt.
pub struct ZenQuotesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ZenQuotesClient {
    /// Creates a client with the given per-attempt timeout.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base_url: ZENQUOTES_BASE_URL.to_string(),
        })
    }

    /// Overrides the provider base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct ZenQuoteBody {
    q: String,
    a: String,
}

#[async_trait]
impl QuoteSource for ZenQuotesClient {
    fn name(&self) -> &'static str {
        "zenquotes"
    }

    #[instrument(skip(self))]
    async fn random_quote(&self) -> Result<Quote, UpstreamError> {
        let resp = self
            .http
            .get(format!("{}/api/random", self.base_url))
            .send()
            .await
            .map_err(http::transport)?;

        if !resp.status().is_success() {
            return Err(http::status_error(resp).await);
        }

        let body: Vec<ZenQuoteBody> = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;
        let first = body
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::Decode("empty quote array".to_string()))?;
        Ok(Quote {
            content: first.q,
            author: first.a,
        })
    }
}
