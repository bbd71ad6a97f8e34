//! Frankfurter adapter for the `RateProvider` port.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use infohub_types::{CurrencyCode, RateProvider, UpstreamError};

use crate::http;

const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Client for the Frankfurter latest-rates endpoint. No credential required.
pub struct FrankfurterClient {
    http: reqwest::Client,
    base_url: String,
}

impl FrankfurterClient {
    /// Creates a client with the given request timeout.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the provider base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesBody {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for FrankfurterClient {
    #[instrument(skip(self), fields(from = %from, to = %to))]
    async fn latest_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Option<f64>, UpstreamError> {
        let resp = self
            .http
            .get(format!("{}/latest", self.base_url))
            .query(&[("from", from.as_str()), ("to", to.as_str())])
            .send()
            .await
            .map_err(http::transport)?;

        if !resp.status().is_success() {
            return Err(http::status_error(resp).await);
        }

        let body: LatestRatesBody = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;
        Ok(body.rates.get(to.as_str()).copied())
    }
}
