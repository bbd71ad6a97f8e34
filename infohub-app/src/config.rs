//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// Credential for OpenWeather. Absence is not fatal at startup; the
    /// weather endpoint answers 500 until one is provided.
    pub openweather_api_key: Option<String>,
    pub openweather_base_url: Option<String>,
    pub frankfurter_base_url: Option<String>,
    pub quotable_base_url: Option<String>,
    pub zenquotes_base_url: Option<String>,
    /// Per-request timeout for weather and rate lookups.
    pub upstream_timeout: Duration,
    /// Per-attempt timeout inside the quote fallback chain.
    pub quote_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let upstream_timeout = duration_var("UPSTREAM_TIMEOUT_SECS", 10)?;
        let quote_timeout = duration_var("QUOTE_TIMEOUT_SECS", 5)?;

        Ok(Self {
            port,
            openweather_api_key: non_empty_var("OPENWEATHER_API_KEY"),
            openweather_base_url: non_empty_var("OPENWEATHER_BASE_URL"),
            frankfurter_base_url: non_empty_var("FRANKFURTER_BASE_URL"),
            quotable_base_url: non_empty_var("QUOTABLE_BASE_URL"),
            zenquotes_base_url: non_empty_var("ZENQUOTES_BASE_URL"),
            upstream_timeout,
            quote_timeout,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn duration_var(name: &str, default_secs: u64) -> anyhow::Result<Duration> {
    let secs = match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("{name} must be a whole number of seconds"))?,
        Err(_) => default_secs,
    };
    Ok(Duration::from_secs(secs))
}
