//! InfoHub Application Service
//!
//! Single source of truth for input validation, upstream invocation,
//! response shaping, and error normalization. Contains NO transport logic -
//! the adapters behind the ports own the HTTP calls.

use infohub_types::{
    AppError, ConversionResult, ConvertParams, CurrencyCode, Quote, QuoteSource, RateProvider,
    WeatherParams, WeatherProvider, WeatherReport,
};

const MISSING_CITY: &str = "Missing required query param: city";
const MISSING_CONVERT_PARAMS: &str = "Missing required query params: from, to, amount";
const MISSING_WEATHER_KEY: &str = "Server missing OpenWeather API key";
const WEATHER_FAILED: &str = "Failed to fetch weather data";
const CONVERT_FAILED: &str = "Failed to convert currency";

/// Application service for the three aggregation operations.
///
/// Generic over `W: WeatherProvider` and `R: RateProvider` - the adapters are
/// injected at compile time. This enables:
/// - Swapping providers without code changes
/// - Testing with stub providers
/// - Compile-time checks for port implementation
///
/// The weather provider is optional: its credential is resolved once at
/// startup, and a missing credential turns every weather lookup into a
/// misconfiguration error without disabling the other operations.
pub struct InfoHubService<W: WeatherProvider, R: RateProvider> {
    weather: Option<W>,
    rates: R,
    quote_sources: Vec<Box<dyn QuoteSource>>,
    fallback_quote: Quote,
}

impl<W: WeatherProvider, R: RateProvider> InfoHubService<W, R> {
    /// Creates a new service over the given adapters.
    ///
    /// `quote_sources` is the fallback chain in priority order; the built-in
    /// constant quote is its implicit terminal member.
    pub fn new(weather: Option<W>, rates: R, quote_sources: Vec<Box<dyn QuoteSource>>) -> Self {
        Self {
            weather,
            rates,
            quote_sources,
            fallback_quote: Quote::fallback(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Weather lookup
    // ─────────────────────────────────────────────────────────────────────────────

    /// Looks up current weather for a city.
    ///
    /// Validation happens before any outbound call: an empty or
    /// whitespace-only city is rejected at zero network cost.
    pub async fn weather(&self, params: &WeatherParams) -> Result<WeatherReport, AppError> {
        let city = params.city.as_deref().unwrap_or("").trim();
        if city.is_empty() {
            return Err(AppError::InvalidRequest(MISSING_CITY.to_string()));
        }

        let provider = self
            .weather
            .as_ref()
            .ok_or_else(|| AppError::ServerMisconfigured(MISSING_WEATHER_KEY.to_string()))?;

        provider
            .current_weather(city)
            .await
            .map_err(|e| AppError::upstream(e, WEATHER_FAILED))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Currency conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts an amount between two currencies at the latest upstream rate.
    pub async fn convert(&self, params: &ConvertParams) -> Result<ConversionResult, AppError> {
        let (from_raw, to_raw, amount_raw) = match (&params.from, &params.to, &params.amount) {
            (Some(from), Some(to), Some(amount))
                if !from.trim().is_empty() && !to.trim().is_empty() =>
            {
                (from, to, amount)
            }
            _ => {
                return Err(AppError::InvalidRequest(MISSING_CONVERT_PARAMS.to_string()));
            }
        };

        let from = CurrencyCode::parse(from_raw)?;
        let to = CurrencyCode::parse(to_raw)?;

        let amount = amount_raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or(AppError::InvalidAmount)?;

        let rate = self
            .rates
            .latest_rate(&from, &to)
            .await
            .map_err(|e| AppError::upstream(e, CONVERT_FAILED))?
            .filter(|r| *r > 0.0)
            .ok_or(AppError::UnsupportedPair)?;

        Ok(ConversionResult::new(from, to, rate, amount))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quote retrieval - fallback chain
    // ─────────────────────────────────────────────────────────────────────────────

    /// Returns one quote; this operation is total.
    ///
    /// Sources are tried strictly in sequence, each bounded by its own
    /// timeout. The first success wins; every failure advances the chain and
    /// the constant fallback quote is the terminal state, so no attempt's
    /// failure ever reaches the caller.
    pub async fn quote(&self) -> Quote {
        for source in &self.quote_sources {
            match source.random_quote().await {
                Ok(quote) => {
                    tracing::debug!(source = source.name(), "quote fetched");
                    return quote;
                }
                Err(err) => {
                    tracing::warn!(
                        source = source.name(),
                        error = %err,
                        "quote source failed, trying next"
                    );
                }
            }
        }
        self.fallback_quote.clone()
    }
}
