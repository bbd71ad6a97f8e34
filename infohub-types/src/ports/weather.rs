//! Weather provider port.

use crate::domain::WeatherReport;
use crate::error::UpstreamError;

/// Port trait for the current-weather provider.
///
/// `city` is guaranteed non-empty and trimmed by the caller; the single
/// outbound call is made with metric units.
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync + 'static {
    /// Fetches and normalizes the current weather for a free-text city name.
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, UpstreamError>;
}
