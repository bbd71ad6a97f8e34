//! Normalized weather report shape.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single normalized weather observation for a city.
///
/// Produced by reshaping one upstream provider response; field renaming only,
/// no derived computation. Everything except `city` and `temperature` is
/// optional because the provider omits fields for some locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Resolved city name as reported by the provider
    #[schema(example = "Kolkata")]
    pub city: String,
    /// ISO country code
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "IN")]
    pub country: Option<String>,
    /// Temperature in degrees Celsius
    #[schema(example = 31.2)]
    pub temperature: f64,
    /// Perceived temperature in degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    /// Short condition label, e.g. "Clouds"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Longer condition description, e.g. "scattered clouds"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provider icon identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Relative humidity in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<u8>,
    /// Wind speed in metres per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_deg: Option<u16>,
    /// Sunrise as epoch seconds (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<i64>,
    /// Sunset as epoch seconds (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<i64>,
    /// Surface pressure in hPa
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<u32>,
    /// Visibility in metres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<u32>,
}
