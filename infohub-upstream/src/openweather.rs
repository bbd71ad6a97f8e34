//! OpenWeatherMap adapter for the `WeatherProvider` port.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use infohub_types::{UpstreamError, WeatherProvider, WeatherReport};

use crate::http;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// Queries by free-text city name with metric units; the API key travels as
/// the `appid` query parameter.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Creates a client with the given credential and request timeout.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Overrides the provider base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, UpstreamError> {
        let resp = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await
            .map_err(http::transport)?;

        if !resp.status().is_success() {
            return Err(http::status_error(resp).await);
        }

        let body: CurrentWeatherBody = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;
        Ok(body.into())
    }
}

// Wire shapes for the provider response; only the fields we forward.

#[derive(Debug, Deserialize)]
struct CurrentWeatherBody {
    name: String,
    main: MainBody,
    #[serde(default)]
    weather: Vec<ConditionBody>,
    sys: Option<SysBody>,
    wind: Option<WindBody>,
    visibility: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MainBody {
    temp: f64,
    feels_like: Option<f64>,
    humidity: Option<u8>,
    pressure: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ConditionBody {
    main: Option<String>,
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SysBody {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WindBody {
    speed: Option<f64>,
    deg: Option<u16>,
}

impl From<CurrentWeatherBody> for WeatherReport {
    fn from(body: CurrentWeatherBody) -> Self {
        let condition = body.weather.into_iter().next();
        let sys = body.sys;
        let wind = body.wind;
        WeatherReport {
            city: body.name,
            country: sys.as_ref().and_then(|s| s.country.clone()),
            temperature: body.main.temp,
            feels_like: body.main.feels_like,
            condition: condition.as_ref().and_then(|c| c.main.clone()),
            description: condition.as_ref().and_then(|c| c.description.clone()),
            icon: condition.and_then(|c| c.icon),
            humidity: body.main.humidity,
            wind_speed: wind.as_ref().and_then(|w| w.speed),
            wind_deg: wind.and_then(|w| w.deg),
            sunrise: sys.as_ref().and_then(|s| s.sunrise),
            sunset: sys.and_then(|s| s.sunset),
            pressure: body.main.pressure,
            visibility: body.visibility,
        }
    }
}
