//! Query-parameter shapes for the API boundary.
//!
//! All parameters are `Option<String>` on purpose: presence and format are
//! validated by the service so that a missing parameter produces our own 400
//! envelope instead of a framework rejection.

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for `GET /api/weather`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct WeatherParams {
    /// Free-text city name, e.g. "Kolkata"
    pub city: Option<String>,
}

/// Query parameters for `GET /api/convert`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ConvertParams {
    /// Source currency code, e.g. "INR"
    pub from: Option<String>,
    /// Target currency code, e.g. "USD"
    pub to: Option<String>,
    /// Amount in source currency as a numeric string, e.g. "100"
    pub amount: Option<String>,
}
