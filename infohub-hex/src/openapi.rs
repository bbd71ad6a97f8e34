//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use infohub_types::domain::{ConversionResult, CurrencyCode, Quote, WeatherReport};
use infohub_types::dto::{ConvertParams, WeatherParams};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = inline(serde_json::Value), example = json!({"status": "ok"}))
    )
)]
async fn health() {}

/// Current weather for a city
#[utoipa::path(
    get,
    path = "/api/weather",
    tag = "weather",
    params(WeatherParams),
    responses(
        (status = 200, description = "Normalized weather report", body = WeatherReport),
        (status = 400, description = "Missing city parameter"),
        (status = 500, description = "Missing server credential or upstream failure")
    )
)]
async fn weather() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/api/convert",
    tag = "currency",
    params(ConvertParams),
    responses(
        (status = 200, description = "Conversion at the latest rate", body = ConversionResult),
        (status = 400, description = "Missing parameters, invalid amount, or unsupported pair")
    )
)]
async fn convert() {}

/// Random inspirational quote
#[utoipa::path(
    get,
    path = "/api/quote",
    tag = "quotes",
    responses(
        (status = 200, description = "A quote from the first responsive source, or the built-in fallback", body = Quote)
    )
)]
async fn quote() {}

/// OpenAPI documentation for the InfoHub API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "InfoHub API",
        version = "1.0.0",
        description = "Aggregation API proxying three third-party data sources: current weather, currency conversion, and inspirational quotes. All endpoints are read-only and unauthenticated.",
        license(name = "MIT"),
    ),
    paths(health, weather, convert, quote),
    components(
        schemas(
            WeatherReport,
            ConversionResult,
            CurrencyCode,
            Quote,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "weather", description = "Current weather lookup"),
        (name = "currency", description = "Currency conversion"),
        (name = "quotes", description = "Quote retrieval with fallback chain"),
    )
)]
pub struct ApiDoc;
