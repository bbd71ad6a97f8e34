//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use infohub_types::{AppError, ConvertParams, RateProvider, WeatherParams, WeatherProvider};

use crate::InfoHubService;

/// Application state shared across handlers.
pub struct AppState<W: WeatherProvider, R: RateProvider> {
    pub service: InfoHubService<W, R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::InvalidRequest(_) | AppError::InvalidAmount | AppError::UnsupportedPair => {
                StatusCode::BAD_REQUEST
            }
            AppError::ServerMisconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Propagate the upstream status when one was received, else 500.
            AppError::Upstream { status, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Current weather for a city.
#[tracing::instrument(skip(state))]
pub async fn weather<W: WeatherProvider, R: RateProvider>(
    State(state): State<Arc<AppState<W, R>>>,
    Query(params): Query<WeatherParams>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state.service.weather(&params).await?;
    Ok(Json(report))
}

/// Currency conversion at the latest upstream rate.
#[tracing::instrument(skip(state))]
pub async fn convert<W: WeatherProvider, R: RateProvider>(
    State(state): State<Arc<AppState<W, R>>>,
    Query(params): Query<ConvertParams>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.convert(&params).await?;
    Ok(Json(result))
}

/// Random quote; never fails thanks to the fallback chain.
#[tracing::instrument(skip(state))]
pub async fn quote<W: WeatherProvider, R: RateProvider>(
    State(state): State<Arc<AppState<W, R>>>,
) -> impl IntoResponse {
    Json(state.service.quote().await)
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}
