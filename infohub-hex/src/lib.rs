//! # InfoHub Hex
//!
//! Application service layer and HTTP adapter for the InfoHub service.
//!
//! ## Architecture
//!
//! - `service` - Application service (validation, upstream orchestration,
//!   quote fallback chain)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over the `WeatherProvider` and `RateProvider`
//! ports, allowing different upstream implementations to be injected.

pub mod inbound;
pub mod service;

mod openapi;

#[cfg(test)]
mod service_tests;

pub use service::InfoHubService;
