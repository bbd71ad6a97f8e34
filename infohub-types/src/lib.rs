//! # InfoHub Types
//!
//! Domain types and port traits for the InfoHub aggregation service.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (WeatherReport, ConversionResult, Quote)
//! - `ports/` - Trait definitions that upstream adapters must implement
//! - `dto/` - Query-parameter and response shapes for the API boundary
//! - `error/` - Upstream and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ConversionResult, CurrencyCode, InvalidCurrencyCode, Quote, WeatherReport};
pub use dto::{ConvertParams, WeatherParams};
pub use error::{AppError, UpstreamError};
pub use ports::{QuoteSource, RateProvider, WeatherProvider};
