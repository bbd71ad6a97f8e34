//! # InfoHub Upstream
//!
//! Concrete upstream adapters for the InfoHub service. Each client implements
//! one port from `infohub-types`: it builds a single outbound request (base
//! URL, query parameters, credential, per-client timeout), issues it once, and
//! returns either the normalized body or a structured `UpstreamError`.
//!
//! No retry or fallback logic lives here - the quote chain belongs to the
//! service layer.

pub mod frankfurter;
pub mod openweather;
pub mod quotes;

mod http;

pub use frankfurter::FrankfurterClient;
pub use openweather::OpenWeatherClient;
pub use quotes::{QuotableClient, ZenQuotesClient};
