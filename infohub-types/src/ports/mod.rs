//! Port traits implemented by the upstream adapters.
//!
//! Each port represents exactly one outbound call. Adapters return either the
//! parsed, normalized body or a structured [`UpstreamError`](crate::UpstreamError);
//! no retry logic lives behind a port. The quote fallback chain belongs to the
//! service, which consumes an ordered list of [`QuoteSource`]s.

mod quotes;
mod rates;
mod weather;

pub use quotes::QuoteSource;
pub use rates::RateProvider;
pub use weather::WeatherProvider;
