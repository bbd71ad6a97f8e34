//! Exchange rate provider port.

use crate::domain::CurrencyCode;
use crate::error::UpstreamError;

/// Port trait for the exchange-rate provider.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Gets the latest rate from one currency to another.
    ///
    /// Returns `Ok(None)` when the provider answered but its rates mapping
    /// has no entry for `to` - the caller turns that into an
    /// unsupported-pair rejection.
    async fn latest_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Option<f64>, UpstreamError>;
}
