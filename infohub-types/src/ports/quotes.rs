//! Quote source port.

use crate::domain::Quote;
use crate::error::UpstreamError;

/// Port trait for one quote source in the fallback chain.
///
/// Every failure mode - timeout, non-2xx, network, decode - is reported
/// uniformly as an [`UpstreamError`]; the chain does not distinguish them.
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// Human-readable source name, used in logs when an attempt fails.
    fn name(&self) -> &'static str;

    /// Fetches one random quote, bounded by the source's own timeout.
    async fn random_quote(&self) -> Result<Quote, UpstreamError>;
}
