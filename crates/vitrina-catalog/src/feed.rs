//! External feed seam.

use async_trait::async_trait;
use vitrina_commerce::filter::CatalogFilter;
use vitrina_commerce::results::PaginatedProducts;
use vitrina_syscom::{FeedError, SyscomClient};

/// The distributor feed as the aggregator consumes it.
///
/// Splitting token, rate, and search keeps the aggregator's sequencing
/// explicit: each step depends on the previous one succeeding or
/// degrading.
#[async_trait]
pub trait ExternalFeed: Send + Sync {
    /// A valid bearer token, or `None` when auth is unavailable.
    async fn token(&self) -> Option<String>;

    /// The current exchange rate (implementations fall back rather than
    /// erroring).
    async fn exchange_rate(&self, token: Option<&str>) -> f64;

    /// A page of distributor products for the filter, already mapped and
    /// stock-filtered.
    async fn search(
        &self,
        filter: &CatalogFilter,
        token: &str,
        exchange_rate: f64,
    ) -> Result<PaginatedProducts, FeedError>;
}

#[async_trait]
impl ExternalFeed for SyscomClient {
    async fn token(&self) -> Option<String> {
        SyscomClient::token(self).await
    }

    async fn exchange_rate(&self, token: Option<&str>) -> f64 {
        SyscomClient::exchange_rate(self, token).await
    }

    async fn search(
        &self,
        filter: &CatalogFilter,
        token: &str,
        exchange_rate: f64,
    ) -> Result<PaginatedProducts, FeedError> {
        SyscomClient::search(self, filter, token, exchange_rate).await
    }
}
