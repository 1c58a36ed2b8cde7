//! The catalog aggregator.

use std::sync::Arc;
use std::time::Duration;

use futures::join;
use tracing::warn;

use vitrina_cache::TtlCache;
use vitrina_commerce::filter::CatalogFilter;
use vitrina_commerce::product::Product;
use vitrina_commerce::results::PaginatedProducts;
use vitrina_syscom::SyscomClient;

use crate::config::CatalogConfig;
use crate::feed::ExternalFeed;
use crate::store::ProductStore;

/// How long a computed external result page stays cached.
const RESULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Blends the curated local store with the distributor feed.
///
/// One instance holds the result cache and the feed's token/rate caches;
/// share it process-wide behind an `Arc`.
pub struct Catalog {
    store: Arc<dyn ProductStore>,
    feed: Arc<dyn ExternalFeed>,
    feed_enabled: bool,
    results: TtlCache<String, PaginatedProducts>,
}

impl Catalog {
    /// Create an aggregator over explicit store and feed instances.
    pub fn new(store: Arc<dyn ProductStore>, feed: Arc<dyn ExternalFeed>, feed_enabled: bool) -> Self {
        Self {
            store,
            feed,
            feed_enabled,
            results: TtlCache::new(RESULT_TTL),
        }
    }

    /// Create an aggregator wired to the real distributor client.
    pub fn from_config(store: Arc<dyn ProductStore>, config: &CatalogConfig) -> Self {
        let feed = Arc::new(SyscomClient::new(config.credentials.clone()));
        Self::new(store, feed, config.external_feed_enabled)
    }

    /// Blend local and external inventory for one query.
    ///
    /// Local items ride along on page 1 without affecting the page
    /// count, which is the feed's alone. With the feed disabled the
    /// local result stands by itself.
    pub async fn get_all_products(&self, filter: &CatalogFilter) -> PaginatedProducts {
        if !self.feed_enabled {
            let local = self.get_local_products(filter).await;
            return PaginatedProducts::local_only(local, filter.page());
        }

        let (local, external) = join!(
            self.get_local_products(filter),
            self.get_external_products(filter)
        );

        let mut products = local;
        products.extend(external.products);

        PaginatedProducts::new(products, external.total_pages, filter.page())
    }

    /// Local rows matching the filter.
    ///
    /// Page 1 only: the curated catalog is small enough to never
    /// paginate, so later pages carry no local items. Store failures
    /// degrade to an empty list and must never break the external
    /// catalog.
    pub async fn get_local_products(&self, filter: &CatalogFilter) -> Vec<Product> {
        if filter.page() > 1 {
            return Vec::new();
        }

        match self
            .store
            .search(filter.search.as_deref(), filter.category.as_deref())
            .await
        {
            Ok(products) => products,
            Err(error) => {
                warn!(%error, "local store query failed");
                Vec::new()
            }
        }
    }

    /// Externally listed products for the filter, cache-first.
    ///
    /// A missing token or a failed listing yields an empty result page;
    /// only successful results are cached.
    pub async fn get_external_products(&self, filter: &CatalogFilter) -> PaginatedProducts {
        let cache_key = filter.cache_key();
        if let Some(cached) = self.results.get(&cache_key) {
            return cached;
        }

        let Some(token) = self.feed.token().await else {
            return PaginatedProducts::empty(filter.page());
        };

        let exchange_rate = self.feed.exchange_rate(Some(&token)).await;

        match self.feed.search(filter, &token, exchange_rate).await {
            Ok(result) => {
                self.results.insert(cache_key, result.clone());
                result
            }
            Err(error) => {
                warn!(%error, "external listing failed");
                PaginatedProducts::empty(filter.page())
            }
        }
    }
}
