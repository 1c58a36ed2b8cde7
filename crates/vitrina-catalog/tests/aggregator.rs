//! Aggregator behavior against controllable store and feed doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use vitrina_catalog::{Catalog, ExternalFeed, InMemoryStore, ProductStore};
use vitrina_commerce::error::CommerceError;
use vitrina_commerce::filter::CatalogFilter;
use vitrina_commerce::money::Money;
use vitrina_commerce::product::{Product, ProductSource};
use vitrina_commerce::results::PaginatedProducts;
use vitrina_syscom::FeedError;

/// Feed double with scripted behavior and a search-call counter.
struct FakeFeed {
    token: Option<String>,
    fail_listing: bool,
    products: Vec<Product>,
    total_pages: i64,
    searches: AtomicUsize,
}

impl FakeFeed {
    fn serving(products: Vec<Product>, total_pages: i64) -> Self {
        Self {
            token: Some("test-token".to_string()),
            fail_listing: false,
            products,
            total_pages,
            searches: AtomicUsize::new(0),
        }
    }

    fn broken() -> Self {
        Self {
            fail_listing: true,
            ..Self::serving(Vec::new(), 0)
        }
    }

    fn unauthenticated() -> Self {
        Self {
            token: None,
            ..Self::serving(Vec::new(), 0)
        }
    }

    fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExternalFeed for FakeFeed {
    async fn token(&self) -> Option<String> {
        self.token.clone()
    }

    async fn exchange_rate(&self, _token: Option<&str>) -> f64 {
        4000.0
    }

    async fn search(
        &self,
        filter: &CatalogFilter,
        _token: &str,
        _exchange_rate: f64,
    ) -> Result<PaginatedProducts, FeedError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(FeedError::Http {
                status: 503,
                url: "https://feed.invalid/productos".to_string(),
            });
        }
        Ok(PaginatedProducts::new(
            self.products.clone(),
            self.total_pages,
            filter.page(),
        ))
    }
}

/// Store double whose queries always fail.
struct BrokenStore;

#[async_trait]
impl ProductStore for BrokenStore {
    async fn search(
        &self,
        _search: Option<&str>,
        _category: Option<&str>,
    ) -> Result<Vec<Product>, CommerceError> {
        Err(CommerceError::StoreError("no such table: products".to_string()))
    }
}

fn external_product(id: &str) -> Product {
    Product {
        id: format!("sys_{id}"),
        name: format!("Cámara {id}"),
        description: "Domo IP".to_string(),
        brand: "Hikvision".to_string(),
        model: String::new(),
        category: "Videovigilancia".to_string(),
        price: Money::cop(476_000),
        stock: 5,
        image_url: None,
        slug: format!("sys-{id}"),
        source: ProductSource::External,
        external_url: None,
    }
}

fn local_products() -> Vec<Product> {
    vec![
        Product::local("1", "Kaspersky Endpoint", "kaspersky-endpoint", Money::cop(250_000))
            .with_category("Software"),
        Product::local("2", "Instalación CCTV", "instalacion-cctv", Money::cop(350_000))
            .with_category("Servicios"),
    ]
}

#[tokio::test]
async fn identical_queries_hit_upstream_once() {
    let feed = Arc::new(FakeFeed::serving(vec![external_product("1")], 3));
    let catalog = Catalog::new(Arc::new(InMemoryStore::default()), feed.clone(), true);

    let filter = CatalogFilter::new().with_search("camara");
    let first = catalog.get_external_products(&filter).await;
    let second = catalog.get_external_products(&filter).await;

    assert_eq!(first, second);
    assert_eq!(feed.search_count(), 1);
}

#[tokio::test]
async fn distinct_queries_miss_the_cache() {
    let feed = Arc::new(FakeFeed::serving(vec![external_product("1")], 3));
    let catalog = Catalog::new(Arc::new(InMemoryStore::default()), feed.clone(), true);

    catalog
        .get_external_products(&CatalogFilter::new().with_page(1))
        .await;
    catalog
        .get_external_products(&CatalogFilter::new().with_page(2))
        .await;

    assert_eq!(feed.search_count(), 2);
}

#[tokio::test]
async fn listing_failure_degrades_to_empty_page() {
    let feed = Arc::new(FakeFeed::broken());
    let catalog = Catalog::new(Arc::new(InMemoryStore::default()), feed.clone(), true);

    let result = catalog
        .get_external_products(&CatalogFilter::new().with_page(4))
        .await;

    assert!(result.is_empty());
    assert_eq!(result.total_pages, 0);
    assert_eq!(result.current_page, 4);
}

#[tokio::test]
async fn failed_results_are_not_cached() {
    let feed = Arc::new(FakeFeed::broken());
    let catalog = Catalog::new(Arc::new(InMemoryStore::default()), feed.clone(), true);

    let filter = CatalogFilter::new();
    catalog.get_external_products(&filter).await;
    catalog.get_external_products(&filter).await;

    // Both calls went upstream; an error never poisons the cache.
    assert_eq!(feed.search_count(), 2);
}

#[tokio::test]
async fn missing_token_fails_closed_without_listing_call() {
    let feed = Arc::new(FakeFeed::unauthenticated());
    let catalog = Catalog::new(Arc::new(InMemoryStore::default()), feed.clone(), true);

    let result = catalog
        .get_external_products(&CatalogFilter::new().with_page(2))
        .await;

    assert!(result.is_empty());
    assert_eq!(result.total_pages, 0);
    assert_eq!(result.current_page, 2);
    assert_eq!(feed.search_count(), 0);
}

#[tokio::test]
async fn disabled_feed_serves_local_only() {
    let feed = Arc::new(FakeFeed::serving(vec![external_product("1")], 3));
    let store = Arc::new(InMemoryStore::new(local_products()));
    let catalog = Catalog::new(store, feed.clone(), false);

    let result = catalog.get_all_products(&CatalogFilter::new()).await;

    assert_eq!(result.len(), 2);
    assert_eq!(result.total_pages, 1);
    assert!(result.products.iter().all(|p| !p.is_external()));
    assert_eq!(feed.search_count(), 0);
}

#[tokio::test]
async fn disabled_feed_with_no_local_matches_reports_zero_pages() {
    let feed = Arc::new(FakeFeed::serving(Vec::new(), 0));
    let store = Arc::new(InMemoryStore::new(local_products()));
    let catalog = Catalog::new(store, feed, false);

    let result = catalog
        .get_all_products(&CatalogFilter::new().with_search("no-match"))
        .await;

    assert!(result.is_empty());
    assert_eq!(result.total_pages, 0);
}

#[tokio::test]
async fn page_one_blends_local_extras_onto_external_page() {
    let externals = vec![external_product("1"), external_product("2"), external_product("3")];
    let feed = Arc::new(FakeFeed::serving(externals, 7));
    let store = Arc::new(InMemoryStore::new(local_products()));
    let catalog = Catalog::new(store, feed, true);

    let result = catalog.get_all_products(&CatalogFilter::new()).await;

    // Page 1 carries every local item plus a full external page; the
    // page count is the feed's alone.
    assert_eq!(result.len(), 5);
    assert_eq!(result.total_pages, 7);
    assert_eq!(result.products[0].source, ProductSource::Local);
    assert_eq!(result.products[4].source, ProductSource::External);
}

#[tokio::test]
async fn later_pages_carry_no_local_items() {
    let feed = Arc::new(FakeFeed::serving(vec![external_product("9")], 7));
    let store = Arc::new(InMemoryStore::new(local_products()));
    let catalog = Catalog::new(store, feed, true);

    let result = catalog
        .get_all_products(&CatalogFilter::new().with_page(2))
        .await;

    assert_eq!(result.len(), 1);
    assert!(result.products[0].is_external());
    assert_eq!(result.current_page, 2);
}

#[tokio::test]
async fn feed_outage_keeps_local_items_but_external_page_count() {
    let feed = Arc::new(FakeFeed::broken());
    let store = Arc::new(InMemoryStore::new(local_products()));
    let catalog = Catalog::new(store, feed, true);

    let result = catalog.get_all_products(&CatalogFilter::new()).await;

    // Local items still show; the page count stays the (degraded)
    // external one. The asymmetry is intentional.
    assert_eq!(result.len(), 2);
    assert_eq!(result.total_pages, 0);
}

#[tokio::test]
async fn broken_store_never_breaks_the_blend() {
    let feed = Arc::new(FakeFeed::serving(vec![external_product("1")], 2));
    let catalog = Catalog::new(Arc::new(BrokenStore), feed, true);

    let result = catalog.get_all_products(&CatalogFilter::new()).await;

    assert_eq!(result.len(), 1);
    assert!(result.products[0].is_external());
    assert_eq!(result.total_pages, 2);
}

#[tokio::test]
async fn local_items_are_never_stock_filtered() {
    let zero_stock_local = vec![
        Product::local("1", "Servicio de auditoría", "servicio-auditoria", Money::cop(500_000))
    ];
    let feed = Arc::new(FakeFeed::serving(Vec::new(), 0));
    let store = Arc::new(InMemoryStore::new(zero_stock_local));
    let catalog = Catalog::new(store, feed, true);

    let result = catalog.get_all_products(&CatalogFilter::new()).await;

    assert_eq!(result.len(), 1);
    assert_eq!(result.products[0].stock, 0);
}
