//! The distributor API client.

use vitrina_commerce::category::{default_category, upstream_category_id};
use vitrina_commerce::filter::CatalogFilter;
use vitrina_commerce::product::Product;
use vitrina_commerce::results::PaginatedProducts;

use crate::auth::{FeedCredentials, TokenManager};
use crate::error::FeedError;
use crate::exchange::ExchangeRateProvider;
use crate::wire::ListingResponse;

/// Distributor endpoint URLs.
#[derive(Debug, Clone)]
pub struct FeedEndpoints {
    /// REST API base.
    pub base_url: String,
    /// OAuth token endpoint.
    pub auth_url: String,
    /// Public site base, used to absolutize product links.
    pub site_url: String,
}

impl Default for FeedEndpoints {
    fn default() -> Self {
        Self {
            base_url: "https://developers.syscomcolombia.com/api/v1".to_string(),
            auth_url: "https://developers.syscomcolombia.com/oauth/token".to_string(),
            site_url: "https://www.syscomcolombia.com".to_string(),
        }
    }
}

/// Client for the distributor's product API.
///
/// Owns the token and exchange-rate caches; one instance is meant to be
/// shared process-wide behind an `Arc`.
#[derive(Debug)]
pub struct SyscomClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) site_url: String,
    tokens: TokenManager,
    rates: ExchangeRateProvider,
}

impl SyscomClient {
    /// Create a client against the production endpoints.
    pub fn new(credentials: FeedCredentials) -> Self {
        Self::with_endpoints(credentials, FeedEndpoints::default())
    }

    /// Create a client against explicit endpoints.
    pub fn with_endpoints(credentials: FeedCredentials, endpoints: FeedEndpoints) -> Self {
        let http = reqwest::Client::new();
        Self {
            tokens: TokenManager::new(credentials, http.clone(), endpoints.auth_url),
            rates: ExchangeRateProvider::new(http.clone(), endpoints.base_url.clone()),
            http,
            base_url: endpoints.base_url,
            site_url: endpoints.site_url,
        }
    }

    /// Get a valid bearer token, or `None` when auth is unavailable.
    pub async fn token(&self) -> Option<String> {
        self.tokens.token().await
    }

    /// Get the current TRM (falls back, never errors).
    pub async fn exchange_rate(&self, token: Option<&str>) -> f64 {
        self.rates.rate(token).await
    }

    /// Run a paginated product search against the listing endpoint.
    ///
    /// Items are mapped into the unified product shape at the given
    /// exchange rate, and out-of-stock items are dropped.
    pub async fn search(
        &self,
        filter: &CatalogFilter,
        token: &str,
        exchange_rate: f64,
    ) -> Result<PaginatedProducts, FeedError> {
        let url = format!("{}/productos", self.base_url);
        let query = build_query(filter);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&query)
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FeedError::Http { status, url });
        }

        let listing = response
            .json::<ListingResponse>()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))?;

        Ok(process_listing(
            listing,
            exchange_rate,
            filter.page(),
            &self.site_url,
        ))
    }
}

/// Build the listing query parameters for a filter.
fn build_query(filter: &CatalogFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![("pagina", filter.page().to_string())];

    if filter.is_unfiltered() {
        // Nothing to go on; load the default category so the landing
        // page still has products.
        if let Some(id) = upstream_category_id(default_category()) {
            query.push(("categoria", id.to_string()));
        }
        return query;
    }

    if let Some(search) = &filter.search {
        query.push(("busqueda", search.clone()));
    }

    if let Some(category) = &filter.category {
        match upstream_category_id(category) {
            Some(id) => query.push(("categoria", id.to_string())),
            None => {
                // The distributor has no id for this category; fold it
                // into the free-text term. Lossy fallback.
                if !query.iter().any(|(name, _)| *name == "busqueda") {
                    query.push(("busqueda", category.clone()));
                }
            }
        }
    }

    query
}

/// Map a listing response into a result page.
///
/// The page count comes from the response metadata when present; without
/// it, one page is assumed when anything was listed. The count is taken
/// before stock filtering so it matches what the distributor reported.
fn process_listing(
    listing: ListingResponse,
    exchange_rate: f64,
    page: i64,
    site_url: &str,
) -> PaginatedProducts {
    let (items, reported_pages) = listing.into_parts();

    let total_pages = match reported_pages {
        Some(pages) => pages,
        None if items.is_empty() => 0,
        None => 1,
    };

    let products: Vec<Product> = items
        .into_iter()
        .map(|item| item.into_product(exchange_rate, site_url))
        .filter(Product::is_in_stock)
        .collect();

    PaginatedProducts::new(products, total_pages, page)
}
