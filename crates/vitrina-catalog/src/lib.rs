//! Hybrid local + distributor catalog aggregation for Vitrina.
//!
//! [`Catalog`] produces a single paginated product list blending two
//! inventories:
//!
//! - the **local store**, a small curated set that is folded entirely
//!   into page 1
//! - the **distributor feed**, the larger external catalog that drives
//!   the page count
//!
//! Upstream instability is shielded from callers: external results are
//! cached for five minutes, and any feed or store failure degrades to an
//! empty slice of the blend rather than an error. During a feed outage
//! the catalog silently shows local items only.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vitrina_catalog::{Catalog, CatalogConfig, InMemoryStore};
//! use vitrina_commerce::CatalogFilter;
//!
//! let store = Arc::new(InMemoryStore::new(seed_products()));
//! let catalog = Catalog::from_config(store, &CatalogConfig::from_env());
//!
//! let page = catalog
//!     .get_all_products(&CatalogFilter::new().with_search("ubiquiti"))
//!     .await;
//! ```

pub mod aggregator;
pub mod config;
pub mod feed;
pub mod store;

pub use aggregator::Catalog;
pub use config::CatalogConfig;
pub use feed::ExternalFeed;
pub use store::{InMemoryStore, ProductStore};
