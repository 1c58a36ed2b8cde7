//! Commerce domain types for the Vitrina hybrid catalog.
//!
//! This crate provides the shared vocabulary of the catalog core:
//!
//! - **Product**: the unified product view blending local and distributor
//!   inventory
//! - **Money**: integer minor-unit monetary values (COP/USD)
//! - **Filter**: catalog query filters and paginated result containers
//! - **Category**: the display-category to distributor-category mapping
//! - **Pricing**: COP list-price computation (TRM conversion plus IVA)
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrina_commerce::prelude::*;
//!
//! let filter = CatalogFilter::new()
//!     .with_search("ubiquiti")
//!     .with_page(1);
//!
//! let price = list_price_cop(100.0, 4000.0);
//! assert_eq!(price.amount_minor, 476_000);
//! ```

pub mod category;
pub mod error;
pub mod filter;
pub mod money;
pub mod pricing;
pub mod product;
pub mod results;

pub use error::CommerceError;
pub use filter::CatalogFilter;
pub use money::{Currency, Money};
pub use product::{Product, ProductSource};
pub use results::PaginatedProducts;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::category::{default_category, upstream_category_id};
    pub use crate::error::CommerceError;
    pub use crate::filter::CatalogFilter;
    pub use crate::money::{Currency, Money};
    pub use crate::pricing::{list_price_cop, IVA_RATE};
    pub use crate::product::{Product, ProductSource};
    pub use crate::results::PaginatedProducts;
}
