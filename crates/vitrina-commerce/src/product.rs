//! The unified product view.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Where a product record came from.
///
/// Assigned at construction and never mutated; it determines how the id
/// and price were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductSource {
    /// Curated record from the service's own store.
    #[default]
    Local,
    /// Live record from the distributor feed.
    External,
}

impl ProductSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSource::Local => "local",
            ProductSource::External => "external",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "local" => Some(ProductSource::Local),
            "external" => Some(ProductSource::External),
            _ => None,
        }
    }
}

/// A product in the blended catalog.
///
/// External items carry a `sys_`-prefixed id and a price already converted
/// to COP with tax applied; local items keep whatever id and price the
/// store holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Opaque identifier (`sys_<distributor id>` for external items).
    pub id: String,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Model designation.
    pub model: String,
    /// Display category.
    pub category: String,
    /// List price in COP, tax included.
    pub price: Money,
    /// Units in stock. External items with zero stock are filtered out
    /// before they reach callers; local items are never stock-filtered.
    pub stock: i64,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// URL-friendly slug.
    pub slug: String,
    /// Origin of this record.
    pub source: ProductSource,
    /// Product page on the distributor's site (external items only).
    pub external_url: Option<String>,
}

impl Product {
    /// Create a locally-sourced product.
    pub fn local(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            brand: String::new(),
            model: String::new(),
            category: String::new(),
            price,
            stock: 0,
            image_url: None,
            slug: slug.into(),
            source: ProductSource::Local,
            external_url: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the display category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Check if this record came from the distributor feed.
    pub fn is_external(&self) -> bool {
        self.source == ProductSource::External
    }

    /// Check if the item has stock on hand.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_local_product() {
        let p = Product::local("lic-001", "Kaspersky EDR", "kaspersky-edr", Money::cop(250_000))
            .with_category("Software")
            .with_stock(10);

        assert_eq!(p.source, ProductSource::Local);
        assert!(!p.is_external());
        assert!(p.is_in_stock());
        assert!(p.external_url.is_none());
    }

    #[test]
    fn test_source_roundtrip() {
        assert_eq!(ProductSource::parse("external"), Some(ProductSource::External));
        assert_eq!(ProductSource::parse("LOCAL"), Some(ProductSource::Local));
        assert_eq!(ProductSource::parse("remote"), None);
        assert_eq!(ProductSource::External.as_str(), "external");
    }

    #[test]
    fn test_zero_stock_local_is_still_listed() {
        let p = Product::local("srv-001", "Auditoría de red", "auditoria-red", Money::cop(800_000));
        assert!(!p.is_in_stock());
        // Local items are curated; stock never hides them.
        assert_eq!(p.source, ProductSource::Local);
    }
}
