//! Local product store seam.

use async_trait::async_trait;
use vitrina_commerce::error::CommerceError;
use vitrina_commerce::product::Product;

/// Query capability over the locally curated product set.
///
/// Matching is case-insensitive substring containment: the search term
/// against name, description, or category; the category filter against
/// the category field.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn search(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, CommerceError>;
}

/// In-memory store backing seed catalogs and tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
}

impl InMemoryStore {
    /// Create a store over a fixed product set.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    fn matches(product: &Product, search: Option<&str>, category: Option<&str>) -> bool {
        if let Some(term) = search {
            let term = term.to_lowercase();
            let hit = product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
                || product.category.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if let Some(category_term) = category {
            let category_term = category_term.to_lowercase();
            if !product.category.to_lowercase().contains(&category_term) {
                return false;
            }
        }

        true
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn search(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, CommerceError> {
        Ok(self
            .products
            .iter()
            .filter(|p| Self::matches(p, search, category))
            .cloned()
            .collect())
    }
}
