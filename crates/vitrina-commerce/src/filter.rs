//! Catalog query filters.

use serde::{Deserialize, Serialize};

/// Filter options for a catalog query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Free-text search over name/description/category.
    pub search: Option<String>,
    /// Display-category filter.
    pub category: Option<String>,
    /// Requested page, 1-indexed.
    #[serde(default = "default_page")]
    page: i64,
}

fn default_page() -> i64 {
    1
}

impl CatalogFilter {
    /// Create an unfiltered query for page 1.
    pub fn new() -> Self {
        Self {
            search: None,
            category: None,
            page: 1,
        }
    }

    /// Set the search term. Empty strings are treated as no search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if !search.is_empty() {
            self.search = Some(search);
        }
        self
    }

    /// Set the category filter. Empty strings are treated as no filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category.is_empty() {
            self.category = Some(category);
        }
        self
    }

    /// Set the requested page. Values below 1 are clamped to 1.
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Get the requested page (always >= 1, whatever was deserialized).
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// Check whether neither search nor category is set.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }

    /// Canonical cache key for this filter.
    ///
    /// Two filters produce the same key exactly when they describe the
    /// same query.
    pub fn cache_key(&self) -> String {
        format!(
            "search={}|category={}|page={}",
            self.search.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or(""),
            self.page(),
        )
    }
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_clamped_to_one() {
        assert_eq!(CatalogFilter::new().with_page(0).page(), 1);
        assert_eq!(CatalogFilter::new().with_page(-3).page(), 1);
        assert_eq!(CatalogFilter::new().with_page(4).page(), 4);
    }

    #[test]
    fn test_empty_strings_are_no_filters() {
        let f = CatalogFilter::new().with_search("").with_category("");
        assert!(f.is_unfiltered());
    }

    #[test]
    fn test_cache_key_is_canonical() {
        let a = CatalogFilter::new().with_search("cámara").with_page(2);
        let b = CatalogFilter::new().with_page(2).with_search("cámara");
        assert_eq!(a.cache_key(), b.cache_key());

        let c = CatalogFilter::new().with_search("cámara").with_page(3);
        assert_ne!(a.cache_key(), c.cache_key());
    }

    #[test]
    fn test_deserialized_page_is_still_clamped() {
        let f: CatalogFilter = serde_json::from_str(r#"{ "search": null, "category": null }"#).unwrap();
        assert_eq!(f.page(), 1);

        let f: CatalogFilter =
            serde_json::from_str(r#"{ "search": null, "category": null, "page": 0 }"#).unwrap();
        assert_eq!(f.page(), 1);
        assert!(f.cache_key().ends_with("page=1"));
    }

    #[test]
    fn test_cache_key_distinguishes_fields() {
        let by_search = CatalogFilter::new().with_search("Redes");
        let by_category = CatalogFilter::new().with_category("Redes");
        assert_ne!(by_search.cache_key(), by_category.cache_key());
    }
}
