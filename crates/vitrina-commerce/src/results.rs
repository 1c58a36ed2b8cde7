//! Paginated result container.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A page of blended catalog results.
///
/// `total_pages` reflects the distributor feed's own page count when the
/// feed participates; local items ride along on page 1 without affecting
/// it. Page 1 may therefore hold more items than later pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedProducts {
    /// The items on this page.
    pub products: Vec<Product>,
    /// Total page count as reported by the driving source.
    pub total_pages: i64,
    /// The page these results are for (1-indexed).
    pub current_page: i64,
}

impl PaginatedProducts {
    /// Create a result page.
    pub fn new(products: Vec<Product>, total_pages: i64, current_page: i64) -> Self {
        Self {
            products,
            total_pages,
            current_page,
        }
    }

    /// An empty result for the given page, reporting zero pages.
    pub fn empty(current_page: i64) -> Self {
        Self {
            products: Vec::new(),
            total_pages: 0,
            current_page,
        }
    }

    /// Wrap a local-only result: one page when anything matched, zero
    /// pages otherwise.
    pub fn local_only(products: Vec<Product>, current_page: i64) -> Self {
        let total_pages = if products.is_empty() { 0 } else { 1 };
        Self {
            products,
            total_pages,
            current_page,
        }
    }

    /// Check if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}
