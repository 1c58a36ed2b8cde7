//! In-memory time-based caches for the Vitrina hybrid catalog.
//!
//! Two shapes cover every cache the catalog core needs:
//!
//! - [`MemoCell`]: a single memoized value with an expiry (bearer token,
//!   exchange rate)
//! - [`TtlCache`]: a keyed map of results with lazy per-entry expiry
//!   (catalog query results)
//!
//! Both are process-wide, lock-guarded, and replaced wholesale on refresh.
//! Cache operations cannot fail; degradation on a miss is the caller's
//! concern.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use vitrina_cache::MemoCell;
//!
//! let cell: MemoCell<f64> = MemoCell::new();
//! cell.store(4212.5, Duration::from_secs(3600));
//! assert_eq!(cell.get(), Some(4212.5));
//! ```

pub mod memo;
pub mod ttl;

pub use memo::MemoCell;
pub use ttl::TtlCache;
