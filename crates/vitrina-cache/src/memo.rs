//! Single-value memo cell with expiry.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A memoized value that is valid until an expiry instant.
///
/// The cell starts empty, is populated lazily on first need, and is
/// replaced wholesale on refresh. [`MemoCell::stale`] exposes the last
/// stored value regardless of expiry, for callers that prefer a stale
/// value over none at all.
#[derive(Debug, Default)]
pub struct MemoCell<T: Clone> {
    inner: Mutex<Option<Entry<T>>>,
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    expires_at: Instant,
}

impl<T: Clone> MemoCell<T> {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Get the value if it has not expired.
    pub fn get(&self) -> Option<T> {
        let guard = self.inner.lock().unwrap();
        guard
            .as_ref()
            .filter(|e| Instant::now() < e.expires_at)
            .map(|e| e.value.clone())
    }

    /// Get the last stored value even if it has expired.
    pub fn stale(&self) -> Option<T> {
        let guard = self.inner.lock().unwrap();
        guard.as_ref().map(|e| e.value.clone())
    }

    /// Store a value valid for `ttl` from now.
    pub fn store(&self, value: T, ttl: Duration) {
        let mut guard = self.inner.lock().unwrap();
        *guard = Some(Entry {
            value,
            expires_at: Instant::now() + ttl,
        });
    }

    /// Drop the stored value.
    pub fn clear(&self) {
        let mut guard = self.inner.lock().unwrap();
        *guard = None;
    }
}
