//! Sliding-window rate limiter.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::identity::client_identity;

/// Minimum interval between global sweeps of idle buckets.
const SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Rate limit configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests allowed inside the window.
    pub max_requests: u32,
    /// Trailing window length.
    pub window: Duration,
}

impl RateLimitConfig {
    /// Create a new configuration.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.max_requests == 0 {
            return Err(LimitsError::InvalidLimit("max_requests cannot be 0".into()));
        }
        if self.window.is_zero() {
            return Err(LimitsError::InvalidLimit("window cannot be zero".into()));
        }
        Ok(())
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 20,
            window: Duration::from_secs(60),
        }
    }
}

/// Errors from limit configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LimitsError {
    #[error("invalid limit configuration: {0}")]
    InvalidLimit(String),
}

/// Per-client sliding-window request limiter.
///
/// Buckets hold the timestamps of recent requests and are pruned on every
/// touch, so a bucket only ever contains timestamps inside the window. A
/// global sweep runs opportunistically (at most every five minutes) to
/// also bound memory for idle clients that stopped sending requests.
#[derive(Debug)]
pub struct RateGovernor {
    buckets: Mutex<HashMap<String, Vec<Instant>>>,
    last_sweep: Mutex<Instant>,
}

impl RateGovernor {
    /// Create a governor with no recorded requests.
    pub fn new() -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            last_sweep: Mutex::new(Instant::now()),
        }
    }

    /// Record the request carried by `headers` and decide whether to
    /// reject it. Returns `true` when the client has exceeded its quota.
    pub fn check(&self, headers: &HeaderMap, config: &RateLimitConfig) -> bool {
        let client = client_identity(headers);
        self.check_client(&client, config)
    }

    /// Record a request for an already-resolved client identity.
    pub fn check_client(&self, client: &str, config: &RateLimitConfig) -> bool {
        self.record_at(client, config, Instant::now())
    }

    /// Convenience wrapper taking the whole request.
    pub fn check_request<T>(&self, request: &http::Request<T>, config: &RateLimitConfig) -> bool {
        self.check(request.headers(), config)
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.buckets.lock().unwrap().len()
    }

    fn record_at(&self, client: &str, config: &RateLimitConfig, now: Instant) -> bool {
        self.maybe_sweep(now, config.window);

        let mut buckets = self.buckets.lock().unwrap();
        let bucket = buckets.entry(client.to_string()).or_default();
        bucket.retain(|t| now.saturating_duration_since(*t) < config.window);
        bucket.push(now);
        bucket.len() as u64 > config.max_requests as u64
    }

    fn maybe_sweep(&self, now: Instant, window: Duration) {
        {
            let mut last = self.last_sweep.lock().unwrap();
            if now.saturating_duration_since(*last) < SWEEP_INTERVAL {
                return;
            }
            *last = now;
        }

        let mut buckets = self.buckets.lock().unwrap();
        buckets.retain(|_, timestamps| {
            timestamps.retain(|t| now.saturating_duration_since(*t) < window);
            !timestamps.is_empty()
        });
    }
}

impl Default for RateGovernor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_window_boundary() {
        let governor = RateGovernor::new();
        let config = RateLimitConfig::new(2, Duration::from_millis(1000));
        let base = Instant::now();

        assert!(!governor.record_at("a", &config, at(base, 0)));
        assert!(!governor.record_at("a", &config, at(base, 10)));
        // The third request inside the window is the first rejected one.
        assert!(governor.record_at("a", &config, at(base, 20)));
    }

    #[test]
    fn test_window_expiry() {
        let governor = RateGovernor::new();
        let config = RateLimitConfig::new(1, Duration::from_millis(100));
        let base = Instant::now();

        assert!(!governor.record_at("a", &config, at(base, 0)));
        assert!(governor.record_at("a", &config, at(base, 50)));
        // The first timestamp has aged out; the client is allowed again.
        assert!(!governor.record_at("a", &config, at(base, 150)));
    }

    #[test]
    fn test_client_isolation() {
        let governor = RateGovernor::new();
        let config = RateLimitConfig::new(1, Duration::from_secs(60));
        let base = Instant::now();

        assert!(!governor.record_at("a", &config, at(base, 0)));
        assert!(governor.record_at("a", &config, at(base, 1)));
        // Exhausting "a" leaves "b" untouched.
        assert!(!governor.record_at("b", &config, at(base, 2)));
    }

    #[test]
    fn test_rejected_request_still_counts() {
        let governor = RateGovernor::new();
        let config = RateLimitConfig::new(1, Duration::from_secs(60));
        let base = Instant::now();

        assert!(!governor.record_at("a", &config, at(base, 0)));
        assert!(governor.record_at("a", &config, at(base, 1)));
        assert!(governor.record_at("a", &config, at(base, 2)));
    }

    #[test]
    fn test_sweep_drops_idle_buckets() {
        let governor = RateGovernor::new();
        let config = RateLimitConfig::new(5, Duration::from_secs(60));
        let base = Instant::now();

        governor.record_at("idle-1", &config, at(base, 0));
        governor.record_at("idle-2", &config, at(base, 0));
        assert_eq!(governor.tracked_clients(), 2);

        // Six minutes later a fresh request triggers the sweep; the idle
        // buckets hold only out-of-window timestamps and are deleted.
        governor.record_at("active", &config, at(base, 6 * 60 * 1000));
        assert_eq!(governor.tracked_clients(), 1);
    }

    #[test]
    fn test_sweep_is_rate_limited_itself() {
        let governor = RateGovernor::new();
        let config = RateLimitConfig::new(5, Duration::from_millis(10));
        let base = Instant::now();

        governor.record_at("idle", &config, at(base, 0));
        // Well past the bucket window but inside the sweep interval:
        // the idle bucket survives.
        governor.record_at("active", &config, at(base, 1000));
        assert_eq!(governor.tracked_clients(), 2);
    }

    #[test]
    fn test_check_request_uses_header_identity() {
        let governor = RateGovernor::new();
        let config = RateLimitConfig::new(1, Duration::from_secs(60));
        let request = http::Request::builder()
            .header("x-real-ip", "198.51.100.4")
            .body(())
            .unwrap();

        assert!(!governor.check_request(&request, &config));
        assert!(governor.check_request(&request, &config));
    }

    #[test]
    fn test_config_validation() {
        assert!(RateLimitConfig::new(0, Duration::from_secs(60))
            .validate()
            .is_err());
        assert!(RateLimitConfig::new(10, Duration::ZERO).validate().is_err());
        assert!(RateLimitConfig::default().validate().is_ok());
    }
}
