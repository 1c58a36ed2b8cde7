//! Request-rate governance for the Vitrina API endpoints.
//!
//! A per-client sliding-window limiter backed by in-process memory only.
//! Each request is recorded first and the bucket checked after, so with a
//! quota of N the (N+1)-th request inside the window is the first one
//! rejected. A process restart resets all counters; horizontal scaling
//! needs externalized state and is out of scope.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use vitrina_security::{RateGovernor, RateLimitConfig, too_many_requests_response};
//!
//! let governor = RateGovernor::new();
//! let config = RateLimitConfig::new(10, Duration::from_secs(60));
//!
//! if governor.check(request.headers(), &config) {
//!     return too_many_requests_response(config.window);
//! }
//! ```

pub mod identity;
pub mod limits;
pub mod response;

pub use identity::{client_identity, UNKNOWN_CLIENT};
pub use limits::{LimitsError, RateGovernor, RateLimitConfig};
pub use response::too_many_requests_response;
