//! Syscom distributor API client for the Vitrina hybrid catalog.
//!
//! Wraps the distributor's REST API behind operations the catalog core
//! needs:
//!
//! - **Token manager**: OAuth2 client-credentials exchange with a cached
//!   bearer token (refreshed 60 s before expiry)
//! - **Exchange rate**: the TRM used to convert USD list prices to COP,
//!   cached for an hour with a hardcoded fallback
//! - **Listing**: paginated product search mapped into the unified
//!   [`Product`](vitrina_commerce::Product) shape
//! - **Quotes and stock checks**: cart quoting without ordering, and
//!   single-item availability lookups
//!
//! Every operation degrades instead of surfacing upstream failures: a
//! missing token yields `None`, a failed rate fetch yields the fallback,
//! and quote/stock calls return unsuccessful outcomes.

pub mod auth;
pub mod client;
pub mod error;
pub mod exchange;
pub mod quote;
pub mod wire;

pub use auth::{FeedCredentials, TokenManager};
pub use client::{FeedEndpoints, SyscomClient};
pub use error::FeedError;
pub use exchange::{ExchangeRateProvider, FALLBACK_RATE};
pub use quote::{QuoteItem, QuoteOutcome, StockStatus};
