//! TRM (USD → COP exchange rate) provider.

use std::time::Duration;

use tracing::warn;
use vitrina_cache::MemoCell;

use crate::error::FeedError;
use crate::wire::ExchangeRateResponse;

/// Rate used when no fresh or stale value is available. Correctness is
/// sacrificed for availability: a price can always be computed.
pub const FALLBACK_RATE: f64 = 4200.0;

/// How long a fetched rate stays fresh.
const RATE_TTL: Duration = Duration::from_secs(60 * 60);

/// Process-wide exchange-rate cache with lazy hourly refresh.
#[derive(Debug)]
pub struct ExchangeRateProvider {
    http: reqwest::Client,
    base_url: String,
    cache: MemoCell<f64>,
}

impl ExchangeRateProvider {
    /// Create a provider fetching from `{base_url}/tipocambio`.
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url,
            cache: MemoCell::new(),
        }
    }

    /// Current TRM.
    ///
    /// Never errors: without a token, or when the fetch fails, the last
    /// known value is returned, then [`FALLBACK_RATE`].
    pub async fn rate(&self, token: Option<&str>) -> f64 {
        if let Some(rate) = self.cache.get() {
            return rate;
        }

        let Some(token) = token else {
            return self.cache.stale().unwrap_or(FALLBACK_RATE);
        };

        match self.fetch(token).await {
            Ok(rate) => {
                self.cache.store(rate, RATE_TTL);
                rate
            }
            Err(error) => {
                warn!(%error, "exchange-rate fetch failed");
                self.cache.stale().unwrap_or(FALLBACK_RATE)
            }
        }
    }

    async fn fetch(&self, token: &str) -> Result<f64, FeedError> {
        let url = format!("{}/tipocambio", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FeedError::Http { status, url });
        }

        let body = response
            .json::<ExchangeRateResponse>()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))?;

        body.rate()
            .ok_or_else(|| FeedError::Deserialization("no usable rate field".to_string()))
    }
}
