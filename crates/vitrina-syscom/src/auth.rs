//! OAuth2 client-credentials token management.

use std::env;
use std::time::Duration;

use tracing::{debug, warn};
use vitrina_cache::MemoCell;

use crate::error::FeedError;
use crate::wire::AuthResponse;

/// Refresh headroom: a token is treated as expired this long before the
/// upstream says it is, so in-flight requests never ride a dying token.
const TOKEN_HEADROOM_SECS: u64 = 60;

/// Distributor API credentials.
///
/// Either field may be absent; an incomplete pair disables the feed
/// client's authenticated operations rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct FeedCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl FeedCredentials {
    /// Create credentials from a known id/secret pair.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
        }
    }

    /// Explicitly absent credentials.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Read `SYSCOM_CLIENT_ID` / `SYSCOM_CLIENT_SECRET` from the
    /// environment. Absent variables are logged, not fatal.
    pub fn from_env() -> Self {
        let client_id = env::var("SYSCOM_CLIENT_ID").ok();
        let client_secret = env::var("SYSCOM_CLIENT_SECRET").ok();

        if client_id.is_none() || client_secret.is_none() {
            warn!("distributor credentials not fully configured; external feed will stay empty");
        }

        Self {
            client_id,
            client_secret,
        }
    }

    /// Check whether both halves are present.
    pub fn is_complete(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

/// Cache TTL for a token the upstream says lives `expires_in` seconds.
fn token_ttl(expires_in: u64) -> Duration {
    Duration::from_secs(expires_in.saturating_sub(TOKEN_HEADROOM_SECS))
}

/// Process-wide bearer-token cache with lazy refresh.
///
/// `token` never errors: missing credentials or a failed exchange yield
/// `None` so callers can degrade.
#[derive(Debug)]
pub struct TokenManager {
    credentials: FeedCredentials,
    http: reqwest::Client,
    auth_url: String,
    cache: MemoCell<String>,
}

impl TokenManager {
    /// Create a manager exchanging against `auth_url`.
    pub fn new(credentials: FeedCredentials, http: reqwest::Client, auth_url: String) -> Self {
        Self {
            credentials,
            http,
            auth_url,
            cache: MemoCell::new(),
        }
    }

    /// Get a valid bearer token, from cache or a fresh exchange.
    pub async fn token(&self) -> Option<String> {
        if let Some(token) = self.cache.get() {
            return Some(token);
        }

        let (client_id, client_secret) =
            match (&self.credentials.client_id, &self.credentials.client_secret) {
                (Some(id), Some(secret)) => (id.as_str(), secret.as_str()),
                _ => {
                    debug!("skipping token exchange: credentials not configured");
                    return None;
                }
            };

        match self.exchange(client_id, client_secret).await {
            Ok(auth) => {
                self.cache
                    .store(auth.access_token.clone(), token_ttl(auth.expires_in));
                Some(auth.access_token)
            }
            Err(error) => {
                warn!(%error, "token exchange failed");
                None
            }
        }
    }

    async fn exchange(&self, client_id: &str, client_secret: &str) -> Result<AuthResponse, FeedError> {
        let params = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http
            .post(&self.auth_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FeedError::Http {
                status,
                url: self.auth_url.clone(),
            });
        }

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))
    }
}
