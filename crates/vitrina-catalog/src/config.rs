//! Catalog configuration.

use std::env;

use tracing::info;
use vitrina_syscom::FeedCredentials;

/// Catalog configuration, environment-derived in deployment.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Master switch for the distributor feed. When off, queries return
    /// local results only and no upstream call is ever made.
    pub external_feed_enabled: bool,
    /// Distributor API credentials.
    pub credentials: FeedCredentials,
}

impl CatalogConfig {
    /// Read configuration from the environment.
    ///
    /// `ENABLE_SYSCOM=true` turns the feed on; anything else (or an
    /// absent variable) leaves it off.
    pub fn from_env() -> Self {
        let flag = env::var("ENABLE_SYSCOM").unwrap_or_else(|_| "false".to_string());
        let external_feed_enabled = flag == "true";

        if !external_feed_enabled {
            info!("external feed disabled; serving the local catalog only");
        }

        Self {
            external_feed_enabled,
            credentials: FeedCredentials::from_env(),
        }
    }

    /// A configuration with the feed off and no credentials.
    pub fn local_only() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_only_config() {
        let config = CatalogConfig::local_only();
        assert!(!config.external_feed_enabled);
        assert!(!config.credentials.is_complete());
    }
}
