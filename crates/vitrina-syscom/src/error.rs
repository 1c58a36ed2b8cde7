//! Feed client error types.

use thiserror::Error;

/// Errors from distributor API calls.
///
/// These never escape the catalog core's public operations; callers
/// convert them to empty results or fallback values.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Missing distributor credentials")]
    MissingCredentials,
}
