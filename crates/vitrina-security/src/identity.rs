//! Client identification from proxy headers.

use http::HeaderMap;

/// Bucket shared by every request whose client cannot be identified.
///
/// Unidentifiable clients therefore share one quota. Known limitation:
/// behind a misconfigured proxy the whole site falls into this bucket.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Resolve the client identity for rate limiting.
///
/// Trust order: `x-forwarded-for` (first entry), `x-real-ip`,
/// `cf-connecting-ip`. Falls back to [`UNKNOWN_CLIENT`].
pub fn client_identity(headers: &HeaderMap) -> String {
    forwarded_for(headers)
        .or_else(|| header_value(headers, "x-real-ip"))
        .or_else(|| header_value(headers, "cf-connecting-ip"))
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// First entry of a comma-separated `x-forwarded-for` value.
fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get("x-forwarded-for")?.to_str().ok()?;
    let first = raw.split(',').next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
