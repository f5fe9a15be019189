//! Cross-origin access policy.
//!
//! Every inbound request passes through this layer before routing. The
//! policy admits the two production frontends plus any-port loopback
//! origins for local development, mirrors requested methods and headers
//! (required because credentials are allowed), and caches preflight
//! decisions for an hour.
//!
//! There is deliberately no CSRF protection and no authorization check
//! anywhere in the server: the API carries no session state, so every
//! request is permitted once CORS is satisfied. Disallowed origins are
//! not failed server-side; their responses simply carry no allow
//! headers, which is what makes the browser block them.

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origin patterns admitted by the policy.
///
/// A trailing `:*` matches any explicit port on that scheme and host.
pub const ALLOWED_ORIGIN_PATTERNS: [&str; 6] = [
    "https://christmas-treeee.netlify.app",
    "https://christmas-tree-esnh.onrender.com",
    "http://localhost:*",
    "http://127.0.0.1:*",
    "https://localhost:*",
    "https://127.0.0.1:*",
];

/// Preflight cache duration advertised via `Access-Control-Max-Age`.
pub const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Whether a single pattern admits the given origin.
fn matches_pattern(origin: &str, pattern: &str) -> bool {
    match pattern.strip_suffix(":*") {
        Some(base) => origin
            .strip_prefix(base)
            .and_then(|rest| rest.strip_prefix(':'))
            .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())),
        None => origin == pattern,
    }
}

/// Whether the access policy admits the given `Origin` header value.
pub fn origin_allowed(origin: &str) -> bool {
    ALLOWED_ORIGIN_PATTERNS
        .iter()
        .any(|pattern| matches_pattern(origin, pattern))
}

/// Build the CORS middleware implementing the access policy.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _request_parts| {
                origin.to_str().map(origin_allowed).unwrap_or(false)
            },
        ))
        // Wildcard methods/headers cannot be combined with credentials;
        // mirroring the request admits everything the client asks for.
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
