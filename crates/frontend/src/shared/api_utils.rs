//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Base URL baked in at build time, e.g. `VENDAS_API_BASE=http://localhost:5000 trunk build`
const BUILD_API_BASE: Option<&str> = option_env!("VENDAS_API_BASE");

/// Get the base URL for API requests
///
/// Returns the value of `VENDAS_API_BASE` captured at compile time with any
/// trailing slash removed. When the variable is absent the empty string is
/// returned and requests go to the page's own origin.
pub fn api_base() -> String {
    normalize_base(BUILD_API_BASE.unwrap_or_default())
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
