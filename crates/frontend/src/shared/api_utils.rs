//! API utilities for frontend-backend communication
//!
//! Builds API URLs from the current window location and the client config.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses the page's protocol and host with the configured backend port,
/// e.g. "http://localhost:3000". Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api.port)
}

/// Join the configured API prefix with an endpoint path
///
/// ```ignore
/// assert_eq!(api_path("/api", "price-tiers/"), "/api/price-tiers/");
/// ```
pub fn api_path(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a full API URL from an endpoint path relative to the API prefix
///
/// ```ignore
/// let url = api_url("product-tier-prices/7/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), api_path(&config().api.prefix, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path_joins_slashes() {
        assert_eq!(api_path("/api", "price-tiers/"), "/api/price-tiers/");
        assert_eq!(api_path("/api/", "/price-tiers/"), "/api/price-tiers/");
        assert_eq!(
            api_path("/api/v1", "product-tier-prices/?product=3"),
            "/api/v1/product-tier-prices/?product=3"
        );
    }
}
