//! API utilities for frontend-backend communication

use crate::shared::config::ApiConfig;

/// Base URL for API requests.
///
/// An explicit `base_url` wins. Otherwise the URL is built from the current
/// window location with the configured backend port. Empty when no window
/// is available.
pub fn api_base(config: &ApiConfig) -> String {
    if !config.base_url.trim().is_empty() {
        return config.base_url.trim().trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Joins the API base and a resource path such as `/api/youtube/channels`.
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_wins() {
        let config = ApiConfig {
            base_url: " https://api.example.com/ ".to_string(),
            port: 1,
        };
        assert_eq!(api_base(&config), "https://api.example.com");
    }

    #[test]
    fn test_api_url_joins_once() {
        assert_eq!(
            api_url("http://h:3000/", "/api/youtube/videos"),
            "http://h:3000/api/youtube/videos"
        );
        assert_eq!(api_url("", "/api/x"), "/api/x");
    }
}
