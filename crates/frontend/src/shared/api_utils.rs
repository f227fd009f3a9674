//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and auth headers.

use super::config::BACKEND_PORT;

/// Derive the API base URL from the current window location
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com:8080"
/// - Empty string if window is not available
pub fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Join a base URL and a path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Value of the `Authorization` header for a bearer token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8080", "/empresa/perfil"),
            "http://localhost:8080/empresa/perfil"
        );
        assert_eq!(
            join_url("https://api.example.com/api/", "empresa/vantagens/3"),
            "https://api.example.com/api/empresa/vantagens/3"
        );
        assert_eq!(join_url("http://h:1/", ""), "http://h:1");
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }
}
