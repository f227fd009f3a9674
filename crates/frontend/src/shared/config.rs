//! Portal configuration
//!
//! The API base URL can be pinned at build time:
//! `PERK_PORTAL_API_URL=https://api.example.com trunk build --release`.
//! Without it the backend is assumed on port 8080 of the host serving the page.

use once_cell::sync::Lazy;

/// Default port of the company API
pub const BACKEND_PORT: u16 = 8080;

/// localStorage key holding the bearer token written by the login page
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_base: String,
    pub token_key: String,
}

static CONFIG: Lazy<PortalConfig> = Lazy::new(|| {
    let config = PortalConfig::resolve(option_env!("PERK_PORTAL_API_URL"));
    log::debug!("portal config: {:?}", config);
    config
});

impl PortalConfig {
    /// Process-wide configuration, resolved on first use
    pub fn get() -> &'static PortalConfig {
        &CONFIG
    }

    /// Build the configuration from an optional pinned API URL
    pub fn resolve(pinned_api_url: Option<&str>) -> Self {
        let api_base = match pinned_api_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => super::api_utils::location_api_base(),
        };
        Self {
            api_base,
            token_key: TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_api_url() {
        let config = PortalConfig::resolve(Some(" https://api.moeda.example/ "));
        assert_eq!(config.api_base, "https://api.moeda.example");
        assert_eq!(config.token_key, "token");
    }
}
