use crate::shared::config::PortalConfig;
use web_sys::window;

/// Read-only access to the bearer token saved by the login page
pub trait TokenSource {
    fn access_token(&self) -> Option<String>;
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// An empty stored value counts as no token
pub fn usable_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.is_empty())
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    let key = &PortalConfig::get().token_key;
    usable_token(get_local_storage()?.get_item(key).ok()?)
}

/// Token source backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

impl TokenSource for LocalStorageTokens {
    fn access_token(&self) -> Option<String> {
        get_access_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_token() {
        assert_eq!(usable_token(Some("eyJ.abc".into())), Some("eyJ.abc".to_string()));
        assert_eq!(usable_token(Some(String::new())), None);
        assert_eq!(usable_token(None), None);
    }
}
