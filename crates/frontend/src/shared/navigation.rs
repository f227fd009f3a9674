//! Page navigation
//!
//! The login page and the perk list belong to the surrounding dashboard, so
//! leaving the editor is a full document navigation rather than a router push.

/// Something that can move the user to another page
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigates through `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigating to {}", path);
        let Some(window) = web_sys::window() else {
            log::error!("navigation to {} failed: no window", path);
            return;
        };
        if let Err(e) = window.location().assign(path) {
            log::error!("navigation to {} failed: {:?}", path, e);
        }
    }
}
