//! Browser-level navigation and alerts.
//!
//! Successful form submissions leave the single-page app through a full page
//! load, the same as following a plain link. Off the browser these calls only
//! log.

/// Home route.
pub const HOME: &str = "/";
/// Login route, the target of every "please log in" prompt.
pub const LOGIN: &str = "/login";

/// Origin of the current page, e.g. `https://clubs.example.edu`.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Full-page navigation to `path`.
pub fn hard_redirect(path: &str) {
    tracing::debug!("Redirecting to {}", path);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!("Failed to navigate to {}: {:?}", path, e);
            }
        }
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("{}", message);
    }
}
