//! Window-level navigation that bypasses the client router.
//!
//! Requires a browser environment; on the server these are no-ops.

/// Full-page load of `url` (external identity providers, post-logout reset).
pub fn assign_location(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("Failed to redirect to {url}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
