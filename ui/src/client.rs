//! Shared API-client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`store::LocalStorage`], with the 401 handler wired to navigate to the
//!   sign-in screen.
//! - **Native** (tests, tooling): in-memory via [`store::MemoryStore`].

use dioxus::prelude::*;

/// Create a platform-appropriate API client.
pub fn make_client() -> api::ApiClient {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let session = store::SessionStore::new(store::LocalStorage::new());
        api::ApiClient::new(session).with_unauthorized_hook(|| {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/signin");
            }
        })
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        api::ApiClient::new(store::SessionStore::new(store::MemoryStore::new()))
    }
}

/// Get the API client provided at the application root.
pub fn use_api() -> api::ApiClient {
    use_context::<api::ApiClient>()
}
