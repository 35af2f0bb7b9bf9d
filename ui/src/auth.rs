//! Authentication context and hooks for the UI.

use api::User;
use dioxus::prelude::*;

/// Authentication state for the application.
///
/// `loading` is true only during the startup restore; afterwards the state
/// is either anonymous (`user == None`) or authenticated.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = crate::use_api();
    let mut auth_state = use_signal(AuthState::default);

    // Restore the session from the stored token on mount. Purely local:
    // expiry and decode are checked without a network round trip, and a
    // stale or undecodable token is removed in the process.
    use_effect(move || {
        let user = api::auth::current_user(client.session());
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
///
/// Signing out never fails: the backend notification is best-effort and the
/// local session is cleared unconditionally.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = crate::use_api();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            api::auth::sign_out(&client).await;
            auth_state.set(AuthState {
                user: None,
                loading: false,
            });
            // Redirect to sign-in
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/signin");
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
