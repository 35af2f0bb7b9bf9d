//! Page components binding the shared views to the router.

use dioxus::prelude::*;

use crate::Route;

/// Landing page. Signed-in visitors go straight to the dashboard.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let auth = ui::use_auth();

    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        ui::views::Home {
            on_get_started: move |_| {
                nav.push(Route::Signup {});
            },
            on_sign_in: move |_| {
                nav.push(Route::Signin {});
            },
        }
    }
}

#[component]
pub fn Signin() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::Signin {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_navigate_signup: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::Signup {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_navigate_signin: move |_| {
                nav.push(Route::Signin {});
            },
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::Dashboard {
            on_unauthenticated: move |_| {
                nav.replace(Route::Signin {});
            },
        }
    }
}
