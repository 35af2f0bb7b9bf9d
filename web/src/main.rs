use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{Dashboard, Home, Signin, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signin")]
    Signin {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One client for the whole app; the session store behind it is shared
    // with the auth and theme layers.
    let client = use_context_provider(ui::make_client);
    let mut theme = use_context_provider(|| Signal::new(ui::Theme::default()));

    use_effect(move || {
        ui::load_theme_from_storage(client.session(), &mut theme);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
