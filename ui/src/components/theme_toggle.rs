use dioxus::prelude::*;

use crate::icons::{FaCircleHalfStroke, FaMoon, FaSun};
use crate::{store_theme, use_theme, Theme};
use crate::Icon;

/// Cycles the theme preference: light -> dark -> system.
#[component]
pub fn ThemeToggle() -> Element {
    let client = crate::use_api();
    let mut theme = use_theme();
    let current = theme();

    let onclick = move |_| {
        let next = theme().cycled();
        store_theme(client.session(), next);
        theme.set(next);
    };

    rsx! {
        button {
            class: "p-2.5 rounded-xl text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700 transition-colors",
            title: match current {
                Theme::Light => "Theme: light",
                Theme::Dark => "Theme: dark",
                Theme::System => "Theme: system",
            },
            aria_label: "Toggle theme",
            onclick: onclick,
            match current {
                Theme::Light => rsx! { Icon { icon: FaSun, width: 16, height: 16 } },
                Theme::Dark => rsx! { Icon { icon: FaMoon, width: 16, height: 16 } },
                Theme::System => rsx! { Icon { icon: FaCircleHalfStroke, width: 16, height: 16 } },
            }
        }
    }
}
