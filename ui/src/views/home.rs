use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};

/// Landing hero with calls to action.
#[component]
pub fn Home(on_get_started: EventHandler<()>, on_sign_in: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center px-6 bg-white dark:bg-slate-900 text-center",

            span {
                class: "px-3 py-1 rounded-full bg-emerald-50 dark:bg-emerald-900/30 text-emerald-700 dark:text-emerald-300 text-xs font-medium mb-6",
                "Now with an AI assistant"
            }

            h1 {
                class: "text-4xl md:text-5xl font-bold text-slate-900 dark:text-slate-50 max-w-2xl mb-4",
                "Your tasks, organized."
            }

            p {
                class: "text-lg text-slate-600 dark:text-slate-400 max-w-xl mb-10",
                "Track what matters, check things off, and let the built-in "
                "assistant add or complete tasks for you in plain language."
            }

            div {
                class: "flex items-center gap-3",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Lg,
                    onclick: move |_| on_get_started.call(()),
                    "Get started"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Lg,
                    onclick: move |_| on_sign_in.call(()),
                    "Sign in"
                }
            }
        }
    }
}
