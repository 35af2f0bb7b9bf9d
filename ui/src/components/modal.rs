use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or pressing Escape triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30 backdrop-blur-sm",
            style: "z-index: 2000",
            tabindex: 0,
            autofocus: true,
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white dark:bg-slate-800 rounded-2xl shadow-2xl max-w-md w-full mx-4",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Titled modal dialog built on [`ModalOverlay`].
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "flex items-center justify-between px-6 pt-5 pb-3 border-b border-slate-100 dark:border-slate-700",
                h2 {
                    class: "text-lg font-semibold text-slate-900 dark:text-slate-50",
                    "{title}"
                }
                button {
                    class: "p-1.5 rounded-lg text-slate-400 hover:text-slate-600 dark:hover:text-slate-300 transition-colors",
                    aria_label: "Close dialog",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            div {
                class: "px-6 py-5",
                {children}
            }
        }
    }
}
