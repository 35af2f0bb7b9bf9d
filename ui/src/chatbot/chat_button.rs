use dioxus::prelude::*;

use crate::icons::{FaComment, FaXmark};
use crate::Icon;

use super::use_chat;

/// Floating action button that toggles the chat panel.
#[component]
pub fn ChatButton() -> Element {
    let mut chat = use_chat();
    let is_open = chat.read().is_open;

    rsx! {
        button {
            class: "chat-fab fixed bottom-6 right-6 z-50 w-14 h-14 rounded-full bg-gradient-to-br from-emerald-500 to-emerald-700 text-white shadow-lg flex items-center justify-center hover:scale-105 transition-transform duration-200",
            aria_label: if is_open { "Close chat" } else { "Open AI chat" },
            onclick: move |_| chat.with_mut(|state| state.toggle()),
            if is_open {
                Icon { icon: FaXmark, width: 20, height: 20 }
            } else {
                Icon { icon: FaComment, width: 20, height: 20 }
            }
        }
    }
}
