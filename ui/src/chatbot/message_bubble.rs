use dioxus::prelude::*;

use super::{ChatMessage, Role};

/// A single chat turn, right-aligned for the user, left for the assistant.
#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let is_user = message.role == Role::User;

    let wrapper = if is_user {
        "flex justify-end"
    } else {
        "flex justify-start"
    };
    let bubble = if is_user {
        "max-w-[80%] px-4 py-2.5 rounded-2xl rounded-br-sm bg-emerald-600 text-white text-sm whitespace-pre-wrap"
    } else {
        "max-w-[80%] px-4 py-2.5 rounded-2xl rounded-bl-sm bg-slate-100 dark:bg-slate-700 text-slate-800 dark:text-slate-100 text-sm whitespace-pre-wrap"
    };
    let timestamp = message.timestamp.format("%H:%M");

    rsx! {
        div {
            class: "{wrapper}",
            div {
                class: "flex flex-col gap-0.5",
                div { class: "{bubble}", "{message.content}" }
                span {
                    class: if is_user {
                        "text-[0.65rem] text-slate-400 dark:text-slate-500 self-end"
                    } else {
                        "text-[0.65rem] text-slate-400 dark:text-slate-500"
                    },
                    "{timestamp}"
                }
            }
        }
    }
}
