use dioxus::prelude::*;

use crate::icons::{FaPlus, FaRobot, FaXmark};
use crate::Icon;

use super::{send_message, use_chat, MessageBubble, MessageInput, TypingIndicator};

/// Slide-in chat panel: header, message thread, inline error and input.
#[component]
pub fn ChatPanel() -> Element {
    let client = crate::use_api();
    let mut chat = use_chat();
    let state = chat.read().clone();

    if !state.is_open {
        return rsx! {};
    }

    let handle_send = move |text: String| {
        let client = client.clone();
        spawn(async move {
            send_message(&client, chat, text).await;
        });
    };

    rsx! {
        // Backdrop for small screens
        div {
            class: "fixed inset-0 z-40 bg-black/20 backdrop-blur-sm md:hidden",
            onclick: move |_| chat.with_mut(|state| state.close()),
        }

        div {
            class: "chat-panel fixed z-50 bottom-0 right-0 w-full md:w-[400px] h-[85vh] md:h-[600px] md:max-h-[80vh] md:bottom-24 md:right-6 flex flex-col bg-white/80 dark:bg-slate-800/80 backdrop-blur-xl border border-slate-200 dark:border-slate-700 rounded-t-3xl md:rounded-2xl shadow-2xl overflow-hidden",
            role: "dialog",
            aria_label: "AI Chat",

            // Header
            div {
                class: "flex items-center justify-between px-5 py-4 border-b border-slate-200 dark:border-slate-700",
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "w-10 h-10 rounded-full bg-gradient-to-br from-emerald-400 to-emerald-600 flex items-center justify-center text-white shadow-sm",
                        Icon { icon: FaRobot, width: 18, height: 18 }
                    }
                    div {
                        h2 {
                            class: "font-semibold text-slate-900 dark:text-slate-100",
                            "AI Assistant"
                        }
                        p {
                            class: "text-xs text-slate-500 dark:text-slate-400",
                            "Task management helper"
                        }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "p-2 rounded-lg text-slate-400 hover:text-slate-600 dark:text-slate-500 dark:hover:text-slate-300 transition-colors",
                        title: "New conversation",
                        onclick: move |_| chat.with_mut(|state| state.clear_conversation()),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                    }
                    button {
                        class: "p-2 rounded-lg text-slate-400 hover:text-slate-600 dark:text-slate-500 dark:hover:text-slate-300 transition-colors",
                        title: "Close",
                        onclick: move |_| chat.with_mut(|state| state.close()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
            }

            // Message thread
            div {
                class: "flex-1 overflow-y-auto px-4 py-4 flex flex-col gap-3",
                if state.messages.is_empty() && !state.is_loading {
                    div {
                        class: "text-center text-sm text-slate-500 dark:text-slate-400 mt-8 px-6",
                        p { class: "font-medium mb-1", "Hi! I'm your task assistant." }
                        p { "Ask me to add, complete or summarize your tasks." }
                    }
                }
                for message in state.messages.iter() {
                    MessageBubble { key: "{message.id}", message: message.clone() }
                }
                if state.is_loading {
                    TypingIndicator {}
                }
                if let Some(error) = state.error.as_ref() {
                    div {
                        class: "px-3 py-2 rounded-lg bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-800 text-red-600 dark:text-red-300 text-xs",
                        "{error}"
                    }
                }
            }

            MessageInput {
                disabled: state.is_loading,
                on_send: handle_send,
            }
        }
    }
}
