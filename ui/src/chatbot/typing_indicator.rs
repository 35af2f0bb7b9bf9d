use dioxus::prelude::*;

/// Three pulsing dots shown while awaiting the assistant's reply.
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "flex justify-start",
            aria_label: "Assistant is typing",
            div {
                class: "px-4 py-3 rounded-2xl rounded-bl-sm bg-slate-100 dark:bg-slate-700 flex items-center gap-1",
                span { class: "typing-dot" }
                span { class: "typing-dot", style: "animation-delay: 0.15s" }
                span { class: "typing-dot", style: "animation-delay: 0.3s" }
            }
        }
    }
}
