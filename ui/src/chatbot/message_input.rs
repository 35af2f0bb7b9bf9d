use dioxus::prelude::*;

use crate::icons::FaPaperPlane;
use crate::Icon;

/// Input row at the bottom of the chat panel.
///
/// The send control is disabled while a send is in flight, which is what
/// keeps a single panel to one outstanding request at a time.
#[component]
pub fn MessageInput(disabled: bool, on_send: EventHandler<String>) -> Element {
    let mut draft = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft();
        if text.trim().is_empty() {
            return;
        }
        draft.set(String::new());
        on_send.call(text);
    };

    rsx! {
        form {
            class: "flex items-center gap-2 px-4 py-3 border-t border-slate-200 dark:border-slate-700",
            onsubmit: submit,
            input {
                class: "flex-1 bg-slate-100 dark:bg-slate-700 border border-transparent focus:border-emerald-500 rounded-xl px-4 py-2.5 text-sm text-slate-800 dark:text-slate-100 outline-none placeholder:text-slate-400",
                r#type: "text",
                placeholder: "Ask about your tasks...",
                value: draft(),
                disabled: disabled,
                oninput: move |evt: FormEvent| draft.set(evt.value()),
            }
            button {
                class: "w-10 h-10 rounded-xl bg-emerald-600 text-white flex items-center justify-center disabled:opacity-40 disabled:cursor-not-allowed hover:bg-emerald-700 transition-colors",
                r#type: "submit",
                disabled: disabled || draft().trim().is_empty(),
                aria_label: "Send message",
                Icon { icon: FaPaperPlane, width: 14, height: 14 }
            }
        }
    }
}
