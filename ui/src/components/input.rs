use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default = "".to_string())] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "block text-sm font-medium text-slate-700 dark:text-slate-300",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Text input with optional label, inline error and helper line.
///
/// The error, when non-empty, replaces the helper text and turns the
/// border red; validation itself happens in the owning form.
#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = "".to_string())] label: String,
    #[props(default = "".to_string())] error: String,
    #[props(default = "".to_string())] helper: String,
    #[props(default = "".to_string())] autocomplete: String,
    #[props(default = false)] disabled: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(default)] onblur: EventHandler<FocusEvent>,
) -> Element {
    let border = if error.is_empty() {
        "border-slate-300 dark:border-slate-600 focus:border-emerald-500"
    } else {
        "border-red-400 focus:border-red-500"
    };

    rsx! {
        div {
            class: "flex flex-col gap-1.5",
            if !label.is_empty() {
                Label { html_for: id.clone(), "{label}" }
            }
            input {
                id: "{id}",
                class: "w-full bg-white dark:bg-slate-800 border rounded-xl px-4 py-2.5 text-sm text-slate-800 dark:text-slate-100 outline-none transition-colors placeholder:text-slate-400 {border} {class}",
                r#type: r#type,
                placeholder: "{placeholder}",
                value: "{value}",
                autocomplete: "{autocomplete}",
                disabled: disabled,
                oninput: move |evt| oninput.call(evt),
                onblur: move |evt| onblur.call(evt),
            }
            if !error.is_empty() {
                p { class: "text-xs text-red-600 dark:text-red-400", "{error}" }
            } else if !helper.is_empty() {
                p { class: "text-xs text-slate-500 dark:text-slate-400", "{helper}" }
            }
        }
    }
}
