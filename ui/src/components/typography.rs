use dioxus::prelude::*;

/// Section heading, h1 through h4.
#[component]
pub fn Heading(
    #[props(default = 1)] level: u8,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    match level {
        1 => rsx! {
            h1 { class: "text-2xl font-bold text-slate-900 dark:text-slate-50 {class}", {children} }
        },
        2 => rsx! {
            h2 { class: "text-xl font-semibold text-slate-900 dark:text-slate-50 {class}", {children} }
        },
        3 => rsx! {
            h3 { class: "text-lg font-semibold text-slate-900 dark:text-slate-50 {class}", {children} }
        },
        _ => rsx! {
            h4 { class: "text-base font-medium text-slate-900 dark:text-slate-50 {class}", {children} }
        },
    }
}

/// Body text; `muted` for secondary copy.
#[component]
pub fn Text(
    #[props(default = false)] muted: bool,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let color = if muted {
        "text-slate-500 dark:text-slate-400"
    } else {
        "text-slate-700 dark:text-slate-200"
    };
    rsx! {
        p { class: "text-sm {color} {class}", {children} }
    }
}
