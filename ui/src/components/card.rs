use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-white dark:bg-slate-800 border border-slate-100 dark:border-slate-700 rounded-2xl shadow-sm {class}",
            {children}
        }
    }
}

#[component]
pub fn CardHeader(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "px-6 pt-6 pb-3 {class}",
            {children}
        }
    }
}

#[component]
pub fn CardTitle(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        h3 {
            class: "text-lg font-semibold text-slate-900 dark:text-slate-50 {class}",
            {children}
        }
    }
}

#[component]
pub fn CardContent(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "px-6 pb-6 {class}",
            {children}
        }
    }
}
