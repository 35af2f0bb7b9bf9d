use dioxus::prelude::*;

use crate::icons::FaClipboardList;
use crate::Icon;

/// Friendly placeholder for an empty collection, with an optional action.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default = "".to_string())] description: String,
    #[props(default = rsx! {})] action: Element,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center text-center py-16 px-6",
            div {
                class: "w-14 h-14 rounded-2xl bg-slate-100 dark:bg-slate-700 flex items-center justify-center text-slate-400 mb-4",
                Icon { icon: FaClipboardList, width: 24, height: 24 }
            }
            h3 {
                class: "text-lg font-semibold text-slate-900 dark:text-slate-50 mb-1",
                "{title}"
            }
            if !description.is_empty() {
                p {
                    class: "text-sm text-slate-500 dark:text-slate-400 mb-5 max-w-xs",
                    "{description}"
                }
            }
            {action}
        }
    }
}
