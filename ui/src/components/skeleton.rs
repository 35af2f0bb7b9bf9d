use dioxus::prelude::*;

/// Shimmering placeholder shown while the task list loads.
#[component]
pub fn SkeletonCard(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div {
            class: "space-y-4",
            aria_hidden: true,
            for i in 0..rows {
                div {
                    key: "{i}",
                    class: "rounded-2xl p-6 bg-slate-50 dark:bg-slate-700/50",
                    div { class: "shimmer h-6 w-3/4 rounded-lg mb-3" }
                    div { class: "shimmer h-4 w-1/2 rounded-lg" }
                }
            }
        }
    }
}
