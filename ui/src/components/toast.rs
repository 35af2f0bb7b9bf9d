use dioxus::prelude::*;

const DISMISS_AFTER_SECS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn classes(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-emerald-600 text-white",
            ToastKind::Error => "bg-red-600 text-white",
            ToastKind::Info => "bg-slate-800 text-white dark:bg-slate-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Handle for pushing notifications; obtained via [`use_toast`].
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.with_mut(|next| {
            let id = *next;
            *next += 1;
            id
        });
        self.entries.with_mut(|entries| {
            entries.push(ToastEntry {
                id,
                kind,
                message: message.into(),
            })
        });

        let mut entries = self.entries;
        spawn(async move {
            sleep_secs(DISMISS_AFTER_SECS).await;
            entries.with_mut(|entries| entries.retain(|entry| entry.id != id));
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    fn dismiss(&mut self, id: u64) {
        self.entries
            .with_mut(|entries| entries.retain(|entry| entry.id != id));
    }
}

/// Get the toast handle provided by [`ToastProvider`].
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Renders queued toasts in a stack; clicking a toast dismisses it early.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let entries = use_signal(Vec::<ToastEntry>::new);
    let next_id = use_signal(|| 0u64);
    let toasts = Toasts { entries, next_id };
    use_context_provider(|| toasts);

    rsx! {
        {children}
        div {
            class: "fixed bottom-6 left-1/2 -translate-x-1/2 z-[3000] flex flex-col gap-2 items-center",
            for entry in entries() {
                div {
                    key: "{entry.id}",
                    class: "toast px-4 py-2.5 rounded-xl shadow-lg text-sm cursor-pointer {entry.kind.classes()}",
                    onclick: {
                        let mut toasts = toasts;
                        let id = entry.id;
                        move |_| toasts.dismiss(id)
                    },
                    "{entry.message}"
                }
            }
        }
    }
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}
