//! Light/dark/system theme preference, persisted alongside the session.

use dioxus::prelude::*;
use store::SessionStore;

/// Theme preference. `System` follows the OS color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

pub type ThemeSignal = Signal<Theme>;

/// Get the theme signal provided at the application root.
pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    /// The concrete scheme to apply, resolving `System` against the OS
    /// preference.
    pub fn resolved(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => system_scheme(),
        }
    }

    /// Next preference in the toggle cycle: light -> dark -> system.
    pub fn cycled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

fn system_scheme() -> &'static str {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(query)) = window.match_media("(prefers-color-scheme: dark)") {
                if query.matches() {
                    return "dark";
                }
            }
        }
    }
    "light"
}

/// Read the persisted preference into the theme signal and apply it.
pub fn load_theme_from_storage(session: &SessionStore, theme: &mut ThemeSignal) {
    let stored = session
        .theme()
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default();
    theme.set(stored);
    apply_theme(stored);
}

/// Persist a newly selected preference and apply it.
pub fn store_theme(session: &SessionStore, theme: Theme) {
    session.set_theme(theme.as_str());
    apply_theme(theme);
}

/// Swap the `light`/`dark` class on the document element.
/// Does nothing outside a browser.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(theme.resolved());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}
