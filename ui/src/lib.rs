//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, use_api};

pub mod views;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod theme;
pub use theme::{
    apply_theme, load_theme_from_storage, store_theme, use_theme, Theme, ThemeSignal,
};

pub mod chatbot;
pub use chatbot::{use_chat, ChatProvider, ChatState, ChatWidget};
