//! REST client for the taskdeck backend.
//!
//! Everything the UI knows about the server goes through this crate: the
//! authenticated [`ApiClient`], bearer-token session decoding, and typed
//! operations for auth, tasks and chat. The crate holds no UI state; it
//! reads and writes the injected [`store::SessionStore`] and talks HTTP.

pub mod auth;
pub mod chat;
pub mod client;
pub mod error;
pub mod session;
pub mod tasks;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::User;
