//! Client-side persistent storage for taskdeck.
//!
//! The browser keeps exactly two pieces of state across page loads: the
//! bearer token and the theme preference. Both live behind the
//! [`KeyValueStore`] trait so the session layer can be backed by browser
//! `localStorage` in the web build and by [`MemoryStore`] in tests and
//! native builds.

pub mod keys;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use session::SessionStore;

/// Synchronous string key-value storage.
///
/// All operations are infallible from the caller's perspective: a backend
/// whose underlying storage is unavailable must behave as an empty store
/// (reads return `None`, writes are dropped) rather than error.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
