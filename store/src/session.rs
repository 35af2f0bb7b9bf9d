//! Typed facade over the key-value store for session-scoped state.

use std::fmt;
use std::sync::Arc;

use crate::{keys, KeyValueStore};

/// Shared handle to the persisted session state (token + preferences).
///
/// Cheap to clone; every component that needs the token receives one of
/// these by reference instead of reaching into ambient browser storage,
/// so tests can substitute a [`crate::MemoryStore`].
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(backend),
        }
    }

    /// The stored bearer token, if any. No validation is performed.
    pub fn token(&self) -> Option<String> {
        self.inner.get(keys::AUTH_TOKEN)
    }

    pub fn set_token(&self, token: &str) {
        self.inner.set(keys::AUTH_TOKEN, token);
    }

    pub fn clear_token(&self) {
        self.inner.remove(keys::AUTH_TOKEN);
    }

    /// Whether a token is present (says nothing about its validity).
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn theme(&self) -> Option<String> {
        self.inner.get(keys::THEME)
    }

    pub fn set_theme(&self, theme: &str) {
        self.inner.set(keys::THEME, theme);
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token itself.
        f.debug_struct("SessionStore")
            .field("has_token", &self.has_token())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_token_roundtrip() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(!session.has_token());

        session.set_token("a.b.c");
        assert_eq!(session.token().as_deref(), Some("a.b.c"));
        assert!(session.has_token());

        session.clear_token();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_theme_is_independent_of_token() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_theme("dark");
        session.set_token("a.b.c");
        session.clear_token();
        assert_eq!(session.theme().as_deref(), Some("dark"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_token("secret-token");
        let printed = format!("{session:?}");
        assert!(!printed.contains("secret-token"));
    }
}
