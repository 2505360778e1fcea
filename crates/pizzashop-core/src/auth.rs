//! Authentication state as seen by the router.
//!
//! The router never writes credentials. It only asks an [`AuthProvider`]
//! whether a user is signed in. [`StoredToken`] answers that question from
//! a key-value [`CredentialStore`] such as the browser's localStorage.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::TOKEN_KEY;

/// Read-only view of the current authentication state.
pub trait AuthProvider {
    fn is_authenticated(&self) -> bool;
}

impl AuthProvider for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

impl<T: AuthProvider + ?Sized> AuthProvider for &T {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

/// Synchronous key-value store holding the credential marker.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Authentication derived from a stored token.
///
/// Any non-empty value counts as signed in. Expiry and validity are the
/// backend's concern.
#[derive(Clone, Debug)]
pub struct StoredToken<S> {
    store: S,
    key: &'static str,
}

impl<S: CredentialStore> StoredToken<S> {
    /// Read the token from the default `token` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, TOKEN_KEY)
    }

    pub fn with_key(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// The stored token, if present and non-empty.
    pub fn token(&self) -> Option<String> {
        self.store.get(self.key).filter(|t| !t.is_empty())
    }
}

impl<S: CredentialStore> AuthProvider for StoredToken<S> {
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory credential store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_token() {
        let store = MemoryStore::new();
        let auth = StoredToken::new(&store);
        assert!(!auth.is_authenticated());
        assert_eq!(auth.token(), None);
    }

    #[test]
    fn test_empty_token_is_unauthenticated() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");
        assert!(!StoredToken::new(&store).is_authenticated());
    }

    #[test]
    fn test_token_lifecycle() {
        let store = MemoryStore::new();
        let auth = StoredToken::new(&store);

        store.set(TOKEN_KEY, "abc123");
        assert!(auth.is_authenticated());
        assert_eq!(auth.token().as_deref(), Some("abc123"));

        store.remove(TOKEN_KEY);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "abc123");
        let auth = StoredToken::with_key(&store, "session");
        assert!(!auth.is_authenticated());

        store.set("session", "xyz");
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_bool_provider() {
        assert!(true.is_authenticated());
        assert!(!false.is_authenticated());
    }
}
