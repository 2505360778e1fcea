//! Credential marker management using localStorage.
//!
//! The router only reads the `token` key. [`sign_in`] and [`sign_out`] are
//! the write side used by the login and logout flows.

use pizzashop_core::config::TOKEN_KEY;
use pizzashop_core::{AuthProvider, CredentialStore, Navigator, StoredToken};

use crate::core::error::SessionError;
use crate::utils::dom;

/// Navigator wired to the browser's credential store.
pub type AppNavigator = Navigator<StoredToken<LocalStorage>>;

/// [`CredentialStore`] over `window.localStorage`.
///
/// An unavailable storage reads as an absent credential.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl CredentialStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }
}

/// Check whether a non-empty token is stored.
pub fn is_signed_in() -> bool {
    StoredToken::new(LocalStorage).is_authenticated()
}

/// Store the credential marker.
pub fn sign_in(token: &str) -> Result<(), SessionError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(SessionError::EmptyToken);
    }

    let storage = dom::local_storage().ok_or(SessionError::StorageUnavailable)?;
    storage
        .set_item(TOKEN_KEY, token)
        .map_err(|_| SessionError::SaveFailed)?;
    log::info!("session: signed in");
    Ok(())
}

/// Clear the credential marker.
pub fn sign_out() -> Result<(), SessionError> {
    let storage = dom::local_storage().ok_or(SessionError::StorageUnavailable)?;
    storage
        .remove_item(TOKEN_KEY)
        .map_err(|_| SessionError::RemoveFailed)?;
    log::info!("session: signed out");
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_sign_in_and_out() {
        sign_out().unwrap();
        assert!(!is_signed_in());
        assert_eq!(LocalStorage.get(TOKEN_KEY), None);

        sign_in("  abc123 ").unwrap();
        assert!(is_signed_in());
        assert_eq!(LocalStorage.get(TOKEN_KEY).as_deref(), Some("abc123"));

        sign_out().unwrap();
        assert!(!is_signed_in());
    }

    #[wasm_bindgen_test]
    fn test_empty_token_rejected() {
        assert_eq!(sign_in("   "), Err(SessionError::EmptyToken));
    }

    #[wasm_bindgen_test]
    fn test_empty_stored_value_is_signed_out() {
        let storage = dom::local_storage().unwrap();
        storage.set_item(TOKEN_KEY, "").unwrap();
        assert!(!is_signed_in());
        sign_out().unwrap();
    }
}
