//! Pre-navigation guard.
//!
//! A pure decision over (destination path, signed in?):
//!
//! | signed in | destination          | decision            |
//! |-----------|----------------------|---------------------|
//! | no        | not public           | redirect to login   |
//! | yes       | guest-only           | redirect to home    |
//! | any       | anything else        | allow               |
//!
//! Unregistered paths get no special treatment here.

use crate::auth::AuthProvider;
use crate::config::{GUEST_ONLY_PATHS, HOME_PATH, LOGIN_PATH, PUBLIC_PATHS};

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectTo(String),
}

/// Guard over the storefront's default public and guest-only paths.
pub fn guard(destination: &str, credential_present: bool) -> GuardDecision {
    NavigationGuard::default().check(destination, credential_present)
}

/// Authentication guard with configurable path sets.
///
/// Paths are compared exactly; callers pass the path component only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationGuard {
    public: &'static [&'static str],
    guest_only: &'static [&'static str],
    login: &'static str,
    home: &'static str,
}

impl NavigationGuard {
    pub const fn new(
        public: &'static [&'static str],
        guest_only: &'static [&'static str],
        login: &'static str,
        home: &'static str,
    ) -> Self {
        Self {
            public,
            guest_only,
            login,
            home,
        }
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public.contains(&path)
    }

    pub fn check(&self, destination: &str, credential_present: bool) -> GuardDecision {
        if !credential_present && !self.is_public(destination) {
            log::debug!("guard: '{destination}' requires sign-in");
            GuardDecision::RedirectTo(self.login.to_string())
        } else if credential_present && self.guest_only.contains(&destination) {
            log::debug!("guard: '{destination}' is for guests only");
            GuardDecision::RedirectTo(self.home.to_string())
        } else {
            GuardDecision::Allow
        }
    }

    /// Check against an injected authentication provider.
    pub fn check_with(&self, destination: &str, auth: &dyn AuthProvider) -> GuardDecision {
        self.check(destination, auth.is_authenticated())
    }
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::new(PUBLIC_PATHS, GUEST_ONLY_PATHS, LOGIN_PATH, HOME_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryStore, StoredToken};
    use crate::config::TOKEN_KEY;

    const PROTECTED: &[&str] = &[
        "/createPizza",
        "/updatePizza/margherita",
        "/shoppingCart",
        "/checkOut",
        "/unknown",
    ];

    fn redirect(path: &str) -> GuardDecision {
        GuardDecision::RedirectTo(path.to_string())
    }

    #[test]
    fn test_public_paths_allowed_without_credential() {
        for path in ["/", "/login", "/register"] {
            assert_eq!(guard(path, false), GuardDecision::Allow, "{path}");
        }
    }

    #[test]
    fn test_protected_paths_redirect_to_login() {
        for path in PROTECTED {
            assert_eq!(guard(path, false), redirect("/login"), "{path}");
        }
    }

    #[test]
    fn test_guest_only_paths_redirect_home() {
        assert_eq!(guard("/login", true), redirect("/"));
        assert_eq!(guard("/register", true), redirect("/"));
    }

    #[test]
    fn test_signed_in_user_allowed_elsewhere() {
        assert_eq!(guard("/", true), GuardDecision::Allow);
        for path in PROTECTED {
            assert_eq!(guard(path, true), GuardDecision::Allow, "{path}");
        }
    }

    #[test]
    fn test_exact_comparison() {
        // Only exact public paths escape the login redirect.
        assert_eq!(guard("/login/", false), redirect("/login"));
        assert_eq!(guard("/Register", false), redirect("/login"));
    }

    #[test]
    fn test_check_with_stored_token() {
        let guard = NavigationGuard::default();
        let store = MemoryStore::new();
        let auth = StoredToken::new(&store);

        assert_eq!(guard.check_with("/shoppingCart", &auth), redirect("/login"));

        store.set(TOKEN_KEY, "abc123");
        assert_eq!(guard.check_with("/login", &auth), redirect("/"));
        assert_eq!(guard.check_with("/shoppingCart", &auth), GuardDecision::Allow);
    }

    #[test]
    fn test_custom_sets() {
        let guard = NavigationGuard::new(&["/", "/menu"], &[], "/menu", "/");
        assert_eq!(guard.check("/menu", false), GuardDecision::Allow);
        assert_eq!(guard.check("/orders", false), redirect("/menu"));
        assert!(guard.is_public("/menu"));
        assert!(!guard.is_public("/login"));
    }
}
