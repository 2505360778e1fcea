//! Single navigation attempts: guard first, then resolve.

use crate::auth::AuthProvider;
use crate::config::MAX_REDIRECTS;
use crate::error::NavigationError;
use crate::guard::{GuardDecision, NavigationGuard};
use crate::pattern::path_of;
use crate::route::{RouteTable, ViewBinding};

/// Settled outcome of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// URL the browser should show.
    pub path: String,
    /// URL originally requested, when the guard redirected.
    pub redirected_from: Option<String>,
    /// Matched view, or `None` for an unregistered path.
    pub binding: Option<ViewBinding>,
}

impl Navigation {
    /// A navigation that renders the not-found view at `path`.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirected_from: None,
            binding: None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        self.redirected_from.is_some()
    }

    pub fn is_not_found(&self) -> bool {
        self.binding.is_none()
    }
}

/// Runs the guard and the route table for each requested URL.
#[derive(Clone, Debug)]
pub struct Navigator<A> {
    table: RouteTable,
    guard: NavigationGuard,
    auth: A,
    max_redirects: usize,
}

impl<A: AuthProvider> Navigator<A> {
    pub fn new(table: RouteTable, guard: NavigationGuard, auth: A) -> Self {
        Self {
            table,
            guard,
            auth,
            max_redirects: MAX_REDIRECTS,
        }
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Process a navigation to `url`.
    ///
    /// Redirect targets are checked by the guard again. A redirect beyond
    /// the configured limit fails with [`NavigationError::RedirectLoop`].
    pub fn navigate(&self, url: &str) -> Result<Navigation, NavigationError> {
        let mut target = normalize(url);
        let mut redirected_from = None;
        let mut redirects = 0;

        loop {
            let authenticated = self.auth.is_authenticated();
            match self.guard.check(path_of(&target), authenticated) {
                GuardDecision::Allow => break,
                GuardDecision::RedirectTo(next) => {
                    if redirects >= self.max_redirects {
                        return Err(NavigationError::RedirectLoop {
                            from: target,
                            to: next,
                            limit: self.max_redirects,
                        });
                    }
                    log::debug!("navigate: '{target}' redirected to '{next}'");
                    redirected_from.get_or_insert_with(|| target.clone());
                    target = next;
                    redirects += 1;
                }
            }
        }

        let binding = match self.table.resolve(&target) {
            Ok(binding) => Some(binding),
            Err(e) => {
                log::debug!("navigate: {e}");
                None
            }
        };

        Ok(Navigation {
            path: target,
            redirected_from,
            binding,
        })
    }
}

/// Ensure a leading slash.
fn normalize(url: &str) -> String {
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryStore, StoredToken};
    use crate::config::{TOKEN_KEY, default_routes};
    use crate::route::View;

    fn navigator<A: AuthProvider>(auth: A) -> Navigator<A> {
        Navigator::new(
            RouteTable::new(default_routes()).unwrap(),
            NavigationGuard::default(),
            auth,
        )
    }

    #[test]
    fn test_allowed_navigation() {
        let nav = navigator(false).navigate("/").unwrap();
        assert_eq!(nav.path, "/");
        assert!(!nav.is_redirect());
        assert_eq!(nav.binding.unwrap().view, View::Home);
    }

    #[test]
    fn test_redirect_to_login() {
        let nav = navigator(false).navigate("/shoppingCart").unwrap();
        assert_eq!(nav.path, "/login");
        assert_eq!(nav.redirected_from.as_deref(), Some("/shoppingCart"));
        assert_eq!(nav.binding.unwrap().view, View::Login);
    }

    #[test]
    fn test_redirect_home_when_signed_in() {
        let nav = navigator(true).navigate("/register").unwrap();
        assert_eq!(nav.path, "/");
        assert_eq!(nav.redirected_from.as_deref(), Some("/register"));
        assert_eq!(nav.binding.unwrap().view, View::Home);
    }

    #[test]
    fn test_query_is_kept_but_ignored_by_guard() {
        let nav = navigator(false).navigate("/login?next=%2FcheckOut").unwrap();
        assert_eq!(nav.path, "/login?next=%2FcheckOut");
        assert!(!nav.is_redirect());
        assert_eq!(nav.binding.unwrap().view, View::Login);
    }

    #[test]
    fn test_unregistered_path() {
        let nav = navigator(true).navigate("/menu").unwrap();
        assert_eq!(nav.path, "/menu");
        assert!(nav.is_not_found());

        // The guard still applies to unknown paths.
        let nav = navigator(false).navigate("/menu").unwrap();
        assert_eq!(nav.path, "/login");
    }

    #[test]
    fn test_missing_leading_slash() {
        let nav = navigator(true).navigate("checkOut").unwrap();
        assert_eq!(nav.path, "/checkOut");
        assert_eq!(nav.binding.unwrap().view, View::CheckOut);
    }

    #[test]
    fn test_reads_auth_per_navigation() {
        let store = MemoryStore::new();
        let navigator = navigator(StoredToken::new(&store));
        assert_eq!(navigator.navigate("/checkOut").unwrap().path, "/login");

        store.set(TOKEN_KEY, "abc123");
        assert!(navigator.is_authenticated());
        assert_eq!(navigator.navigate("/checkOut").unwrap().path, "/checkOut");
    }

    #[test]
    fn test_redirect_loop_detected() {
        // Login page is not public: the login redirect is redirected again.
        let guard = NavigationGuard::new(&["/"], &[], "/login", "/");
        let navigator = Navigator::new(RouteTable::new(default_routes()).unwrap(), guard, false);

        assert_eq!(
            navigator.navigate("/checkOut"),
            Err(NavigationError::RedirectLoop {
                from: "/login".to_string(),
                to: "/login".to_string(),
                limit: 1,
            })
        );
    }

    #[test]
    fn test_zero_redirects_allowed() {
        let navigator = navigator(false).with_max_redirects(0);
        assert!(matches!(
            navigator.navigate("/shoppingCart"),
            Err(NavigationError::RedirectLoop { limit: 0, .. })
        ));
        assert!(navigator.navigate("/").is_ok());
    }
}
