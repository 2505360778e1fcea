//! Application router component.
//!
//! Handles URL-based routing with path history (`pushState`), so the host
//! server must serve the app entry point for every path. Uses native
//! `popstate` events instead of a router crate.
//!
//! # Architecture
//!
//! - **Guard before render**: every navigation (initial load, link click,
//!   back/forward) goes through [`AppNavigator`] before the view changes
//! - **Redirects replace history**: a rejected URL never stays in the
//!   back-button history
//! - **[`RouterContext`]** is provided to the tree for programmatic navigation

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use pizzashop_core::{
    AuthProvider, Navigation, NavigationGuard, Navigator, Params, RouteError, RouteTable,
    StoredToken, View,
};

use crate::components::nav::NavBar;
use crate::components::pages;
use crate::config::{APP_NAME, NOT_FOUND_TITLE};
use crate::core::{AppNavigator, LocalStorage};
use crate::utils::dom;

/// What started a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trigger {
    /// The browser already shows the URL (startup, back/forward).
    Load,
    /// In-app navigation to a new URL.
    Push,
}

// ============================================================================
// RouterContext
// ============================================================================

/// Router handle shared with the component tree.
#[derive(Clone, Copy)]
pub struct RouterContext {
    navigator: StoredValue<AppNavigator>,
    /// Navigation currently rendered.
    pub current: RwSignal<Navigation>,
}

impl RouterContext {
    /// Create the router and settle the URL the page was loaded with.
    fn new(navigator: AppNavigator) -> Self {
        let initial = settle(&navigator, &dom::current_url());
        sync_history(&initial, Trigger::Load);
        Self {
            navigator: StoredValue::new(navigator),
            current: RwSignal::new(initial.nav),
        }
    }

    /// Navigate to `url`, adding a history entry.
    pub fn navigate(&self, url: &str) {
        self.apply(url, Trigger::Push);
    }

    /// Re-run the guard for the URL the browser currently shows.
    pub fn reload(&self) {
        self.apply(&dom::current_url(), Trigger::Load);
    }

    /// Build the path of the route bound to `view`.
    pub fn href(&self, view: View, params: &Params) -> Result<String, RouteError> {
        self.navigator
            .with_value(|n| n.table().path_for_view(view, params))
    }

    /// Build the path of a named route.
    pub fn href_named(&self, name: &str) -> Result<String, RouteError> {
        self.navigator
            .with_value(|n| n.table().path_for(name, &Params::new()))
    }

    fn apply(&self, url: &str, trigger: Trigger) {
        let settled = self.navigator.with_value(|n| settle(n, url));
        sync_history(&settled, trigger);
        self.current.set(settled.nav);
    }
}

/// Get the router from context.
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext must be provided")
}

/// A navigation after guard and resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Settled {
    nav: Navigation,
    /// The navigator refused the URL; `nav` is the not-found fallback.
    rejected: bool,
}

/// Address bar update for a settled navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
enum HistoryOp {
    Push(String),
    Replace(String),
}

impl HistoryOp {
    fn apply(&self) {
        match self {
            Self::Push(url) => dom::push_state(url),
            Self::Replace(url) => dom::replace_state(url),
        }
    }
}

/// Run a navigation, falling back to the not-found view on failure.
fn settle<A: AuthProvider>(navigator: &Navigator<A>, url: &str) -> Settled {
    match navigator.navigate(url) {
        Ok(nav) => Settled {
            nav,
            rejected: false,
        },
        Err(e) => {
            log::warn!("navigation to '{url}' rejected: {e}");
            Settled {
                nav: Navigation::not_found(url),
                rejected: true,
            }
        }
    }
}

/// Decide how the address bar follows a settled navigation.
///
/// `current` is the URL the browser shows. Rejected URLs never enter history.
fn history_op(settled: &Settled, trigger: Trigger, current: &str) -> Option<HistoryOp> {
    if settled.rejected {
        return None;
    }
    let nav = &settled.nav;
    match trigger {
        Trigger::Push if nav.path != current => Some(HistoryOp::Push(nav.path.clone())),
        Trigger::Load if nav.is_redirect() => Some(HistoryOp::Replace(nav.path.clone())),
        Trigger::Push | Trigger::Load => None,
    }
}

/// Bring the address bar in line with a settled navigation.
fn sync_history(settled: &Settled, trigger: Trigger) {
    if let Some(op) = history_op(settled, trigger, &dom::current_url()) {
        op.apply();
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Owns the route table for the lifetime of the app and renders the view
/// bound to the current URL.
#[component]
pub fn AppRouter(table: RouteTable) -> impl IntoView {
    let navigator = AppNavigator::new(
        table,
        NavigationGuard::default(),
        StoredToken::new(LocalStorage),
    );
    let router = RouterContext::new(navigator);
    provide_context(router);

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            router.reload();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move |_| {
        let title = router.current.with(|nav| {
            nav.binding
                .as_ref()
                .map_or(NOT_FOUND_TITLE, |binding| binding.view.title())
        });
        dom::set_title(&format!("{title} | {APP_NAME}"));
    });

    view! {
        <NavBar />
        <main class="page">
            {move || pages::render(router.current.get().binding)}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzashop_core::config::default_routes;

    fn navigator(signed_in: bool) -> Navigator<bool> {
        Navigator::new(
            RouteTable::new(default_routes()).unwrap(),
            NavigationGuard::default(),
            signed_in,
        )
    }

    #[test]
    fn test_push_settled_url() {
        let settled = settle(&navigator(true), "/shoppingCart");
        assert_eq!(
            history_op(&settled, Trigger::Push, "/"),
            Some(HistoryOp::Push("/shoppingCart".to_string()))
        );
    }

    #[test]
    fn test_push_redirect_target_only() {
        let settled = settle(&navigator(false), "/checkOut");
        assert_eq!(
            history_op(&settled, Trigger::Push, "/"),
            Some(HistoryOp::Push("/login".to_string()))
        );
    }

    #[test]
    fn test_push_same_url_is_noop() {
        let settled = settle(&navigator(false), "/login");
        assert_eq!(history_op(&settled, Trigger::Push, "/login"), None);
    }

    #[test]
    fn test_load_redirect_replaces() {
        let settled = settle(&navigator(false), "/shoppingCart");
        assert_eq!(
            history_op(&settled, Trigger::Load, "/shoppingCart"),
            Some(HistoryOp::Replace("/login".to_string()))
        );
    }

    #[test]
    fn test_load_allowed_is_noop() {
        let settled = settle(&navigator(true), "/updatePizza/margherita");
        assert!(!settled.rejected);
        assert_eq!(
            history_op(&settled, Trigger::Load, "/updatePizza/margherita"),
            None
        );
    }

    #[test]
    fn test_redirect_loop_never_pushed() {
        // Login itself is protected, so the login redirect loops.
        let navigator = Navigator::new(
            RouteTable::new(default_routes()).unwrap(),
            NavigationGuard::new(&["/"], &[], "/login", "/"),
            false,
        );
        let settled = settle(&navigator, "/checkOut");

        assert!(settled.rejected);
        assert!(settled.nav.is_not_found());
        assert_eq!(history_op(&settled, Trigger::Push, "/"), None);
        assert_eq!(history_op(&settled, Trigger::Load, "/checkOut"), None);
    }
}
