//! Routing configuration.
//!
//! Centralizes the paths, storage keys and the route table used by the
//! storefront router.

use crate::route::{RouteDef, View};

// =============================================================================
// Credentials
// =============================================================================

/// localStorage key holding the credential marker.
pub const TOKEN_KEY: &str = "token";

// =============================================================================
// Well-known Paths
// =============================================================================

/// Landing page, also the redirect target for signed-in users.
pub const HOME_PATH: &str = "/";

/// Redirect target for unauthenticated navigation.
pub const LOGIN_PATH: &str = "/login";

pub const REGISTER_PATH: &str = "/register";

/// Paths reachable without a credential marker.
pub const PUBLIC_PATHS: &[&str] = &[HOME_PATH, LOGIN_PATH, REGISTER_PATH];

/// Paths a signed-in user is bounced away from.
pub const GUEST_ONLY_PATHS: &[&str] = &[LOGIN_PATH, REGISTER_PATH];

// =============================================================================
// Navigation
// =============================================================================

/// Maximum number of guard redirects followed per navigation.
pub const MAX_REDIRECTS: usize = 1;

/// Symbolic name of the checkout route.
pub const CHECKOUT_ROUTE: &str = "checkOut";

/// Name of the path parameter carried by the update page.
pub const PIZZA_NAME_PARAM: &str = "pizzaName";

// =============================================================================
// Route Table
// =============================================================================

/// Get the storefront route table.
///
/// Order matters: resolution picks the first matching entry.
pub fn default_routes() -> Vec<RouteDef> {
    vec![
        RouteDef::new("/", View::Home),
        RouteDef::new("/login", View::Login),
        RouteDef::new("/register", View::Register),
        RouteDef::new("/createPizza", View::CreatePizza),
        RouteDef::new("/updatePizza/:pizzaName", View::UpdatePizza),
        RouteDef::new("/shoppingCart", View::ShoppingCart),
        RouteDef::new("/checkOut", View::CheckOut).named(CHECKOUT_ROUTE),
    ]
}
