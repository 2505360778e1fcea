//! Routing core for the pizza shop storefront.
//!
//! Target-independent pieces of the client router:
//! - [`RouteTable`], [`RouteDef`], [`View`] - Declarative route table and resolution
//! - [`PathPattern`], [`Params`] - `:param` path patterns and extracted values
//! - [`NavigationGuard`], [`guard`] - Authentication-based redirects
//! - [`AuthProvider`], [`StoredToken`] - Injected authentication state
//! - [`Navigator`] - Guard + resolution for a single navigation attempt
//!
//! Browser bindings (localStorage, history, components) live in the app crate.

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod pattern;
pub mod route;

pub use auth::{AuthProvider, CredentialStore, MemoryStore, StoredToken};
pub use error::{NavigationError, RouteError};
pub use guard::{GuardDecision, NavigationGuard, guard};
pub use navigator::{Navigation, Navigator};
pub use pattern::{Params, PathPattern, path_of};
pub use route::{RouteDef, RouteTable, View, ViewBinding};
