//! Error types for route table construction and navigation.
//!
//! - [`RouteError`] - Invalid patterns, unknown routes, missing parameters
//! - [`NavigationError`] - Guard redirect chains that do not settle

use thiserror::Error;

use crate::route::View;

/// Errors raised while building or querying a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Pattern could not be compiled.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The same `:param` appears twice in one pattern.
    #[error("duplicate parameter ':{param}' in route pattern '{pattern}'")]
    DuplicateParam { pattern: String, param: String },

    /// Two routes share a symbolic name.
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    /// No route matches the path.
    #[error("no route matches '{0}'")]
    NotFound(String),

    /// No route carries the requested name.
    #[error("unknown route name '{0}'")]
    UnknownName(String),

    /// No route is bound to the requested view.
    #[error("no route is bound to view {0:?}")]
    UnboundView(View),

    /// A parameter required to build a URL was absent or empty.
    #[error("missing parameter ':{param}' for route pattern '{pattern}'")]
    MissingParam { pattern: String, param: String },
}

/// Errors raised while processing a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The guard kept redirecting past the allowed limit.
    #[error("navigation redirected more than {limit} time(s): '{from}' -> '{to}'")]
    RedirectLoop {
        from: String,
        to: String,
        limit: usize,
    },
}
