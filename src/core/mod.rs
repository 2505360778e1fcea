//! Browser-backed pieces of the storefront core.
//!
//! - [`session`] - Credential marker in localStorage
//! - [`error`] - Session storage errors

pub mod error;
pub mod session;

pub use session::{AppNavigator, LocalStorage};
