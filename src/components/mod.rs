//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`link`] - Router-aware anchors
//! - [`nav`] - Navigation bar
//! - [`pages`] - Storefront pages

pub mod link;
pub mod nav;
pub mod pages;
pub mod router;

pub use router::AppRouter;
