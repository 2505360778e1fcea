//! Application configuration.
//!
//! Centralizes the app-level constants. Routing constants (paths, the
//! token key and the route table) live in `pizzashop_core::config`.

use log::Level;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the navigation bar and document title.
pub const APP_NAME: &str = "Pizza Shop";

/// Id of the element the app mounts into.
pub const APP_ELEMENT_ID: &str = "app";

/// Title used when no route matches.
pub const NOT_FOUND_TITLE: &str = "Not Found";

// =============================================================================
// Logging
// =============================================================================

/// Console log level.
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};

// =============================================================================
// Storefront
// =============================================================================

/// Pizzas listed on the home page, each linking to its update page.
pub const MENU: &[&str] = &["margherita", "pepperoni", "quattro formaggi", "diavola"];
