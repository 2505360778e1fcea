//! Browser utilities.
//!
//! - [`dom`] - Window, localStorage and history access

pub mod dom;
