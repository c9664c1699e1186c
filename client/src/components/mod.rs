//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome and the route guard wrapper while
//! reading the session from Leptos context.

pub mod layout;
pub mod navbar;
pub mod protected;
