//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Access control is applied by the router, not by pages.

pub mod admin;
pub mod home;
pub mod login;
pub mod register;
pub mod shop;
