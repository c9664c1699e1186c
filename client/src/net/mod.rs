//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues account calls behind the `AuthBackend` seam and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
