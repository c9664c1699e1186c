//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only cross-page state; everything else lives in the
//! page that owns it.

pub mod session;
