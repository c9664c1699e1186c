//! Shared client utilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` holds the route table and access decisions, `storage` the durable
//! key/value seam used by the session store.

pub mod guard;
pub mod storage;
