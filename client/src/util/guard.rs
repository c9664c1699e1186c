//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected::Protected` consults [`evaluate`] with the access
//! level its route declares, on every session change, before mounting a
//! view. [`ROUTES`] lists the storefront's URL surface; `App` declares the
//! same requirements and a test keeps the two in step.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::Session;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Access requirement declared by a navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    AdminOnly,
}

/// Outcome of checking a session against an [`Access`] requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still hydrating; show a neutral indicator, never redirect.
    Pending,
    Allowed,
    /// Not logged in; send to the login page.
    DeniedAuth,
    /// Logged in without the admin role; send home.
    DeniedRole,
}

impl GuardDecision {
    /// Where a denied navigation goes. The original target is not remembered.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::DeniedAuth => Some(LOGIN_PATH),
            Self::DeniedRole => Some(HOME_PATH),
            Self::Pending | Self::Allowed => None,
        }
    }
}

/// Decide whether `session` may render a target requiring `access`.
pub fn evaluate(session: &Session, access: Access) -> GuardDecision {
    if session.loading() {
        return GuardDecision::Pending;
    }
    match access {
        Access::Public => GuardDecision::Allowed,
        _ if !session.is_authenticated() => GuardDecision::DeniedAuth,
        Access::AdminOnly if !session.is_admin() => GuardDecision::DeniedRole,
        Access::Authenticated | Access::AdminOnly => GuardDecision::Allowed,
    }
}

/// Route table: path pattern and its requirement. `:name` matches one segment.
pub const ROUTES: &[(&str, Access)] = &[
    ("/", Access::Public),
    ("/login", Access::Public),
    ("/register", Access::Public),
    ("/admin/login", Access::Public),
    ("/products", Access::Public),
    ("/products/:slug", Access::Public),
    ("/cart", Access::Authenticated),
    ("/checkout", Access::Authenticated),
    ("/orders", Access::Authenticated),
    ("/admin/dashboard", Access::AdminOnly),
    ("/admin/categories", Access::AdminOnly),
    ("/admin/products", Access::AdminOnly),
    ("/admin/orders", Access::AdminOnly),
    ("/admin/users", Access::AdminOnly),
    ("/admin/inventory", Access::AdminOnly),
];

/// Requirement for a concrete path. Unknown paths are public (they render
/// the not-found view).
pub fn access_for_path(path: &str) -> Access {
    ROUTES
        .iter()
        .find(|(pattern, _)| path_matches(pattern, path))
        .map_or(Access::Public, |(_, access)| *access)
}

fn path_matches(pattern: &str, path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut want = pattern.split('/').filter(|s| !s.is_empty());
    let mut got = path.split('/').filter(|s| !s.is_empty());
    loop {
        match (want.next(), got.next()) {
            (None, None) => return true,
            (Some(w), Some(g)) if w.starts_with(':') || w == g => {}
            _ => return false,
        }
    }
}
