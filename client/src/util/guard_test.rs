use futures::executor::block_on;

use super::*;
use crate::net::api::{ApiError, AuthBackend, LoginScope};
use crate::net::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role, Tokens, User};
use crate::state::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SessionStore, USER_KEY};
use crate::util::storage::MemoryStorage;

struct AdminBackend;

#[async_trait::async_trait(?Send)]
impl AuthBackend for AdminBackend {
    async fn login(&self, _scope: LoginScope, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse {
            message: String::new(),
            tokens: Tokens { access: "a".to_owned(), refresh: "r".to_owned() },
            user: user(&request.email, Role::Admin),
        })
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        Err(ApiError::Unavailable)
    }
}

fn user(email: &str, role: Role) -> User {
    User {
        id: 1,
        email: email.to_owned(),
        role,
        username: String::new(),
        first_name: String::new(),
        last_name: String::new(),
        full_name: String::new(),
        phone: None,
        is_email_verified: false,
    }
}

fn loading() -> Session {
    SessionStore::init(MemoryStorage::new(), AdminBackend).session().clone()
}

fn anonymous() -> Session {
    let mut store = SessionStore::init(MemoryStorage::new(), AdminBackend);
    store.hydrate();
    store.session().clone()
}

fn signed_in(role: Role) -> Session {
    let record = serde_json::to_string(&user("u@x.com", role)).unwrap();
    let storage = MemoryStorage::with_entries([
        (ACCESS_TOKEN_KEY, "a"),
        (REFRESH_TOKEN_KEY, "r"),
        (USER_KEY, record.as_str()),
    ]);
    let mut store = SessionStore::init(storage, AdminBackend);
    store.hydrate();
    store.session().clone()
}

const ALL_ACCESS: [Access; 3] = [Access::Public, Access::Authenticated, Access::AdminOnly];

// =============================================================
// evaluate
// =============================================================

#[test]
fn loading_session_is_pending_for_every_target() {
    let session = loading();
    for access in ALL_ACCESS {
        let decision = evaluate(&session, access);
        assert_eq!(decision, GuardDecision::Pending, "{access:?}");
        assert_eq!(decision.redirect_path(), None);
    }
}

#[test]
fn public_targets_are_allowed_once_loaded() {
    assert_eq!(evaluate(&anonymous(), Access::Public), GuardDecision::Allowed);
    assert_eq!(evaluate(&signed_in(Role::User), Access::Public), GuardDecision::Allowed);
}

#[test]
fn anonymous_is_sent_to_login() {
    let session = anonymous();
    for access in [Access::Authenticated, Access::AdminOnly] {
        let decision = evaluate(&session, access);
        assert_eq!(decision, GuardDecision::DeniedAuth);
        assert_eq!(decision.redirect_path(), Some("/login"));
    }
}

#[test]
fn non_admin_on_admin_target_is_sent_home() {
    for role in [Role::User, Role::Other("STAFF".to_owned())] {
        let decision = evaluate(&signed_in(role), Access::AdminOnly);
        assert_eq!(decision, GuardDecision::DeniedRole);
        assert_eq!(decision.redirect_path(), Some("/"));
    }
}

#[test]
fn authenticated_user_is_allowed_on_authenticated_target() {
    assert_eq!(evaluate(&signed_in(Role::User), Access::Authenticated), GuardDecision::Allowed);
}

#[test]
fn admin_is_allowed_everywhere() {
    let session = signed_in(Role::Admin);
    for access in ALL_ACCESS {
        assert_eq!(evaluate(&session, access), GuardDecision::Allowed);
    }
}

#[test]
fn admin_login_then_admin_target_is_allowed() {
    let mut store = SessionStore::init(MemoryStorage::new(), AdminBackend);
    store.hydrate();
    assert_eq!(evaluate(store.session(), Access::AdminOnly), GuardDecision::DeniedAuth);

    block_on(store.login("boss@x.com", "pw", true)).unwrap();
    assert_eq!(evaluate(store.session(), Access::AdminOnly), GuardDecision::Allowed);

    store.logout();
    assert_eq!(evaluate(store.session(), Access::AdminOnly), GuardDecision::DeniedAuth);
}

// =============================================================
// access_for_path
// =============================================================

#[test]
fn route_table_classifies_paths() {
    assert_eq!(access_for_path("/"), Access::Public);
    assert_eq!(access_for_path("/products"), Access::Public);
    assert_eq!(access_for_path("/products/red-shoes"), Access::Public);
    assert_eq!(access_for_path("/admin/login"), Access::Public);
    assert_eq!(access_for_path("/cart"), Access::Authenticated);
    assert_eq!(access_for_path("/checkout"), Access::Authenticated);
    assert_eq!(access_for_path("/orders"), Access::Authenticated);
    assert_eq!(access_for_path("/admin/dashboard"), Access::AdminOnly);
    assert_eq!(access_for_path("/admin/inventory"), Access::AdminOnly);
}

#[test]
fn route_table_ignores_trailing_slash_and_query() {
    assert_eq!(access_for_path("/orders/"), Access::Authenticated);
    assert_eq!(access_for_path("/admin/users?page=2"), Access::AdminOnly);
    assert_eq!(access_for_path("/cart#summary"), Access::Authenticated);
}

#[test]
fn unknown_paths_are_public() {
    assert_eq!(access_for_path("/nope"), Access::Public);
    assert_eq!(access_for_path("/products/a/b"), Access::Public);
    assert_eq!(access_for_path("/admin"), Access::Public);
}

#[test]
fn every_admin_path_is_admin_only() {
    for (pattern, access) in ROUTES {
        if pattern.starts_with("/admin/") && *pattern != "/admin/login" {
            assert_eq!(*access, Access::AdminOnly, "{pattern}");
        }
    }
}

#[test]
fn declared_requirement_holds_after_redirect_to_public_path() {
    // The redirect target "/" is public, but a guard built for an admin
    // route keeps evaluating its own declared requirement.
    let session = signed_in(Role::User);
    assert_eq!(access_for_path(HOME_PATH), Access::Public);
    let decision = evaluate(&session, Access::AdminOnly);
    assert_eq!(decision, GuardDecision::DeniedRole);
    assert_eq!(decision.redirect_path(), Some(HOME_PATH));
    assert_ne!(evaluate(&session, Access::AdminOnly), GuardDecision::Allowed);
}
