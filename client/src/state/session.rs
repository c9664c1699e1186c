//! Session store: who the current browser user is.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single source of truth for identity. `App` constructs one,
//! provides it as `RwSignal<AppSession>` context, and hydrates it once after
//! mount. The route guard and navigation chrome read it reactively; login and
//! logout are the only mutations.
//!
//! DESIGN
//! ======
//! - `is_authenticated` / `is_admin` are computed from `user`, never stored.
//! - Every mutation writes storage and memory inside one `&mut self` call, so
//!   a signal update publishes a consistent session in a single notification.
//! - Backend failures come back as [`AuthFailure`] values carrying the text a
//!   form can show as-is.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError, AuthBackend, HttpBackend, LoginScope};
use crate::net::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User};
use crate::util::storage::{AppStorage, SessionStorage};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Session store wired to the browser (or to memory during SSR).
pub type AppSession = SessionStore<AppStorage, HttpBackend>;

/// Why an account operation did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// Rejected credentials; the message comes from the backend.
    #[error("{0}")]
    Credentials(String),
    /// Registration field errors, one message per invalid entry.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
    /// Transport or unexpected failure reduced to a generic message.
    #[error("{0}")]
    Unexpected(String),
}

impl AuthFailure {
    /// Messages to show, one per line or notice.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            Self::Credentials(msg) | Self::Unexpected(msg) => vec![msg.clone()],
        }
    }

    fn from_login_error(err: &ApiError) -> Self {
        match err {
            ApiError::Status { body, .. } => api::first_non_field_error(body)
                .map_or_else(|| Self::Unexpected(LOGIN_FAILED.to_owned()), Self::Credentials),
            _ => Self::Unexpected(LOGIN_FAILED.to_owned()),
        }
    }

    fn from_register_error(err: &ApiError) -> Self {
        let ApiError::Status { body, .. } = err else {
            return Self::Unexpected(REGISTRATION_FAILED.to_owned());
        };
        let messages = api::field_error_messages(body);
        if messages.is_empty() {
            Self::Unexpected(REGISTRATION_FAILED.to_owned())
        } else {
            Self::Validation(messages)
        }
    }
}

/// Client-held record of the current identity and credentials.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    user: Option<User>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    loading: bool,
}

impl Session {
    fn pending() -> Self {
        Self { user: None, access_token: None, refresh_token: None, loading: true }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// True until the one-time hydration from storage has finished.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    fn clear(&mut self) {
        self.user = None;
        self.access_token = None;
        self.refresh_token = None;
    }
}

/// Explicitly constructed session service bridging storage and the backend.
///
/// Lifecycle: [`init`](Self::init) → [`hydrate`](Self::hydrate) once →
/// login/logout → [`dispose`](Self::dispose).
#[derive(Debug)]
pub struct SessionStore<S, B> {
    storage: S,
    backend: B,
    session: Session,
}

impl<S: SessionStorage, B: AuthBackend> SessionStore<S, B> {
    /// Create an empty store that is still loading.
    pub fn init(storage: S, backend: B) -> Self {
        Self { storage, backend, session: Session::pending() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Rebuild the session from storage. Runs once; later calls are no-ops.
    ///
    /// A missing record leaves the session anonymous. A record that does not
    /// parse, or that lacks either token, is purged so storage and memory
    /// agree on "not authenticated".
    pub fn hydrate(&mut self) {
        if !self.session.loading {
            return;
        }

        let raw_user = self.storage.get(USER_KEY);
        let access = self.storage.get(ACCESS_TOKEN_KEY);
        let refresh = self.storage.get(REFRESH_TOKEN_KEY);

        match (raw_user, access, refresh) {
            (None, None, None) => log::debug!("session: no persisted session"),
            (Some(raw), Some(access), Some(refresh)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    log::info!("session: restored user {}", user.id);
                    self.session.user = Some(user);
                    self.session.access_token = Some(access);
                    self.session.refresh_token = Some(refresh);
                }
                Err(e) => {
                    log::warn!("session: discarding unreadable user record: {e}");
                    self.purge_storage();
                }
            },
            _ => {
                log::warn!("session: discarding incomplete persisted session");
                self.purge_storage();
            }
        }

        self.session.loading = false;
    }

    /// Log in through the customer or admin endpoint.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] when the backend rejects the credentials or
    /// cannot be reached. The session and storage are left untouched.
    pub async fn login(&mut self, email: &str, password: &str, as_admin: bool) -> Result<User, AuthFailure> {
        let scope = LoginScope::from_admin_flag(as_admin);
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let result = self.backend.login(scope, &request).await;
        self.complete_login(scope, result)
    }

    /// Apply a backend login result: persist and adopt the session on success.
    ///
    /// Split from [`login`](Self::login) so reactive callers can await the
    /// backend without holding the store borrowed.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthFailure`] derived from the backend error. If storage
    /// refuses the session, storage and memory are both cleared and a generic
    /// failure is returned.
    pub fn complete_login(
        &mut self,
        scope: LoginScope,
        result: Result<LoginResponse, ApiError>,
    ) -> Result<User, AuthFailure> {
        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session: {scope:?} login failed: {e}");
                return Err(AuthFailure::from_login_error(&e));
            }
        };

        let record = serde_json::to_string(&resp.user).map_err(|e| {
            log::error!("session: cannot serialize user record: {e}");
            AuthFailure::Unexpected(LOGIN_FAILED.to_owned())
        })?;

        let persisted = self
            .storage
            .set(ACCESS_TOKEN_KEY, &resp.tokens.access)
            .and_then(|()| self.storage.set(REFRESH_TOKEN_KEY, &resp.tokens.refresh))
            .and_then(|()| self.storage.set(USER_KEY, &record));
        if let Err(e) = persisted {
            log::error!("session: cannot persist session: {e}");
            self.purge_storage();
            self.session.clear();
            self.session.loading = false;
            return Err(AuthFailure::Unexpected(LOGIN_FAILED.to_owned()));
        }

        self.session.user = Some(resp.user.clone());
        self.session.access_token = Some(resp.tokens.access);
        self.session.refresh_token = Some(resp.tokens.refresh);
        self.session.loading = false;

        log::info!("session: {scope:?} login as user {}", resp.user.id);
        Ok(resp.user)
    }

    /// Create an account. The session is not touched; the user logs in separately.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure::Validation`] with the backend's field errors, or
    /// [`AuthFailure::Unexpected`] for anything else.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AuthFailure> {
        register_via(&self.backend, request).await
    }

    /// Forget the session in storage and memory. Idempotent.
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            log::info!("session: logout");
        }
        self.purge_storage();
        self.session.clear();
    }

    /// End the store's lifecycle and hand back its storage.
    pub fn dispose(self) -> S {
        self.storage
    }

    fn purge_storage(&mut self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

/// Run a login against a store held in a reactive signal.
///
/// The backend call happens outside the signal so readers never observe a
/// half-applied session; the result is applied in a single update.
///
/// # Errors
///
/// Returns the [`AuthFailure`] from [`SessionStore::complete_login`], or a
/// generic failure if the signal was disposed mid-request.
pub async fn login_in_signal<S, B>(
    store: RwSignal<SessionStore<S, B>>,
    email: String,
    password: String,
    as_admin: bool,
) -> Result<User, AuthFailure>
where
    S: SessionStorage + Send + Sync + 'static,
    B: AuthBackend + Clone + Send + Sync + 'static,
{
    let scope = LoginScope::from_admin_flag(as_admin);
    let Some(backend) = store.try_with_untracked(|s| s.backend().clone()) else {
        log::warn!("session: login on a disposed session signal");
        return Err(AuthFailure::Unexpected(LOGIN_FAILED.to_owned()));
    };
    let request = LoginRequest { email, password };
    let result = backend.login(scope, &request).await;
    store
        .try_update(|s| s.complete_login(scope, result))
        .unwrap_or_else(|| Err(AuthFailure::Unexpected(LOGIN_FAILED.to_owned())))
}

/// Run a registration using the backend of a store held in a reactive signal.
///
/// # Errors
///
/// Same as [`SessionStore::register`], or a generic failure if the signal
/// was already disposed.
pub async fn register_in_signal<S, B>(
    store: RwSignal<SessionStore<S, B>>,
    request: RegisterRequest,
) -> Result<RegisterResponse, AuthFailure>
where
    S: SessionStorage + Send + Sync + 'static,
    B: AuthBackend + Clone + Send + Sync + 'static,
{
    let Some(backend) = store.try_with_untracked(|s| s.backend().clone()) else {
        log::warn!("session: registration on a disposed session signal");
        return Err(AuthFailure::Unexpected(REGISTRATION_FAILED.to_owned()));
    };
    register_via(&backend, &request).await
}

async fn register_via<B: AuthBackend>(backend: &B, request: &RegisterRequest) -> Result<RegisterResponse, AuthFailure> {
    backend.register(request).await.map_err(|e| {
        log::warn!("session: registration failed: {e}");
        AuthFailure::from_register_error(&e)
    })
}
