//! Wire DTOs for the account endpoints of the REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly so the same structs serve
//! both the HTTP boundary and the persisted `user` record in browser storage.
//! Fields the storefront never reads are left out; serde ignores them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Wire value of the administrator role.
pub const ADMIN_ROLE: &str = "ADMIN";
/// Wire value of the regular customer role.
pub const USER_ROLE: &str = "USER";

/// Account role as reported by the backend.
///
/// Unknown role strings are preserved rather than rejected so a newer backend
/// cannot break hydration; they never grant admin access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            ADMIN_ROLE => Self::Admin,
            USER_ROLE => Self::User,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => ADMIN_ROLE.to_owned(),
            Role::User => USER_ROLE.to_owned(),
            Role::Other(raw) => raw,
        }
    }
}

/// Identity snapshot returned by the backend at login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend primary key.
    pub id: i64,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Server-computed "first last", falling back to the username.
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_email_verified: bool,
}

impl User {
    /// Whether this account carries the administrator role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in navigation chrome.
    pub fn display_name(&self) -> &str {
        [self.full_name.as_str(), self.username.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(self.email.as_str())
    }

    /// Single-character avatar label: first letter of the first name, else `U`.
    pub fn avatar_initial(&self) -> char {
        self.first_name.trim().chars().next().unwrap_or('U')
    }
}

/// JWT pair issued on login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    pub access: String,
    pub refresh: String,
}

/// Body of `POST accounts/login/` and `POST accounts/admin/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub tokens: Tokens,
    pub user: User,
}

/// Body of `POST accounts/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub password: String,
    pub password2: String,
}

/// Successful registration payload. Registration never opens a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}
