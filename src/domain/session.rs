//! Session role model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the persisted session attribute holding the role.
pub const ROLE_ATTRIBUTE: &str = "X-User-Role";

/// Attribute value marking a privileged session.
pub const ADMIN_ROLE: &str = "admin";

/// Access role derived from persisted session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    /// No role attribute present.
    #[default]
    Anonymous,
}

impl Role {
    /// Derive the role from the raw attribute value.
    pub fn from_attribute(value: Option<&str>) -> Role {
        match value {
            Some(ADMIN_ROLE) => Role::Admin,
            _ => Role::Anonymous,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Anonymous => f.write_str("anonymous"),
        }
    }
}

/// A persisted, path-scoped, expiring session attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAttribute {
    pub name: String,
    pub value: String,
    /// Recorded with the attribute; reads do not filter on it.
    pub path: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionAttribute {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Username and password as entered in the login form.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
