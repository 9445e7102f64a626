//! Role-based entry checks backed by the persisted role attribute.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{
    ADMIN_ROLE, AppConfig, AppError, AuthConfig, Credentials, GuardDecision, ROLE_ATTRIBUTE,
    Role, Route, SessionAttribute, SessionConfig, guard,
};
use crate::ports::{Clock, SessionStore};

/// Message shown when the entered credentials do not match.
pub const CREDENTIAL_MISMATCH: &str = "Invalid username or password";

/// State of the login form. A rejected attempt keeps the entered credentials.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub credentials: Credentials,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials, error: None }
    }
}

/// Result of submitting the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Role stored; continue to `next`.
    Authorized { next: Route },
    /// Credentials did not match; nothing changed.
    Rejected,
}

/// Gate deciding which views the current session may enter.
///
/// The role is read from the store on every call, never cached.
#[derive(Debug, Clone)]
pub struct SessionGate<S: SessionStore, K: Clock> {
    sessions: S,
    clock: K,
    auth: AuthConfig,
    session: SessionConfig,
}

impl<S: SessionStore, K: Clock> SessionGate<S, K> {
    pub fn new(sessions: S, clock: K, config: &AppConfig) -> Self {
        Self { sessions, clock, auth: config.auth.clone(), session: config.session.clone() }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Role of the current session.
    pub fn current_role(&self) -> Result<Role, AppError> {
        let value = self.sessions.get(ROLE_ATTRIBUTE, self.clock.now())?;
        Ok(Role::from_attribute(value.as_deref()))
    }

    /// Decide whether the current session may enter `route`.
    pub fn enter(&self, route: Route) -> Result<GuardDecision, AppError> {
        let role = self.current_role()?;
        let decision = guard(route, role);
        if let GuardDecision::Redirect(target) = decision {
            debug!(%route, %target, %role, "redirecting");
        }
        Ok(decision)
    }

    /// Compare the form's credentials with the admin pair and store the role on a match.
    pub fn login(&self, form: &mut LoginForm) -> Result<LoginOutcome, AppError> {
        let credentials = &form.credentials;
        if credentials.username != self.auth.username || credentials.password != self.auth.password
        {
            info!(username = %credentials.username, "login rejected");
            form.error = Some(CREDENTIAL_MISMATCH.to_string());
            return Ok(LoginOutcome::Rejected);
        }

        self.sessions.set(SessionAttribute {
            name: ROLE_ATTRIBUTE.to_string(),
            value: ADMIN_ROLE.to_string(),
            path: self.session.path.clone(),
            expires_at: self.clock.now() + self.session.lifetime(),
        })?;
        form.error = None;
        info!("admin session started");
        Ok(LoginOutcome::Authorized { next: Route::Observations })
    }

    /// Drop the role attribute. Returns the view to continue to.
    pub fn logout(&self) -> Result<Route, AppError> {
        self.sessions.remove(ROLE_ATTRIBUTE)?;
        info!("session ended");
        Ok(Route::Login)
    }
}
