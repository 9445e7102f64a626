//! Login, logout and role inspection.

use crate::app::session_gate::{LoginForm, LoginOutcome, SessionGate};
use crate::domain::{AppError, Credentials, GuardDecision, Role, Route};
use crate::ports::{Clock, SessionStore};

/// What happened when the login view was entered.
#[derive(Debug, Clone)]
pub enum LoginReport {
    /// Already authorized; the login view redirected away.
    AlreadyAuthorized { next: Route },
    Authorized { next: Route },
    /// Credentials were rejected; the form keeps them along with the error.
    Rejected { form: LoginForm },
}

/// Execute the login command.
///
/// `credentials` is only consulted when the login view may be entered.
pub fn login<S, K, F>(gate: &SessionGate<S, K>, credentials: F) -> Result<LoginReport, AppError>
where
    S: SessionStore,
    K: Clock,
    F: FnOnce() -> Result<Credentials, AppError>,
{
    if let GuardDecision::Redirect(next) = gate.enter(Route::Login)? {
        return Ok(LoginReport::AlreadyAuthorized { next });
    }

    let mut form = LoginForm::new(credentials()?);
    match gate.login(&mut form)? {
        LoginOutcome::Authorized { next } => Ok(LoginReport::Authorized { next }),
        LoginOutcome::Rejected => Ok(LoginReport::Rejected { form }),
    }
}

/// Execute the logout command. Returns the view to continue to.
pub fn logout<S: SessionStore, K: Clock>(gate: &SessionGate<S, K>) -> Result<Route, AppError> {
    gate.logout()
}

/// Navigation affordances available to the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub role: Role,
    pub actions: Vec<&'static str>,
}

/// Execute the whoami command.
pub fn whoami<S: SessionStore, K: Clock>(
    gate: &SessionGate<S, K>,
) -> Result<SessionSummary, AppError> {
    let role = gate.current_role()?;
    let mut actions = vec!["list", "show"];
    if role.is_admin() {
        actions.extend(["add", "edit", "logout"]);
    } else {
        actions.push("login");
    }
    Ok(SessionSummary { role, actions })
}
