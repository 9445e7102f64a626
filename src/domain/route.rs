//! Views of the client and the guard deciding whether they may be entered.

use std::fmt;

use super::session::Role;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Default view: the list of observations.
    Observations,
    NewObservation,
    ObservationDetails(i64),
    EditObservation(i64),
    Login,
}

impl Route {
    /// URL path of the view.
    pub fn path(&self) -> String {
        match self {
            Route::Observations => "/".to_string(),
            Route::NewObservation => "/add".to_string(),
            Route::ObservationDetails(id) => format!("/details/{}", id),
            Route::EditObservation(id) => format!("/update/{}", id),
            Route::Login => "/login".to_string(),
        }
    }

    /// Whether entering the view requires the admin role.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::NewObservation | Route::EditObservation(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of the entry check run before a view is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Enter,
    Redirect(Route),
}

/// Decide whether `role` may enter `route`.
pub fn guard(route: Route, role: Role) -> GuardDecision {
    match (route, role) {
        (route, Role::Anonymous) if route.is_protected() => GuardDecision::Redirect(Route::Login),
        (Route::Login, Role::Admin) => GuardDecision::Redirect(Route::Observations),
        _ => GuardDecision::Enter,
    }
}
