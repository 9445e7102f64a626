//! Read-only views open to every visitor.

use crate::app::AppContext;
use crate::domain::{AppError, WeatherObservation};
use crate::ports::{Clock, ObservationStore, SessionStore};

/// Execute the list command.
pub fn list<O, S, K>(ctx: &AppContext<O, S, K>) -> Result<Vec<WeatherObservation>, AppError>
where
    O: ObservationStore,
    S: SessionStore,
    K: Clock,
{
    ctx.store().list()
}

/// Execute the show command.
pub fn show<O, S, K>(ctx: &AppContext<O, S, K>, id: i64) -> Result<WeatherObservation, AppError>
where
    O: ObservationStore,
    S: SessionStore,
    K: Clock,
{
    ctx.store().get(id)
}
