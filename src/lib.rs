//! wxdesk: record, validate and review weather observations held by a remote store.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::{browse, observation, session};
use app::{AppContext, SessionGate};
use domain::{ADMIN_ROLE, AppConfig, DraftField, FeedbackKind, WeatherObservation};
use domain::configuration::{load_config, state_dir};
use domain::observation::{calendar_date, format_instant};
use services::{FileSessionStore, HttpObservationStore, SystemClock, TimerQueue};
use tracing::warn;

pub use app::commands::observation::{EditReport, FieldInput, SubmissionReport};
pub use app::SubmitOutcome;
pub use app::commands::session::{LoginReport, SessionSummary};
pub use domain::{AppError, Credentials, Role, Route};

type LiveGate = SessionGate<FileSessionStore, SystemClock>;
type LiveContext = AppContext<HttpObservationStore, FileSessionStore, SystemClock>;

fn live_gate(config: &AppConfig) -> Result<LiveGate, AppError> {
    let sessions = FileSessionStore::in_dir(&state_dir()?);
    Ok(SessionGate::new(sessions, SystemClock, config))
}

fn live_context() -> Result<LiveContext, AppError> {
    let config = load_config()?;
    let gate = live_gate(&config)?;
    let role = gate.current_role()?;
    let store = HttpObservationStore::new(&config.store)?
        .with_role(role.is_admin().then(|| ADMIN_ROLE.to_string()));
    Ok(AppContext::new(store, gate, config.feedback.timing()))
}

// =============================================================================
// Session API
// =============================================================================

/// Start an admin session.
///
/// `credentials` is called only when no admin session exists yet.
pub fn login<F>(credentials: F) -> Result<LoginReport, AppError>
where
    F: FnOnce() -> Result<Credentials, AppError>,
{
    let config = load_config()?;
    let gate = live_gate(&config)?;
    let report = session::login(&gate, credentials)?;
    match &report {
        LoginReport::AlreadyAuthorized { .. } => println!("Already logged in as admin"),
        LoginReport::Authorized { .. } => println!("✅ Logged in as admin"),
        LoginReport::Rejected { form } => {
            if let Some(error) = &form.error {
                eprintln!("{}", error);
            }
        }
    }
    Ok(report)
}

/// End the current session.
pub fn logout() -> Result<(), AppError> {
    let config = load_config()?;
    session::logout(&live_gate(&config)?)?;
    println!("✅ Logged out");
    Ok(())
}

/// Report the current role and the actions it allows.
pub fn whoami() -> Result<SessionSummary, AppError> {
    let config = load_config()?;
    let summary = session::whoami(&live_gate(&config)?)?;
    println!("Role: {}", summary.role);
    println!("Actions: {}", summary.actions.join(", "));
    Ok(summary)
}

// =============================================================================
// Observation API
// =============================================================================

/// Print every stored observation.
pub fn list() -> Result<Vec<WeatherObservation>, AppError> {
    let ctx = live_context()?;
    let records = browse::list(&ctx)?;
    if records.is_empty() {
        println!("No observations recorded");
    }
    for record in &records {
        println!("{}", summary_line(record));
    }
    Ok(records)
}

/// Print one observation.
pub fn show(id: i64) -> Result<WeatherObservation, AppError> {
    let ctx = live_context()?;
    let record = browse::show(&ctx, id)?;
    print_details(&record);
    Ok(record)
}

/// Create an observation from raw form inputs.
pub fn add(inputs: &[FieldInput]) -> Result<EditReport, AppError> {
    let ctx = live_context()?;
    let timer = TimerQueue::new();
    let report = observation::add(&ctx, inputs, &timer)?;
    print_edit_report(&report);
    Ok(report)
}

/// Edit a stored observation with raw form inputs, then show it.
pub fn edit(id: i64, inputs: &[FieldInput]) -> Result<EditReport, AppError> {
    let ctx = live_context()?;
    let timer = TimerQueue::new();
    let report = observation::edit(&ctx, id, inputs, &timer)?;
    print_edit_report(&report);

    if let EditReport::Submitted(SubmissionReport {
        outcome: SubmitOutcome::Updated { next: Route::ObservationDetails(id) },
        ..
    }) = &report
    {
        match browse::show(&ctx, *id) {
            Ok(record) => print_details(&record),
            Err(e) => {
                warn!(id = *id, error = %e, "could not load observation details after update");
                eprintln!(
                    "Saved, but the details of observation #{} could not be loaded: {}",
                    id, e
                );
            }
        }
    }
    Ok(report)
}

// =============================================================================
// Rendering
// =============================================================================

fn summary_line(record: &WeatherObservation) -> String {
    format!(
        "#{:<5} {}  {}, {}  {}°C  {}",
        record.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
        calendar_date(&record.timestamp),
        record.city,
        record.country,
        record.temperature,
        record.weather_status
    )
}

fn print_details(record: &WeatherObservation) {
    if let Some(id) = record.id {
        println!("Observation #{}", id);
    }
    let rows = [
        (DraftField::Timestamp, format_instant(&record.timestamp)),
        (DraftField::City, record.city.clone()),
        (DraftField::Country, record.country.clone()),
        (DraftField::Temperature, record.temperature.to_string()),
        (DraftField::Humidity, record.humidity.to_string()),
        (DraftField::Pressure, record.pressure.to_string()),
        (DraftField::WindSpeed, record.wind_speed.to_string()),
        (DraftField::WeatherStatus, record.weather_status.clone()),
    ];
    for (field, value) in rows {
        println!("  {:<18} {}", field.label(), value);
    }
}

fn print_edit_report(report: &EditReport) {
    let submission = match report {
        EditReport::Redirected(route) => {
            eprintln!("Admin session required; redirected to {}. Run `wxdesk login` first.", route);
            return;
        }
        EditReport::Submitted(submission) => submission,
    };

    for name in &submission.ignored {
        eprintln!("Ignoring unknown field '{}'", name);
    }
    for (field, message) in submission.errors.iter() {
        eprintln!("  {}: {}", field, message);
    }
    if let Some(banner) = &submission.banner {
        match banner.kind {
            FeedbackKind::Success => println!("✅ {}", banner.text),
            FeedbackKind::Failure => eprintln!("❌ {}", banner.text),
        }
    }
    if let SubmitOutcome::Created { id: Some(id) } = submission.outcome {
        println!("Created observation #{}", id);
    }
}
