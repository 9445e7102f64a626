//! Create and edit commands.

use crate::app::AppContext;
use crate::app::editor::{ObservationEditor, SubmitOutcome};
use crate::domain::{
    AppError, FeedbackMessage, GuardDecision, Route, ValidationErrors,
};
use crate::ports::{Clock, FeedbackTimer, ObservationStore, SessionStore};

/// One raw form input, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub value: String,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// Parse a `name=value` pair.
    pub fn parse(pair: &str) -> Result<Self, AppError> {
        let (name, value) = pair.split_once('=').ok_or_else(|| AppError::ParseError {
            what: "field assignment".to_string(),
            details: format!("expected name=value, got '{}'", pair),
        })?;
        Ok(Self::new(name.trim(), value))
    }
}

/// Outcome of an add or edit command.
#[derive(Debug, Clone)]
pub enum EditReport {
    /// The view could not be entered.
    Redirected(Route),
    Submitted(SubmissionReport),
}

/// What a submission attempt left behind in the editor.
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub outcome: SubmitOutcome,
    pub errors: ValidationErrors,
    pub banner: Option<FeedbackMessage>,
    /// Input names that matched no draft field.
    pub ignored: Vec<String>,
}

/// Execute the add command: create flow from the blank template.
pub fn add<O, S, K>(
    ctx: &AppContext<O, S, K>,
    inputs: &[FieldInput],
    timer: &impl FeedbackTimer,
) -> Result<EditReport, AppError>
where
    O: ObservationStore,
    S: SessionStore,
    K: Clock,
{
    if let GuardDecision::Redirect(to) = ctx.gate().enter(Route::NewObservation)? {
        return Ok(EditReport::Redirected(to));
    }

    let editor = ObservationEditor::for_create(ctx.now(), ctx.feedback_timing());
    Ok(EditReport::Submitted(run_editor(ctx, editor, inputs, timer)))
}

/// Execute the edit command: update flow seeded from the stored record.
pub fn edit<O, S, K>(
    ctx: &AppContext<O, S, K>,
    id: i64,
    inputs: &[FieldInput],
    timer: &impl FeedbackTimer,
) -> Result<EditReport, AppError>
where
    O: ObservationStore,
    S: SessionStore,
    K: Clock,
{
    if let GuardDecision::Redirect(to) = ctx.gate().enter(Route::EditObservation(id))? {
        return Ok(EditReport::Redirected(to));
    }

    let editor = ObservationEditor::mount_update(ctx.store(), id, ctx.feedback_timing())?;
    Ok(EditReport::Submitted(run_editor(ctx, editor, inputs, timer)))
}

fn run_editor<O, S, K>(
    ctx: &AppContext<O, S, K>,
    mut editor: ObservationEditor,
    inputs: &[FieldInput],
    timer: &impl FeedbackTimer,
) -> SubmissionReport
where
    O: ObservationStore,
    S: SessionStore,
    K: Clock,
{
    let ignored = inputs
        .iter()
        .filter(|input| !editor.update(&input.name, input.value.clone()))
        .map(|input| input.name.clone())
        .collect();

    let outcome = editor.submit(ctx.store(), timer, ctx.now());
    let report = SubmissionReport {
        outcome,
        errors: editor.errors().clone(),
        banner: editor.feedback().message().cloned(),
        ignored,
    };
    editor.unmount();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SessionGate;
    use crate::app::editor::{CREATED_MESSAGE, FORM_ERROR_MESSAGE};
    use crate::domain::{AppConfig, Credentials, DraftField, FeedbackKind, WeatherObservation};
    use crate::app::LoginForm;
    use crate::services::{MemorySessionStore, TimerQueue};
    use crate::testing::{FakeObservationStore, ManualClock};
    use chrono::{TimeZone, Utc};

    type TestContext = AppContext<FakeObservationStore, MemorySessionStore, ManualClock>;

    fn context(store: FakeObservationStore, admin: bool) -> TestContext {
        let gate =
            SessionGate::new(MemorySessionStore::new(), ManualClock::default(), &AppConfig::default());
        if admin {
            gate.login(&mut LoginForm::new(Credentials::new("admin", "admin"))).unwrap();
        }
        AppContext::new(store, gate, AppConfig::default().feedback.timing())
    }

    fn oslo(humidity: &str) -> Vec<FieldInput> {
        vec![
            FieldInput::new("timestamp", "2024-05-01"),
            FieldInput::new("temperature", "20"),
            FieldInput::new("humidity", humidity),
            FieldInput::new("pressure", "1000"),
            FieldInput::new("windSpeed", "5"),
            FieldInput::new("city", "Oslo"),
            FieldInput::new("country", "Norway"),
            FieldInput::new("weatherStatus", "Clear"),
        ]
    }

    #[test]
    fn field_input_parses_pairs() {
        assert_eq!(FieldInput::parse("city=Oslo").unwrap(), FieldInput::new("city", "Oslo"));
        assert_eq!(FieldInput::parse("note=a=b").unwrap(), FieldInput::new("note", "a=b"));
        assert!(FieldInput::parse("city").is_err());
    }

    #[test]
    fn anonymous_add_redirects_before_editing() {
        let store = FakeObservationStore::new();
        let ctx = context(store.clone(), false);

        let report = add(&ctx, &oslo("60"), &TimerQueue::new()).unwrap();

        assert!(matches!(report, EditReport::Redirected(Route::Login)));
        assert_eq!(store.attempts(), 0);
    }

    #[test]
    fn admin_add_creates_observation() {
        let store = FakeObservationStore::new();
        let ctx = context(store.clone(), true);

        let EditReport::Submitted(report) = add(&ctx, &oslo("60"), &TimerQueue::new()).unwrap()
        else {
            panic!("expected submission");
        };

        assert_eq!(report.outcome, SubmitOutcome::Created { id: Some(1) });
        assert!(report.errors.is_empty());
        assert_eq!(report.banner.unwrap().text, CREATED_MESSAGE);
        assert_eq!(store.created()[0].city, "Oslo");
    }

    #[test]
    fn invalid_add_reports_errors_and_ignored_inputs() {
        let store = FakeObservationStore::new();
        let ctx = context(store.clone(), true);
        let mut inputs = oslo("150");
        inputs.push(FieldInput::new("colour", "blue"));

        let EditReport::Submitted(report) = add(&ctx, &inputs, &TimerQueue::new()).unwrap() else {
            panic!("expected submission");
        };

        assert_eq!(report.outcome, SubmitOutcome::Rejected);
        assert_eq!(report.errors.get(DraftField::Humidity), Some("Enter a valid humidity"));
        assert_eq!(report.ignored, vec!["colour".to_string()]);
        let banner = report.banner.unwrap();
        assert_eq!(banner.kind, FeedbackKind::Failure);
        assert_eq!(banner.text, FORM_ERROR_MESSAGE);
        assert_eq!(store.attempts(), 0);
    }

    #[test]
    fn edit_applies_inputs_over_the_stored_record() {
        let record = WeatherObservation {
            id: Some(5),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap(),
            city: "Oslo".into(),
            country: "Norway".into(),
            temperature: 12.0,
            humidity: 40.0,
            pressure: 1013.0,
            wind_speed: 2.0,
            weather_status: "Clear".into(),
        };
        let store = FakeObservationStore::with_records(vec![record]);
        let ctx = context(store.clone(), true);

        let inputs = [FieldInput::new("temperature", "14.5")];
        let EditReport::Submitted(report) = edit(&ctx, 5, &inputs, &TimerQueue::new()).unwrap()
        else {
            panic!("expected submission");
        };

        assert_eq!(report.outcome, SubmitOutcome::Updated { next: Route::ObservationDetails(5) });
        let (id, payload) = store.updated().remove(0);
        assert_eq!(id, 5);
        assert_eq!(payload.temperature, 14.5);
        assert_eq!(payload.timestamp, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn anonymous_edit_does_not_fetch() {
        let store = FakeObservationStore::new();
        let ctx = context(store, false);
        let report = edit(&ctx, 5, &[], &TimerQueue::new()).unwrap();
        assert!(matches!(report, EditReport::Redirected(Route::Login)));
    }
}
