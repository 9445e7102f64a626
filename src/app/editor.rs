//! Create and edit flows for a single observation.

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use super::feedback::TransientMessageController;
use crate::domain::{
    AppError, FeedbackKind, FeedbackTiming, ObservationDraft, Route, ValidationErrors,
    WeatherObservation, normalize, validate,
};
use crate::ports::{FeedbackTimer, ObservationStore};

pub const CREATED_MESSAGE: &str = "Observation added successfully!";
pub const UPDATED_MESSAGE: &str = "Observation updated successfully!";
pub const FORM_ERROR_MESSAGE: &str = "There was an error. Please check the form.";
pub const STORE_ERROR_MESSAGE: &str = "Could not save the observation. Please try again later.";

/// Which flow the editor is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update { id: i64 },
}

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the store was not contacted.
    Rejected,
    /// Store acknowledged the new record; the draft was reset.
    Created { id: Option<i64> },
    /// Store acknowledged the update; continue to `next`.
    Updated { next: Route },
    /// Store call failed; the draft is unchanged and may be resubmitted.
    TransportFailed,
}

/// Owns one draft for the duration of a create or edit session.
#[derive(Debug, Clone)]
pub struct ObservationEditor {
    mode: EditorMode,
    draft: ObservationDraft,
    errors: ValidationErrors,
    feedback: TransientMessageController,
    seeded: bool,
    mounted: bool,
}

impl ObservationEditor {
    /// Editor for a new observation, starting from the blank template.
    pub fn for_create(now: DateTime<Utc>, timing: FeedbackTiming) -> Self {
        Self {
            mode: EditorMode::Create,
            draft: ObservationDraft::template(now),
            errors: ValidationErrors::default(),
            feedback: TransientMessageController::new(timing),
            seeded: true,
            mounted: true,
        }
    }

    /// Editor for an existing observation whose record has not arrived yet.
    pub fn for_update(id: i64, timing: FeedbackTiming) -> Self {
        Self {
            mode: EditorMode::Update { id },
            draft: ObservationDraft { id: Some(id), ..ObservationDraft::default() },
            errors: ValidationErrors::default(),
            feedback: TransientMessageController::new(timing),
            seeded: false,
            mounted: true,
        }
    }

    /// Build an update editor and seed it from the store.
    pub fn mount_update(
        store: &impl ObservationStore,
        id: i64,
        timing: FeedbackTiming,
    ) -> Result<Self, AppError> {
        let mut editor = Self::for_update(id, timing);
        let record = store.get(id)?;
        editor.receive_record(&record);
        Ok(editor)
    }

    /// Seed the draft from a fetched record.
    ///
    /// Only the first record is applied, and nothing is applied once the
    /// editor is unmounted. Returns whether the draft was seeded.
    pub fn receive_record(&mut self, record: &WeatherObservation) -> bool {
        if !self.mounted || self.seeded {
            return false;
        }
        let mut draft = ObservationDraft::from_record(record);
        if let EditorMode::Update { id } = self.mode {
            draft.id = Some(id);
        }
        self.draft = draft;
        self.seeded = true;
        true
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &ObservationDraft {
        &self.draft
    }

    /// Errors from the last submission attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn feedback(&self) -> &TransientMessageController {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut TransientMessageController {
        &mut self.feedback
    }

    /// Apply a raw form input; unknown names are ignored.
    pub fn update(&mut self, name: &str, raw: impl Into<String>) -> bool {
        self.draft.update(name, raw)
    }

    /// Validate, then send the normalized draft to the store.
    pub fn submit(
        &mut self,
        store: &impl ObservationStore,
        timer: &impl FeedbackTimer,
        now: DateTime<Utc>,
    ) -> SubmitOutcome {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            self.feedback.show(FeedbackKind::Failure, FORM_ERROR_MESSAGE, timer);
            return SubmitOutcome::Rejected;
        }

        let payload = match normalize(&self.draft) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "draft passed validation but could not be normalized");
                self.feedback.show(FeedbackKind::Failure, FORM_ERROR_MESSAGE, timer);
                return SubmitOutcome::Rejected;
            }
        };

        match self.mode {
            EditorMode::Create => match store.create(&payload) {
                Ok(id) => {
                    info!(?id, "observation created");
                    self.draft = ObservationDraft::template(now);
                    self.feedback.show(FeedbackKind::Success, CREATED_MESSAGE, timer);
                    SubmitOutcome::Created { id }
                }
                Err(err) => self.transport_failed(&err, timer),
            },
            EditorMode::Update { id } => match store.update(id, &payload) {
                Ok(()) => {
                    info!(id, "observation updated");
                    self.feedback.show(FeedbackKind::Success, UPDATED_MESSAGE, timer);
                    SubmitOutcome::Updated { next: Route::ObservationDetails(id) }
                }
                Err(err) => self.transport_failed(&err, timer),
            },
        }
    }

    /// The owning view is gone: pending records and timer ticks are discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.feedback.detach();
    }

    fn transport_failed(&mut self, err: &AppError, timer: &impl FeedbackTimer) -> SubmitOutcome {
        error!(error = %err, mode = ?self.mode, "saving observation failed");
        self.feedback.show(FeedbackKind::Failure, STORE_ERROR_MESSAGE, timer);
        SubmitOutcome::TransportFailed
    }
}
