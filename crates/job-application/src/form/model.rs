use tracing::{debug, info};

use super::domain::{ApplicationDraft, FieldName, Skill, SubmittedApplication};
use super::validation::{validate, ValidationResult};
use super::FormError;

/// Lifecycle of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing {
        draft: ApplicationDraft,
        errors: ValidationResult,
    },
    Submitted(SubmittedApplication),
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing {
            draft: ApplicationDraft::default(),
            errors: ValidationResult::new(),
        }
    }
}

/// Single-writer owner of the draft and its submission state.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFormModel {
    state: FormState,
}

impl ApplicationFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing draft, e.g. one assembled from command-line flags.
    pub fn with_draft(draft: ApplicationDraft) -> Self {
        Self {
            state: FormState::Editing {
                draft,
                errors: ValidationResult::new(),
            },
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, FormState::Submitted(_))
    }

    /// The draft being edited, or the frozen copy once submitted.
    pub fn draft(&self) -> &ApplicationDraft {
        match &self.state {
            FormState::Editing { draft, .. } => draft,
            FormState::Submitted(snapshot) => snapshot.application(),
        }
    }

    /// Errors from the last failed submit; `None` once submitted.
    pub fn errors(&self) -> Option<&ValidationResult> {
        match &self.state {
            FormState::Editing { errors, .. } => Some(errors),
            FormState::Submitted(_) => None,
        }
    }

    pub fn submitted(&self) -> Option<&SubmittedApplication> {
        match &self.state {
            FormState::Submitted(snapshot) => Some(snapshot),
            FormState::Editing { .. } => None,
        }
    }

    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let draft = self.editable_draft()?;
        draft.set(field, value)?;
        debug!(field = field.key(), "field updated");
        Ok(())
    }

    pub fn toggle_skill(&mut self, skill: Skill, included: bool) -> Result<(), FormError> {
        let draft = self.editable_draft()?;
        draft.additional_skills.toggle(skill, included);
        debug!(skill = skill.name(), included, "skill toggled");
        Ok(())
    }

    /// Validate the current draft without changing state.
    pub fn validate(&self) -> ValidationResult {
        validate(self.draft())
    }

    /// Attempt submission.
    ///
    /// On failure the errors are attached to the editing state and returned; the
    /// draft stays editable. On success the draft is frozen and the form becomes
    /// read-only. Submitting an already submitted form returns the existing
    /// snapshot.
    pub fn submit(&mut self) -> Result<SubmittedApplication, ValidationResult> {
        let draft = match &mut self.state {
            FormState::Submitted(snapshot) => return Ok(snapshot.clone()),
            FormState::Editing { draft, errors } => {
                let result = validate(draft);
                if !result.is_valid() {
                    info!(failed_fields = result.len(), "submission rejected");
                    *errors = result.clone();
                    return Err(result);
                }
                draft
            }
        };

        let snapshot = SubmittedApplication::freeze(draft);
        info!(position = %snapshot.application().position, "application submitted");
        self.state = FormState::Submitted(snapshot.clone());
        Ok(snapshot)
    }

    /// Discard everything and return to an empty editing state.
    pub fn start_new_application(&mut self) {
        self.state = FormState::default();
        info!("started new application");
    }

    fn editable_draft(&mut self) -> Result<&mut ApplicationDraft, FormError> {
        match &mut self.state {
            FormState::Editing { draft, .. } => Ok(draft),
            FormState::Submitted(_) => Err(FormError::AlreadySubmitted),
        }
    }
}

/// Validate and freeze a draft in one step, leaving the draft untouched.
pub fn submit(draft: &ApplicationDraft) -> Result<SubmittedApplication, ValidationResult> {
    let result = validate(draft);
    if result.is_valid() {
        Ok(SubmittedApplication::freeze(draft))
    } else {
        Err(result)
    }
}
