use serde::Serialize;
use tracing::debug;

use super::domain::{FieldName, Skill};
use super::model::ApplicationFormModel;
use super::summary::ApplicationSummary;
use super::transport::{dispatch_best_effort, SubmissionTransport};
use super::validation::ValidationResult;
use super::FormError;

/// Input surface of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { name: FieldName, value: String },
    SkillToggled { skill: Skill, included: bool },
    SubmitRequested,
    StartNew,
}

/// What the display should render after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum FormView {
    Editing { errors: ValidationResult },
    Summary(ApplicationSummary),
}

/// Front controller wiring the form model to the submission transport.
#[derive(Debug)]
pub struct ApplicationIntake<T> {
    model: ApplicationFormModel,
    transport: T,
}

impl<T> ApplicationIntake<T>
where
    T: SubmissionTransport,
{
    pub fn new(transport: T) -> Self {
        Self::with_model(ApplicationFormModel::new(), transport)
    }

    pub fn with_model(model: ApplicationFormModel, transport: T) -> Self {
        Self { model, transport }
    }

    pub fn model(&self) -> &ApplicationFormModel {
        &self.model
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn handle(&mut self, event: FormEvent) -> Result<FormView, FormError> {
        debug!(?event, "handling form event");
        match event {
            FormEvent::FieldChanged { name, value } => self.model.set_field(name, value)?,
            FormEvent::SkillToggled { skill, included } => {
                self.model.toggle_skill(skill, included)?
            }
            FormEvent::SubmitRequested => return Ok(self.submit()),
            FormEvent::StartNew => self.model.start_new_application(),
        }
        Ok(self.view())
    }

    /// Current view without applying an event.
    pub fn view(&self) -> FormView {
        match self.model.submitted() {
            Some(snapshot) => FormView::Summary(ApplicationSummary::from_submission(snapshot)),
            None => FormView::Editing {
                errors: self.model.errors().cloned().unwrap_or_default(),
            },
        }
    }

    fn submit(&mut self) -> FormView {
        if self.model.is_submitted() {
            return self.view();
        }

        match self.model.submit() {
            Ok(snapshot) => {
                dispatch_best_effort(&self.transport, &snapshot);
                FormView::Summary(ApplicationSummary::from_submission(&snapshot))
            }
            Err(errors) => FormView::Editing { errors },
        }
    }
}
