//! Job application form: draft state, conditional validation, and submission.
//!
//! Field relevance is decided by a single rule table in [`rules`]; validation,
//! the summary view, and the outgoing payload all consult it.

pub mod domain;
pub mod intake;
pub mod model;
pub mod rules;
pub mod summary;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationDraft, FieldName, Position, Skill, SkillSet, SubmittedApplication};
pub use intake::{ApplicationIntake, FormEvent, FormView};
pub use model::{submit, ApplicationFormModel, FormState};
pub use rules::{active_required_fields, visible_fields};
pub use summary::{ApplicationSummary, SummaryRow};
pub use transport::{
    dispatch_best_effort, DisabledTransport, HttpSubmissionClient, SubmissionPayload,
    SubmissionTransport, TransportError,
};
pub use validation::{validate, FieldError, ValidationResult};

/// Input errors raised while applying events to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("unknown skill '{0}' (expected JavaScript, CSS or Python)")]
    UnknownSkill(String),
    #[error("unknown position '{0}' (expected Developer, Designer or Manager)")]
    UnknownPosition(String),
    #[error("field '{0}' is not a text field; toggle skills instead")]
    NotScalar(FieldName),
    #[error("application already submitted; start a new application to edit")]
    AlreadySubmitted,
}
