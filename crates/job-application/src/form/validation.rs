use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use super::domain::{ApplicationDraft, FieldName};
use super::rules::active_required_fields;

/// Reason a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    Required,
    InvalidFormat,
    NotNumeric,
    NotPositive,
    InvalidUrl,
    NoSkillSelected,
}

impl FieldError {
    /// Human readable message shown next to the offending field.
    pub fn message(self, field: FieldName) -> String {
        match (self, field) {
            (FieldError::Required, FieldName::Experience) => {
                "Relevant Experience is required".to_string()
            }
            (FieldError::Required, _) => format!("{} is required", field.label()),
            (FieldError::InvalidFormat, _) => format!("{} is invalid", field.label()),
            (FieldError::NotNumeric, _) => format!("{} must be a valid number", field.label()),
            (FieldError::NotPositive, _) => {
                "Experience must be a number greater than 0".to_string()
            }
            (FieldError::InvalidUrl, _) => format!("{} is invalid", field.label()),
            (FieldError::NoSkillSelected, _) => "At least one skill must be selected".to_string(),
        }
    }
}

/// Field errors collected from one validation pass. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: FieldName, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    /// Rendered messages keyed by field, in form order.
    pub fn messages(&self) -> Vec<(FieldName, String)> {
        self.errors
            .iter()
            .map(|(field, error)| (*field, error.message(*field)))
            .collect()
    }

    pub fn message_for(&self, field: FieldName) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.errors
                .iter()
                .map(|(field, error)| (field.key(), error.message(*field))),
        )
    }
}

/// Validate every active field of the draft. All rules run; failures are unioned.
pub fn validate(draft: &ApplicationDraft) -> ValidationResult {
    let mut result = ValidationResult::new();
    for field in active_required_fields(draft) {
        if let Some(error) = check_field(draft, field) {
            result.add_error(field, error);
        }
    }
    result
}

fn check_field(draft: &ApplicationDraft, field: FieldName) -> Option<FieldError> {
    match field {
        FieldName::FullName => blank(&draft.full_name),
        FieldName::Email => required(&draft.email).or_else(|| {
            (!email_pattern().is_match(&draft.email)).then_some(FieldError::InvalidFormat)
        }),
        FieldName::PhoneNumber => required(&draft.phone_number).or_else(|| {
            let numeric = draft.phone_number.bytes().all(|b| b.is_ascii_digit());
            (!numeric).then_some(FieldError::NotNumeric)
        }),
        FieldName::Experience => required(&draft.experience).or_else(|| {
            match draft.experience.trim().parse::<f64>() {
                Ok(years) if years.is_finite() && years > 0.0 => None,
                _ => Some(FieldError::NotPositive),
            }
        }),
        FieldName::PortfolioUrl => required(&draft.portfolio_url).or_else(|| {
            (!portfolio_pattern().is_match(&draft.portfolio_url)).then_some(FieldError::InvalidUrl)
        }),
        FieldName::ManagementExperience => required(&draft.management_experience),
        FieldName::AdditionalSkills => draft
            .additional_skills
            .is_empty()
            .then_some(FieldError::NoSkillSelected),
        FieldName::PreferredInterviewTime => required(&draft.preferred_interview_time),
        FieldName::Position => None,
    }
}

fn required(value: &str) -> Option<FieldError> {
    value.is_empty().then_some(FieldError::Required)
}

/// Whitespace-only counts as missing for the name only.
fn blank(value: &str) -> Option<FieldError> {
    required(value.trim())
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

fn portfolio_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://\S+\.\S+$").expect("url pattern compiles"))
}
