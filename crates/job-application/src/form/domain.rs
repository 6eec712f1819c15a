use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FormError;

/// Fields collected by the application form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phoneNumber")]
    PhoneNumber,
    #[serde(rename = "position")]
    Position,
    #[serde(rename = "experience")]
    Experience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    #[serde(rename = "managementExperience")]
    ManagementExperience,
    #[serde(rename = "additionalSkills")]
    AdditionalSkills,
    #[serde(rename = "preferredInterviewTime")]
    PreferredInterviewTime,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::PhoneNumber,
        FieldName::Position,
        FieldName::Experience,
        FieldName::PortfolioUrl,
        FieldName::ManagementExperience,
        FieldName::AdditionalSkills,
        FieldName::PreferredInterviewTime,
    ];

    /// Key used for this field on the wire.
    pub const fn key(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::Position => "position",
            FieldName::Experience => "experience",
            FieldName::PortfolioUrl => "portfolioURL",
            FieldName::ManagementExperience => "managementExperience",
            FieldName::AdditionalSkills => "additionalSkills",
            FieldName::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name",
            FieldName::Email => "Email",
            FieldName::PhoneNumber => "Phone Number",
            FieldName::Position => "Applying for Position",
            FieldName::Experience => "Relevant Experience (years)",
            FieldName::PortfolioUrl => "Portfolio URL",
            FieldName::ManagementExperience => "Management Experience",
            FieldName::AdditionalSkills => "Additional Skills",
            FieldName::PreferredInterviewTime => "Preferred Interview Time",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        FieldName::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FormError::UnknownField(trimmed.to_string()))
    }
}

/// Position the applicant is applying for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Unset,
    Developer,
    Designer,
    Manager,
}

impl Position {
    /// Value submitted for the position select; empty when nothing was chosen.
    pub const fn value(self) -> &'static str {
        match self {
            Position::Unset => "",
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Position {
    type Err = FormError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => Ok(Position::Unset),
            "developer" => Ok(Position::Developer),
            "designer" => Ok(Position::Designer),
            "manager" => Ok(Position::Manager),
            _ => Err(FormError::UnknownPosition(raw.trim().to_string())),
        }
    }
}

/// Candidate skills offered as checkboxes. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
}

impl Skill {
    pub const CANDIDATES: [Skill; 3] = [Skill::JavaScript, Skill::Css, Skill::Python];

    pub const fn name(self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skill {
    type Err = FormError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Skill::CANDIDATES
            .into_iter()
            .find(|skill| skill.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FormError::UnknownSkill(trimmed.to_string()))
    }
}

/// Selected skills. Ordered by candidate order regardless of toggle order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<Skill>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or exclude a skill. Repeating the same toggle is a no-op.
    pub fn toggle(&mut self, skill: Skill, included: bool) {
        if included {
            self.0.insert(skill);
        } else {
            self.0.remove(&skill);
        }
    }

    pub fn contains(&self, skill: Skill) -> bool {
        self.0.contains(&skill)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Skill> + '_ {
        self.0.iter().copied()
    }

    pub fn joined(&self) -> String {
        self.iter().map(Skill::name).collect::<Vec<_>>().join(", ")
    }
}

impl FromIterator<Skill> for SkillSet {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Working state of the form as the applicant edits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Position,
    pub experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: SkillSet,
    pub preferred_interview_time: String,
}

impl ApplicationDraft {
    /// Text currently held by a scalar field. Position yields its select value.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::Email => Some(&self.email),
            FieldName::PhoneNumber => Some(&self.phone_number),
            FieldName::Position => Some(self.position.value()),
            FieldName::Experience => Some(&self.experience),
            FieldName::PortfolioUrl => Some(&self.portfolio_url),
            FieldName::ManagementExperience => Some(&self.management_experience),
            FieldName::AdditionalSkills => None,
            FieldName::PreferredInterviewTime => Some(&self.preferred_interview_time),
        }
    }

    /// Replace one scalar field. Nothing is validated here.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            FieldName::FullName => self.full_name = value,
            FieldName::Email => self.email = value,
            FieldName::PhoneNumber => self.phone_number = value,
            FieldName::Position => self.position = value.parse()?,
            FieldName::Experience => self.experience = value,
            FieldName::PortfolioUrl => self.portfolio_url = value,
            FieldName::ManagementExperience => self.management_experience = value,
            FieldName::AdditionalSkills => return Err(FormError::NotScalar(field)),
            FieldName::PreferredInterviewTime => self.preferred_interview_time = value,
        }
        Ok(())
    }
}

/// Frozen copy of a draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    application: ApplicationDraft,
    submitted_at: DateTime<Utc>,
}

impl SubmittedApplication {
    pub(crate) fn freeze(draft: &ApplicationDraft) -> Self {
        Self {
            application: draft.clone(),
            submitted_at: Utc::now(),
        }
    }

    pub fn application(&self) -> &ApplicationDraft {
        &self.application
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
