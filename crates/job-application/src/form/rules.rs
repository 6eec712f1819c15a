use std::collections::BTreeSet;

use super::domain::{ApplicationDraft, FieldName, Position};

const ALWAYS_REQUIRED: [FieldName; 5] = [
    FieldName::FullName,
    FieldName::Email,
    FieldName::PhoneNumber,
    FieldName::AdditionalSkills,
    FieldName::PreferredInterviewTime,
];

impl Position {
    /// Conditional fields shown and validated for this position.
    pub const fn relevant_fields(self) -> &'static [FieldName] {
        match self {
            Position::Unset => &[],
            Position::Developer => &[FieldName::Experience],
            Position::Designer => &[FieldName::Experience, FieldName::PortfolioUrl],
            Position::Manager => &[FieldName::ManagementExperience],
        }
    }

    pub fn is_relevant(self, field: FieldName) -> bool {
        self.relevant_fields().contains(&field)
    }
}

/// Fields that must be validated for the draft's current position.
///
/// Position itself is never part of the set.
pub fn active_required_fields(draft: &ApplicationDraft) -> BTreeSet<FieldName> {
    ALWAYS_REQUIRED
        .iter()
        .chain(draft.position.relevant_fields())
        .copied()
        .collect()
}

/// Fields rendered by the form for the draft's position, in display order.
pub fn visible_fields(position: Position) -> impl Iterator<Item = FieldName> {
    FieldName::ALL.into_iter().filter(move |field| match field {
        FieldName::Experience | FieldName::PortfolioUrl | FieldName::ManagementExperience => {
            position.is_relevant(*field)
        }
        _ => true,
    })
}
