use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use super::domain::{FieldName, SubmittedApplication};
use super::rules::visible_fields;

/// One labelled line of the read-only summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub field: FieldName,
    pub label: &'static str,
    pub value: String,
}

/// Read-only view of a submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationSummary {
    pub rows: Vec<SummaryRow>,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicationSummary {
    pub fn from_submission(submission: &SubmittedApplication) -> Self {
        let application = submission.application();
        let rows = visible_fields(application.position)
            .map(|field| {
                let value = match field {
                    FieldName::AdditionalSkills => application.additional_skills.joined(),
                    FieldName::PreferredInterviewTime => {
                        format_interview_time(&application.preferred_interview_time)
                    }
                    _ => application.text(field).unwrap_or_default().to_string(),
                };
                SummaryRow {
                    field,
                    label: field.label(),
                    value,
                }
            })
            .collect();

        Self {
            rows,
            submitted_at: submission.submitted_at(),
        }
    }

    pub fn row(&self, field: FieldName) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.field == field)
    }
}

impl fmt::Display for ApplicationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Application Summary")?;
        for row in &self.rows {
            writeln!(f, "- {}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}

fn format_interview_time(raw: &str) -> String {
    let trimmed = raw.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|parsed| parsed.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}
