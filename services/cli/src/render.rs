use std::io::Write;

use job_application::error::AppError;
use job_application::form::{visible_fields, ApplicationFormModel, FieldName, FormView};

/// Print a view either as human readable text or as JSON.
pub(crate) fn render_view<W: Write>(
    out: &mut W,
    view: &FormView,
    json: bool,
) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(view)?;
        writeln!(out, "{rendered}")?;
        return Ok(());
    }

    match view {
        FormView::Editing { errors } if errors.is_empty() => {}
        FormView::Editing { errors } => {
            writeln!(out, "Please correct the following:")?;
            for (field, message) in errors.messages() {
                writeln!(out, "- {}: {}", field.label(), message)?;
            }
        }
        FormView::Summary(summary) => write!(out, "{summary}")?,
    }
    Ok(())
}

/// Print the form as it currently stands, with any attached errors.
pub(crate) fn render_form<W: Write>(
    out: &mut W,
    model: &ApplicationFormModel,
) -> Result<(), AppError> {
    let draft = model.draft();
    if model.is_submitted() {
        writeln!(out, "Job Application (submitted, read-only)")?;
    } else {
        writeln!(out, "Job Application")?;
    }

    let errors = model.errors();
    for field in visible_fields(draft.position) {
        let value = match field {
            FieldName::AdditionalSkills => draft.additional_skills.joined(),
            _ => draft.text(field).unwrap_or_default().to_string(),
        };
        writeln!(out, "  {:<28} {}", field.label(), value)?;
        if let Some(message) = errors.and_then(|errors| errors.message_for(field)) {
            writeln!(out, "  {:<28} ! {}", "", message)?;
        }
    }
    Ok(())
}
