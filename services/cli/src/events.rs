use job_application::form::{FieldName, FormError, FormEvent, Skill};

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Event(FormEvent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum LineError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(String),
    #[error(transparent)]
    Form(#[from] FormError),
}

pub(crate) const HELP: &str = "\
commands:
  set <field> <value>   update a field (fullName, email, phoneNumber, position,
                        experience, portfolioURL, managementExperience,
                        preferredInterviewTime)
  check <skill>         select JavaScript, CSS or Python
  uncheck <skill>       deselect a skill
  submit                validate and submit the application
  new                   discard everything and start a new application
  show                  print the current form
  quit                  exit";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub(crate) fn parse_line(line: &str) -> Result<Option<Command>, LineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "set" => {
            if rest.is_empty() {
                return Err(LineError::MissingArgument(verb.to_string()));
            }
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((rest, ""));
            Command::Event(FormEvent::FieldChanged {
                name: field.parse::<FieldName>()?,
                value: value.to_string(),
            })
        }
        "check" | "uncheck" => {
            if rest.is_empty() {
                return Err(LineError::MissingArgument(verb.to_string()));
            }
            Command::Event(FormEvent::SkillToggled {
                skill: rest.parse::<Skill>()?,
                included: verb.eq_ignore_ascii_case("check"),
            })
        }
        "submit" => Command::Event(FormEvent::SubmitRequested),
        "new" => Command::Event(FormEvent::StartNew),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(LineError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_updates_with_spaces() {
        let command = parse_line("set managementExperience Led a team of 5")
            .expect("parses")
            .expect("not blank");
        assert_eq!(
            command,
            Command::Event(FormEvent::FieldChanged {
                name: FieldName::ManagementExperience,
                value: "Led a team of 5".to_string(),
            })
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        let command = parse_line("set email").expect("parses").expect("not blank");
        assert_eq!(
            command,
            Command::Event(FormEvent::FieldChanged {
                name: FieldName::Email,
                value: String::new(),
            })
        );
    }

    #[test]
    fn parses_skill_toggles() {
        assert_eq!(
            parse_line("check css").expect("parses"),
            Some(Command::Event(FormEvent::SkillToggled {
                skill: Skill::Css,
                included: true,
            }))
        );
        assert_eq!(
            parse_line("UNCHECK Python").expect("parses"),
            Some(Command::Event(FormEvent::SkillToggled {
                skill: Skill::Python,
                included: false,
            }))
        );
    }

    #[test]
    fn ignores_blank_and_comment_lines() {
        assert_eq!(parse_line("   ").expect("parses"), None);
        assert_eq!(parse_line("# applicant one").expect("parses"), None);
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            parse_line("frobnicate"),
            Err(LineError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(
            parse_line("check"),
            Err(LineError::MissingArgument("check".to_string()))
        );
        assert_eq!(
            parse_line("uncheck"),
            Err(LineError::MissingArgument("uncheck".to_string()))
        );
        assert_eq!(
            parse_line("check Rust"),
            Err(LineError::Form(FormError::UnknownSkill("Rust".to_string())))
        );
        assert_eq!(
            parse_line("set salary 100"),
            Err(LineError::Form(FormError::UnknownField("salary".to_string())))
        );
    }

    #[test]
    fn parses_control_commands() {
        assert_eq!(
            parse_line("submit").expect("parses"),
            Some(Command::Event(FormEvent::SubmitRequested))
        );
        assert_eq!(
            parse_line("new").expect("parses"),
            Some(Command::Event(FormEvent::StartNew))
        );
        assert_eq!(parse_line("show").expect("parses"), Some(Command::Show));
        assert_eq!(parse_line("exit").expect("parses"), Some(Command::Quit));
    }
}
